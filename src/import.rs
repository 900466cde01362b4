//! Imported part list handling.
//!
//! Only the column-name row matters here: the form maps columns, it does
//! not process parts. The header may sit at the top or the bottom of the
//! imported file, matching how CAD systems emit their part lists.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::ImportError;

/// Where the column-name row sits in the imported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPosition {
    #[default]
    Top,
    Bottom,
}

impl HeaderPosition {
    /// Parse a CLI argument value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "top" => Some(HeaderPosition::Top),
            "bottom" => Some(HeaderPosition::Bottom),
            _ => None,
        }
    }
}

impl fmt::Display for HeaderPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderPosition::Top => write!(f, "top"),
            HeaderPosition::Bottom => write!(f, "bottom"),
        }
    }
}

/// Read the imported BOM column names from a csv file.
///
/// Fields are trimmed. A readable file with no rows yields zero columns:
/// the form still works, the export selection just has nothing imported to
/// offer. An unreadable path is an error for the caller to surface.
pub fn read_header_columns(
    path: &Path,
    position: HeaderPosition,
) -> Result<Vec<String>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut header: Option<csv::StringRecord> = None;
    for record in reader.records() {
        let record = record.map_err(|source| ImportError::Row {
            path: path.to_path_buf(),
            source,
        })?;
        match position {
            HeaderPosition::Top => {
                header = Some(record);
                break;
            }
            // keep the last row seen
            HeaderPosition::Bottom => header = Some(record),
        }
    }

    Ok(header
        .map(|record| record.iter().map(str::to_string).collect())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_header_at_top() {
        let file = temp_csv("Pos, Qty ,Part number\n1,2,X-100\n2,1,X-200\n");
        let columns = read_header_columns(file.path(), HeaderPosition::Top).unwrap();
        assert_eq!(columns, vec!["Pos", "Qty", "Part number"]);
    }

    #[test]
    fn test_header_at_bottom() {
        let file = temp_csv("1,2,X-100\n2,1,X-200\nPos,Qty,Part number\n");
        let columns = read_header_columns(file.path(), HeaderPosition::Bottom).unwrap();
        assert_eq!(columns, vec!["Pos", "Qty", "Part number"]);
    }

    #[test]
    fn test_empty_file_yields_no_columns() {
        let file = temp_csv("");
        let columns = read_header_columns(file.path(), HeaderPosition::Top).unwrap();
        assert!(columns.is_empty());
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let file = temp_csv("Pos,Qty,Part number\n1,2\n");
        let columns = read_header_columns(file.path(), HeaderPosition::Top).unwrap();
        assert_eq!(columns.len(), 3);
    }

    #[test]
    fn test_missing_file_errors() {
        let path = Path::new("/nonexistent/part-list.csv");
        assert!(read_header_columns(path, HeaderPosition::Top).is_err());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(HeaderPosition::parse("top"), Some(HeaderPosition::Top));
        assert_eq!(HeaderPosition::parse("bottom"), Some(HeaderPosition::Bottom));
        assert_eq!(HeaderPosition::parse("middle"), None);
    }
}
