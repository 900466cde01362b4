//! Writing a submission to the exports directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::columns::FormField;
use crate::error::SubmitError;

/// Fallback stem when the imported file name yields none.
const DEFAULT_STEM: &str = "bommap - export settings";

/// Derive the submission file stem from the imported file name.
pub fn submission_stem(imported: &Path) -> String {
    imported
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_STEM.to_string())
}

/// Write the ordered field sequence as a JSON array of name/value objects.
///
/// A JSON array preserves the body order and allows the repeated field
/// names (`NORMALIZED_COLUMN`, `EXPORT_COLUMNS`, ...) a form body carries.
/// Returns the path written.
pub fn write_submission(
    fields: &[FormField],
    exports_dir: &Path,
    stem: &str,
) -> Result<PathBuf, SubmitError> {
    fs::create_dir_all(exports_dir)
        .map_err(|e| SubmitError::CreateDir(exports_dir.to_path_buf(), e))?;

    let path = exports_dir.join(format!("{stem}.json"));
    let encoded = serde_json::to_string_pretty(fields)?;
    fs::write(&path, encoded).map_err(|e| SubmitError::Write(path.clone(), e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_stem() {
        assert_eq!(submission_stem(Path::new("/tmp/gearbox v2.csv")), "gearbox v2");
        assert_eq!(submission_stem(Path::new("")), DEFAULT_STEM);
    }

    #[test]
    fn test_write_submission_preserves_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let fields = vec![
            FormField::new("MAIN_ASSEMBLY_NAME", "Frame"),
            FormField::new("EXPORT_COLUMNS", "Qty"),
            FormField::new("EXPORT_COLUMNS", "Pos"),
        ];

        let path = write_submission(&fields, dir.path(), "frame").unwrap();
        assert_eq!(path, dir.path().join("frame.json"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let decoded: Vec<FormField> = serde_json::from_str(&contents).unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[1].value, "Qty");
        assert_eq!(decoded[2].value, "Pos");
    }

    #[test]
    fn test_write_submission_creates_exports_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports");
        let fields = vec![FormField::new("EXPORT_COLUMNS", "")];
        let path = write_submission(&fields, &nested, "empty").unwrap();
        assert!(path.exists());
    }
}
