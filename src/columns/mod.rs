//! Column model: the export-available column items, their list membership,
//! and everything derived from the selection order.

mod board;
mod options;
mod projector;

pub use board::ColumnBoard;
pub use options::{SELECT_PLACEHOLDER, SelectOption, multi_select_options, single_select_options};
pub use projector::{EXPORT_COLUMNS_FIELD, FieldProjector, FormField};

/// Which of the two ordered lists currently holds an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSide {
    Available,
    Selected,
}

impl ListSide {
    pub fn other(self) -> Self {
        match self {
            ListSide::Available => ListSide::Selected,
            ListSide::Selected => ListSide::Available,
        }
    }

    /// Stable index for per-side state arrays (cursors, scroll offsets).
    pub fn index(self) -> usize {
        match self {
            ListSide::Available => 0,
            ListSide::Selected => 1,
        }
    }
}

/// One candidate export column.
///
/// `source_index` is the item's position in the original export-available
/// column sequence. It identifies the item for value resolution and never
/// changes after creation; only `side` does.
#[derive(Debug, Clone)]
pub struct ColumnItem {
    pub label: String,
    pub source_index: usize,
    pub side: ListSide,
}

impl ColumnItem {
    /// Label as shown in the list panes. Underscores render as spaces;
    /// the canonical label stays untouched for value resolution.
    pub fn display_label(&self) -> String {
        self.label.replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_replaces_underscores() {
        let item = ColumnItem {
            label: "parent_assembly".to_string(),
            source_index: 0,
            side: ListSide::Available,
        };
        assert_eq!(item.display_label(), "parent assembly");
        assert_eq!(item.label, "parent_assembly");
    }

    #[test]
    fn test_side_other() {
        assert_eq!(ListSide::Available.other(), ListSide::Selected);
        assert_eq!(ListSide::Selected.other(), ListSide::Available);
    }
}
