//! Projection of the Selected list into serialized form fields.

use serde::{Deserialize, Serialize};

use super::ColumnBoard;

/// Field name under which the export column selection is submitted.
pub const EXPORT_COLUMNS_FIELD: &str = "EXPORT_COLUMNS";

/// A single (name, value) pair of the serialized form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Rebuilds the `EXPORT_COLUMNS` field set from the Selected list.
///
/// The projector owns every field it emits. A rebuild discards the previous
/// set wholesale and regenerates it from the board, so no stale entry can
/// survive a membership or order change. When the selection is empty it
/// still emits exactly one empty-valued field, so the submitted body always
/// carries the field name at least once.
#[derive(Debug, Default)]
pub struct FieldProjector {
    fields: Vec<FormField>,
    projected_revision: Option<u64>,
}

impl FieldProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the field set if the board changed since the last call.
    ///
    /// Returns whether a rebuild happened. Calling twice with no
    /// intervening board mutation leaves an identical field set behind,
    /// so a redundant notification costs nothing and changes nothing.
    pub fn sync(&mut self, board: &ColumnBoard) -> bool {
        if self.projected_revision == Some(board.revision()) {
            return false;
        }

        self.fields.clear();
        for &ix in board.selected() {
            if let Some(item) = board.item(ix) {
                // value comes from the item's stable source position, not
                // from where it currently sits in the list
                self.fields.push(FormField::new(
                    EXPORT_COLUMNS_FIELD,
                    board.resolve(item.source_index),
                ));
            }
        }
        if self.fields.is_empty() {
            self.fields.push(FormField::new(EXPORT_COLUMNS_FIELD, ""));
        }

        self.projected_revision = Some(board.revision());
        true
    }

    /// The projected fields, in Selected order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ListSide;

    fn board(labels: &[&str]) -> ColumnBoard {
        let columns: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        ColumnBoard::new(&columns)
    }

    fn values(projector: &FieldProjector) -> Vec<&str> {
        projector.fields().iter().map(|f| f.value.as_str()).collect()
    }

    #[test]
    fn test_empty_selection_yields_single_placeholder() {
        let board = board(&["a", "b"]);
        let mut projector = FieldProjector::new();
        projector.sync(&board);

        assert_eq!(projector.fields().len(), 1);
        assert_eq!(projector.fields()[0].name, EXPORT_COLUMNS_FIELD);
        assert_eq!(projector.fields()[0].value, "");
    }

    #[test]
    fn test_projection_follows_selected_order() {
        let mut board = board(&["alpha", "beta", "gamma"]);
        board.move_item(2, ListSide::Selected);
        board.move_item(0, ListSide::Selected);

        let mut projector = FieldProjector::new();
        projector.sync(&board);

        assert!(projector.fields().iter().all(|f| f.name == EXPORT_COLUMNS_FIELD));
        assert_eq!(values(&projector), vec!["gamma", "alpha"]);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut board = board(&["a", "b"]);
        board.move_item(0, ListSide::Selected);

        let mut projector = FieldProjector::new();
        assert!(projector.sync(&board));
        let first = projector.fields().to_vec();

        assert!(!projector.sync(&board), "unchanged board must not rebuild");
        assert_eq!(projector.fields(), &first[..]);
    }

    #[test]
    fn test_rebuild_discards_stale_fields() {
        let mut board = board(&["a", "b"]);
        board.move_all(ListSide::Selected);

        let mut projector = FieldProjector::new();
        projector.sync(&board);
        assert_eq!(values(&projector), vec!["a", "b"]);

        board.move_all(ListSide::Available);
        projector.sync(&board);
        assert_eq!(values(&projector), vec![""], "old fields must not linger");
    }

    #[test]
    fn test_reorder_changes_field_order_only() {
        let mut board = board(&["a", "b"]);
        board.move_all(ListSide::Selected);

        let mut projector = FieldProjector::new();
        projector.sync(&board);
        assert_eq!(values(&projector), vec!["a", "b"]);

        board.reorder(ListSide::Selected, vec![1, 0]);
        projector.sync(&board);
        assert_eq!(values(&projector), vec!["b", "a"]);
        assert_eq!(projector.fields().len(), 2);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // exportAvailableColumns = ["foo_bar", "baz"]
        let mut board = board(&["foo_bar", "baz"]);
        let mut projector = FieldProjector::new();

        projector.sync(&board);
        assert_eq!(values(&projector), vec![""]);

        board.move_item(0, ListSide::Selected);
        projector.sync(&board);
        assert_eq!(values(&projector), vec!["foo_bar"]);

        board.move_all(ListSide::Selected);
        projector.sync(&board);
        assert_eq!(values(&projector), vec!["foo_bar", "baz"]);
    }
}
