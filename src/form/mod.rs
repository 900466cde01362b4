//! Form state: the user-data controls, focus order, validation, and the
//! ordered body serialization a submission carries.

mod controls;
mod submit;

pub use controls::{MultiSelectState, SelectFieldState, TextFieldState};
pub use submit::{submission_stem, write_submission};

use crate::columns::{
    ColumnBoard, FieldProjector, FormField, multi_select_options, single_select_options,
};

/// Identity of a focusable control, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusId {
    MainAssemblyName,
    MainAssemblySets,
    ProductionPartKeywords,
    PartPositionColumn,
    PartQuantityColumn,
    PartNumberColumn,
    PartNameColumn,
    NormalizedColumns,
    JunkPartKeywords,
    JunkPartEmptyFields,
    ExportBoard,
}

impl FocusId {
    pub const ORDER: [FocusId; 11] = [
        FocusId::MainAssemblyName,
        FocusId::MainAssemblySets,
        FocusId::ProductionPartKeywords,
        FocusId::PartPositionColumn,
        FocusId::PartQuantityColumn,
        FocusId::PartNumberColumn,
        FocusId::PartNameColumn,
        FocusId::NormalizedColumns,
        FocusId::JunkPartKeywords,
        FocusId::JunkPartEmptyFields,
        FocusId::ExportBoard,
    ];

    /// Position in the form order.
    pub fn position(self) -> usize {
        Self::ORDER.iter().position(|&id| id == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let pos = self.position();
        Self::ORDER[pos.checked_sub(1).unwrap_or(Self::ORDER.len() - 1)]
    }
}

/// An unsatisfied required field, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub focus: FocusId,
    pub message: &'static str,
}

/// The whole user-data form.
///
/// The board is the single source of truth for the export selection; the
/// projector derives the `EXPORT_COLUMNS` fields from it and `body` splices
/// them at their anchor, after every other field.
pub struct FormState {
    pub main_assembly_name: TextFieldState,
    pub main_assembly_sets: TextFieldState,
    pub production_part_keywords: TextFieldState,
    pub part_position_column: SelectFieldState,
    pub part_quantity_column: SelectFieldState,
    pub part_number_column: SelectFieldState,
    pub part_name_column: SelectFieldState,
    pub normalized_columns: MultiSelectState,
    pub junk_part_keywords: TextFieldState,
    pub junk_part_empty_fields: MultiSelectState,
    pub board: ColumnBoard,
    pub projector: FieldProjector,
    pub focus: FocusId,
}

impl FormState {
    /// Build the form from the imported columns (select options) and the
    /// export-available columns (the board items). Controls are populated
    /// exactly once, here.
    pub fn new(imported_columns: &[String], export_available: &[String]) -> Self {
        let single = single_select_options(imported_columns);
        let multi = multi_select_options(imported_columns);

        let mut form = Self {
            main_assembly_name: TextFieldState::new(
                "MAIN_ASSEMBLY_NAME",
                "Main assembly name",
                true,
            ),
            main_assembly_sets: TextFieldState::new(
                "MAIN_ASSEMBLY_SETS",
                "Main assembly sets",
                true,
            ),
            production_part_keywords: TextFieldState::new(
                "PRODUCTION_PART_KEYWORDS",
                "Production part keywords",
                false,
            ),
            part_position_column: SelectFieldState::new(
                "PART_POSITION_COLUMN",
                "Part position column",
                true,
                single.clone(),
            ),
            part_quantity_column: SelectFieldState::new(
                "PART_QUANTITY_COLUMN",
                "Part quantity column",
                true,
                single.clone(),
            ),
            part_number_column: SelectFieldState::new(
                "PART_NUMBER_COLUMN",
                "Part number column",
                true,
                single.clone(),
            ),
            part_name_column: SelectFieldState::new(
                "PART_NAME_COLUMN",
                "Part name column",
                true,
                single,
            ),
            normalized_columns: MultiSelectState::new(
                "NORMALIZED_COLUMN",
                "Normalized columns",
                multi.clone(),
            ),
            junk_part_keywords: TextFieldState::new(
                "JUNK_PART_KEYWORDS",
                "Junk part keywords",
                false,
            ),
            junk_part_empty_fields: MultiSelectState::new(
                "JUNK_PART_EMPTY_FIELDS",
                "Junk part empty fields",
                multi,
            ),
            board: ColumnBoard::new(export_available),
            projector: FieldProjector::new(),
            focus: FocusId::MainAssemblyName,
        };

        form.projector.sync(&form.board);
        form
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn text_field(&self, id: FocusId) -> Option<&TextFieldState> {
        match id {
            FocusId::MainAssemblyName => Some(&self.main_assembly_name),
            FocusId::MainAssemblySets => Some(&self.main_assembly_sets),
            FocusId::ProductionPartKeywords => Some(&self.production_part_keywords),
            FocusId::JunkPartKeywords => Some(&self.junk_part_keywords),
            _ => None,
        }
    }

    pub fn text_field_mut(&mut self, id: FocusId) -> Option<&mut TextFieldState> {
        match id {
            FocusId::MainAssemblyName => Some(&mut self.main_assembly_name),
            FocusId::MainAssemblySets => Some(&mut self.main_assembly_sets),
            FocusId::ProductionPartKeywords => Some(&mut self.production_part_keywords),
            FocusId::JunkPartKeywords => Some(&mut self.junk_part_keywords),
            _ => None,
        }
    }

    pub fn select_field(&self, id: FocusId) -> Option<&SelectFieldState> {
        match id {
            FocusId::PartPositionColumn => Some(&self.part_position_column),
            FocusId::PartQuantityColumn => Some(&self.part_quantity_column),
            FocusId::PartNumberColumn => Some(&self.part_number_column),
            FocusId::PartNameColumn => Some(&self.part_name_column),
            _ => None,
        }
    }

    pub fn select_field_mut(&mut self, id: FocusId) -> Option<&mut SelectFieldState> {
        match id {
            FocusId::PartPositionColumn => Some(&mut self.part_position_column),
            FocusId::PartQuantityColumn => Some(&mut self.part_quantity_column),
            FocusId::PartNumberColumn => Some(&mut self.part_number_column),
            FocusId::PartNameColumn => Some(&mut self.part_name_column),
            _ => None,
        }
    }

    pub fn multi_field(&self, id: FocusId) -> Option<&MultiSelectState> {
        match id {
            FocusId::NormalizedColumns => Some(&self.normalized_columns),
            FocusId::JunkPartEmptyFields => Some(&self.junk_part_empty_fields),
            _ => None,
        }
    }

    pub fn multi_field_mut(&mut self, id: FocusId) -> Option<&mut MultiSelectState> {
        match id {
            FocusId::NormalizedColumns => Some(&mut self.normalized_columns),
            FocusId::JunkPartEmptyFields => Some(&mut self.junk_part_empty_fields),
            _ => None,
        }
    }

    /// Unsatisfied required fields, in form order.
    ///
    /// The export selection never appears here: an empty selection still
    /// submits one empty `EXPORT_COLUMNS` field, which is all the form
    /// contract requires.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.main_assembly_name.is_blank() {
            issues.push(ValidationIssue {
                focus: FocusId::MainAssemblyName,
                message: "Please provide main assembly full name.",
            });
        }
        if self.main_assembly_sets.is_blank() {
            issues.push(ValidationIssue {
                focus: FocusId::MainAssemblySets,
                message: "Please provide main assembly sets.",
            });
        }
        if self.part_position_column.is_unset() {
            issues.push(ValidationIssue {
                focus: FocusId::PartPositionColumn,
                message: "Please select part position column.",
            });
        }
        if self.part_quantity_column.is_unset() {
            issues.push(ValidationIssue {
                focus: FocusId::PartQuantityColumn,
                message: "Please select part quantity column.",
            });
        }
        if self.part_number_column.is_unset() {
            issues.push(ValidationIssue {
                focus: FocusId::PartNumberColumn,
                message: "Please select part number column.",
            });
        }
        if self.part_name_column.is_unset() {
            issues.push(ValidationIssue {
                focus: FocusId::PartNameColumn,
                message: "Please select part name column.",
            });
        }

        issues
    }

    /// The ordered (name, value) sequence of a submission.
    ///
    /// Scalar fields come in form order, multi-selects contribute one pair
    /// per chosen option, and the projected `EXPORT_COLUMNS` fields are
    /// spliced at the anchor: the export section is the last of the form,
    /// so submitted order matches Selected order.
    pub fn body(&mut self) -> Vec<FormField> {
        self.projector.sync(&self.board);

        let mut body = Vec::new();

        for field in [
            &self.main_assembly_name,
            &self.main_assembly_sets,
            &self.production_part_keywords,
        ] {
            body.push(FormField::new(field.name, field.value.clone()));
        }

        for field in [
            &self.part_position_column,
            &self.part_quantity_column,
            &self.part_number_column,
            &self.part_name_column,
        ] {
            body.push(FormField::new(field.name, field.value()));
        }

        for value in self.normalized_columns.chosen_values() {
            body.push(FormField::new(self.normalized_columns.name, value));
        }

        body.push(FormField::new(
            self.junk_part_keywords.name,
            self.junk_part_keywords.value.clone(),
        ));

        for value in self.junk_part_empty_fields.chosen_values() {
            body.push(FormField::new(self.junk_part_empty_fields.name, value));
        }

        body.extend(self.projector.fields().iter().cloned());
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{EXPORT_COLUMNS_FIELD, ListSide};

    fn columns(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn form() -> FormState {
        let imported = columns(&["Pos", "Qty", "Part number", "Part name"]);
        let mut export_available = imported.clone();
        export_available.push("parent_assembly".to_string());
        FormState::new(&imported, &export_available)
    }

    fn fill_required(form: &mut FormState) {
        for c in "Frame".chars() {
            form.main_assembly_name.insert_char(c);
        }
        form.main_assembly_sets.insert_char('2');
        form.part_position_column.chosen = 1;
        form.part_quantity_column.chosen = 2;
        form.part_number_column.chosen = 3;
        form.part_name_column.chosen = 4;
    }

    #[test]
    fn test_validate_reports_in_form_order() {
        let form = form();
        let issues = form.validate();
        assert_eq!(issues.len(), 6);
        assert_eq!(issues[0].focus, FocusId::MainAssemblyName);
        assert_eq!(issues[0].message, "Please provide main assembly full name.");
        assert_eq!(issues[2].focus, FocusId::PartPositionColumn);
        assert_eq!(issues[2].message, "Please select part position column.");
    }

    #[test]
    fn test_validate_passes_when_filled() {
        let mut form = form();
        fill_required(&mut form);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_whitespace_only_text_is_blank() {
        let mut form = form();
        fill_required(&mut form);
        form.main_assembly_name.value = "   ".to_string();
        let issues = form.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].focus, FocusId::MainAssemblyName);
    }

    #[test]
    fn test_body_keeps_form_order_with_export_anchor_last() {
        let mut form = form();
        fill_required(&mut form);
        form.normalized_columns.toggle(0);
        form.normalized_columns.toggle(3);
        form.junk_part_empty_fields.toggle(1);

        let body = form.body();
        let names: Vec<&str> = body.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "MAIN_ASSEMBLY_NAME",
                "MAIN_ASSEMBLY_SETS",
                "PRODUCTION_PART_KEYWORDS",
                "PART_POSITION_COLUMN",
                "PART_QUANTITY_COLUMN",
                "PART_NUMBER_COLUMN",
                "PART_NAME_COLUMN",
                "NORMALIZED_COLUMN",
                "NORMALIZED_COLUMN",
                "JUNK_PART_KEYWORDS",
                "JUNK_PART_EMPTY_FIELDS",
                EXPORT_COLUMNS_FIELD,
            ]
        );
    }

    #[test]
    fn test_body_empty_selection_carries_placeholder_field() {
        let mut form = form();
        let body = form.body();
        let exports: Vec<&FormField> = body
            .iter()
            .filter(|f| f.name == EXPORT_COLUMNS_FIELD)
            .collect();
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0].value, "");
    }

    #[test]
    fn test_body_export_fields_follow_selected_order() {
        let mut form = form();
        form.board.move_item(4, ListSide::Selected);
        form.board.move_item(0, ListSide::Selected);

        let body = form.body();
        let export_values: Vec<&str> = body
            .iter()
            .filter(|f| f.name == EXPORT_COLUMNS_FIELD)
            .map(|f| f.value.as_str())
            .collect();
        assert_eq!(export_values, vec!["parent_assembly", "Pos"]);

        // anchor: export fields sit at the end of the body
        let first_export = body
            .iter()
            .position(|f| f.name == EXPORT_COLUMNS_FIELD)
            .unwrap();
        assert!(body[first_export..].iter().all(|f| f.name == EXPORT_COLUMNS_FIELD));
    }

    #[test]
    fn test_focus_order_cycles() {
        let mut focus = FocusId::MainAssemblyName;
        for _ in 0..FocusId::ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, FocusId::MainAssemblyName);
        assert_eq!(FocusId::MainAssemblyName.prev(), FocusId::ExportBoard);
    }
}
