//! Option lists for the select-type form controls.
//!
//! Built once from the imported column list at startup; the controls carry
//! no further state of their own here.

/// Placeholder shown by single-select controls before a choice is made.
pub const SELECT_PLACEHOLDER: &str = "--- Select column name ---";

/// One entry of a select-type control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    fn column(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

/// Options for a single-select control: every imported column, with a
/// leading placeholder carrying an empty value so the control starts
/// unselected.
pub fn single_select_options(columns: &[String]) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(columns.len() + 1);
    options.push(SelectOption {
        label: SELECT_PLACEHOLDER.to_string(),
        value: String::new(),
    });
    options.extend(columns.iter().map(|c| SelectOption::column(c)));
    options
}

/// Options for a multi-select control. No placeholder: an empty choice is
/// simply no toggled entries.
pub fn multi_select_options(columns: &[String]) -> Vec<SelectOption> {
    columns.iter().map(|c| SelectOption::column(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        vec!["Pos".to_string(), "Qty".to_string()]
    }

    #[test]
    fn test_single_select_prepends_placeholder() {
        let options = single_select_options(&columns());
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, SELECT_PLACEHOLDER);
        assert_eq!(options[0].value, "");
        assert_eq!(options[1].value, "Pos");
        assert_eq!(options[2].value, "Qty");
    }

    #[test]
    fn test_multi_select_has_no_placeholder() {
        let options = multi_select_options(&columns());
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| !o.value.is_empty()));
    }

    #[test]
    fn test_empty_columns() {
        assert_eq!(single_select_options(&[]).len(), 1);
        assert!(multi_select_options(&[]).is_empty());
    }
}
