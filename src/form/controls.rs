//! Form control state: text inputs, single- and multi-select fields.

use crate::columns::SelectOption;

/// A free-text form input with cursor editing.
#[derive(Debug, Clone)]
pub struct TextFieldState {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub value: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl TextFieldState {
    pub fn new(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            required,
            value: String::new(),
            cursor: 0,
        }
    }

    fn byte_pos(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let pos = self.byte_pos();
        self.value.insert(pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let pos = self.byte_pos();
            self.value.remove(pos);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let pos = self.byte_pos();
            self.value.remove(pos);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// A single-select field. Option 0 is the placeholder with an empty value,
/// so a fresh field reads as unset.
#[derive(Debug, Clone)]
pub struct SelectFieldState {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub options: Vec<SelectOption>,
    /// Index of the chosen option
    pub chosen: usize,
}

impl SelectFieldState {
    pub fn new(
        name: &'static str,
        label: &'static str,
        required: bool,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            name,
            label,
            required,
            options,
            chosen: 0,
        }
    }

    /// Submitted value of the chosen option.
    pub fn value(&self) -> &str {
        self.options
            .get(self.chosen)
            .map(|o| o.value.as_str())
            .unwrap_or("")
    }

    /// Display label of the chosen option.
    pub fn chosen_label(&self) -> &str {
        self.options
            .get(self.chosen)
            .map(|o| o.label.as_str())
            .unwrap_or("")
    }

    /// Still on the placeholder?
    pub fn is_unset(&self) -> bool {
        self.value().is_empty()
    }
}

/// A multi-select field; any subset of options may be toggled on.
#[derive(Debug, Clone)]
pub struct MultiSelectState {
    pub name: &'static str,
    pub label: &'static str,
    pub options: Vec<SelectOption>,
    chosen: Vec<bool>,
}

impl MultiSelectState {
    pub fn new(name: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        let chosen = vec![false; options.len()];
        Self {
            name,
            label,
            options,
            chosen,
        }
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.chosen.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn is_chosen(&self, index: usize) -> bool {
        self.chosen.get(index).copied().unwrap_or(false)
    }

    /// Chosen option values, in option order.
    pub fn chosen_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .zip(&self.chosen)
            .filter(|&(_, &chosen)| chosen)
            .map(|(option, _)| option.value.as_str())
            .collect()
    }

    pub fn chosen_count(&self) -> usize {
        self.chosen.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::single_select_options;

    #[test]
    fn test_text_field_editing() {
        let mut field = TextFieldState::new("MAIN_ASSEMBLY_NAME", "Main assembly name", true);
        assert!(field.is_blank());

        for c in "Frame".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.value, "Frame");

        field.move_home();
        field.delete();
        assert_eq!(field.value, "rame");

        field.move_end();
        field.backspace();
        assert_eq!(field.value, "ram");
        assert!(!field.is_blank());
    }

    #[test]
    fn test_text_field_multibyte() {
        let mut field = TextFieldState::new("MAIN_ASSEMBLY_NAME", "Main assembly name", true);
        field.insert_char('ł');
        field.insert_char('ó');
        field.move_left();
        field.insert_char('x');
        assert_eq!(field.value, "łxó");
        field.backspace();
        assert_eq!(field.value, "łó");
    }

    #[test]
    fn test_select_field_starts_unset() {
        let columns = vec!["Pos".to_string(), "Qty".to_string()];
        let field = SelectFieldState::new(
            "PART_POSITION_COLUMN",
            "Part position column",
            true,
            single_select_options(&columns),
        );
        assert!(field.is_unset());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_select_field_choice() {
        let columns = vec!["Pos".to_string(), "Qty".to_string()];
        let mut field = SelectFieldState::new(
            "PART_POSITION_COLUMN",
            "Part position column",
            true,
            single_select_options(&columns),
        );
        field.chosen = 2;
        assert_eq!(field.value(), "Qty");
        assert!(!field.is_unset());
    }

    #[test]
    fn test_multi_select_toggle_and_values() {
        let columns = vec!["Pos".to_string(), "Qty".to_string(), "Name".to_string()];
        let mut field = MultiSelectState::new(
            "NORMALIZED_COLUMN",
            "Normalized columns",
            crate::columns::multi_select_options(&columns),
        );
        assert_eq!(field.chosen_count(), 0);

        field.toggle(2);
        field.toggle(0);
        assert_eq!(field.chosen_values(), vec!["Pos", "Name"]);

        field.toggle(0);
        assert_eq!(field.chosen_values(), vec!["Name"]);
        assert_eq!(field.chosen_count(), 1);
    }
}
