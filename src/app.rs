use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::columns::{ListSide, SelectOption};
use crate::events::Action;
use crate::form::{self, FocusId, FormState, MultiSelectState, SelectFieldState};
use crate::log;
use crate::picker::Picker;
use crate::tui::interaction::{InteractionRegistry, RegionId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,       // Form navigation
    Insert,       // Editing a text field
    ColumnPicker, // Choosing a value for a single-select field
    MultiPicker,  // Toggling values of a multi-select field
    Help,         // Help popup showing all hotkeys
}

/// Two clicks on the same region within this window count as a double click.
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Scalar form rows (everything except the export board).
pub const FORM_ROWS: usize = FocusId::ORDER.len() - 1;

/// Popup state for a single-select field.
#[derive(Debug, Clone)]
pub struct ColumnPickerState {
    pub target: FocusId,
    pub options: Vec<SelectOption>,
    pub cursor: usize,
}

impl ColumnPickerState {
    pub fn new(target: FocusId, field: &SelectFieldState) -> Self {
        Self {
            target,
            options: field.options.clone(),
            cursor: field.chosen,
        }
    }
}

impl Picker for ColumnPickerState {
    type Item = SelectOption;

    fn items(&self) -> &[Self::Item] {
        &self.options
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
    }
}

/// Popup state for a multi-select field. Toggles apply to the form field
/// immediately; the popup only tracks its cursor.
#[derive(Debug, Clone)]
pub struct MultiPickerState {
    pub target: FocusId,
    pub options: Vec<SelectOption>,
    pub cursor: usize,
}

impl MultiPickerState {
    pub fn new(target: FocusId, field: &MultiSelectState) -> Self {
        Self {
            target,
            options: field.options.clone(),
            cursor: 0,
        }
    }
}

impl Picker for MultiPickerState {
    type Item = SelectOption;

    fn items(&self) -> &[Self::Item] {
        &self.options
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
    }
}

/// In-flight mouse drag on a board item.
#[derive(Debug, Clone, Copy)]
struct DragState {
    origin: (ListSide, usize),
    /// Set once a drag event arrives; a press-release on the spot stays a click
    dragging: bool,
}

/// Outcome of dispatching one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSignal {
    Continue,
    Quit,
}

pub struct App {
    pub input_mode: InputMode,
    pub form: FormState,
    pub column_picker: Option<ColumnPickerState>,
    pub multi_picker: Option<MultiPickerState>,
    pub flash: Vec<String>,
    pub flash_error: bool,
    pub submitted: Option<PathBuf>,
    pub interactions: InteractionRegistry,
    /// Per-side pane cursors, indexed by `ListSide::index`
    pub board_cursor: [usize; 2],
    /// Which pane board keys apply to
    pub board_side: ListSide,
    /// First visible scalar form row
    pub form_scroll: usize,
    /// Scalar form rows that fit, updated on render
    pub form_viewport: usize,
    last_click: Option<(Instant, RegionId)>,
    drag: Option<DragState>,
    exports_dir: PathBuf,
    submission_stem: String,
}

impl App {
    pub fn new(form: FormState, exports_dir: PathBuf, submission_stem: String) -> Self {
        Self {
            input_mode: InputMode::Normal,
            form,
            column_picker: None,
            multi_picker: None,
            flash: Vec::new(),
            flash_error: false,
            submitted: None,
            interactions: InteractionRegistry::new(),
            board_cursor: [0, 0],
            board_side: ListSide::Available,
            form_scroll: 0,
            form_viewport: FORM_ROWS,
            last_click: None,
            drag: None,
            exports_dir,
            submission_stem,
        }
    }

    /// Apply one action. The projection is refreshed exactly once at the
    /// end, so a batched mutation (add all, drag) rebuilds the field set a
    /// single time per interaction event.
    pub fn dispatch(&mut self, action: Action) -> AppSignal {
        // flash messages live until the next meaningful interaction
        if !matches!(action, Action::None | Action::PointerDrag { .. }) {
            self.flash.clear();
            self.flash_error = false;
        }

        match action {
            Action::Quit => return AppSignal::Quit,
            Action::OpenHelp => self.input_mode = InputMode::Help,
            Action::CloseHelp => self.input_mode = InputMode::Normal,
            Action::Submit => self.submit(),

            Action::FocusNext => {
                self.input_mode = InputMode::Normal;
                self.form.focus_next();
                self.scroll_focus_into_view();
            }
            Action::FocusPrev => {
                self.input_mode = InputMode::Normal;
                self.form.focus_prev();
                self.scroll_focus_into_view();
            }
            Action::Activate => self.activate_focused(),
            Action::FocusField(id) => {
                self.input_mode = InputMode::Normal;
                self.form.focus = id;
                self.scroll_focus_into_view();
            }
            Action::FormScrollUp(n) => {
                self.form_scroll = self.form_scroll.saturating_sub(n);
            }
            Action::FormScrollDown(n) => {
                self.form_scroll = (self.form_scroll + n).min(FORM_ROWS.saturating_sub(1));
            }

            Action::InputChar(c) => self.with_focused_text(|f| f.insert_char(c)),
            Action::InputBackspace => self.with_focused_text(|f| f.backspace()),
            Action::InputDelete => self.with_focused_text(|f| f.delete()),
            Action::InputLeft => self.with_focused_text(|f| f.move_left()),
            Action::InputRight => self.with_focused_text(|f| f.move_right()),
            Action::InputHome => self.with_focused_text(|f| f.move_home()),
            Action::InputEnd => self.with_focused_text(|f| f.move_end()),
            Action::ExitInsert => self.input_mode = InputMode::Normal,

            Action::PickerUp => {
                if let Some(picker) = &mut self.column_picker {
                    picker.select_prev();
                } else if let Some(picker) = &mut self.multi_picker {
                    picker.select_prev();
                }
            }
            Action::PickerDown => {
                if let Some(picker) = &mut self.column_picker {
                    picker.select_next();
                } else if let Some(picker) = &mut self.multi_picker {
                    picker.select_next();
                }
            }
            Action::PickerConfirm => self.picker_confirm(),
            Action::PickerToggle => self.picker_toggle(),
            Action::PickerCancel => self.picker_close(),
            Action::PickerSet(index) => {
                if let Some(picker) = &mut self.column_picker {
                    if index < picker.options.len() {
                        picker.cursor = index;
                    }
                } else if let Some(picker) = &mut self.multi_picker {
                    if index < picker.options.len() {
                        picker.cursor = index;
                    }
                }
            }
            Action::PickerToggleAt(index) => {
                if let Some(picker) = &mut self.multi_picker {
                    if index < picker.options.len() {
                        picker.cursor = index;
                        let target = picker.target;
                        if let Some(field) = self.form.multi_field_mut(target) {
                            field.toggle(index);
                        }
                    }
                }
            }

            Action::BoardFocusSide(side) => {
                self.form.focus = FocusId::ExportBoard;
                self.board_side = side;
            }
            Action::BoardCursorUp => self.board_cursor_move(-1),
            Action::BoardCursorDown => self.board_cursor_move(1),
            Action::BoardMoveCurrent => self.board_move_current(),
            Action::BoardSelectAt { side, index } => {
                self.form.focus = FocusId::ExportBoard;
                self.board_side = side;
                self.board_cursor[side.index()] = index;
                self.clamp_board_cursors();
            }
            Action::BoardMoveAt { side, index } => {
                self.form.focus = FocusId::ExportBoard;
                self.board_side = side;
                self.board_cursor[side.index()] = index;
                self.board_move_current();
            }
            Action::BoardAddAll => {
                self.form.board.move_all(ListSide::Selected);
                self.clamp_board_cursors();
                log::log_event("add all columns to export");
            }
            Action::BoardRemoveAll => {
                self.form.board.move_all(ListSide::Available);
                self.clamp_board_cursors();
                log::log_event("remove all columns from export");
            }
            Action::BoardRaise => self.board_shift_current(-1),
            Action::BoardLower => self.board_shift_current(1),
            Action::BoardScrollUp(side, n) => self.board_scroll(side, -(n as isize)),
            Action::BoardScrollDown(side, n) => self.board_scroll(side, n as isize),

            Action::PointerDown { x, y } => self.pointer_down(x, y),
            Action::PointerDrag { .. } => {
                if let Some(drag) = &mut self.drag {
                    drag.dragging = true;
                }
            }
            Action::PointerUp { x, y } => self.pointer_up(x, y),

            Action::None => {}
        }

        self.form.projector.sync(&self.form.board);
        AppSignal::Continue
    }

    fn with_focused_text(&mut self, edit: impl FnOnce(&mut form::TextFieldState)) {
        if self.input_mode != InputMode::Insert {
            return;
        }
        let focus = self.form.focus;
        if let Some(field) = self.form.text_field_mut(focus) {
            edit(field);
        }
    }

    /// Enter on the focused control: text fields start editing, select
    /// fields open their picker, the board moves the item under the cursor.
    fn activate_focused(&mut self) {
        let focus = self.form.focus;
        if focus == FocusId::ExportBoard {
            self.board_move_current();
            return;
        }
        if self.form.text_field(focus).is_some() {
            self.input_mode = InputMode::Insert;
            return;
        }
        if let Some(field) = self.form.select_field(focus) {
            self.column_picker = Some(ColumnPickerState::new(focus, field));
            self.input_mode = InputMode::ColumnPicker;
            return;
        }
        if let Some(field) = self.form.multi_field(focus) {
            self.multi_picker = Some(MultiPickerState::new(focus, field));
            self.input_mode = InputMode::MultiPicker;
        }
    }

    fn picker_confirm(&mut self) {
        if let Some(picker) = self.column_picker.take() {
            if let Some(field) = self.form.select_field_mut(picker.target) {
                field.chosen = picker.cursor;
            }
        }
        self.multi_picker = None;
        self.input_mode = InputMode::Normal;
    }

    fn picker_toggle(&mut self) {
        if let Some(picker) = &self.multi_picker {
            let target = picker.target;
            let cursor = picker.cursor;
            if let Some(field) = self.form.multi_field_mut(target) {
                field.toggle(cursor);
            }
        }
    }

    fn picker_close(&mut self) {
        self.column_picker = None;
        self.multi_picker = None;
        self.input_mode = InputMode::Normal;
    }

    /// Cursor position of a pane, clamped to its current length.
    pub fn board_cursor_pos(&self, side: ListSide) -> Option<usize> {
        let len = self.form.board.order(side).len();
        if len == 0 {
            None
        } else {
            Some(self.board_cursor[side.index()].min(len - 1))
        }
    }

    fn clamp_board_cursors(&mut self) {
        for side in [ListSide::Available, ListSide::Selected] {
            let len = self.form.board.order(side).len();
            let cursor = &mut self.board_cursor[side.index()];
            *cursor = (*cursor).min(len.saturating_sub(1));
        }
    }

    fn board_cursor_move(&mut self, delta: isize) {
        let side = self.board_side;
        if let Some(pos) = self.board_cursor_pos(side) {
            let len = self.form.board.order(side).len();
            self.board_cursor[side.index()] = pos.saturating_add_signed(delta).min(len - 1);
        }
    }

    fn board_scroll(&mut self, side: ListSide, delta: isize) {
        let len = self.form.board.order(side).len();
        if len == 0 {
            return;
        }
        let pos = self.board_cursor[side.index()].min(len - 1);
        self.board_cursor[side.index()] = pos.saturating_add_signed(delta).min(len - 1);
    }

    /// Move the item under the cursor to the other list. Double-click,
    /// Enter, and Space all end up here.
    fn board_move_current(&mut self) {
        let side = self.board_side;
        let Some(pos) = self.board_cursor_pos(side) else {
            return;
        };
        let Some(&source_index) = self.form.board.order(side).get(pos) else {
            return;
        };
        self.form.board.move_item(source_index, side.other());
        log::log_event(&format!(
            "moved '{}' to {:?}",
            self.form.board.resolve(source_index),
            side.other()
        ));
        self.clamp_board_cursors();
    }

    fn board_shift_current(&mut self, delta: isize) {
        let side = self.board_side;
        let Some(pos) = self.board_cursor_pos(side) else {
            return;
        };
        let len = self.form.board.order(side).len();
        let target = pos.saturating_add_signed(delta).min(len - 1);
        if target == pos {
            return;
        }
        self.form.board.shift(side, pos, target);
        self.board_cursor[side.index()] = target;
    }

    fn pointer_down(&mut self, x: u16, y: u16) {
        let Some(region) = self.interactions.hit(x, y).cloned() else {
            self.last_click = None;
            self.drag = None;
            return;
        };

        // a click outside an open popup dismisses it and still lands
        if (self.column_picker.is_some() || self.multi_picker.is_some())
            && !matches!(region.id, RegionId::PickerRow(_))
        {
            self.picker_close();
        }

        let now = Instant::now();
        let is_double = self
            .last_click
            .is_some_and(|(at, id)| id == region.id && now.duration_since(at) <= DOUBLE_CLICK_WINDOW);
        self.last_click = Some((now, region.id));

        // a press on a board row may become a drag; a double click never does
        if let RegionId::BoardItem { side, index } = region.id {
            self.drag = (!is_double).then_some(DragState {
                origin: (side, index),
                dragging: false,
            });
        } else {
            self.drag = None;
        }

        let action = if is_double {
            region.on_double_click.or(region.on_click)
        } else {
            region.on_click
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Resolve a finished drag. In-pane drops reorder, cross-pane drops
    /// change membership; both go through the same board contract as the
    /// keyboard and double-click paths.
    fn pointer_up(&mut self, x: u16, y: u16) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if !drag.dragging {
            return;
        }

        let (from_side, from_pos) = drag.origin;
        let Some(&source_index) = self.form.board.order(from_side).get(from_pos) else {
            return;
        };

        let target = self
            .interactions
            .board_item_at(x, y)
            .map(|(side, index)| (side, Some(index)))
            .or_else(|| self.interactions.board_pane_at(x, y).map(|side| (side, None)));
        let Some((to_side, to_pos)) = target else {
            return;
        };

        if to_side == from_side {
            let last = self.form.board.order(from_side).len().saturating_sub(1);
            let target_pos = to_pos.unwrap_or(last);
            self.form.board.shift(from_side, from_pos, target_pos);
            self.board_cursor[from_side.index()] = target_pos;
        } else {
            self.form.board.move_item(source_index, to_side);
            let last = self.form.board.order(to_side).len().saturating_sub(1);
            // land the item where it was dropped, not just at the end
            if let Some(pos) = to_pos {
                self.form.board.shift(to_side, last, pos);
                self.board_cursor[to_side.index()] = pos;
            } else {
                self.board_cursor[to_side.index()] = last;
            }
            log::log_event(&format!(
                "dragged '{}' to {:?}",
                self.form.board.resolve(source_index),
                to_side
            ));
        }

        self.board_side = to_side;
        self.form.focus = FocusId::ExportBoard;
        self.clamp_board_cursors();
    }

    fn submit(&mut self) {
        let issues = self.form.validate();
        if !issues.is_empty() {
            // bring the first invalid field into view
            self.form.focus = issues[0].focus;
            self.input_mode = InputMode::Normal;
            self.scroll_focus_into_view();
            self.flash_error = true;
            for issue in &issues {
                self.flash.push(issue.message.to_string());
            }
            log::log(&format!("submit blocked: {} invalid fields", issues.len()));
            return;
        }

        let body = self.form.body();
        match form::write_submission(&body, &self.exports_dir, &self.submission_stem) {
            Ok(path) => {
                log::log_event(&format!("submission written to {}", path.display()));
                self.flash
                    .push(format!("Export settings written to {}", path.display()));
                self.submitted = Some(path);
            }
            Err(e) => {
                log::log(&format!("submit failed: {e}"));
                self.flash.push(format!("Submit failed: {e}"));
                self.flash_error = true;
            }
        }
    }

    /// Keep the focused scalar row inside the visible window.
    pub fn scroll_focus_into_view(&mut self) {
        if self.form.focus == FocusId::ExportBoard {
            return;
        }
        let pos = self.form.focus.position();
        if pos < self.form_scroll {
            self.form_scroll = pos;
        } else if self.form_viewport > 0 && pos >= self.form_scroll + self.form_viewport {
            self.form_scroll = pos + 1 - self.form_viewport;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::EXPORT_COLUMNS_FIELD;

    fn app() -> App {
        let imported = vec!["Pos".to_string(), "Qty".to_string(), "Name".to_string()];
        let mut export_available = imported.clone();
        export_available.push("parent_assembly".to_string());
        let form = FormState::new(&imported, &export_available);
        App::new(form, std::env::temp_dir(), "test".to_string())
    }

    #[test]
    fn test_board_actions_reach_the_board() {
        let mut app = app();
        app.form.focus = FocusId::ExportBoard;

        app.dispatch(Action::BoardMoveCurrent);
        assert_eq!(app.form.board.selected(), &[0]);

        app.dispatch(Action::BoardAddAll);
        assert_eq!(app.form.board.selected(), &[0, 1, 2, 3]);

        app.dispatch(Action::BoardRemoveAll);
        assert!(app.form.board.selected().is_empty());
    }

    #[test]
    fn test_dispatch_refreshes_projection_once_per_event() {
        let mut app = app();
        app.form.focus = FocusId::ExportBoard;
        app.dispatch(Action::BoardAddAll);

        let fields = app.form.projector.fields();
        assert_eq!(fields.len(), 4);
        assert!(fields.iter().all(|f| f.name == EXPORT_COLUMNS_FIELD));
    }

    #[test]
    fn test_shift_reorders_selected() {
        let mut app = app();
        app.form.focus = FocusId::ExportBoard;
        app.dispatch(Action::BoardAddAll);
        app.board_side = ListSide::Selected;
        app.board_cursor[ListSide::Selected.index()] = 3;

        app.dispatch(Action::BoardRaise);
        assert_eq!(app.form.board.selected(), &[0, 1, 3, 2]);
        assert_eq!(app.board_cursor_pos(ListSide::Selected), Some(2));
    }

    #[test]
    fn test_activate_opens_column_picker() {
        let mut app = app();
        app.form.focus = FocusId::PartPositionColumn;
        app.dispatch(Action::Activate);
        assert_eq!(app.input_mode, InputMode::ColumnPicker);

        app.dispatch(Action::PickerDown);
        app.dispatch(Action::PickerConfirm);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.form.part_position_column.value(), "Pos");
    }

    #[test]
    fn test_multi_picker_toggles_field() {
        let mut app = app();
        app.form.focus = FocusId::NormalizedColumns;
        app.dispatch(Action::Activate);
        assert_eq!(app.input_mode, InputMode::MultiPicker);

        app.dispatch(Action::PickerToggle);
        app.dispatch(Action::PickerDown);
        app.dispatch(Action::PickerToggle);
        app.dispatch(Action::PickerConfirm);

        assert_eq!(app.form.normalized_columns.chosen_values(), vec!["Pos", "Qty"]);
    }

    #[test]
    fn test_submit_focuses_first_invalid_field() {
        let mut app = app();
        app.form.focus = FocusId::ExportBoard;
        app.dispatch(Action::Submit);

        assert_eq!(app.form.focus, FocusId::MainAssemblyName);
        assert!(app.flash_error);
        assert_eq!(app.flash[0], "Please provide main assembly full name.");
        assert!(app.submitted.is_none());
    }

    #[test]
    fn test_text_editing_requires_insert_mode() {
        let mut app = app();
        app.form.focus = FocusId::MainAssemblyName;

        app.dispatch(Action::InputChar('x'));
        assert_eq!(app.form.main_assembly_name.value, "");

        app.dispatch(Action::Activate);
        assert_eq!(app.input_mode, InputMode::Insert);
        app.dispatch(Action::InputChar('x'));
        assert_eq!(app.form.main_assembly_name.value, "x");

        app.dispatch(Action::ExitInsert);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_quit_signal() {
        let mut app = app();
        assert_eq!(app.dispatch(Action::Quit), AppSignal::Quit);
        assert_eq!(app.dispatch(Action::None), AppSignal::Continue);
    }
}
