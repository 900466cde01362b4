//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};
use crate::columns::ListSide;
use crate::form::FocusId;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(key),
        InputMode::ColumnPicker => handle_column_picker_mode(key),
        InputMode::MultiPicker => handle_multi_picker_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Submit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Enter => Action::Activate,
        _ => {
            if app.form.focus == FocusId::ExportBoard {
                handle_board_keys(key)
            } else {
                Action::None
            }
        }
    }
}

/// Keys that only apply while the export board is focused.
fn handle_board_keys(key: KeyEvent) -> Action {
    match key.code {
        // shifted arrows must win over the plain ones
        KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => Action::BoardRaise,
        KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => Action::BoardLower,
        KeyCode::Char('h') | KeyCode::Left => Action::BoardFocusSide(ListSide::Available),
        KeyCode::Char('l') | KeyCode::Right => Action::BoardFocusSide(ListSide::Selected),
        KeyCode::Char('j') | KeyCode::Down => Action::BoardCursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::BoardCursorUp,
        KeyCode::Char(' ') => Action::BoardMoveCurrent,
        KeyCode::Char('a') => Action::BoardAddAll,
        KeyCode::Char('r') => Action::BoardRemoveAll,
        KeyCode::Char('K') => Action::BoardRaise,
        KeyCode::Char('J') => Action::BoardLower,
        _ => Action::None,
    }
}

fn handle_insert_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Action::ExitInsert,
        // Tab commits the edit and moves on
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

fn handle_column_picker_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::PickerCancel,
        KeyCode::Char('j') | KeyCode::Down => Action::PickerDown,
        KeyCode::Char('k') | KeyCode::Up => Action::PickerUp,
        KeyCode::Enter => Action::PickerConfirm,
        _ => Action::None,
    }
}

fn handle_multi_picker_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Action::PickerConfirm,
        KeyCode::Char('j') | KeyCode::Down => Action::PickerDown,
        KeyCode::Char('k') | KeyCode::Up => Action::PickerUp,
        KeyCode::Char(' ') => Action::PickerToggle,
        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}
