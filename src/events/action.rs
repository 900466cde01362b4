//! Action enum for decoupling input handling from state changes.

use crate::columns::ListSide;
use crate::form::FocusId;

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update
/// state. One terminal event produces at most one action, and the action is
/// fully applied (including the field projection) before the next event is
/// read.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,
    /// Validate and write the submission
    Submit,

    // === Form navigation ===
    /// Focus the next control
    FocusNext,
    /// Focus the previous control
    FocusPrev,
    /// Activate the focused control (edit text / open picker / move item)
    Activate,
    /// Focus a specific control (mouse)
    FocusField(FocusId),
    /// Scroll the form field list up by n rows
    FormScrollUp(usize),
    /// Scroll the form field list down by n rows
    FormScrollDown(usize),

    // === Text editing ===
    /// Add character to the focused text field
    InputChar(char),
    /// Delete character before cursor
    InputBackspace,
    /// Delete character at cursor
    InputDelete,
    /// Move cursor left
    InputLeft,
    /// Move cursor right
    InputRight,
    /// Move cursor to start
    InputHome,
    /// Move cursor to end
    InputEnd,
    /// Leave insert mode, keeping the edits
    ExitInsert,

    // === Select popups ===
    /// Navigate popup up
    PickerUp,
    /// Navigate popup down
    PickerDown,
    /// Commit the popup choice
    PickerConfirm,
    /// Toggle the current multi-select entry
    PickerToggle,
    /// Close the popup without committing
    PickerCancel,
    /// Move the popup cursor to a row (mouse)
    PickerSet(usize),
    /// Toggle a specific multi-select row (mouse)
    PickerToggleAt(usize),

    // === Export board ===
    /// Focus one of the two panes
    BoardFocusSide(ListSide),
    /// Move the pane cursor up
    BoardCursorUp,
    /// Move the pane cursor down
    BoardCursorDown,
    /// Move the item under the cursor to the other list
    BoardMoveCurrent,
    /// Put the pane cursor on an item (mouse)
    BoardSelectAt { side: ListSide, index: usize },
    /// Move a specific item to the other list (mouse double click)
    BoardMoveAt { side: ListSide, index: usize },
    /// Move every available item into the selection
    BoardAddAll,
    /// Move every selected item back to available
    BoardRemoveAll,
    /// Shift the current item up within its pane
    BoardRaise,
    /// Shift the current item down within its pane
    BoardLower,
    /// Move a pane cursor up by n rows (mouse scroll)
    BoardScrollUp(ListSide, usize),
    /// Move a pane cursor down by n rows (mouse scroll)
    BoardScrollDown(ListSide, usize),

    // === Pointer lifecycle ===
    /// Left button pressed
    PointerDown { x: u16, y: u16 },
    /// Pointer moved with the button held
    PointerDrag { x: u16, y: u16 },
    /// Left button released
    PointerUp { x: u16, y: u16 },

    // === No-op ===
    /// No action to take
    None,
}
