//! UI components for the TUI.
//!
//! Every component renders from the App model and registers its clickable
//! regions with the interaction registry while doing so. Nothing here owns
//! state: the panes are a picture of the board, redrawn every frame.
//!
//! - `form_fields` - Scrollable list of the scalar user-data controls
//! - `export_board` - The two connected column panes
//! - `column_picker` - Single-select popup
//! - `multi_picker` - Multi-select popup
//! - `help_popup` - Help overlay with keybindings

mod column_picker;
mod export_board;
mod form_fields;
mod help_popup;
mod multi_picker;

pub use column_picker::render_column_picker;
pub use export_board::render_export_board;
pub use form_fields::render_form_fields;
pub use help_popup::render_help_popup;
pub use multi_picker::render_multi_picker;

use ratatui::layout::Rect;

/// Centered popup rect of at most the given size.
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(x, y, popup_width, popup_height)
}
