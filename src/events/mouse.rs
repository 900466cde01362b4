//! Mouse event handling.
//!
//! Scroll events are resolved against the interaction registry, which is
//! populated by UI components during each render. Button events are passed
//! through as pointer actions: the App owns the double-click window and the
//! drag state, so it resolves clicks against the registry itself.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.scroll_up_action(x, y),
        MouseEventKind::ScrollDown => app.interactions.scroll_down_action(x, y),
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown { x, y },
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag { x, y },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp { x, y },
        _ => Action::None,
    }
}
