//! Scrollable list of the scalar user-data controls.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FORM_ROWS, InputMode};
use crate::events::Action;
use crate::form::FocusId;
use crate::tui::interaction::{ClickRegion, InteractiveRegion, RegionId};
use crate::tui::theme::*;

/// Lines per control row: label, value, spacer.
const ROW_HEIGHT: u16 = 3;

pub fn render_form_fields(frame: &mut Frame, area: Rect, app: &mut App) {
    let form_focused = app.form.focus != FocusId::ExportBoard;

    let block = Block::default()
        .title(" User data ")
        .title_style(Style::new().fg(WARN).bold())
        .borders(Borders::ALL)
        .border_style(if form_focused {
            Style::new().fg(ACCENT)
        } else {
            Style::new().fg(TEXT_DIM)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    app.form_viewport = ((inner.height / ROW_HEIGHT) as usize).max(1);
    app.scroll_focus_into_view();
    let scroll = app.form_scroll.min(FORM_ROWS.saturating_sub(1));

    let mut lines: Vec<Line> = vec![];
    let mut insert_cursor: Option<Position> = None;

    for (row, &id) in FocusId::ORDER[..FORM_ROWS]
        .iter()
        .enumerate()
        .skip(scroll)
        .take(app.form_viewport)
    {
        let is_focused = app.form.focus == id;
        let cursor = if is_focused { "> " } else { "  " };
        let row_y = inner.y + ((row - scroll) as u16) * ROW_HEIGHT;

        let (label, required) = field_label(app, id);
        let label_style = if is_focused {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };

        let mut label_spans = vec![Span::raw(cursor), Span::styled(label, label_style)];
        if required {
            label_spans.push(Span::styled(" *", Style::new().fg(ERROR)));
        }
        lines.push(Line::from(label_spans));

        let (value, value_set) = field_value(app, id);
        let value_style = if value_set {
            Style::new().fg(VALUE_BLUE)
        } else {
            Style::new().fg(TEXT_DIM)
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::raw(""));

        // terminal cursor while editing this row
        if is_focused && app.input_mode == InputMode::Insert {
            if let Some(field) = app.form.text_field(id) {
                let x = inner.x + 4 + field.cursor.min(u16::MAX as usize) as u16;
                insert_cursor = Some(Position::new(x.min(inner.x + inner.width), row_y + 1));
            }
        }

        app.interactions.register(
            InteractiveRegion::clickable(
                RegionId::FormRow(id),
                ClickRegion::new(inner.x, row_y, inner.width, ROW_HEIGHT),
                Action::FocusField(id),
            )
            .with_double_click(Action::Activate)
            .with_scroll(Action::FormScrollUp(1), Action::FormScrollDown(1)),
        );
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);

    if let Some(position) = insert_cursor {
        frame.set_cursor_position(position);
    }
}

fn field_label(app: &App, id: FocusId) -> (&'static str, bool) {
    if let Some(field) = app.form.text_field(id) {
        (field.label, field.required)
    } else if let Some(field) = app.form.select_field(id) {
        (field.label, field.required)
    } else if let Some(field) = app.form.multi_field(id) {
        (field.label, false)
    } else {
        ("", false)
    }
}

/// Display value of a row plus whether something is actually set.
fn field_value(app: &App, id: FocusId) -> (String, bool) {
    if let Some(field) = app.form.text_field(id) {
        if field.value.is_empty() {
            ("(empty)".to_string(), false)
        } else {
            (field.value.clone(), true)
        }
    } else if let Some(field) = app.form.select_field(id) {
        (field.chosen_label().to_string(), !field.is_unset())
    } else if let Some(field) = app.form.multi_field(id) {
        if field.chosen_count() == 0 {
            ("(none)".to_string(), false)
        } else {
            (field.chosen_values().join(", "), true)
        }
    } else {
        (String::new(), false)
    }
}
