use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};
use crate::form::FocusId;

use super::components::{
    render_column_picker, render_export_board, render_form_fields, render_help_popup,
    render_multi_picker,
};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    // regions are re-registered by the components below
    app.interactions.clear();

    let area = frame.area();

    // Main vertical layout: logo, content, status, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Status line
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    // Horizontal split: form fields | gap | export board
    let content_layout = Layout::horizontal([
        Constraint::Length(46), // Form fields
        Constraint::Length(1),  // Gap/padding
        Constraint::Min(0),     // Export board
    ])
    .split(main_layout[1]);

    render_form_fields(frame, content_layout[0], app);
    render_export_board(frame, content_layout[2], app);

    render_status(frame, main_layout[2], app);
    render_hotkeys(frame, main_layout[3], app);

    match app.input_mode {
        InputMode::ColumnPicker => render_column_picker(frame, area, app),
        InputMode::MultiPicker => render_multi_picker(frame, area, app),
        InputMode::Help => render_help_popup(frame, area),
        _ => {}
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the colorful "bommap" logo
    let padding = (area.width.saturating_sub(6)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("b", Style::new().fg(LOGO_COPPER).bold()),
        Span::styled("o", Style::new().fg(LOGO_BRASS).bold()),
        Span::styled("m", Style::new().fg(LOGO_STEEL).bold()),
        Span::styled("m", Style::new().fg(LOGO_PATINA).bold()),
        Span::styled("a", Style::new().fg(LOGO_BRASS).bold()),
        Span::styled("p", Style::new().fg(LOGO_COPPER).bold()),
    ]);

    let paragraph = Paragraph::new(centered);
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    if app.flash.is_empty() {
        return;
    }

    let style = if app.flash_error {
        Style::new().fg(ERROR)
    } else {
        Style::new().fg(ACCENT)
    };

    let line = Line::styled(format!(" {}", app.flash.join(" · ")), style);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let hints: &[(&str, &str)] = match app.input_mode {
        InputMode::Normal if app.form.focus == FocusId::ExportBoard => &[
            ("h/l", "pane"),
            ("j/k", "cursor"),
            ("Space", "move"),
            ("a/r", "add/remove all"),
            ("J/K", "reorder"),
            ("C-s", "submit"),
            ("?", "help"),
            ("q", "quit"),
        ],
        InputMode::Normal => &[
            ("Tab", "next field"),
            ("Enter", "edit"),
            ("C-s", "submit"),
            ("?", "help"),
            ("q", "quit"),
        ],
        InputMode::Insert => &[("Enter/Esc", "done"), ("Tab", "next field")],
        InputMode::ColumnPicker => &[("j/k", "navigate"), ("Enter", "select"), ("Esc", "cancel")],
        InputMode::MultiPicker => &[("Space", "toggle"), ("j/k", "navigate"), ("Enter", "done")],
        InputMode::Help => &[("Esc", "close")],
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, description)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::new().fg(TEXT_DIM)));
        }
        spans.push(Span::styled(format!("[{key}]"), Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(
            format!(" {description}"),
            Style::new().fg(TEXT_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
