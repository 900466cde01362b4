//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

use super::centered_popup;

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::new().fg(TEXT_WHITE)),
        Span::styled(description, Style::new().fg(TEXT_DIM)),
    ])
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup(area, 52, 24);
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Form", Style::new().fg(LOGO_STEEL).bold()));
    lines.push(key_line("Tab/S-Tab", "Next / previous field"));
    lines.push(key_line("Enter", "Edit field or open picker"));
    lines.push(key_line("C-s", "Submit export settings"));
    lines.push(key_line("q", "Quit"));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Export columns",
        Style::new().fg(LOGO_PATINA).bold(),
    ));
    lines.push(key_line("h/l", "Switch pane"));
    lines.push(key_line("j/k", "Move cursor"));
    lines.push(key_line("Space", "Move column to other pane"));
    lines.push(key_line("a / r", "Add all / remove all"));
    lines.push(key_line("J/K", "Reorder within pane"));
    lines.push(key_line("Dbl-click", "Move column (mouse)"));
    lines.push(key_line("Drag", "Reorder or move (mouse)"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Pickers", Style::new().fg(LOGO_BRASS).bold()));
    lines.push(key_line("j/k", "Navigate options"));
    lines.push(key_line("Space", "Toggle (multi-select)"));
    lines.push(key_line("Enter", "Confirm / close"));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_STEEL))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
