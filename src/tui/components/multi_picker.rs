//! Multi-select column picker popup.
//!
//! Toggles commit to the form field immediately; closing the popup changes
//! nothing further.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::picker::Picker;
use crate::tui::interaction::{ClickRegion, InteractiveRegion, RegionId};
use crate::tui::theme::*;

use super::centered_popup;

pub fn render_multi_picker(frame: &mut Frame, area: Rect, app: &mut App) {
    let App {
        multi_picker,
        interactions,
        form,
        ..
    } = app;
    let Some(picker) = multi_picker else {
        return;
    };
    let Some(field) = form.multi_field(picker.target) else {
        return;
    };

    let wanted_height = (picker.options.len() as u16).saturating_add(5);
    let popup_area = centered_popup(area, 52, wanted_height.max(8));
    frame.render_widget(Clear, popup_area);

    let visible = popup_area.height.saturating_sub(5) as usize;
    let scroll = picker.scroll_offset(visible);

    let mut lines: Vec<Line> = vec![];
    lines.push(Line::from(vec![
        Span::styled("Toggle columns · ", Style::new().fg(TEXT_DIM)),
        Span::styled(
            format!("{} selected", field.chosen_count()),
            Style::new().fg(WARN),
        ),
    ]));

    for (i, option) in picker
        .options
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible)
    {
        let is_cursor = i == picker.cursor;
        let marker = if is_cursor { "> " } else { "  " };
        let checkbox = if field.is_chosen(i) { "[x] " } else { "[ ] " };
        let checkbox_style = if field.is_chosen(i) {
            Style::new().fg(ACCENT)
        } else {
            Style::new().fg(TEXT_DIM)
        };
        let label_style = if is_cursor {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(checkbox, checkbox_style),
            Span::styled(option.label.clone(), label_style),
        ]));

        let row_y = popup_area.y + 2 + (i - scroll) as u16;
        interactions.register(
            InteractiveRegion::clickable(
                RegionId::PickerRow(i),
                ClickRegion::new(popup_area.x + 1, row_y, popup_area.width.saturating_sub(2), 1),
                Action::PickerToggleAt(i),
            )
            .with_priority(10),
        );
    }

    if picker.options.is_empty() {
        lines.push(Line::styled(
            "  (no imported columns)",
            Style::new().fg(TEXT_DIM),
        ));
    }

    while lines.len() + 2 < popup_area.height as usize {
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[Space]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" toggle · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" navigate · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" done", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .title_style(Style::new().fg(ACCENT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
