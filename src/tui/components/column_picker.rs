//! Single-select column picker popup.

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

pub fn render_column_picker(frame: &mut Frame, area: Rect, app: &mut App) {
    let App {
        column_picker,
        interactions,
        form,
        ..
    } = app;
    let Some(picker) = column_picker else {
        return;
    };

    let wanted_height = (picker.options.len() as u16).saturating_add(5);
    let popup_area = centered_popup(area, 52, wanted_height.max(8));
    frame.render_widget(Clear, popup_area);

    let title = form
        .select_field(picker.target)
        .map(|field| format!(" {} ", field.label))
        .unwrap_or_else(|| " Select column ".to_string());

    // title, header, help and borders take the rest
    let visible = popup_area.height.saturating_sub(5) as usize;
    let scroll = picker.scroll_offset(visible);

    let mut lines: Vec<Line> = vec![];
    lines.push(Line::styled(
        "Select column name",
        Style::new().fg(TEXT_DIM),
    ));

    for (i, option) in picker
        .options
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible)
    {
        let is_cursor = i == picker.cursor;
        let marker = if is_cursor { "> " } else { "  " };
        let style = if option.value.is_empty() {
            Style::new().fg(TEXT_DIM)
        } else if is_cursor {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(option.label.clone(), style),
        ]));

        // first body line sits one row below the border and header
        let row_y = popup_area.y + 2 + (i - scroll) as u16;
        interactions.register(
            InteractiveRegion::clickable(
                RegionId::PickerRow(i),
                ClickRegion::new(popup_area.x + 1, row_y, popup_area.width.saturating_sub(2), 1),
                Action::PickerSet(i),
            )
            .with_double_click(Action::PickerConfirm)
            .with_priority(10),
        );
    }

    if picker.options.len() > scroll + visible {
        lines.push(Line::styled(
            format!(
                "  ({}-{} of {})",
                scroll + 1,
                (scroll + visible).min(picker.options.len()),
                picker.options.len()
            ),
            Style::new().fg(TEXT_DIM),
        ));
    }

    while lines.len() + 2 < popup_area.height as usize {
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[↑/↓]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" navigate · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" select · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" cancel", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(ACCENT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
