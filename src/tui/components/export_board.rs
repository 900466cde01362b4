//! The two connected column panes: Available and Export columns.
//!
//! Both panes are a rendering of the board model. Items carry no handlers
//! of their own; clicks and drags resolve through the interaction registry
//! back into board actions.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::columns::ListSide;
use crate::events::Action;
use crate::form::FocusId;
use crate::tui::interaction::{ClickRegion, InteractiveRegion, RegionId};
use crate::tui::theme::*;

pub fn render_export_board(frame: &mut Frame, area: Rect, app: &mut App) {
    let panes = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_pane(frame, panes[0], app, ListSide::Available);
    render_pane(frame, panes[1], app, ListSide::Selected);
}

fn render_pane(frame: &mut Frame, area: Rect, app: &mut App, side: ListSide) {
    let board_focused = app.form.focus == FocusId::ExportBoard;
    let pane_active = board_focused && app.board_side == side;
    let count = app.form.board.order(side).len();

    let title = match side {
        ListSide::Available => format!(" Available columns ({count}) "),
        ListSide::Selected => format!(" Export columns ({count}) "),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(WARN).bold())
        .borders(Borders::ALL)
        .border_style(if pane_active {
            Style::new().fg(ACCENT)
        } else {
            Style::new().fg(TEXT_DIM)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    // last inner line is the key hint
    let list_height = inner.height.saturating_sub(1) as usize;
    let cursor_pos = app.board_cursor_pos(side);
    let scroll = match cursor_pos {
        Some(pos) if list_height > 0 && pos >= list_height => pos + 1 - list_height,
        _ => 0,
    };

    let mut lines: Vec<Line> = vec![];

    for (i, &source_index) in app
        .form
        .board
        .order(side)
        .iter()
        .enumerate()
        .skip(scroll)
        .take(list_height)
    {
        let is_cursor = pane_active && cursor_pos == Some(i);
        let marker = if is_cursor { "> " } else { "  " };
        let label = app
            .form
            .board
            .item(source_index)
            .map(|item| item.display_label())
            .unwrap_or_default();

        let mut spans = vec![Span::raw(marker)];
        if side == ListSide::Selected {
            spans.push(Span::styled(
                format!("{}. ", i + 1),
                Style::new().fg(TEXT_DIM),
            ));
        }
        spans.push(Span::styled(
            label,
            if is_cursor {
                Style::new().fg(TEXT_WHITE).bold()
            } else {
                Style::new().fg(TEXT_WHITE)
            },
        ));
        lines.push(Line::from(spans));

        let row_y = inner.y + (i - scroll) as u16;
        app.interactions.register(
            InteractiveRegion::clickable(
                RegionId::BoardItem { side, index: i },
                ClickRegion::new(inner.x, row_y, inner.width, 1),
                Action::BoardSelectAt { side, index: i },
            )
            .with_double_click(Action::BoardMoveAt { side, index: i })
            .with_priority(1),
        );
    }

    if count == 0 {
        let hint = match side {
            ListSide::Available => "(no columns)",
            ListSide::Selected => "(nothing selected for export)",
        };
        lines.push(Line::styled(format!("  {hint}"), Style::new().fg(TEXT_DIM)));
    }

    while lines.len() < list_height {
        lines.push(Line::raw(""));
    }

    if pane_active {
        let hint = match side {
            ListSide::Available => "[space] select · [a] add all",
            ListSide::Selected => "[space] remove · [J/K] reorder · [r] remove all",
        };
        lines.push(Line::styled(hint, Style::new().fg(TEXT_DIM)));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);

    app.interactions.register(
        InteractiveRegion::clickable(
            RegionId::BoardPane(side),
            ClickRegion::from_rect(inner),
            Action::BoardFocusSide(side),
        )
        .with_scroll(
            Action::BoardScrollUp(side, 3),
            Action::BoardScrollDown(side, 3),
        ),
    );
}
