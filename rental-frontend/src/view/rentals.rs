use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};
use rental_keymap::message::Mode;

use crate::model::Model;

use super::style;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let selecting = model.selection.open;
    let title = if selecting {
        "Select Rental to Return"
    } else {
        "Active Rentals"
    };

    let rows: Vec<_> = model
        .tracker
        .active_records()
        .map(|record| {
            Row::new(vec![
                record.item.to_string(),
                record.customer.clone(),
                record.rented_at_string(),
            ])
        })
        .collect();

    let header = Row::new(vec!["Console", "Customer", "Rental Date"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style::background().fg(if selecting {
            style::RENT
        } else {
            style::MUTED
        }))
        .title(title)
        .title_bottom(hints(&model.mode));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(style::key_hint(style::RENT))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if selecting {
        state.select(model.selection.index);
    }

    frame.render_stateful_widget(table, rect, &mut state);
}

fn hints(mode: &Mode) -> Line<'static> {
    let hints = match mode {
        Mode::Select => vec![(" j/k ", "move"), (" <cr> ", "return"), (" <esc> ", "back")],
        Mode::Normal => vec![
            (" s ", "return specific"),
            (" w ", "waiting list"),
            (" h ", "history"),
            (" q ", "quit"),
        ],
        Mode::Message | Mode::Prompt => Vec::new(),
    };

    let mut spans = Vec::new();
    for (key, description) in hints {
        spans.push(Span::styled(key, style::key_hint(style::ACTION)));
        spans.push(Span::raw(format!(" {} ", description)));
    }
    Line::from(spans)
}
