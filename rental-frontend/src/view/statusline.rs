use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use rental_tracker::ReturnPolicy;

use crate::model::Model;

use super::style;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let mode = Line::from(Span::styled(
        format!("--{}--", model.mode.to_string().to_uppercase()),
        Style::default().fg(style::MUTED),
    ));
    let counts = get_counts_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(mode.width() as u16),
            Constraint::Min(0),
            Constraint::Length(counts.width() as u16),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(mode), layout[0]);
    frame.render_widget(Paragraph::new(counts), layout[2]);
}

fn get_counts_content(model: &Model) -> Line {
    let waiting = model.tracker.waiting_list().len();
    let active = model.tracker.active_records().count();
    let policy = match model.tracker.return_policy() {
        ReturnPolicy::Capped => "capped",
        ReturnPolicy::Permissive => "permissive",
    };

    let mut content = Vec::new();
    if waiting > 0 {
        content.push(Span::styled(
            format!("waiting {} ", waiting),
            Style::default().fg(Color::Yellow),
        ));
    }

    content.push(Span::styled(
        format!("active {} ", active),
        Style::default().fg(Color::Green),
    ));

    content.push(Span::styled(
        format!("returns {}", policy),
        Style::default().fg(style::MUTED),
    ));

    Line::from(content)
}
