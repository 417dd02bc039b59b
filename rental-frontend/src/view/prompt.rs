use ratatui::{
    layout::Position,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::{layout, model::Model};

use super::style;

pub fn view(model: &Model, frame: &mut Frame) {
    let prompt = match &model.prompt {
        Some(it) => it,
        None => return,
    };

    let width = prompt.label.chars().count().max(prompt.input.chars().count() + 1) + 4;
    let rect = layout::centered(
        frame.area(),
        u16::try_from(width).unwrap_or(u16::MAX),
        4,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style::background().fg(style::RENT))
        .style(style::background().bg(style::DIALOG_BACKGROUND))
        .title(prompt.title.as_str())
        .title_bottom(" <cr> ok  <esc> cancel ");

    let content = vec![
        Line::from(prompt.label.as_str()),
        Line::from(prompt.input.as_str()),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(content).block(block), rect);

    if model.dialogs.is_empty() {
        let input_length = u16::try_from(prompt.input.chars().count()).unwrap_or(u16::MAX);
        let x = rect.x.saturating_add(1).saturating_add(input_length);
        frame.set_cursor_position(Position::new(x.min(rect.right().saturating_sub(2)), rect.y + 2));
    }
}
