use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rental_keymap::message::PrintContent;

use crate::{layout::CommandLineLayout, model::Model};

pub fn height(model: &Model) -> u16 {
    let lines = model.commandline.content.len().max(1);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

pub fn view(model: &Model, frame: &mut Frame, rect: ratatui::layout::Rect) {
    let key_sequence_length = u16::try_from(model.key_sequence.chars().count()).unwrap_or(u16::MAX);
    let layout = CommandLineLayout::new(rect, key_sequence_length);

    let lines: Vec<_> = model
        .commandline
        .content
        .iter()
        .map(|content| {
            let (text, color) = match content {
                PrintContent::Default(text) => (text, Color::White),
                PrintContent::Error(text) => (text, Color::Red),
                PrintContent::Information(text) => (text, Color::LightGreen),
            };
            Line::from(Span::styled(text.clone(), Style::default().fg(color)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), layout.content);
    frame.render_widget(
        Paragraph::new(model.key_sequence.clone()),
        layout.key_sequence,
    );
}
