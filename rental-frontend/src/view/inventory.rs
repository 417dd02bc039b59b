use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rental_tracker::ItemType;

use crate::model::Model;

use super::style;

pub fn height() -> u16 {
    u16::try_from(ItemType::ALL.len()).unwrap_or(u16::MAX) + 2
}

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let summary = model.tracker.inventory_summary();
    let mut lines = summary.lines();
    let title = lines.next().unwrap_or_default().trim_end_matches(':').to_string();

    let content: Vec<_> = lines
        .enumerate()
        .map(|(index, status)| {
            let number = index + 1;
            Line::from(vec![
                Span::styled(format!(" r{} rent ", number), style::key_hint(style::RENT)),
                Span::raw(" "),
                Span::styled(format!(" d{} return ", number), style::key_hint(style::RETURN)),
                Span::raw("  "),
                Span::raw(status.to_string()),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style::background().fg(style::MUTED))
        .title(title);

    frame.render_widget(Paragraph::new(content).block(block), rect);
}
