use ratatui::{
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    layout,
    model::{dialog::DialogKind, Model},
};

use super::style;

pub fn view(model: &Model, frame: &mut Frame) {
    let dialog = match model.dialogs.front() {
        Some(it) => it,
        None => return,
    };

    let area = frame.area();
    let content_width = dialog
        .content
        .lines()
        .map(|line| line.chars().count())
        .chain(std::iter::once(dialog.title.chars().count()))
        .max()
        .unwrap_or_default();

    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(dialog.content.lines().count() + 2).unwrap_or(u16::MAX);
    let rect = layout::centered(area, width.min(area.width / 5 * 4), height);

    let border = match dialog.kind {
        DialogKind::Information => style::ACTION,
        DialogKind::Warning => style::WARNING,
    };

    let remaining = model.dialogs.len().saturating_sub(1);
    let hint = if remaining > 0 {
        format!(" <cr> next ({} more) ", remaining)
    } else {
        " <cr> close ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style::background().fg(border))
        .style(style::background().bg(style::DIALOG_BACKGROUND))
        .title(dialog.title.as_str())
        .title_bottom(Line::from(hint).right_aligned());

    let paragraph = Paragraph::new(dialog.content.as_str())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((dialog.scroll, 0));

    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}
