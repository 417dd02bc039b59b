use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::{error::AppError, layout::AppLayout, model::Model, terminal::TerminalWrapper};

mod commandline;
mod dialog;
mod inventory;
mod prompt;
mod rentals;
mod statusline;
mod style;

pub fn render_model(terminal: &mut TerminalWrapper, model: &Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let layout = AppLayout::new(
            frame.area(),
            inventory::height(),
            commandline::height(model),
        );

        frame.render_widget(Block::default().style(style::background()), frame.area());

        title(frame, layout.title);
        inventory::view(model, frame, layout.inventory);
        rentals::view(model, frame, layout.rentals);
        statusline::view(model, frame, layout.statusline);
        commandline::view(model, frame, layout.commandline);

        // NOTE: overlays last, dialogs cover prompts
        prompt::view(model, frame);
        dialog::view(model, frame);
    })
}

fn title(frame: &mut Frame, rect: Rect) {
    let line = Line::from(Span::styled(
        "PlayStation Rental System",
        Style::default()
            .fg(style::FOREGROUND)
            .add_modifier(Modifier::BOLD),
    ))
    .centered();

    frame.render_widget(Paragraph::new(line), rect);
}
