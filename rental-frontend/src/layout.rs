use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub title: Rect,
    pub inventory: Rect,
    pub rentals: Rect,
    pub statusline: Rect,
    pub commandline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect, inventory_height: u16, commandline_height: u16) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(inventory_height),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(commandline_height),
            ])
            .split(rect);

        Self {
            title: main[0],
            inventory: main[1],
            rentals: main[2],
            statusline: main[3],
            commandline: main[4],
        }
    }
}

#[derive(Clone, Debug)]
pub struct CommandLineLayout {
    pub content: Rect,
    pub key_sequence: Rect,
}

impl CommandLineLayout {
    pub fn new(rect: Rect, key_sequence_length: u16) -> Self {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100),
                Constraint::Length(key_sequence_length),
            ])
            .split(rect);

        Self {
            content: layout[0],
            key_sequence: layout[1],
        }
    }
}

/// Centers a rect with the given size inside `area`, shrinking it to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
