use ratatui::style::{Color, Style};

pub const BACKGROUND: Color = Color::Rgb(44, 62, 80);
pub const DIALOG_BACKGROUND: Color = Color::Rgb(52, 73, 94);
pub const FOREGROUND: Color = Color::White;
pub const MUTED: Color = Color::Gray;

pub const RENT: Color = Color::Rgb(52, 152, 219);
pub const RETURN: Color = Color::Rgb(46, 204, 113);
pub const ACTION: Color = Color::Rgb(155, 89, 182);
pub const WARNING: Color = Color::Rgb(231, 76, 60);

pub fn background() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn key_hint(color: Color) -> Style {
    Style::default().bg(color).fg(FOREGROUND)
}
