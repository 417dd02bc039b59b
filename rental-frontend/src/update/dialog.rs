use rental_keymap::message::{CursorDirection, Mode};

use crate::{
    action::Action,
    model::{dialog::Dialog, Model},
};

use super::{base_mode, change_mode};

pub fn show(model: &mut Model, dialogs: Vec<Dialog>) -> Vec<Action> {
    if dialogs.is_empty() {
        return Vec::new();
    }

    model.dialogs.extend(dialogs);
    change_mode(model, Mode::Message)
}

pub fn dismiss(model: &mut Model) -> Vec<Action> {
    model.dialogs.pop_front();
    if model.dialogs.is_empty() {
        let mode = base_mode(model);
        change_mode(model, mode)
    } else {
        Vec::new()
    }
}

pub fn scroll(model: &mut Model, direction: &CursorDirection) {
    let dialog = match model.dialogs.front_mut() {
        Some(it) => it,
        None => return,
    };

    let max = u16::try_from(dialog.content.lines().count().saturating_sub(1)).unwrap_or(u16::MAX);
    dialog.scroll = match direction {
        CursorDirection::Down => dialog.scroll.saturating_add(1).min(max),
        CursorDirection::Up => dialog.scroll.saturating_sub(1),
    };
}
