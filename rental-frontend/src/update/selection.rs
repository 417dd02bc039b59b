use rental_keymap::message::{CursorDirection, Mode};

use crate::{
    action::Action,
    model::{dialog::Dialog, Model},
};

use super::{change_mode, dialog, returns};

pub fn open(model: &mut Model) -> Vec<Action> {
    if model.mode != Mode::Normal {
        return Vec::new();
    }

    if model.tracker.active_records().next().is_none() {
        return dialog::show(
            model,
            vec![Dialog::info("Return Rental", "No active rentals to return")],
        );
    }

    model.selection.open = true;
    model.selection.index = Some(0);

    change_mode(model, Mode::Select)
}

pub fn move_cursor(model: &mut Model, direction: &CursorDirection) {
    let count = model.tracker.active_records().count();
    if count == 0 {
        model.selection.index = None;
        return;
    }

    let index = match (model.selection.index, direction) {
        (None, _) => 0,
        (Some(index), CursorDirection::Down) => (index + 1).min(count - 1),
        (Some(index), CursorDirection::Up) => index.saturating_sub(1),
    };

    model.selection.index = Some(index);
}

pub fn confirm(model: &mut Model) -> Vec<Action> {
    if !model.selection.open {
        return Vec::new();
    }

    let selected = model
        .selection
        .index
        .and_then(|index| model.tracker.active_records().nth(index))
        .map(|record| (record.item, record.customer.clone()));

    let (item, customer) = match selected {
        Some(it) => it,
        None => {
            return dialog::show(
                model,
                vec![Dialog::warning("Warning", "Please select a rental to return")],
            );
        }
    };

    let dialogs = match model.tracker.return_specific(item, &customer) {
        Ok(outcome) => returns::outcome_dialogs(&outcome),
        Err(error) => vec![Dialog::warning("Warning", error.to_string())],
    };

    refresh(model);

    let mut actions = dialog::show(model, dialogs);
    if model.dialogs.is_empty() && !model.selection.open {
        actions.extend(change_mode(model, Mode::Normal));
    }
    actions
}

pub fn leave(model: &mut Model) -> Vec<Action> {
    model.selection.open = false;
    model.selection.index = None;

    if model.dialogs.is_empty() {
        change_mode(model, Mode::Normal)
    } else {
        Vec::new()
    }
}

fn refresh(model: &mut Model) {
    let count = model.tracker.active_records().count();
    if count == 0 {
        model.selection.open = false;
        model.selection.index = None;
    } else {
        model.selection.index = model.selection.index.map(|index| index.min(count - 1));
    }
}
