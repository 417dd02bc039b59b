use rental_keymap::message::{CursorDirection, KeySequence, KeymapMessage, Mode};

use crate::{
    action::Action,
    event::{Envelope, Message},
    model::{dialog::Dialog, Model},
};

mod commandline;
mod dialog;
mod prompt;
mod rent;
mod returns;
mod selection;

#[tracing::instrument(skip(model))]
pub fn update(model: &mut Model, envelope: &Envelope) -> Vec<Action> {
    match &envelope.sequence {
        KeySequence::Completed(_) => model.key_sequence.clear(),
        KeySequence::Changed(sequence) => model.key_sequence = sequence.to_owned(),
        KeySequence::None => {}
    };

    envelope
        .messages
        .iter()
        .flat_map(|message| update_with_message(model, message))
        .collect()
}

fn update_with_message(model: &mut Model, message: &Message) -> Vec<Action> {
    match message {
        Message::Keymap(msg) => update_with_keymap_message(model, msg),
        Message::Resize(x, y) => vec![Action::Resize(*x, *y)],
    }
}

#[tracing::instrument(skip(model))]
fn update_with_keymap_message(model: &mut Model, message: &KeymapMessage) -> Vec<Action> {
    match message {
        KeymapMessage::CancelPrompt => rent::cancel(model),
        KeymapMessage::ConfirmSelection => selection::confirm(model),
        KeymapMessage::DismissDialog => dialog::dismiss(model),
        KeymapMessage::LeaveSelection => selection::leave(model),
        KeymapMessage::Modification(modification) => {
            prompt::modify(model, modification);
            Vec::new()
        }
        KeymapMessage::MoveCursor(direction) => move_cursor(model, direction),
        KeymapMessage::OpenReturnSelection => selection::open(model),
        KeymapMessage::Print(content) => {
            commandline::print(model, content);
            Vec::new()
        }
        KeymapMessage::Quit => vec![Action::Quit],
        KeymapMessage::Rent(item) => rent::start(model, *item),
        KeymapMessage::ReturnByType(item) => returns::by_type(model, *item),
        KeymapMessage::ShowHistory => {
            let content = model.tracker.history_summary();
            dialog::show(model, vec![Dialog::info("Rental History", content)])
        }
        KeymapMessage::ShowWaitingList => {
            let content = model.tracker.waiting_list_summary();
            dialog::show(model, vec![Dialog::info("Waiting List", content)])
        }
        KeymapMessage::SubmitPrompt => rent::submit(model),
    }
}

fn move_cursor(model: &mut Model, direction: &CursorDirection) -> Vec<Action> {
    match model.mode {
        Mode::Message => dialog::scroll(model, direction),
        Mode::Select => selection::move_cursor(model, direction),
        Mode::Normal | Mode::Prompt => {}
    }
    Vec::new()
}

/// The mode to fall back to once no dialog is shown.
fn base_mode(model: &Model) -> Mode {
    if model.prompt.is_some() {
        Mode::Prompt
    } else if model.selection.open {
        Mode::Select
    } else {
        Mode::Normal
    }
}

fn change_mode(model: &mut Model, to: Mode) -> Vec<Action> {
    if model.mode == to {
        return Vec::new();
    }

    tracing::debug!("changing mode from {} to {}", model.mode, to);

    model.mode = to.clone();
    vec![Action::ModeChanged(to)]
}
