use rental_keymap::message::Mode;
use rental_tracker::{ItemType, PendingRental, RentOutcome};

use crate::{
    action::Action,
    model::{dialog::Dialog, Model, Prompt},
};

use super::{base_mode, change_mode, dialog};

pub fn start(model: &mut Model, item: ItemType) -> Vec<Action> {
    if model.mode != Mode::Normal || model.prompt.is_some() {
        tracing::warn!("rent of {} skipped in mode {}", item, model.mode);
        return Vec::new();
    }

    let pending = model.tracker.begin_rent(item);
    let (title, label) = match pending {
        PendingRental::Reserved(_) => ("Rent Console", format!("Enter name for {} rental:", item)),
        PendingRental::Waitlist(_) => (
            "Waiting List",
            format!("No {} available. Enter your name:", item),
        ),
    };

    model.prompt = Some(Prompt {
        input: String::new(),
        label,
        pending,
        title: title.to_string(),
    });

    change_mode(model, Mode::Prompt)
}

pub fn submit(model: &mut Model) -> Vec<Action> {
    let prompt = match model.prompt.take() {
        Some(it) => it,
        None => return Vec::new(),
    };

    let outcome = model
        .tracker
        .complete_rent(prompt.pending, Some(prompt.input.as_str()));

    match outcome {
        RentOutcome::Abandoned(_) => {
            let mode = base_mode(model);
            change_mode(model, mode)
        }
        RentOutcome::Rented(record) => dialog::show(
            model,
            vec![Dialog::info(
                "Rental Successful",
                format!("{} rented to {}", record.item, record.customer),
            )],
        ),
        RentOutcome::Waitlisted(entry) => dialog::show(
            model,
            vec![Dialog::info(
                "Waiting List",
                format!("{} added to {} waiting list", entry.customer, entry.item),
            )],
        ),
    }
}

pub fn cancel(model: &mut Model) -> Vec<Action> {
    if let Some(prompt) = model.prompt.take() {
        let _ = model.tracker.complete_rent(prompt.pending, None);
    }

    let mode = base_mode(model);
    change_mode(model, mode)
}
