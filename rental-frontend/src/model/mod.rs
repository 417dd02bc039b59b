use std::collections::VecDeque;

use rental_keymap::message::{Mode, PrintContent};
use rental_tracker::{PendingRental, RentalTracker};

use crate::settings::Settings;

use self::dialog::Dialog;

pub mod dialog;

#[derive(Debug, Default)]
pub struct Model {
    pub commandline: CommandLine,
    pub dialogs: VecDeque<Dialog>,
    pub key_sequence: String,
    pub mode: Mode,
    pub prompt: Option<Prompt>,
    pub selection: Selection,
    pub tracker: RentalTracker,
}

impl Model {
    pub fn new(settings: &Settings) -> Self {
        Self {
            tracker: RentalTracker::new(settings.stock.clone(), settings.return_policy),
            ..Default::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct CommandLine {
    pub content: Vec<PrintContent>,
}

/// Name input for a rent action. Holds the pending rental until submit or
/// cancel decides it.
#[derive(Debug)]
pub struct Prompt {
    pub input: String,
    pub label: String,
    pub pending: PendingRental,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct Selection {
    pub index: Option<usize>,
    pub open: bool,
}
