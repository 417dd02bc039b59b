use thiserror::Error;

pub mod item;
pub mod record;
pub mod stock;
mod summary;
pub mod tracker;
pub mod waiting;

pub use item::ItemType;
pub use record::{RentalRecord, RentalStatus};
pub use stock::Stock;
pub use tracker::{PendingRental, RentOutcome, RentalTracker, ReturnOutcome, ReturnPolicy};
pub use waiting::{WaitingEntry, WaitingList};

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TrackerError {
    #[error("Stock override is invalid: {0}")]
    InvalidStock(String),
    #[error("No active {item} rental found for {customer}")]
    NoActiveRental { item: ItemType, customer: String },
    #[error("All {0} units are in stock or rented out")]
    StockExhausted(ItemType),
    #[error("Unknown item type: {0}")]
    UnknownItem(String),
}
