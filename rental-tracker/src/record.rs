use std::fmt::Display;

use chrono::{DateTime, Local};

use crate::ItemType;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalRecord {
    pub item: ItemType,
    pub customer: String,
    pub rented_at: DateTime<Local>,
    pub returned: bool,
}

impl RentalRecord {
    pub fn new(item: ItemType, customer: &str) -> Self {
        Self {
            item,
            customer: customer.to_string(),
            rented_at: Local::now(),
            returned: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.returned
    }

    pub fn status(&self) -> RentalStatus {
        if self.returned {
            RentalStatus::Returned
        } else {
            RentalStatus::Active
        }
    }

    pub fn matches(&self, item: ItemType, customer: &str) -> bool {
        self.is_active() && self.item == item && self.customer == customer
    }

    pub fn rented_at_string(&self) -> String {
        self.rented_at.format(DATE_FORMAT).to_string()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RentalStatus {
    Active,
    Returned,
}

impl Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RentalStatus::Active => write!(f, "Active"),
            RentalStatus::Returned => write!(f, "Returned"),
        }
    }
}
