use std::{fmt::Display, str::FromStr};

use crate::TrackerError;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ItemType {
    Ps3,
    Ps4,
    Ps5,
    PsVr,
}

impl ItemType {
    /// All item types in display order.
    pub const ALL: [ItemType; 4] = [ItemType::Ps3, ItemType::Ps4, ItemType::Ps5, ItemType::PsVr];

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Ps3 => "PS3",
            ItemType::Ps4 => "PS4",
            ItemType::Ps5 => "PS5",
            ItemType::PsVr => "PS VR",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            ItemType::Ps3 => 0,
            ItemType::Ps4 => 1,
            ItemType::Ps5 => 2,
            ItemType::PsVr => 3,
        }
    }
}

impl Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ItemType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_ascii_uppercase();

        match normalized.as_str() {
            "PS3" => Ok(ItemType::Ps3),
            "PS4" => Ok(ItemType::Ps4),
            "PS5" => Ok(ItemType::Ps5),
            "PSVR" => Ok(ItemType::PsVr),
            _ => Err(TrackerError::UnknownItem(s.to_string())),
        }
    }
}
