use std::collections::BTreeMap;

use crate::{ItemType, TrackerError};

/// Starting count per item type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stock {
    counts: BTreeMap<ItemType, u32>,
}

impl Default for Stock {
    fn default() -> Self {
        Self {
            counts: BTreeMap::from([
                (ItemType::Ps3, 2),
                (ItemType::Ps4, 3),
                (ItemType::Ps5, 2),
                (ItemType::PsVr, 2),
            ]),
        }
    }
}

impl Stock {
    pub fn get(&self, item: ItemType) -> u32 {
        self.counts.get(&item).copied().unwrap_or_default()
    }

    pub fn set(&mut self, item: ItemType, count: u32) {
        self.counts.insert(item, count);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemType, u32)> + '_ {
        ItemType::ALL.into_iter().map(|item| (item, self.get(item)))
    }

    /// Parses an override in the form `ITEM=COUNT`, e.g. `PS VR=1`.
    pub fn parse_override(value: &str) -> Result<(ItemType, u32), TrackerError> {
        let (item, count) = match value.rsplit_once('=') {
            Some(it) => it,
            None => return Err(TrackerError::InvalidStock(value.to_string())),
        };

        let item = item.parse::<ItemType>()?;
        let count = match count.trim().parse::<u32>() {
            Ok(it) => it,
            Err(_) => return Err(TrackerError::InvalidStock(value.to_string())),
        };

        Ok((item, count))
    }
}
