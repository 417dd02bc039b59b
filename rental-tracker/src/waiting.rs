use std::collections::{vec_deque::Iter, VecDeque};

use crate::ItemType;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WaitingEntry {
    pub item: ItemType,
    pub customer: String,
}

/// Single queue shared by all item types.
#[derive(Clone, Debug, Default)]
pub struct WaitingList {
    entries: VecDeque<WaitingEntry>,
}

impl WaitingList {
    pub fn push(&mut self, item: ItemType, customer: &str) -> WaitingEntry {
        let entry = WaitingEntry {
            item,
            customer: customer.to_string(),
        };
        self.entries.push_back(entry.clone());
        entry
    }

    pub fn pop(&mut self) -> Option<WaitingEntry> {
        self.entries.pop_front()
    }

    pub fn iter(&self) -> Iter<'_, WaitingEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_insertion_order_across_types() {
        let mut list = WaitingList::default();
        list.push(ItemType::Ps5, "Carol");
        list.push(ItemType::Ps3, "Dave");
        list.push(ItemType::Ps5, "Erin");

        let customers: Vec<_> = std::iter::from_fn(|| list.pop())
            .map(|entry| entry.customer)
            .collect();

        assert_eq!(vec!["Carol", "Dave", "Erin"], customers);
        assert!(list.is_empty());
    }

    #[test]
    fn iter_does_not_consume() {
        let mut list = WaitingList::default();
        list.push(ItemType::PsVr, "Carol");

        assert_eq!(1, list.iter().count());
        assert_eq!(1, list.len());
    }
}
