use std::collections::BTreeMap;

use crate::{ItemType, RentalRecord, Stock, TrackerError, WaitingEntry, WaitingList};

/// How returns without a matching rental record are bounded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReturnPolicy {
    /// Availability never rises above the starting count.
    #[default]
    Capped,
    /// Every return by type increments availability.
    Permissive,
}

/// A rent action waiting for the customer name.
///
/// `Reserved` already holds one unit of the item. It must be passed to
/// [`RentalTracker::complete_rent`] to either commit or release that unit.
#[derive(Debug, Eq, PartialEq)]
#[must_use]
pub enum PendingRental {
    Reserved(ItemType),
    Waitlist(ItemType),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RentOutcome {
    Abandoned(ItemType),
    Rented(RentalRecord),
    Waitlisted(WaitingEntry),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReturnOutcome {
    pub item: ItemType,
    pub customer: Option<String>,
    pub next_in_line: Option<WaitingEntry>,
}

#[derive(Debug)]
pub struct RentalTracker {
    pub(crate) inventory: BTreeMap<ItemType, u32>,
    policy: ReturnPolicy,
    pub(crate) records: Vec<RentalRecord>,
    reserved: BTreeMap<ItemType, u32>,
    stock: Stock,
    pub(crate) waiting: WaitingList,
}

impl Default for RentalTracker {
    fn default() -> Self {
        Self::new(Stock::default(), ReturnPolicy::default())
    }
}

impl RentalTracker {
    pub fn new(stock: Stock, policy: ReturnPolicy) -> Self {
        let inventory = stock.iter().collect();

        Self {
            inventory,
            policy,
            records: Vec::new(),
            reserved: BTreeMap::new(),
            stock,
            waiting: WaitingList::default(),
        }
    }

    pub fn available(&self, item: ItemType) -> u32 {
        self.inventory.get(&item).copied().unwrap_or_default()
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn return_policy(&self) -> ReturnPolicy {
        self.policy
    }

    /// All records in creation order.
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn active_records(&self) -> impl Iterator<Item = &RentalRecord> {
        self.records.iter().filter(|record| record.is_active())
    }

    pub fn waiting_list(&self) -> &WaitingList {
        &self.waiting
    }

    /// Units of `item` out of stock but accounted for, either by an active
    /// record or by a pending rental awaiting its name.
    pub fn in_use(&self, item: ItemType) -> u32 {
        let active = self
            .active_records()
            .filter(|record| record.item == item)
            .count();
        let reserved = self.reserved.get(&item).copied().unwrap_or_default();

        u32::try_from(active)
            .unwrap_or(u32::MAX)
            .saturating_add(reserved)
    }

    pub fn rent(&mut self, item: ItemType, customer: Option<&str>) -> RentOutcome {
        let pending = self.begin_rent(item);
        self.complete_rent(pending, customer)
    }

    #[tracing::instrument(skip(self))]
    pub fn begin_rent(&mut self, item: ItemType) -> PendingRental {
        let count = self.inventory.entry(item).or_default();
        if *count > 0 {
            *count -= 1;
            *self.reserved.entry(item).or_default() += 1;
            PendingRental::Reserved(item)
        } else {
            PendingRental::Waitlist(item)
        }
    }

    /// Commits a pending rental. An empty or missing name abandons it and
    /// releases a reserved unit.
    #[tracing::instrument(skip(self))]
    pub fn complete_rent(&mut self, pending: PendingRental, customer: Option<&str>) -> RentOutcome {
        let customer = customer.filter(|name| !name.is_empty());
        if let PendingRental::Reserved(item) = pending {
            let reserved = self.reserved.entry(item).or_default();
            *reserved = reserved.saturating_sub(1);
        }

        match (pending, customer) {
            (PendingRental::Reserved(item), Some(customer)) => {
                let record = RentalRecord::new(item, customer);
                self.records.push(record.clone());

                tracing::debug!("{} rented to {}", item, customer);
                RentOutcome::Rented(record)
            }
            (PendingRental::Reserved(item), None) => {
                self.increment(item);

                tracing::debug!("rental of {} abandoned", item);
                RentOutcome::Abandoned(item)
            }
            (PendingRental::Waitlist(item), Some(customer)) => {
                let entry = self.waiting.push(item, customer);

                tracing::debug!("{} added to {} waiting list", customer, item);
                RentOutcome::Waitlisted(entry)
            }
            (PendingRental::Waitlist(item), None) => RentOutcome::Abandoned(item),
        }
    }

    /// Puts one unit back without resolving a rental record. The head of the
    /// waiting list is dequeued whatever item it waits for.
    ///
    /// With [`ReturnPolicy::Capped`] the return is rejected once available and
    /// in use units already add up to the starting stock.
    #[tracing::instrument(skip(self))]
    pub fn return_by_type(&mut self, item: ItemType) -> Result<ReturnOutcome, TrackerError> {
        let accounted = self.available(item).saturating_add(self.in_use(item));
        if self.policy == ReturnPolicy::Capped && accounted >= self.stock.get(item) {
            tracing::warn!("rejected return of {}, every unit is accounted for", item);
            return Err(TrackerError::StockExhausted(item));
        }

        self.increment(item);

        Ok(ReturnOutcome {
            item,
            customer: None,
            next_in_line: self.waiting.pop(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub fn return_specific(
        &mut self,
        item: ItemType,
        customer: &str,
    ) -> Result<ReturnOutcome, TrackerError> {
        let record = match self
            .records
            .iter_mut()
            .find(|record| record.matches(item, customer))
        {
            Some(it) => it,
            None => {
                return Err(TrackerError::NoActiveRental {
                    item,
                    customer: customer.to_string(),
                })
            }
        };

        record.returned = true;
        self.increment(item);

        tracing::debug!("{} returned by {}", item, customer);

        Ok(ReturnOutcome {
            item,
            customer: Some(customer.to_string()),
            next_in_line: self.waiting.pop(),
        })
    }

    fn increment(&mut self, item: ItemType) {
        let count = self.inventory.entry(item).or_default();
        *count = count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_rent_reserves_unit() {
        let mut tracker = RentalTracker::default();
        let pending = tracker.begin_rent(ItemType::Ps5);

        assert_eq!(PendingRental::Reserved(ItemType::Ps5), pending);
        assert_eq!(1, tracker.available(ItemType::Ps5));

        let outcome = tracker.complete_rent(pending, None);
        assert_eq!(RentOutcome::Abandoned(ItemType::Ps5), outcome);
        assert_eq!(2, tracker.available(ItemType::Ps5));
    }

    #[test]
    fn begin_rent_on_empty_stock_heads_for_waitlist() {
        let mut stock = Stock::default();
        stock.set(ItemType::PsVr, 0);

        let mut tracker = RentalTracker::new(stock, ReturnPolicy::Capped);
        let pending = tracker.begin_rent(ItemType::PsVr);

        assert_eq!(PendingRental::Waitlist(ItemType::PsVr), pending);
        assert_eq!(0, tracker.available(ItemType::PsVr));

        let _ = tracker.complete_rent(pending, Some(""));
        assert!(tracker.waiting_list().is_empty());
    }

    #[test]
    fn capped_return_rejected_at_full_stock() {
        let mut tracker = RentalTracker::default();

        let result = tracker.return_by_type(ItemType::Ps4);

        assert_eq!(Err(TrackerError::StockExhausted(ItemType::Ps4)), result);
        assert_eq!(3, tracker.available(ItemType::Ps4));
    }

    #[test]
    fn capped_return_keeps_waiting_list_when_rejected() {
        let mut stock = Stock::default();
        stock.set(ItemType::Ps3, 0);

        let mut tracker = RentalTracker::new(stock, ReturnPolicy::Capped);
        let _ = tracker.rent(ItemType::Ps3, Some("Carol"));

        assert!(tracker.return_by_type(ItemType::Ps3).is_err());
        assert_eq!(1, tracker.waiting_list().len());
    }

    #[test]
    fn permissive_return_exceeds_stock() {
        let mut tracker = RentalTracker::new(Stock::default(), ReturnPolicy::Permissive);

        let outcome = tracker.return_by_type(ItemType::Ps4);

        assert!(outcome.is_ok());
        assert_eq!(4, tracker.available(ItemType::Ps4));
    }

    #[test]
    fn permissive_return_by_type_leaves_records_active() {
        let mut tracker = RentalTracker::new(Stock::default(), ReturnPolicy::Permissive);
        let _ = tracker.rent(ItemType::Ps3, Some("Alice"));

        let outcome = tracker.return_by_type(ItemType::Ps3);

        assert_eq!(
            Ok(ReturnOutcome {
                item: ItemType::Ps3,
                customer: None,
                next_in_line: None,
            }),
            outcome
        );
        assert_eq!(1, tracker.active_records().count());
        assert_eq!(2, tracker.available(ItemType::Ps3));
    }

    #[test]
    fn capped_return_counts_rented_units() {
        let mut tracker = RentalTracker::default();
        let _ = tracker.rent(ItemType::Ps3, Some("Alice"));

        let result = tracker.return_by_type(ItemType::Ps3);
        assert_eq!(Err(TrackerError::StockExhausted(ItemType::Ps3)), result);
        assert_eq!(1, tracker.available(ItemType::Ps3));

        assert!(tracker.return_specific(ItemType::Ps3, "Alice").is_ok());
        assert_eq!(2, tracker.available(ItemType::Ps3));
        assert_eq!(0, tracker.in_use(ItemType::Ps3));
    }

    #[test]
    fn capped_return_counts_pending_rentals() {
        let mut tracker = RentalTracker::default();
        let pending = tracker.begin_rent(ItemType::Ps5);
        assert_eq!(1, tracker.in_use(ItemType::Ps5));

        assert!(tracker.return_by_type(ItemType::Ps5).is_err());

        let _ = tracker.complete_rent(pending, None);
        assert_eq!(2, tracker.available(ItemType::Ps5));
        assert_eq!(0, tracker.in_use(ItemType::Ps5));
    }
}
