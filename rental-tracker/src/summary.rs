use crate::RentalTracker;

impl RentalTracker {
    pub fn inventory_summary(&self) -> String {
        let mut summary = String::from("Current Inventory:\n");
        for (item, count) in &self.inventory {
            summary.push_str(&format!("{}: {} available\n", item, count));
        }
        summary
    }

    pub fn waiting_list_summary(&self) -> String {
        if self.waiting.is_empty() {
            return "No customers waiting".to_string();
        }

        let mut summary = String::from("Waiting List:\n");
        for entry in self.waiting.iter() {
            summary.push_str(&format!("{} - {}\n", entry.customer, entry.item));
        }
        summary
    }

    /// Newest record first.
    pub fn history_summary(&self) -> String {
        if self.records.is_empty() {
            return "No rental history".to_string();
        }

        let mut summary = String::from("Rental History:\n");
        for record in self.records.iter().rev() {
            summary.push_str(&format!(
                "{} - {} on {} - {}\n",
                record.item,
                record.customer,
                record.rented_at_string(),
                record.status()
            ));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use crate::{ItemType, RentalTracker};

    #[test]
    fn inventory_in_enumeration_order() {
        let tracker = RentalTracker::default();

        assert_eq!(
            "Current Inventory:\nPS3: 2 available\nPS4: 3 available\nPS5: 2 available\nPS VR: 2 available\n",
            tracker.inventory_summary()
        );
    }

    #[test]
    fn empty_views() {
        let tracker = RentalTracker::default();

        assert_eq!("No customers waiting", tracker.waiting_list_summary());
        assert_eq!("No rental history", tracker.history_summary());
    }

    #[test]
    fn waiting_list_lists_customer_then_item() {
        let mut tracker = RentalTracker::default();
        for customer in ["Alice", "Bob", "Carol"] {
            let _ = tracker.rent(ItemType::Ps5, Some(customer));
        }

        assert_eq!("Waiting List:\nCarol - PS5\n", tracker.waiting_list_summary());
        assert_eq!(1, tracker.waiting_list().len());
    }

    #[test]
    fn history_newest_first_with_status() {
        let mut tracker = RentalTracker::default();
        let _ = tracker.rent(ItemType::Ps3, Some("Alice"));
        let _ = tracker.rent(ItemType::PsVr, Some("Bob"));
        let _ = tracker.return_specific(ItemType::Ps3, "Alice");

        let summary = tracker.history_summary();
        let lines: Vec<_> = summary.lines().collect();

        assert_eq!(3, lines.len());
        assert_eq!("Rental History:", lines[0]);
        assert!(lines[1].starts_with("PS VR - Bob on "));
        assert!(lines[1].ends_with(" - Active"));
        assert!(lines[2].starts_with("PS3 - Alice on "));
        assert!(lines[2].ends_with(" - Returned"));
    }
}
