use rental_tracker::{ReturnPolicy, Stock};

#[derive(Debug, Default)]
pub struct Settings {
    pub return_policy: ReturnPolicy,
    pub stock: Stock,
}
