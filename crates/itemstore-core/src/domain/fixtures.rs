//! Reference data loaded by the seed operation.

use super::{Item, ValidationError};

/// Reference records as `(id, name, price)`, in insertion order.
pub const SEED_DATA: [(i64, &str, f64); 3] = [
    (1, "Pan", 2.5),
    (2, "Leche", 7.0),
    (3, "Huevos", 12.0),
];

/// Build the reference item set.
///
/// Fails on the first record that does not validate.
pub fn seed_items() -> Result<Vec<Item>, ValidationError> {
    build_items(&SEED_DATA)
}

fn build_items(records: &[(i64, &str, f64)]) -> Result<Vec<Item>, ValidationError> {
    records
        .iter()
        .map(|&(id, name, price)| Item::new(id, name, price))
        .collect()
}
