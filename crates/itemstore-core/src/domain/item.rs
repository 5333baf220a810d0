//! Item domain types and validation.
//!
//! `NewItem` is the unchecked shape received from callers. `Item` is the
//! validated record the repository stores; the only ways to obtain one run
//! [`validate_item`].

use serde::{Deserialize, Serialize};

/// Unique key of an item. Caller-supplied, always >= 1 once validated.
pub type ItemId = i64;

/// Item validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("id must be an integer >= 1, got {0}")]
    InvalidId(i64),

    #[error("name must not be empty")]
    EmptyName,

    #[error("price must be a number >= 0, got {0}")]
    InvalidPrice(f64),
}

/// Unvalidated item payload, as received from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl NewItem {
    /// Create a payload from raw field values.
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Validate the payload, producing a storable [`Item`].
    pub fn validate(self) -> Result<Item, ValidationError> {
        validate_item(&self)?;
        Ok(Item {
            id: self.id,
            name: self.name,
            price: self.price,
        })
    }
}

/// A validated item record.
///
/// Deserializing an `Item` goes through [`NewItem::validate`], so a payload
/// that violates a field constraint fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewItem")]
pub struct Item {
    id: ItemId,
    name: String,
    price: f64,
}

impl Item {
    /// Create a validated item.
    pub fn new(id: ItemId, name: impl Into<String>, price: f64) -> Result<Self, ValidationError> {
        NewItem::new(id, name, price).validate()
    }

    pub const fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn price(&self) -> f64 {
        self.price
    }
}

impl TryFrom<NewItem> for Item {
    type Error = ValidationError;

    fn try_from(value: NewItem) -> Result<Self, Self::Error> {
        value.validate()
    }
}

/// Check that an id is usable as a key.
pub fn validate_id(id: i64) -> Result<ItemId, ValidationError> {
    if id < 1 {
        return Err(ValidationError::InvalidId(id));
    }
    Ok(id)
}

/// Validate every field of an item payload.
///
/// Fields are checked in declaration order and the first violation wins.
pub fn validate_item(item: &NewItem) -> Result<(), ValidationError> {
    validate_id(item.id)?;

    if item.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if !item.price.is_finite() || item.price < 0.0 {
        return Err(ValidationError::InvalidPrice(item.price));
    }

    Ok(())
}
