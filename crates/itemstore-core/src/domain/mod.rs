//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (storage, HTTP, etc.).

pub mod fixtures;
mod item;

pub use item::{Item, ItemId, NewItem, ValidationError, validate_id, validate_item};
