#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::fixtures::{SEED_DATA, seed_items};
pub use domain::{Item, ItemId, NewItem, ValidationError, validate_id, validate_item};
pub use ports::{CoreError, ItemRepository, Repos, RepositoryError};
pub use services::{AppCore, ItemService};

// Used through the `automock` attribute on the repository port
#[cfg(test)]
use mockall as _;
