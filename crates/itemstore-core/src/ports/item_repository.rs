//! Item repository trait definition.
//!
//! This port defines the interface for item storage operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Item, ItemId};

/// Repository for item storage operations.
///
/// Implementations own the collection exclusively and hand out clones.
/// Every method must run its existence check and its mutation atomically
/// with respect to every other method.
///
/// # Design Rules
///
/// - CRUD-only: list, get, insert, replace, delete, reset
/// - Listing order is insertion order; `replace` keeps the position
/// - The id-mismatch rule belongs in `ItemService`, not here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items in insertion order.
    async fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Get an item by its id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the item doesn't exist.
    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError>;

    /// Append a new item.
    ///
    /// Returns `Err(RepositoryError::AlreadyExists)` if an item with the same
    /// id is already stored; the collection is left untouched in that case.
    async fn insert(&self, item: &Item) -> Result<Item, RepositoryError>;

    /// Replace the item stored under `item.id()` with `item`.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the item doesn't exist.
    async fn replace(&self, item: &Item) -> Result<Item, RepositoryError>;

    /// Delete an item by its id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the item doesn't exist.
    async fn delete(&self, id: ItemId) -> Result<(), RepositoryError>;

    /// Drop every stored item and store `items` in their given order.
    ///
    /// Returns the number of items stored. Returns
    /// `Err(RepositoryError::AlreadyExists)` without touching the collection
    /// if `items` repeats an id.
    async fn reset(&self, items: Vec<Item>) -> Result<usize, RepositoryError>;
}
