//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod item_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::{ItemId, ValidationError};

pub use item_repository::ItemRepository;

#[cfg(test)]
pub use item_repository::MockItemRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in
/// `itemstore-core` so that `AppCore` can accept it without depending on
/// `itemstore-db`.
#[derive(Clone)]
pub struct Repos {
    /// Item repository for CRUD operations on items.
    pub items: Arc<dyn ItemRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}

/// Domain-specific errors for repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No item is stored under the id.
    #[error("Item {0} not found")]
    NotFound(ItemId),

    /// An item with the same id is already stored.
    #[error("Item {0} already exists")]
    AlreadyExists(ItemId),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Input failed a field constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The id in a replacement payload differs from the target id.
    #[error("Path id {path_id} does not match body id {body_id}")]
    IdMismatch { path_id: ItemId, body_id: ItemId },
}
