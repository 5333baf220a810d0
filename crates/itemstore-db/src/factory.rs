//! Composition utilities for building `AppCore` with in-memory backends.
//!
//! This module provides factory functions for wiring up the application.
//! It is focused purely on construction and should not contain any domain
//! logic.

use std::sync::Arc;

use itemstore_core::{AppCore, Repos};

use crate::repositories::MemoryItemRepository;

/// Factory for creating repository instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Build all repositories, each starting empty.
    ///
    /// Returns a `Repos` struct from `itemstore-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos() -> Repos {
        Repos::new(Arc::new(MemoryItemRepository::new()))
    }

    /// Build a complete `AppCore` instance over fresh repositories.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = StoreFactory::build_repos();
    /// let core = AppCore::new(repos);
    /// ```
    pub fn build_app_core() -> AppCore {
        AppCore::new(Self::build_repos())
    }
}
