//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::Repos;

use super::ItemService;

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (bootstrap.rs) with concrete repository
/// implementations.
///
/// # Example
///
/// ```ignore
/// let repos = StoreFactory::build_repos();
/// let core = AppCore::new(repos);
///
/// let items = core.items().list().await?;
/// ```
pub struct AppCore {
    items: ItemService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            items: ItemService::new(repos.items),
        }
    }

    /// Access the item service.
    pub const fn items(&self) -> &ItemService {
        &self.items
    }
}
