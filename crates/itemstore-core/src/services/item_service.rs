//! Item service - orchestrates item CRUD operations.

use crate::domain::fixtures::seed_items;
use crate::domain::{Item, ItemId, validate_id};
use crate::ports::{CoreError, ItemRepository};
use std::sync::Arc;

/// Service for item operations.
///
/// Delegates storage to the injected `ItemRepository` and adds the rules
/// that are not storage concerns: id validation on lookups and the
/// path/body id agreement on replacement.
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    /// Create a new item service with the given repository.
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    /// Store a new item. Fails if its id is taken.
    pub async fn create(&self, item: Item) -> Result<Item, CoreError> {
        let created = self.repo.insert(&item).await?;
        tracing::info!(id = created.id(), name = created.name(), "Item created");
        Ok(created)
    }

    /// List all items in insertion order.
    pub async fn list(&self) -> Result<Vec<Item>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get an item by id.
    pub async fn get(&self, id: ItemId) -> Result<Item, CoreError> {
        let id = validate_id(id)?;
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Replace the item at `id` with `item`.
    ///
    /// The id-mismatch check runs before any lookup, so a mismatched
    /// request never touches the repository.
    pub async fn replace(&self, id: ItemId, item: Item) -> Result<Item, CoreError> {
        let id = validate_id(id)?;
        if item.id() != id {
            tracing::warn!(path_id = id, body_id = item.id(), "Rejected item replacement");
            return Err(CoreError::IdMismatch {
                path_id: id,
                body_id: item.id(),
            });
        }

        let replaced = self.repo.replace(&item).await?;
        tracing::info!(id, "Item replaced");
        Ok(replaced)
    }

    /// Delete an item by id.
    pub async fn delete(&self, id: ItemId) -> Result<(), CoreError> {
        let id = validate_id(id)?;
        self.repo.delete(id).await?;
        tracing::info!(id, "Item deleted");
        Ok(())
    }

    /// Clear the collection and load the reference items.
    ///
    /// Returns the number of items loaded.
    pub async fn seed(&self) -> Result<usize, CoreError> {
        let total = self.repo.reset(seed_items()?).await?;
        tracing::info!(total, "Item store seeded");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::ports::{MockItemRepository, RepositoryError};

    fn pan(price: f64) -> Item {
        Item::new(1, "Pan", price).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_stored_item() {
        let mut repo = MockItemRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|item| Ok(item.clone()));
        let service = ItemService::new(Arc::new(repo));

        let created = service.create(pan(2.5)).await.unwrap();
        assert_eq!(created, pan(2.5));
    }

    #[tokio::test]
    async fn test_create_propagates_conflict() {
        let mut repo = MockItemRepository::new();
        repo.expect_insert()
            .returning(|item| Err(RepositoryError::AlreadyExists(item.id())));
        let service = ItemService::new(Arc::new(repo));

        let err = service.create(pan(2.5)).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::AlreadyExists(1))
        ));
    }

    #[tokio::test]
    async fn test_replace_id_mismatch_never_reaches_repository() {
        let mut repo = MockItemRepository::new();
        repo.expect_replace().never();
        repo.expect_get_by_id().never();
        let service = ItemService::new(Arc::new(repo));

        let other = Item::new(2, "Pan", 3.0).unwrap();
        let err = service.replace(1, other).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::IdMismatch {
                path_id: 1,
                body_id: 2
            }
        ));
    }

    #[tokio::test]
    async fn test_replace_delegates_when_ids_agree() {
        let mut repo = MockItemRepository::new();
        repo.expect_replace()
            .times(1)
            .returning(|item| Ok(item.clone()));
        let service = ItemService::new(Arc::new(repo));

        let replaced = service.replace(1, pan(3.0)).await.unwrap();
        assert_eq!(replaced, pan(3.0));
    }

    #[tokio::test]
    async fn test_lookups_reject_invalid_ids() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().never();
        repo.expect_delete().never();
        repo.expect_replace().never();
        let service = ItemService::new(Arc::new(repo));

        assert!(matches!(
            service.get(0).await,
            Err(CoreError::Validation(ValidationError::InvalidId(0)))
        ));
        assert!(matches!(
            service.delete(-1).await,
            Err(CoreError::Validation(ValidationError::InvalidId(-1)))
        ));
        assert!(matches!(
            service.replace(0, pan(1.0)).await,
            Err(CoreError::Validation(ValidationError::InvalidId(0)))
        ));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .returning(|id| Err(RepositoryError::NotFound(id)));
        let service = ItemService::new(Arc::new(repo));

        assert!(matches!(
            service.get(9).await,
            Err(CoreError::Repository(RepositoryError::NotFound(9)))
        ));
    }

    #[tokio::test]
    async fn test_seed_resets_with_reference_items() {
        let mut repo = MockItemRepository::new();
        repo.expect_reset()
            .times(1)
            .withf(|items| items == &seed_items().unwrap())
            .returning(|items| Ok(items.len()));
        let service = ItemService::new(Arc::new(repo));

        assert_eq!(service.seed().await.unwrap(), 3);
    }
}
