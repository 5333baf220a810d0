//! In-memory implementation of the `ItemRepository` trait.

use async_trait::async_trait;
use indexmap::IndexMap;
use indexmap::map::Entry;
use tokio::sync::RwLock;

use itemstore_core::{Item, ItemId, ItemRepository, RepositoryError};

/// In-memory implementation of the `ItemRepository` trait.
///
/// Items live in an `IndexMap` keyed by id, which keeps insertion order for
/// listing and gives constant-time lookups. Each operation holds the lock for
/// its whole check-and-mutate step.
#[derive(Default)]
pub struct MemoryItemRepository {
    items: RwLock<IndexMap<ItemId, Item>>,
}

impl MemoryItemRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryItemRepository {
    /// Create a repository preloaded with `items`, in order.
    ///
    /// Later duplicates of an id are dropped.
    fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut map = IndexMap::new();
        for item in items {
            map.entry(item.id()).or_insert(item);
        }
        Self {
            items: RwLock::new(map),
        }
    }

    async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError> {
        self.items
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn insert(&self, item: &Item) -> Result<Item, RepositoryError> {
        let mut items = self.items.write().await;
        match items.entry(item.id()) {
            Entry::Occupied(_) => Err(RepositoryError::AlreadyExists(item.id())),
            Entry::Vacant(slot) => Ok(slot.insert(item.clone()).clone()),
        }
    }

    async fn replace(&self, item: &Item) -> Result<Item, RepositoryError> {
        let mut items = self.items.write().await;
        let stored = items
            .get_mut(&item.id())
            .ok_or(RepositoryError::NotFound(item.id()))?;
        *stored = item.clone();
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> Result<(), RepositoryError> {
        // shift_remove keeps the relative order of the remaining items
        self.items
            .write()
            .await
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn reset(&self, items: Vec<Item>) -> Result<usize, RepositoryError> {
        let mut fresh = IndexMap::with_capacity(items.len());
        for item in items {
            match fresh.entry(item.id()) {
                Entry::Occupied(_) => return Err(RepositoryError::AlreadyExists(item.id())),
                Entry::Vacant(slot) => {
                    slot.insert(item);
                }
            }
        }

        let total = fresh.len();
        *self.items.write().await = fresh;
        tracing::debug!(total, "Replaced item collection");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemstore_core::seed_items;
    use std::sync::Arc;

    fn item(id: ItemId, name: &str, price: f64) -> Item {
        Item::new(id, name, price).unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let repo = MemoryItemRepository::new();
        let pan = item(1, "Pan", 2.5);

        assert_eq!(repo.insert(&pan).await.unwrap(), pan);
        assert_eq!(repo.get_by_id(1).await.unwrap(), pan);
    }

    #[tokio::test]
    async fn test_duplicate_insert_leaves_collection_unchanged() {
        let repo = MemoryItemRepository::new();
        repo.insert(&item(1, "Pan", 2.5)).await.unwrap();

        let err = repo.insert(&item(1, "Otro", 9.0)).await.unwrap_err();
        assert_eq!(err, RepositoryError::AlreadyExists(1));
        assert_eq!(repo.list().await.unwrap(), vec![item(1, "Pan", 2.5)]);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = MemoryItemRepository::new();

        assert_eq!(
            repo.get_by_id(5).await.unwrap_err(),
            RepositoryError::NotFound(5)
        );
        assert_eq!(
            repo.replace(&item(5, "Pan", 1.0)).await.unwrap_err(),
            RepositoryError::NotFound(5)
        );
        assert_eq!(
            repo.delete(5).await.unwrap_err(),
            RepositoryError::NotFound(5)
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = MemoryItemRepository::new();
        for id in [3, 1, 2] {
            repo.insert(&item(id, "x", 1.0)).await.unwrap();
        }

        let ids: Vec<_> = repo.list().await.unwrap().iter().map(Item::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let repo = MemoryItemRepository::with_items(seed_items().unwrap());

        let updated = item(2, "Leche deslactosada", 8.5);
        assert_eq!(repo.replace(&updated).await.unwrap(), updated);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[1], updated);
        assert_eq!(listed.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let repo = MemoryItemRepository::with_items(seed_items().unwrap());

        repo.delete(2).await.unwrap();
        assert_eq!(
            repo.get_by_id(2).await.unwrap_err(),
            RepositoryError::NotFound(2)
        );

        let ids: Vec<_> = repo.list().await.unwrap().iter().map(Item::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_reset_replaces_everything() {
        let repo = MemoryItemRepository::new();
        repo.insert(&item(42, "Queso", 30.0)).await.unwrap();

        let total = repo.reset(seed_items().unwrap()).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(repo.list().await.unwrap(), seed_items().unwrap());
    }

    #[tokio::test]
    async fn test_reset_rejects_duplicate_ids() {
        let repo = MemoryItemRepository::with_items(vec![item(9, "Sal", 1.0)]);

        let err = repo
            .reset(vec![item(1, "Pan", 2.5), item(1, "Pan", 3.0)])
            .await
            .unwrap_err();
        assert_eq!(err, RepositoryError::AlreadyExists(1));
        assert_eq!(repo.list().await.unwrap(), vec![item(9, "Sal", 1.0)]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_of_same_id_admit_one() {
        let repo = Arc::new(MemoryItemRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|n| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.insert(&item(1, "Pan", f64::from(n))).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        assert_eq!(repo.len().await, 1);
    }
}
