//! In-memory store for the demo `items` resource.

use std::collections::BTreeMap;
use std::sync::Arc;

use recipe_box_core::{Item, ItemId, ItemName};
use tokio::sync::RwLock;

use super::RepositoryError;

/// Shared handle to the item collection. Clones share the same items.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<BTreeMap<ItemId, Item>>>,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. IDs start at 1 and follow the last assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::IdsExhausted` once the last ID is `i32::MAX`.
    pub async fn create(&self, name: ItemName) -> Result<Item, RepositoryError> {
        let mut items = self.inner.write().await;
        let next = match items.keys().next_back() {
            Some(last) => last
                .as_i32()
                .checked_add(1)
                .ok_or(RepositoryError::IdsExhausted)?,
            None => 1,
        };
        let item = Item {
            id: ItemId::new(next),
            name,
        };
        items.insert(item.id, item.clone());
        Ok(item)
    }

    /// Look up an item by ID.
    pub async fn get(&self, id: ItemId) -> Option<Item> {
        self.inner.read().await.get(&id).cloned()
    }
}
