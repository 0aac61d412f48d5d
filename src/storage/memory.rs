//! In-memory item store used when the database is disabled

use crate::core::models::{Item, ItemId, NewItem};
use crate::storage::ItemStore;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Inner {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

/// Item store backed by an ordered map
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_all_ids(&self) -> Result<Vec<ItemId>> {
        Ok(self.inner.read().items.keys().copied().collect())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.inner.read().items.get(&id).cloned())
    }

    async fn save(&self, item: Item) -> Result<Item> {
        let mut inner = self.inner.write();
        match inner.items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(item)
            }
            None => Err(ServiceError::not_found(format!("Item {} not found", item.id))),
        }
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        Ok(self.inner.read().items.values().cloned().collect())
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let created = Item {
            id: inner.next_id,
            name: item.name,
            description: item.description,
            status: item.status,
            email: item.email,
        };
        inner.items.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        Ok(self.inner.write().items.remove(&id).is_some())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
