//! Item business logic

use crate::core::models::{Item, ItemId, NewItem};
use crate::core::processing::BulkProcessor;
use crate::storage::ItemStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// CRUD operations and bulk processing over the item store
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    processor: BulkProcessor,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>, processor: BulkProcessor) -> Self {
        Self { store, processor }
    }

    pub async fn find_all(&self) -> Result<Vec<Item>> {
        self.store.find_all().await
    }

    pub async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        self.store.find_by_id(id).await
    }

    pub async fn create(&self, item: NewItem) -> Result<Item> {
        let created = self.store.create(item).await?;
        info!("Created item {}", created.id);
        Ok(created)
    }

    /// Replace the fields of an existing item; `None` if it does not exist
    pub async fn update(&self, id: ItemId, fields: NewItem) -> Result<Option<Item>> {
        let Some(existing) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        match self.store.save(existing.apply(fields)).await {
            Ok(saved) => {
                debug!("Updated item {}", id);
                Ok(Some(saved))
            }
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Delete an item, reporting whether it existed
    pub async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        let deleted = self.store.delete_by_id(id).await?;
        if deleted {
            info!("Deleted item {}", id);
        }
        Ok(deleted)
    }

    /// Mark every item processed and return the ones that succeeded
    pub async fn process_all(&self) -> Result<Vec<Item>> {
        info!("Starting bulk processing");
        self.processor.process_all().await
    }

    pub fn store(&self) -> &Arc<dyn ItemStore> {
        &self.store
    }
}
