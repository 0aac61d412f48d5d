//! Item store wrapper with injectable faults

use async_trait::async_trait;
use item_service::core::models::{Item, ItemId, NewItem};
use item_service::storage::ItemStore;
use item_service::utils::error::{Result, ServiceError};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Delegates to a real store, failing or delaying selected ids
pub struct FaultInjectingStore {
    inner: Arc<dyn ItemStore>,
    failing_writes: RwLock<HashSet<ItemId>>,
    hidden: RwLock<HashSet<ItemId>>,
    delays: RwLock<HashMap<ItemId, Duration>>,
    fail_listing: RwLock<bool>,
    saves_completed: AtomicUsize,
}

impl FaultInjectingStore {
    pub fn new(inner: Arc<dyn ItemStore>) -> Self {
        Self {
            inner,
            failing_writes: RwLock::new(HashSet::new()),
            hidden: RwLock::new(HashSet::new()),
            delays: RwLock::new(HashMap::new()),
            fail_listing: RwLock::new(false),
            saves_completed: AtomicUsize::new(0),
        }
    }

    /// Every save of `id` fails
    pub fn fail_writes_for(self, id: ItemId) -> Self {
        self.failing_writes.write().insert(id);
        self
    }

    /// Lookups of `id` find nothing
    pub fn hide(self, id: ItemId) -> Self {
        self.hidden.write().insert(id);
        self
    }

    /// Lookups of `id` take at least `delay`
    pub fn delay(self, id: ItemId, delay: Duration) -> Self {
        self.delays.write().insert(id, delay);
        self
    }

    pub fn fail_listing(self) -> Self {
        *self.fail_listing.write() = true;
        self
    }

    /// Number of saves that reached the inner store successfully
    pub fn saves_completed(&self) -> usize {
        self.saves_completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemStore for FaultInjectingStore {
    async fn list_all_ids(&self) -> Result<Vec<ItemId>> {
        if *self.fail_listing.read() {
            return Err(ServiceError::Database(sea_orm::DbErr::Custom(
                "connection refused".to_string(),
            )));
        }
        self.inner.list_all_ids().await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        let delay = self.delays.read().get(&id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.hidden.read().contains(&id) {
            return Ok(None);
        }
        self.inner.find_by_id(id).await
    }

    async fn save(&self, item: Item) -> Result<Item> {
        if self.failing_writes.read().contains(&item.id) {
            return Err(ServiceError::internal(format!(
                "write rejected for item {}",
                item.id
            )));
        }
        let saved = self.inner.save(item).await?;
        self.saves_completed.fetch_add(1, Ordering::SeqCst);
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        self.inner.find_all().await
    }

    async fn create(&self, item: NewItem) -> Result<Item> {
        self.inner.create(item).await
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool> {
        self.inner.delete_by_id(id).await
    }

    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }
}
