//! Item store capability

use crate::core::models::{Item, ItemId, NewItem};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence operations over items.
///
/// `save` only updates an item that already exists; a row deleted since it
/// was read yields a not-found error instead of being recreated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Identifiers of every stored item
    async fn list_all_ids(&self) -> Result<Vec<ItemId>>;

    /// Look up one item; a missing id is `Ok(None)`
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// Persist every field of an existing item and return the stored state
    async fn save(&self, item: Item) -> Result<Item>;

    async fn find_all(&self) -> Result<Vec<Item>>;

    /// Insert a new item and return it with its assigned id
    async fn create(&self, item: NewItem) -> Result<Item>;

    /// Remove an item, reporting whether it existed
    async fn delete_by_id(&self, id: ItemId) -> Result<bool>;

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    /// Short backend name for health reporting
    fn backend_name(&self) -> &'static str;
}
