//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::processing::{BulkProcessor, WorkerPool};
use crate::services::ItemService;
use crate::storage::{self, ItemStore};
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for sharing across actix workers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Item business logic
    pub items: Arc<ItemService>,
    /// Worker pool owned by the server, shut down when it stops
    pub pool: Arc<WorkerPool>,
}

impl AppState {
    /// Open the configured store and start the processing pool
    pub async fn build(config: Config) -> Result<Self> {
        let store = storage::open_store(config.storage()).await?;
        Ok(Self::with_store(config, store))
    }

    /// Wire the service around an existing store
    pub fn with_store(config: Config, store: Arc<dyn ItemStore>) -> Self {
        let processing = config.processing();
        let pool = Arc::new(WorkerPool::new(processing.pool_size));
        let processor = BulkProcessor::new(Arc::clone(&store), Arc::clone(&pool))
            .with_item_timeout(processing.item_timeout());

        Self {
            config: Arc::new(config),
            items: Arc::new(ItemService::new(store, processor)),
            pool,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
