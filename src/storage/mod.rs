//! Storage layer for the item service
//!
//! This module provides the item store capability and its backends.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;
mod store;

pub use database::SeaOrmDatabase;
pub use memory::InMemoryItemStore;
pub use store::ItemStore;
#[cfg(test)]
pub use store::MockItemStore;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Open the item store selected by the storage configuration
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn ItemStore>> {
    if !config.database.enabled {
        info!("Database disabled, using in-memory item store");
        return Ok(Arc::new(InMemoryItemStore::new()));
    }

    debug!("Connecting to database");
    let database = SeaOrmDatabase::new(&config.database).await?;
    database.migrate().await?;
    Ok(Arc::new(database))
}
