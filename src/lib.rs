//! # item-service
//!
//! CRUD service over a single "item" resource with one non-trivial operation:
//! concurrently moving every stored item to the `PROCESSED` status and
//! returning the ones that succeeded.
//!
//! ## Features
//!
//! - **Bulk processing**: one unit of work per item on a fixed-size worker pool,
//!   per-item fault isolation, and a join that waits for every unit
//! - **Storage**: SeaORM over SQLite (default) or PostgreSQL, or an in-memory store
//! - **HTTP API**: actix-web endpoints under `/api/items`
//!
//! ## Embedding the processor
//!
//! ```rust,no_run
//! use item_service::core::processing::{BulkProcessor, WorkerPool};
//! use item_service::storage::InMemoryItemStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryItemStore::new());
//!     let pool = Arc::new(WorkerPool::new(10));
//!     let processor = BulkProcessor::new(store, pool.clone());
//!
//!     let processed = processor.process_all().await?;
//!     println!("processed {} items", processed.len());
//!
//!     pool.shutdown().await;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::models::{Item, ItemId, ItemPayload};
pub use core::processing::{BulkProcessor, ItemOutcome, ProcessingReport, WorkerPool};
pub use storage::ItemStore;
pub use utils::error::{Result, ServiceError};

use tracing::info;

/// The item service: configuration plus the HTTP server built from it
pub struct Application {
    config: Config,
    server: server::HttpServer,
}

impl Application {
    /// Create a new application instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating item service instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { config, server })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the HTTP server until it is stopped
    pub async fn run(self) -> Result<()> {
        info!("Starting {} {}", NAME, VERSION);
        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

/// Build information compiled into the binary
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
        rust_version: env!("RUST_VERSION"),
    }
}
