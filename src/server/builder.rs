//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ServiceError};
use std::path::PathBuf;
use tracing::{info, warn};

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration from `path` (or the default location), falling back to
/// defaults when no file is found. Environment variables override both.
pub async fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let file_config = match Config::from_file(&path).await {
        Ok(config) => {
            info!("Configuration file loaded: {}", path.display());
            config
        }
        Err(e) if explicit => return Err(e),
        Err(e) => {
            warn!(
                "Configuration file {} not loaded, using defaults: {}",
                path.display(),
                e
            );
            Config::default()
        }
    };

    file_config.with_env_overrides()
}

/// Run the server with automatic configuration loading
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting item service");

    let server = ServerBuilder::new().with_config(config).build().await?;
    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   GET    /api/items - List items");
    info!("   POST   /api/items - Create item");
    info!("   GET    /api/items/process - Process all items");
    info!("   GET    /api/items/{{id}} - Get item");
    info!("   PUT    /api/items/{{id}} - Update item");
    info!("   DELETE /api/items/{{id}} - Delete item");

    server.start().await
}
