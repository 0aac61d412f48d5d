//! Configuration management for the item service
//!
//! This module handles loading, validation, and management of all service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/service.yaml";

/// Main configuration struct for the item service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        let service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Apply environment variable overrides and re-validate
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(EnvOverrides::from_env()?)
    }

    /// Apply `overrides` on top of this configuration and re-validate
    pub fn with_overrides(mut self, overrides: EnvOverrides) -> Result<Self> {
        if !overrides.is_empty() {
            debug!("Applying environment overrides");
        }
        self.service.apply(overrides);
        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.service.storage
    }

    /// Get processing configuration
    pub fn processing(&self) -> &ProcessingConfig {
        &self.service.processing
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .server
            .validate()
            .map_err(|e| ServiceError::Config(format!("Server config error: {}", e)))?;

        self.service
            .storage
            .validate()
            .map_err(|e| ServiceError::Config(format!("Storage config error: {}", e)))?;

        self.service
            .processing
            .validate()
            .map_err(|e| ServiceError::Config(format!("Processing config error: {}", e)))?;

        self.service
            .logging
            .validate()
            .map_err(|e| ServiceError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
