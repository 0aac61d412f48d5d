//! Main service configuration

use super::*;
use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::env;

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Bulk processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Overwrite every field for which an environment override was given
    pub fn apply(&mut self, overrides: EnvOverrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(url) = overrides.database_url {
            self.storage.database.url = url;
        }
        if let Some(enabled) = overrides.database_enabled {
            self.storage.database.enabled = enabled;
        }
        if let Some(pool_size) = overrides.pool_size {
            self.processing.pool_size = pool_size;
        }
        if let Some(secs) = overrides.item_timeout_secs {
            self.processing.item_timeout_secs = Some(secs);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }
}

/// Settings taken from environment variables
///
/// A field is `Some` exactly when its variable is set, whatever the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `ITEM_SERVICE_HOST`
    pub host: Option<String>,
    /// `ITEM_SERVICE_PORT`
    pub port: Option<u16>,
    /// `DATABASE_URL`
    pub database_url: Option<String>,
    /// `ITEM_SERVICE_DATABASE_ENABLED`
    pub database_enabled: Option<bool>,
    /// `ITEM_SERVICE_POOL_SIZE`
    pub pool_size: Option<usize>,
    /// `ITEM_SERVICE_ITEM_TIMEOUT_SECS`
    pub item_timeout_secs: Option<u64>,
    /// `ITEM_SERVICE_LOG_LEVEL`
    pub log_level: Option<String>,
}

impl EnvOverrides {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read overrides through `lookup`, which returns a variable's raw value
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("ITEM_SERVICE_HOST"),
            port: parse_var(&lookup, "ITEM_SERVICE_PORT")?,
            database_url: lookup("DATABASE_URL"),
            database_enabled: parse_var(&lookup, "ITEM_SERVICE_DATABASE_ENABLED")?,
            pool_size: parse_var(&lookup, "ITEM_SERVICE_POOL_SIZE")?,
            item_timeout_secs: parse_var(&lookup, "ITEM_SERVICE_ITEM_TIMEOUT_SECS")?,
            log_level: lookup("ITEM_SERVICE_LOG_LEVEL"),
        })
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ServiceError::config(format!("Invalid value for {}: {}", key, raw))),
        None => Ok(None),
    }
}
