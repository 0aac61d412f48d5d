//! Bulk processing configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the bulk processor and its worker pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Number of long-lived workers in the processing pool
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// Upper bound for a single item's unit of work, unbounded when unset
    #[serde(default)]
    pub item_timeout_secs: Option<u64>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            item_timeout_secs: None,
        }
    }
}

impl ProcessingConfig {
    pub fn item_timeout(&self) -> Option<Duration> {
        self.item_timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.pool_size == 0 {
            return Err("Processing pool size must be greater than 0".to_string());
        }
        if self.item_timeout_secs == Some(0) {
            return Err("Item timeout must be greater than 0 when set".to_string());
        }
        Ok(())
    }
}
