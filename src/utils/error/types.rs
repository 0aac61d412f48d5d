//! Error types for the item service

use thiserror::Error;

/// Result type alias for the item service
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the item service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The item store could not list the ids to process
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Waiting for the processing units was cut short
    #[error("Processing interrupted: {0}")]
    Interrupted(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Migration errors
    #[error("Migration error: {0}")]
    Migration(String),
}
