//! Error handling for the item service
//!
//! This module defines the crate error type and its HTTP representation.

mod helpers;
mod response;
mod types;

pub use response::{
    ErrorDetail, ErrorResponse, PROCESSING_FAILED_MESSAGE, PROCESSING_INTERRUPTED_MESSAGE,
};
pub use types::{Result, ServiceError};
