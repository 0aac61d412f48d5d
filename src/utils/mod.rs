//! Utility modules for the item service
//!
//! - **error**: crate error type and its HTTP representation
//! - **logging**: `tracing` subscriber setup
//! - **validation**: request payload validation

pub mod error;
pub mod logging;
pub mod validation;
