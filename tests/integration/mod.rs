//! Integration tests for item-service
//!
//! These tests verify the interaction between multiple components
//! against a real in-memory SQLite database.

pub mod api_tests;
pub mod config_tests;
pub mod processing_tests;
