//! Core functionality for the item service
//!
//! This module contains the domain models and the bulk processing engine.

pub mod models;
pub mod processing;
