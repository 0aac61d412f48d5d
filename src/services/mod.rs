//! Services module
//!
//! This module contains business logic and service implementations

pub mod item_service;

pub use item_service::ItemService;
