//! Domain models

pub mod item;

pub use item::{FieldViolation, Item, ItemId, ItemPayload, NewItem, PROCESSED_STATUS};
