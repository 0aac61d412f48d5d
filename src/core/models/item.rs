//! Item domain types

use serde::{Deserialize, Serialize};

/// Store-assigned item identifier
pub type ItemId = i32;

/// Status written to every item the bulk processor handles successfully
pub const PROCESSED_STATUS: &str = "PROCESSED";

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub status: String,
    pub email: String,
}

impl Item {
    /// Copy of this item in the terminal processed state, other fields unchanged
    pub fn processed(mut self) -> Self {
        self.status = PROCESSED_STATUS.to_string();
        self
    }

    pub fn is_processed(&self) -> bool {
        self.status == PROCESSED_STATUS
    }

    /// Replace every mutable field, keeping the identifier
    pub fn apply(mut self, fields: NewItem) -> Self {
        self.name = fields.name;
        self.description = fields.description;
        self.status = fields.status;
        self.email = fields.email;
        self
    }
}

/// Request body for creating or replacing an item.
///
/// Every field is optional so that missing fields are reported as
/// validation violations rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub email: Option<String>,
}

/// Validated fields of an item that has no identifier yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub status: String,
    pub email: String,
}

/// A single failed validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
