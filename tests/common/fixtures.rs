//! Test fixtures

use item_service::core::models::{ItemPayload, NewItem};
use serde_json::{Value, json};

/// Builds item test data
pub struct ItemFactory;

impl ItemFactory {
    /// Fields of the `n`-th pending item
    pub fn pending(n: usize) -> NewItem {
        NewItem {
            name: format!("Item {}", n),
            description: format!("Description {}", n),
            status: "PENDING".to_string(),
            email: format!("item{}@example.com", n),
        }
    }

    pub fn payload(n: usize) -> ItemPayload {
        let item = Self::pending(n);
        ItemPayload {
            name: Some(item.name),
            description: Some(item.description),
            status: Some(item.status),
            email: Some(item.email),
        }
    }

    /// JSON request body for the `n`-th item
    pub fn json(n: usize) -> Value {
        json!({
            "name": format!("Item {}", n),
            "description": format!("Description {}", n),
            "status": "PENDING",
            "email": format!("item{}@example.com", n),
        })
    }

    /// Request body with every field empty
    pub fn empty_json() -> Value {
        json!({
            "name": "",
            "description": "",
            "status": "",
            "email": "",
        })
    }
}
