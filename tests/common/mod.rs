//! Common test utilities for item-service
//!
//! - In-memory SQLite database support
//! - Item fixtures
//! - A store wrapper that injects per-item faults

pub mod fixtures;
pub mod store;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::ItemFactory;
pub use store::FaultInjectingStore;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
