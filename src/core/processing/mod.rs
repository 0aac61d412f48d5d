//! Concurrent bulk processing of stored items

mod pool;
mod processor;
mod types;

pub use pool::{PoolError, WorkerHandle, WorkerPool};
pub use processor::BulkProcessor;
pub use types::{ItemDiagnostic, ItemOutcome, ProcessingReport, ProcessingSummary};
