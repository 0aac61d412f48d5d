//! Bulk status processing over the item store

use super::pool::{PoolError, WorkerPool};
use super::types::{ItemDiagnostic, ItemOutcome, ProcessingReport};
use crate::core::models::{Item, ItemId};
use crate::storage::ItemStore;
use crate::utils::error::{Result, ServiceError};
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Transitions every stored item to the processed status.
///
/// One unit of work per item id runs on the shared [`WorkerPool`]. A failing
/// unit only affects its own item; the call resolves after every unit has.
pub struct BulkProcessor {
    store: Arc<dyn ItemStore>,
    pool: Arc<WorkerPool>,
    item_timeout: Option<Duration>,
    diagnostics: Option<mpsc::UnboundedSender<ItemDiagnostic>>,
}

impl BulkProcessor {
    pub fn new(store: Arc<dyn ItemStore>, pool: Arc<WorkerPool>) -> Self {
        Self {
            store,
            pool,
            item_timeout: None,
            diagnostics: None,
        }
    }

    /// Bound the running time of each unit
    pub fn with_item_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.item_timeout = timeout;
        self
    }

    /// Forward every non-success outcome to `sender`
    pub fn with_diagnostics(mut self, sender: mpsc::UnboundedSender<ItemDiagnostic>) -> Self {
        self.diagnostics = Some(sender);
        self
    }

    /// Process every item and return the ones that succeeded, in no particular order.
    pub async fn process_all(&self) -> Result<Vec<Item>> {
        let report = self.process_all_detailed().await?;
        Ok(report.into_processed_items())
    }

    /// Process every item and return the outcome of each one.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::StoreUnavailable`] if the ids could not be listed.
    /// - [`ServiceError::Interrupted`] if the pool stopped before every unit
    ///   reported back. This is decided only after all dispatched units resolved.
    pub async fn process_all_detailed(&self) -> Result<ProcessingReport> {
        let start = Instant::now();

        let ids = self.store.list_all_ids().await.map_err(|e| {
            warn!("Failed to list item ids: {}", e);
            ServiceError::store_unavailable(e.to_string())
        })?;

        debug!("Dispatching {} items for processing", ids.len());

        let submissions: Vec<_> = ids
            .iter()
            .map(|&id| {
                let unit = process_item(Arc::clone(&self.store), id, self.item_timeout);
                (id, self.pool.submit(unit))
            })
            .collect();

        let dispatched = submissions.iter().filter(|(_, s)| s.is_ok()).count();

        let joins = submissions.into_iter().map(|(id, submission)| async move {
            let result = match submission {
                Ok(handle) => handle.join().await,
                Err(e) => Err(e),
            };
            (id, result)
        });
        let results = join_all(joins).await;

        let mut outcomes = Vec::with_capacity(results.len());
        let mut interrupted = 0usize;

        for (id, result) in results {
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(PoolError::Panicked(message)) => ItemOutcome::Aborted(message),
                Err(PoolError::Closed) | Err(PoolError::Dropped) => {
                    interrupted += 1;
                    continue;
                }
            };

            if !outcome.is_processed() {
                self.report_failure(id, &outcome);
            }
            outcomes.push((id, outcome));
        }

        if interrupted > 0 {
            warn!(
                "{} of {} items were interrupted before completion",
                interrupted,
                ids.len()
            );
            return Err(ServiceError::interrupted(format!(
                "{} items did not complete because the worker pool stopped",
                interrupted
            )));
        }

        let report = ProcessingReport {
            outcomes,
            dispatched,
            elapsed: start.elapsed(),
        };

        let summary = report.summary();
        info!(
            total = summary.total,
            processed = summary.processed,
            not_found = summary.not_found,
            failed = summary.failed,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Bulk processing completed"
        );

        Ok(report)
    }

    fn report_failure(&self, id: ItemId, outcome: &ItemOutcome) {
        warn!(item_id = id, outcome = outcome.kind(), "Item not processed: {}", outcome);

        if let Some(sender) = &self.diagnostics {
            // A dropped receiver only means nobody is listening
            let _ = sender.send(ItemDiagnostic {
                id,
                outcome: outcome.clone(),
            });
        }
    }
}

/// One unit of work: re-read the item, mark it processed, write it back
async fn process_item(
    store: Arc<dyn ItemStore>,
    id: ItemId,
    timeout: Option<Duration>,
) -> ItemOutcome {
    let unit = transition_item(store, id);
    match timeout {
        Some(limit) => tokio::time::timeout(limit, unit)
            .await
            .unwrap_or(ItemOutcome::TimedOut),
        None => unit.await,
    }
}

async fn transition_item(store: Arc<dyn ItemStore>, id: ItemId) -> ItemOutcome {
    let item = match store.find_by_id(id).await {
        Ok(Some(item)) => item,
        Ok(None) => return ItemOutcome::NotFound,
        Err(e) => return ItemOutcome::LookupFailed(e.to_string()),
    };

    match store.save(item.processed()).await {
        Ok(saved) => {
            debug!("Processed item {}", id);
            ItemOutcome::Processed(saved)
        }
        // Deleted between the read and the write
        Err(e) if e.is_not_found() => ItemOutcome::NotFound,
        Err(e) => ItemOutcome::WriteFailed(e.to_string()),
    }
}
