//! Types for bulk processing

use crate::core::models::{Item, ItemId};
use std::fmt;
use std::time::Duration;

/// Fate of a single item's unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Status written; carries the stored item
    Processed(Item),
    /// The id no longer resolves to an item
    NotFound,
    /// Reading the item failed
    LookupFailed(String),
    /// Writing the processed item failed
    WriteFailed(String),
    /// The unit exceeded the configured per-item timeout
    TimedOut,
    /// The unit panicked
    Aborted(String),
}

impl ItemOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, ItemOutcome::Processed(_))
    }

    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ItemOutcome::Processed(_) => "processed",
            ItemOutcome::NotFound => "not_found",
            ItemOutcome::LookupFailed(_) => "lookup_failed",
            ItemOutcome::WriteFailed(_) => "write_failed",
            ItemOutcome::TimedOut => "timed_out",
            ItemOutcome::Aborted(_) => "aborted",
        }
    }
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemOutcome::Processed(item) => write!(f, "processed as {}", item.status),
            ItemOutcome::NotFound => write!(f, "item not found"),
            ItemOutcome::LookupFailed(cause) => write!(f, "lookup failed: {}", cause),
            ItemOutcome::WriteFailed(cause) => write!(f, "write failed: {}", cause),
            ItemOutcome::TimedOut => write!(f, "timed out"),
            ItemOutcome::Aborted(cause) => write!(f, "aborted: {}", cause),
        }
    }
}

/// A non-success outcome forwarded to an observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDiagnostic {
    pub id: ItemId,
    pub outcome: ItemOutcome,
}

/// Every per-item outcome of one bulk processing run
#[derive(Debug, Clone)]
pub struct ProcessingReport {
    /// One entry per dispatched id, in dispatch (id-listing) order; not completion order
    pub outcomes: Vec<(ItemId, ItemOutcome)>,
    /// Number of units dispatched to the pool
    pub dispatched: usize,
    /// Wall time from id scan to join
    pub elapsed: Duration,
}

impl ProcessingReport {
    pub fn summary(&self) -> ProcessingSummary {
        let mut summary = ProcessingSummary {
            total: self.outcomes.len(),
            ..ProcessingSummary::default()
        };

        for (_, outcome) in &self.outcomes {
            match outcome {
                ItemOutcome::Processed(_) => summary.processed += 1,
                ItemOutcome::NotFound => summary.not_found += 1,
                _ => summary.failed += 1,
            }
        }

        summary
    }

    /// Items whose processing succeeded
    pub fn processed_items(&self) -> Vec<Item> {
        self.outcomes
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                ItemOutcome::Processed(item) => Some(item.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn into_processed_items(self) -> Vec<Item> {
        self.outcomes
            .into_iter()
            .filter_map(|(_, outcome)| match outcome {
                ItemOutcome::Processed(item) => Some(item),
                _ => None,
            })
            .collect()
    }

    pub fn outcome_for(&self, id: ItemId) -> Option<&ItemOutcome> {
        self.outcomes
            .iter()
            .find(|(outcome_id, _)| *outcome_id == id)
            .map(|(_, outcome)| outcome)
    }
}

/// Outcome counts of a processing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    pub total: usize,
    pub processed: usize,
    pub not_found: usize,
    pub failed: usize,
}
