//! Audit history of handled requests.
//!
//! Every handled request is recorded, no-ops included: the observable
//! contract of the machine is the full (state, request) -> line mapping,
//! and an audit that kept only state changes would lose half of it.
//! History is immutable; `record` returns a new history.

use super::request::VendRequest;
use super::state::VendState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one handled request.
///
/// `from == to` marks a no-op. In a history produced by one controller,
/// each record's `from` equals the previous record's `to`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepRecord {
    /// The request that was handled.
    pub request: VendRequest,
    /// State before the request.
    pub from: VendState,
    /// State after the request (equal to `from` on a no-op).
    pub to: VendState,
    /// When the request was handled.
    pub at: DateTime<Utc>,
}

impl StepRecord {
    /// Whether this step left the state unchanged.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of handled requests.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use vendo::core::{History, StepRecord, VendRequest, VendState};
///
/// let history = History::new();
/// let history = history.record(StepRecord {
///     request: VendRequest::InsertMoney,
///     from: VendState::NoMoney,
///     to: VendState::HasMoney,
///     at: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.path(), vec![VendState::NoMoney, VendState::HasMoney]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    records: Vec<StepRecord>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a step, returning a new history.
    ///
    /// Pure: the existing history is left untouched.
    pub fn record(&self, record: StepRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Number of handled requests, no-ops included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no request has been handled yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The distinct sequence of states actually traversed.
    ///
    /// Starts at the first record's `from`; no-ops contribute nothing.
    /// Empty for an empty history.
    pub fn path(&self) -> Vec<VendState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            if Some(&record.to) != path.last() {
                path.push(record.to);
            }
        }
        path
    }

    /// Span from the first to the last record.
    ///
    /// `None` while the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.at.signed_duration_since(first.at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
