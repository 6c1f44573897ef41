//! core::history
//!
//! Bounded mutation log for audit.
//!
//! # Architecture
//!
//! The history is an append-only ring buffer of [`MutationRecord`]s. Each
//! record names the operation kind, the affected station ids, a monotonic
//! sequence number, and a timestamp. When the configured capacity is
//! exceeded, the oldest record is evicted.
//!
//! **Important:** the history is evidence, not authority. It records what
//! mutations were applied, but the network itself remains the source of
//! truth; no rollback or undo is executed from it.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::StationId;

/// Default number of records retained.
pub const DEFAULT_CAPACITY: usize = 256;

/// Kind of a recorded mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    AddStation,
    RemoveStation,
    AddRoute,
    RemoveRoute,
}

/// One recorded mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRecord {
    /// Monotonic sequence number; survives eviction.
    pub seq: u64,
    /// Operation kind.
    pub kind: MutationKind,
    /// Affected station ids (one for station ops, source then dest for
    /// route ops).
    pub stations: Vec<StationId>,
    /// When the mutation was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered log of mutating operations.
///
/// # Example
///
/// ```
/// use metrograph::core::history::{MutationHistory, MutationKind};
/// use metrograph::core::types::StationId;
///
/// let mut history = MutationHistory::new(2);
/// history.push(MutationKind::AddStation, vec![StationId::new(1)]);
/// history.push(MutationKind::AddStation, vec![StationId::new(2)]);
/// history.push(MutationKind::RemoveStation, vec![StationId::new(1)]);
///
/// // Capacity 2: the first record was evicted, newest first.
/// let recent = history.recent(10);
/// assert_eq!(recent.len(), 2);
/// assert_eq!(recent[0].seq, 3);
/// assert_eq!(recent[1].seq, 2);
/// ```
#[derive(Debug, Clone)]
pub struct MutationHistory {
    entries: VecDeque<MutationRecord>,
    capacity: usize,
    next_seq: u64,
}

impl MutationHistory {
    /// Create a history with the given capacity (clamped to at least 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            next_seq: 1,
        }
    }

    /// Append a record, evicting the oldest when at capacity. Never fails.
    pub fn push(&mut self, kind: MutationKind, stations: Vec<StationId>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MutationRecord {
            seq: self.next_seq,
            kind,
            stations,
            timestamp: Utc::now(),
        });
        self.next_seq += 1;
    }

    /// The last `n` records, newest first, clamped to what is available.
    pub fn recent(&self, n: usize) -> Vec<MutationRecord> {
        self.entries.iter().rev().take(n).cloned().collect()
    }

    /// Number of records currently retained.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MutationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
