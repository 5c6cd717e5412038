//! Per-layer operation history.
//!
//! The log is append-only from the caller's perspective but bounded: beyond
//! capacity the oldest entries fall off, keeping long editing sessions from
//! growing memory without limit.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default per-layer history capacity
pub const DEFAULT_HISTORY_CAPACITY: usize = 1024;

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

/// A single recorded operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub operation: String,
    pub params: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

/// Bounded append-only log of layer operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    #[serde(skip, default = "default_capacity")]
    #[schemars(skip)]
    capacity: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A log that keeps at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append an entry, dropping the oldest once at capacity
    pub fn record(
        &mut self,
        operation: impl Into<String>,
        params: serde_json::Value,
        timestamp: DateTime<Utc>,
    ) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            operation: operation.into(),
            params,
            timestamp,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in append order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
