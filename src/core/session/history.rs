//! Bounded gallery of past result sets

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::types::DesignVariation;

/// Number of result sets kept by default
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One successful generation
pub type ResultSet = Vec<DesignVariation>;

/// Fixed-capacity FIFO of result sets, newest first.
///
/// Pushing past capacity evicts the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HistorySnapshot", into = "HistorySnapshot")]
pub struct DesignHistory {
    entries: VecDeque<ResultSet>,
    capacity: usize,
}

impl DesignHistory {
    /// Create an empty history; a zero capacity is raised to one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add the newest result set, returning the evicted oldest one if any
    pub fn push(&mut self, results: ResultSet) -> Option<ResultSet> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_back()
        } else {
            None
        };
        self.entries.push_front(results);
        evicted
    }

    /// Result sets, newest first
    pub fn iter(&self) -> impl Iterator<Item = &ResultSet> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&ResultSet> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&ResultSet> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for DesignHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a DesignHistory {
    type Item = &'a ResultSet;
    type IntoIter = std::collections::vec_deque::Iter<'a, ResultSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serialized form; restoring it drops entries beyond capacity
#[derive(Serialize, Deserialize)]
struct HistorySnapshot {
    capacity: usize,
    entries: Vec<ResultSet>,
}

impl From<HistorySnapshot> for DesignHistory {
    fn from(snapshot: HistorySnapshot) -> Self {
        let mut history = DesignHistory::with_capacity(snapshot.capacity);
        history.entries = snapshot
            .entries
            .into_iter()
            .take(history.capacity)
            .collect();
        history
    }
}

impl From<DesignHistory> for HistorySnapshot {
    fn from(history: DesignHistory) -> Self {
        Self {
            capacity: history.capacity,
            entries: history.entries.into(),
        }
    }
}
