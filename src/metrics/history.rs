//! @ai:module:intent Append-only in-memory history of sorts for one session
//! @ai:module:layer domain
//! @ai:module:public_api SortHistory, HistorySummary
//! @ai:module:stateless false

use crate::metrics::types::HistoryRecord;
use std::time::Duration;

/// @ai:intent Session-scoped sort history, destroyed on process exit
///            Owned by the session loop and passed by mutable reference
///            to the layers that append.
#[derive(Debug, Default)]
pub struct SortHistory {
    records: Vec<HistoryRecord>,
}

/// @ai:intent Aggregate statistics over all history records
#[derive(Debug, Clone)]
pub struct HistorySummary {
    pub fastest: HistoryRecord,
    pub slowest: HistoryRecord,
    pub average: Duration,
    pub total: usize,
}

impl SortHistory {
    /// @ai:intent Create an empty history
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Append one record; records are never removed or edited
    /// @ai:effects state:write
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// @ai:intent Summarize the session: fastest, slowest, mean average
    /// @ai:post None iff the history is empty
    /// @ai:effects pure
    pub fn summary(&self) -> Option<HistorySummary> {
        let fastest = self
            .records
            .iter()
            .min_by_key(|r| r.stats.average)?
            .clone();
        let slowest = self
            .records
            .iter()
            .max_by_key(|r| r.stats.average)?
            .clone();

        let total: Duration = self.records.iter().map(|r| r.stats.average).sum();

        Some(HistorySummary {
            fastest,
            slowest,
            average: total / self.records.len() as u32,
            total: self.records.len(),
        })
    }
}
