//! @ai:module:intent Timing metrics, run results and session history
//! @ai:module:layer domain
//! @ai:module:public_api TimingStats, BenchmarkRun, HistoryRecord, SortHistory, RankedResult

pub mod history;
pub mod types;

pub use history::{HistorySummary, SortHistory};
pub use types::{BenchmarkReport, BenchmarkRun, HistoryRecord, RankedResult, SortStatus, TimingStats};
