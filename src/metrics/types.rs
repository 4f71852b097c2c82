//! @ai:module:intent Metric types for sort benchmark results
//! @ai:module:layer domain
//! @ai:module:public_api TimingStats, BenchmarkRun, SortStatus, HistoryRecord, RankedResult, BenchmarkReport
//! @ai:module:stateless true

use crate::sort::Algorithm;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// @ai:intent Aggregate timing over repeated runs of one algorithm
/// @ai:post min <= average <= max
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingStats {
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl TimingStats {
    /// @ai:intent Compute average/min/max from raw samples
    /// @ai:effects pure
    pub fn from_samples(samples: &[Duration]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let total: Duration = samples.iter().sum();

        Self {
            average: total / samples.len() as u32,
            min: samples.iter().min().copied().unwrap_or_default(),
            max: samples.iter().max().copied().unwrap_or_default(),
        }
    }
}

/// @ai:intent Result of benchmarking one algorithm R times
#[derive(Debug, Clone)]
pub struct BenchmarkRun<T> {
    pub algorithm: Algorithm,
    /// Sorted output from the last repetition; all repetitions see an
    /// identical fresh copy of the input.
    pub sorted: Vec<T>,
    pub stats: TimingStats,
    pub samples: Vec<Duration>,
}

/// @ai:intent Verification verdict recorded with each history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStatus {
    Success,
    Failed,
}

impl SortStatus {
    /// @ai:intent Build status from a verifier verdict
    /// @ai:effects pure
    pub fn from_verified(verified: bool) -> Self {
        if verified {
            SortStatus::Success
        } else {
            SortStatus::Failed
        }
    }

    /// @ai:intent Convert status to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStatus::Success => "Success",
            SortStatus::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for SortStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent One append-only history entry for the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub algorithm: Algorithm,
    pub stats: TimingStats,
    pub elements: usize,
    pub status: SortStatus,
}

/// @ai:intent One row of the benchmark-all ranking, fastest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    /// 1-based rank by ascending average duration, stable on ties.
    pub rank: u32,
    pub algorithm: Algorithm,
    pub stats: TimingStats,
}

/// @ai:intent Complete benchmark-all results for report export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub timestamp: String,
    pub dataset_size: usize,
    pub repetitions: u32,
    pub rankings: Vec<RankedResult>,
    pub fastest: Option<Algorithm>,
}

impl BenchmarkReport {
    /// @ai:intent Assemble a report from a finished ranking
    /// @ai:effects pure
    pub fn new(dataset_size: usize, repetitions: u32, rankings: Vec<RankedResult>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            dataset_size,
            repetitions,
            fastest: rankings.first().map(|r| r.algorithm),
            rankings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stats_from_samples() {
        let samples = [
            Duration::from_micros(10),
            Duration::from_micros(20),
            Duration::from_micros(60),
        ];
        let stats = TimingStats::from_samples(&samples);

        assert_eq!(stats.average, Duration::from_micros(30));
        assert_eq!(stats.min, Duration::from_micros(10));
        assert_eq!(stats.max, Duration::from_micros(60));
        assert!(stats.min <= stats.average && stats.average <= stats.max);
    }

    #[test]
    fn test_stats_from_empty_samples() {
        assert_eq!(TimingStats::from_samples(&[]), TimingStats::default());
    }

    #[test]
    fn test_status_from_verified() {
        assert_eq!(SortStatus::from_verified(true), SortStatus::Success);
        assert_eq!(SortStatus::from_verified(false), SortStatus::Failed);
    }

    #[test]
    fn test_report_records_fastest() {
        let rankings = vec![RankedResult {
            rank: 1,
            algorithm: Algorithm::Merge,
            stats: TimingStats::default(),
        }];
        let report = BenchmarkReport::new(1000, 5, rankings);

        assert_eq!(report.fastest, Some(Algorithm::Merge));
        assert_eq!(report.dataset_size, 1000);
    }
}
