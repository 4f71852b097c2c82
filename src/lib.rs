//! @ai:module:intent Sortbench library: descending sorts, benchmarking and history
//! @ai:module:layer application
//! @ai:module:public_api bench, config, dataset, error, metrics, report, session, sort

pub mod bench;
pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod report;
pub mod session;
pub mod sort;

pub use bench::{benchmark_all, BenchmarkHarness};
pub use config::SortbenchConfig;
pub use dataset::{DatasetLoader, Value};
pub use error::{Error, Result};
pub use metrics::{BenchmarkReport, BenchmarkRun, HistoryRecord, SortHistory, TimingStats};
pub use report::ReportGenerator;
pub use session::Session;
pub use sort::{is_sorted_descending, Algorithm};
