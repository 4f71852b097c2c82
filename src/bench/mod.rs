//! @ai:module:intent Benchmark execution over the sort algorithms
//! @ai:module:layer application
//! @ai:module:public_api BenchmarkHarness, benchmark_all

pub mod harness;
pub mod orchestrator;

pub use harness::BenchmarkHarness;
pub use orchestrator::benchmark_all;
