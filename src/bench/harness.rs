//! @ai:module:intent Repetition-based timing harness for one algorithm
//! @ai:module:layer application
//! @ai:module:public_api BenchmarkHarness
//! @ai:module:stateless true

use crate::metrics::{BenchmarkRun, TimingStats};
use crate::sort::{Algorithm, SortKey};

/// @ai:intent Runs one algorithm R times on fresh copies of the input
///            Repeated trials smooth out scheduling jitter and cache
///            warm-up; min/avg/max expose the remaining variance.
pub struct BenchmarkHarness {
    repetitions: u32,
}

impl BenchmarkHarness {
    /// @ai:intent Create a harness; repetition counts below 1 are clamped
    /// @ai:effects pure
    pub fn new(repetitions: u32) -> Self {
        Self {
            repetitions: repetitions.max(1),
        }
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// @ai:intent Benchmark one algorithm on the given dataset
    /// @ai:post one timing sample per repetition; sorted output is from
    ///          the last repetition
    /// @ai:effects pure
    ///
    /// Each repetition sorts an independent copy taken inside the
    /// algorithm, so no run can contaminate another run's input.
    pub fn run<T: SortKey + Clone>(&self, algorithm: Algorithm, data: &[T]) -> BenchmarkRun<T> {
        let mut samples = Vec::with_capacity(self.repetitions as usize);
        let mut sorted = Vec::new();

        for rep in 0..self.repetitions {
            let (output, taken) = algorithm.run(data);
            tracing::trace!("{algorithm} rep {rep}: {:?}", taken);
            samples.push(taken);
            sorted = output;
        }

        BenchmarkRun {
            algorithm,
            sorted,
            stats: TimingStats::from_samples(&samples),
            samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collects_one_sample_per_repetition() {
        let harness = BenchmarkHarness::new(4);
        let run = harness.run(Algorithm::Merge, &[5i64, 2, 9, 1, 9, 3]);

        assert_eq!(run.samples.len(), 4);
        assert_eq!(run.sorted, vec![9, 9, 5, 3, 2, 1]);
        assert!(run.stats.min <= run.stats.average && run.stats.average <= run.stats.max);
    }

    #[test]
    fn test_zero_repetitions_clamps_to_one() {
        let harness = BenchmarkHarness::new(0);
        assert_eq!(harness.repetitions(), 1);

        let run = harness.run(Algorithm::Bubble, &[2i64, 1]);
        assert_eq!(run.samples.len(), 1);
    }

    #[test]
    fn test_input_is_never_mutated() {
        let data = vec![3i64, 1, 4, 1, 5];
        let harness = BenchmarkHarness::new(3);

        let run = harness.run(Algorithm::Insertion, &data);
        assert_eq!(data, vec![3, 1, 4, 1, 5]);
        assert_eq!(run.sorted, vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn test_identical_input_gives_identical_output_across_reps() {
        // Rerunning the harness reproduces the same sorted sequence;
        // the output kept is the last repetition's.
        let data = vec![7i64, 7, 2, 9];
        let harness = BenchmarkHarness::new(5);

        let first = harness.run(Algorithm::Bubble, &data);
        let second = harness.run(Algorithm::Bubble, &data);
        assert_eq!(first.sorted, second.sorted);
    }
}
