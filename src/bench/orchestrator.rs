//! @ai:module:intent Benchmark all algorithms on one dataset and rank them
//! @ai:module:layer application
//! @ai:module:public_api benchmark_all
//! @ai:module:stateless true

use crate::bench::harness::BenchmarkHarness;
use crate::metrics::{HistoryRecord, RankedResult, SortHistory, SortStatus};
use crate::sort::{is_sorted_descending, Algorithm, SortKey};

/// @ai:intent Run the harness over all three algorithms in fixed order,
///            record each into history, return the ranking
/// @ai:post one history record per algorithm; ranking sorted by ascending
///          average duration, ties broken by the fixed order
/// @ai:effects state:write (history)
pub fn benchmark_all<T: SortKey + Clone>(
    harness: &BenchmarkHarness,
    data: &[T],
    history: &mut SortHistory,
) -> Vec<RankedResult> {
    let mut results = Vec::with_capacity(Algorithm::ALL.len());

    for algorithm in Algorithm::ALL {
        tracing::info!("Benchmarking {} ({} reps)", algorithm, harness.repetitions());
        let run = harness.run(algorithm, data);

        let verified = is_sorted_descending(&run.sorted);
        if !verified {
            tracing::warn!("{} produced a non-descending result", algorithm);
        }

        history.append(HistoryRecord {
            algorithm,
            stats: run.stats,
            elements: data.len(),
            status: SortStatus::from_verified(verified),
        });

        results.push((algorithm, run.stats));
    }

    // Stable sort keeps the fixed algorithm order on exact ties.
    results.sort_by_key(|(_, stats)| stats.average);

    results
        .into_iter()
        .enumerate()
        .map(|(index, (algorithm, stats))| RankedResult {
            rank: index as u32 + 1,
            algorithm,
            stats,
        })
        .collect()
}
