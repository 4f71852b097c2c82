//! @ai:module:intent Interactive menu session over a loaded dataset
//! @ai:module:layer presentation
//! @ai:module:public_api Session, MenuChoice, print_sort_result, print_rankings
//! @ai:module:stateless false

use crate::bench::{benchmark_all, BenchmarkHarness};
use crate::config::SortbenchConfig;
use crate::dataset::Value;
use crate::metrics::{BenchmarkRun, HistoryRecord, RankedResult, SortHistory, SortStatus};
use crate::sort::{is_sorted_descending, Algorithm};
use std::io::Write as IoWrite;
use std::time::Duration;

/// @ai:intent One of the six menu operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sort(Algorithm),
    BenchmarkAll,
    History,
    Exit,
}

impl MenuChoice {
    /// @ai:intent Parse a menu line ("1".."6") into a choice
    /// @ai:post None for anything outside the menu
    /// @ai:effects pure
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::Sort(Algorithm::Bubble)),
            "2" => Some(MenuChoice::Sort(Algorithm::Insertion)),
            "3" => Some(MenuChoice::Sort(Algorithm::Merge)),
            "4" => Some(MenuChoice::BenchmarkAll),
            "5" => Some(MenuChoice::History),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// @ai:intent Interactive session owning the dataset and its history
///            History lives exactly as long as the session; nothing is
///            persisted across runs.
pub struct Session {
    config: SortbenchConfig,
    data: Vec<Value>,
    history: SortHistory,
}

impl Session {
    /// @ai:intent Create a session over an already-loaded dataset
    /// @ai:effects pure
    pub fn new(config: SortbenchConfig, data: Vec<Value>) -> Self {
        Self {
            config,
            data,
            history: SortHistory::new(),
        }
    }

    /// @ai:intent Run the blocking menu loop until exit or EOF
    /// @ai:effects io
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Dataset loaded: {} elements", self.data.len());

        loop {
            display_menu();
            print!("\nEnter your choice (1-6): ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                // EOF behaves like exit.
                break;
            }

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Sort(algorithm)) => self.perform_sort(algorithm),
                Some(MenuChoice::BenchmarkAll) => self.perform_benchmark_all(),
                Some(MenuChoice::History) => self.display_history(),
                Some(MenuChoice::Exit) => break,
                None => println!("Invalid choice, please enter a number from 1 to 6."),
            }
        }

        println!("\n{}", "=".repeat(50));
        println!("Thank you for using the sorting program!");
        println!("Total sorts performed: {}", self.history.len());
        println!("{}", "=".repeat(50));
        Ok(())
    }

    /// @ai:intent Run one algorithm with timing repetitions and record it
    /// @ai:effects io, state:write
    fn perform_sort(&mut self, algorithm: Algorithm) {
        let harness = BenchmarkHarness::new(self.config.run.sort_repetitions);
        let run = harness.run(algorithm, &self.data);
        let verified = is_sorted_descending(&run.sorted);

        if !verified {
            tracing::warn!("{} produced a non-descending result", algorithm);
        }

        print_sort_result(&run, verified);

        self.history.append(HistoryRecord {
            algorithm,
            stats: run.stats,
            elements: run.sorted.len(),
            status: SortStatus::from_verified(verified),
        });
    }

    /// @ai:intent Benchmark all algorithms and print the ranking
    /// @ai:effects io, state:write
    fn perform_benchmark_all(&mut self) {
        println!("\n{}", "=".repeat(50));
        println!("        BENCHMARKING ALL ALGORITHMS");
        println!("{}", "=".repeat(50));

        let harness = BenchmarkHarness::new(self.config.run.bench_repetitions);
        let rankings = benchmark_all(&harness, &self.data, &mut self.history);

        print_rankings(&rankings, self.data.len());
    }

    /// @ai:intent Print the session history table and summary statistics
    /// @ai:effects io
    fn display_history(&self) {
        if self.history.is_empty() {
            println!("\n{}", "=".repeat(50));
            println!("No sorting history yet!");
            println!("{}", "=".repeat(50));
            return;
        }

        println!("\n{}", "=".repeat(70));
        println!("        SORTING HISTORY");
        println!("{}", "=".repeat(70));
        println!(
            "{:<5} {:<20} {:<18} {:<10} {}",
            "#", "Algorithm", "Avg Time (sec)", "Elements", "Status"
        );
        println!("{}", "-".repeat(70));

        for (index, record) in self.history.records().iter().enumerate() {
            println!(
                "{:<5} {:<20} {:<18} {:<10} {}",
                index + 1,
                record.algorithm.display_name(),
                format_secs(record.stats.average),
                record.elements,
                record.status
            );
        }

        println!("{}", "=".repeat(70));

        if self.history.len() > 1 {
            if let Some(summary) = self.history.summary() {
                println!("\nSTATISTICS:");
                println!(
                    "Fastest: {} ({} seconds)",
                    summary.fastest.algorithm.display_name(),
                    format_secs(summary.fastest.stats.average)
                );
                println!(
                    "Slowest: {} ({} seconds)",
                    summary.slowest.algorithm.display_name(),
                    format_secs(summary.slowest.stats.average)
                );
                println!("Average time: {} seconds", format_secs(summary.average));
                println!("Total sorts performed: {}", summary.total);
                println!("{}", "=".repeat(70));
            }
        }
    }
}

/// @ai:intent Print the sort-once result block
/// @ai:effects io
pub fn print_sort_result(run: &BenchmarkRun<Value>, verified: bool) {
    println!(
        "\n{} - SORTING COMPLETE!\n",
        run.algorithm.display_name().to_uppercase()
    );
    println!("Sorted elements (descending order):\n");

    for value in &run.sorted {
        println!("{}", value);
    }

    println!("\n{}", "=".repeat(50));
    println!("Algorithm: {}", run.algorithm.display_name());
    println!("Average time: {} seconds", format_secs(run.stats.average));
    println!("Min time: {} seconds", format_secs(run.stats.min));
    println!("Max time: {} seconds", format_secs(run.stats.max));
    println!("Total elements sorted: {}", run.sorted.len());
    println!(
        "Verification: {}",
        if verified { "CORRECT!" } else { "FAILED!" }
    );
    println!("{}", "=".repeat(50));
}

/// @ai:intent Print the benchmark-all ranking table
/// @ai:effects io
pub fn print_rankings(rankings: &[RankedResult], dataset_size: usize) {
    println!("\n{}", "=".repeat(70));
    println!("        BENCHMARK RESULTS");
    println!("{}", "=".repeat(70));
    println!(
        "{:<6} {:<20} {:<18} {}",
        "Rank", "Algorithm", "Avg Time (sec)", "Min/Max"
    );
    println!("{}", "-".repeat(70));

    for row in rankings {
        println!(
            "{:<6} {:<20} {:<18} {}/{}",
            row.rank,
            row.algorithm.display_name(),
            format_secs(row.stats.average),
            format_secs(row.stats.min),
            format_secs(row.stats.max)
        );
    }

    println!("{}", "=".repeat(70));

    if let Some(fastest) = rankings.first() {
        println!(
            "Fastest: {} ({} sec)",
            fastest.algorithm.display_name(),
            format_secs(fastest.stats.average)
        );
    }

    println!("Dataset size: {} elements", dataset_size);
    println!("{}", "=".repeat(70));
}

fn display_menu() {
    println!("\n{}", "=".repeat(50));
    println!("        SORTING ALGORITHMS MENU");
    println!("{}", "=".repeat(50));
    println!("1. Bubble Sort (Descending)");
    println!("2. Insertion Sort (Descending)");
    println!("3. Merge Sort (Descending)");
    println!("4. Benchmark All Algorithms");
    println!("5. View Sorting History");
    println!("6. Exit");
    println!("{}", "=".repeat(50));
}

fn format_secs(duration: Duration) -> String {
    format!("{:.9}", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Sort(Algorithm::Bubble)));
        assert_eq!(
            MenuChoice::parse(" 2 \n"),
            Some(MenuChoice::Sort(Algorithm::Insertion))
        );
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Sort(Algorithm::Merge)));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::BenchmarkAll));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::History));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_menu_choice_rejects_invalid_input() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("bubble"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_session_sort_appends_history() {
        let data = vec![Value::Int(5), Value::Int(2), Value::Int(9)];
        let mut session = Session::new(SortbenchConfig::default(), data);

        session.perform_sort(Algorithm::Merge);
        session.perform_benchmark_all();

        // One record for the single sort, three for benchmark-all.
        assert_eq!(session.history.len(), 4);
        assert!(session
            .history
            .records()
            .iter()
            .all(|r| r.status == SortStatus::Success));
    }
}
