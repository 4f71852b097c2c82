//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::metrics::BenchmarkReport;
use anyhow::Result;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Generate Markdown report from results
    fn generate(&self, report: &BenchmarkReport, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates Markdown reports from benchmark results
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Format a duration in seconds at full timer precision
    /// @ai:effects pure
    fn format_secs(duration: std::time::Duration) -> String {
        format!("{:.9}", duration.as_secs_f64())
    }

    /// @ai:intent Generate report header
    /// @ai:effects pure
    fn generate_summary(report: &BenchmarkReport) -> String {
        let mut output = String::new();

        writeln!(output, "# Sort Benchmark Results").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Date:** {}", report.timestamp).unwrap();
        writeln!(output, "**Dataset size:** {}", report.dataset_size).unwrap();
        writeln!(output, "**Repetitions:** {}", report.repetitions).unwrap();
        writeln!(output).unwrap();

        output
    }

    /// @ai:intent Generate the ranking table, fastest first
    /// @ai:effects pure
    fn generate_ranking_table(report: &BenchmarkReport) -> String {
        let mut output = String::new();

        writeln!(output, "## Ranking").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Rank | Algorithm | Avg (s) | Min (s) | Max (s) |").unwrap();
        writeln!(output, "|------|-----------|---------|---------|---------|").unwrap();

        for row in &report.rankings {
            writeln!(
                output,
                "| {} | {} | {} | {} | {} |",
                row.rank,
                row.algorithm.display_name(),
                Self::format_secs(row.stats.average),
                Self::format_secs(row.stats.min),
                Self::format_secs(row.stats.max),
            )
            .unwrap();
        }

        writeln!(output).unwrap();

        if let Some(fastest) = report.fastest {
            writeln!(output, "**Fastest:** {}", fastest.display_name()).unwrap();
            writeln!(output).unwrap();
        }

        output
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporterTrait for MarkdownReporter {
    /// @ai:intent Generate Markdown report to file
    /// @ai:effects fs:write
    fn generate(&self, report: &BenchmarkReport, output_path: &Path) -> Result<()> {
        let mut content = String::new();

        content.push_str(&Self::generate_summary(report));
        content.push_str(&Self::generate_ranking_table(report));

        std::fs::write(output_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;
    use tempfile::TempDir;

    #[test]
    fn test_format_secs_has_nine_decimals() {
        let formatted = MarkdownReporter::format_secs(std::time::Duration::from_micros(1500));
        assert_eq!(formatted, "0.001500000");
    }

    #[test]
    fn test_generated_report_contains_ranking() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("results.md");

        MarkdownReporter::new()
            .generate(&sample_report(), &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# Sort Benchmark Results"));
        assert!(content.contains("| 1 | Merge Sort |"));
        assert!(content.contains("**Fastest:** Merge Sort"));
    }
}
