//! @ai:module:intent Report generation for benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, JsonReporter, MarkdownReporter, ChartGenerator

pub mod charts;
pub mod json_report;
pub mod markdown_report;

pub use charts::{ChartGenerator, ChartGeneratorTrait};
pub use json_report::{JsonReporter, JsonReporterTrait};
pub use markdown_report::{MarkdownReporter, MarkdownReporterTrait};

use crate::metrics::BenchmarkReport;
use anyhow::Result;
use std::path::Path;

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    json: JsonReporter,
    markdown: MarkdownReporter,
    charts: ChartGenerator,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            json: JsonReporter::new(),
            markdown: MarkdownReporter::new(),
            charts: ChartGenerator::new(),
        }
    }

    /// @ai:intent Generate all reports
    /// @ai:effects fs:write
    pub fn generate_all(&self, report: &BenchmarkReport, output_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(output_dir)?;

        self.json.generate(report, &output_dir.join("results.json"))?;
        self.markdown
            .generate(report, &output_dir.join("results.md"))?;
        self.charts
            .generate(report, &output_dir.join("durations.png"))?;

        tracing::info!("Reports generated in {}", output_dir.display());
        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{RankedResult, TimingStats};
    use crate::sort::Algorithm;
    use std::time::Duration;
    use tempfile::TempDir;

    pub(crate) fn sample_report() -> BenchmarkReport {
        let stats_for = |micros: u64| {
            let duration = Duration::from_micros(micros);
            TimingStats {
                average: duration,
                min: duration / 2,
                max: duration * 2,
            }
        };

        BenchmarkReport::new(
            1000,
            5,
            vec![
                RankedResult {
                    rank: 1,
                    algorithm: Algorithm::Merge,
                    stats: stats_for(120),
                },
                RankedResult {
                    rank: 2,
                    algorithm: Algorithm::Insertion,
                    stats: stats_for(900),
                },
                RankedResult {
                    rank: 3,
                    algorithm: Algorithm::Bubble,
                    stats: stats_for(1500),
                },
            ],
        )
    }

    #[test]
    fn test_generate_all_writes_every_artifact() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("reports");

        ReportGenerator::new()
            .generate_all(&sample_report(), &output)
            .unwrap();

        assert!(output.join("results.json").exists());
        assert!(output.join("results.md").exists());
        assert!(output.join("durations.png").exists());
    }
}
