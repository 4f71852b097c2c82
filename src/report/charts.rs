//! @ai:module:intent Chart generation for benchmark results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator
//! @ai:module:stateless true

use crate::metrics::BenchmarkReport;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Generate the duration chart from results
    fn generate(&self, report: &BenchmarkReport, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates a bar chart of average sort durations
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Generate average-duration bar chart
    /// @ai:effects fs:write
    fn generate(&self, report: &BenchmarkReport, output_path: &Path) -> Result<()> {
        let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
        root.fill(&WHITE)?;

        let data: Vec<_> = report
            .rankings
            .iter()
            .map(|r| {
                (
                    r.algorithm.display_name(),
                    r.stats.average.as_secs_f64() * 1000.0,
                )
            })
            .collect();

        let y_max = data
            .iter()
            .map(|(_, ms)| *ms)
            .fold(0.0f64, f64::max)
            .max(0.001)
            * 1.25;

        let mut chart = ChartBuilder::on(&root)
            .caption("Average Sort Duration", ("sans-serif", 30))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0..data.len() as i32, 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_labels(data.len())
            .y_desc("Average time (ms)")
            .x_desc("Algorithm")
            .x_label_formatter(&|x| {
                data.get(*x as usize)
                    .map(|(name, _)| name.to_string())
                    .unwrap_or_default()
            })
            .draw()?;

        chart.draw_series(data.iter().enumerate().map(|(i, (_, ms))| {
            Rectangle::new([(i as i32, 0.0), (i as i32, *ms)], BLUE.mix(0.7).filled())
        }))?;

        root.present()?;
        Ok(())
    }
}
