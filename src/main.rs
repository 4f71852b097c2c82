//! @ai:module:intent CLI for the sortbench program
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sortbench::{
    bench::{benchmark_all, BenchmarkHarness},
    config::SortbenchConfig,
    dataset::{DatasetLoader, DatasetLoaderTrait, Value},
    metrics::{BenchmarkReport, SortHistory},
    report::ReportGenerator,
    session::{print_rankings, print_sort_result, Session},
    sort::{is_sorted_descending, Algorithm},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sortbench")]
#[command(about = "Benchmark classical descending sorts over a numeric dataset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive sorting menu
    Run {
        /// Path to the dataset file (overrides configuration)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run a single algorithm once and print the result
    Sort {
        /// Algorithm to run: bubble, insertion or merge
        #[arg(short, long)]
        algorithm: Algorithm,

        /// Path to the dataset file
        #[arg(short, long)]
        data: PathBuf,

        /// Number of timed repetitions
        #[arg(short, long, default_value = "3")]
        repetitions: u32,
    },

    /// Benchmark all three algorithms and print the ranking
    Bench {
        /// Path to the dataset file
        #[arg(short, long)]
        data: PathBuf,

        /// Number of timed repetitions per algorithm
        #[arg(short, long, default_value = "5")]
        repetitions: u32,

        /// Output directory for JSON/Markdown/chart reports
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "sortbench.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sortbench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { data, config } => run_session(data, config),
        Commands::Sort {
            algorithm,
            data,
            repetitions,
        } => run_sort_once(algorithm, &data, repetitions),
        Commands::Bench {
            data,
            repetitions,
            output,
        } => run_bench(&data, repetitions, output),
        Commands::Init { output } => init_config(&output),
    }
}

/// @ai:intent Run the interactive session
/// @ai:effects io, fs:read
fn run_session(data: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_or_default_config(config_path)?;
    let dataset_path = data.unwrap_or_else(|| config.paths.dataset_file.clone());

    tracing::info!("Reading data from {}", dataset_path.display());
    let values = load_dataset(&dataset_path)?;

    Session::new(config, values).run()
}

/// @ai:intent One-shot sort with timing repetitions
/// @ai:effects io, fs:read
fn run_sort_once(algorithm: Algorithm, data: &Path, repetitions: u32) -> Result<()> {
    let values = load_dataset(data)?;

    let harness = BenchmarkHarness::new(repetitions);
    let run = harness.run(algorithm, &values);
    let verified = is_sorted_descending(&run.sorted);

    print_sort_result(&run, verified);
    Ok(())
}

/// @ai:intent Non-interactive benchmark-all, optionally with reports
/// @ai:effects io, fs:read, fs:write
fn run_bench(data: &Path, repetitions: u32, output: Option<PathBuf>) -> Result<()> {
    let values = load_dataset(data)?;

    let harness = BenchmarkHarness::new(repetitions);
    let mut history = SortHistory::new();
    let rankings = benchmark_all(&harness, &values, &mut history);

    print_rankings(&rankings, values.len());

    if let Some(output_dir) = output {
        let report = BenchmarkReport::new(values.len(), harness.repetitions(), rankings);
        ReportGenerator::new().generate_all(&report, &output_dir)?;
        println!("Reports written to {}", output_dir.display());
    }

    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: &Path) -> Result<()> {
    let config = SortbenchConfig::default();
    config.save(output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load a dataset, with context for the common failure
/// @ai:effects fs:read
fn load_dataset(path: &Path) -> Result<Vec<Value>> {
    let values = DatasetLoader::new()
        .load(path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;

    tracing::info!("Dataset loaded: {} elements", values.len());
    Ok(values)
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<SortbenchConfig> {
    match path {
        Some(p) => SortbenchConfig::load(&p),
        None => {
            let default_path = PathBuf::from("sortbench.toml");

            if default_path.exists() {
                SortbenchConfig::load(&default_path)
            } else {
                Ok(SortbenchConfig::default())
            }
        }
    }
}
