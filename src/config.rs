//! @ai:module:intent Configuration structs for the sortbench program
//! @ai:module:layer infrastructure
//! @ai:module:public_api SortbenchConfig, RunConfig, PathConfig
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Main configuration for sortbench
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortbenchConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub paths: PathConfig,
}

/// @ai:intent Repetition counts for timing stability
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Repetitions for a single sort-once operation.
    #[serde(default = "default_sort_repetitions")]
    pub sort_repetitions: u32,
    /// Repetitions per algorithm during benchmark-all.
    #[serde(default = "default_bench_repetitions")]
    pub bench_repetitions: u32,
}

/// @ai:intent Path configuration for input/output locations
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_dataset_file")]
    pub dataset_file: PathBuf,
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sort_repetitions: default_sort_repetitions(),
            bench_repetitions: default_bench_repetitions(),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            dataset_file: default_dataset_file(),
            reports_dir: default_reports_dir(),
        }
    }
}

fn default_sort_repetitions() -> u32 {
    3
}

fn default_bench_repetitions() -> u32 {
    5
}

fn default_dataset_file() -> PathBuf {
    PathBuf::from("dataset.txt")
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl SortbenchConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
