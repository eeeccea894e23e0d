pub mod cli;
pub mod profile;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-log")]
#[command(about = "Generate an HTML contact log from CSV data")]
pub struct CliConfig {
    /// Path to the input CSV file containing log records
    #[arg(long = "csv", value_name = "PATH")]
    pub csv_path: PathBuf,

    /// Path to the JSON (or .toml) configuration file for station details
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: PathBuf,

    /// Path to write the generated HTML file
    #[arg(long = "output", value_name = "PATH")]
    pub output_path: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each stage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("csv", &self.csv_path)?;
        validate_path("config", &self.config_path)?;
        validate_path("output", &self.output_path)?;
        validate_distinct_paths(
            "output",
            &self.output_path,
            &[self.csv_path.as_path(), self.config_path.as_path()],
        )
    }
}
