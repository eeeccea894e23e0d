pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::LogPageEngine, pipeline::ContactLogPipeline};
pub use domain::model::{LogRecord, LogTable, StationProfile};
pub use utils::error::{ContactLogError, Result};
