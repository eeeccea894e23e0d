use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactLogError {
    #[error("Failed to load configuration from {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load configuration from {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: ProfileError,
    },

    #[error("CSV file not found: {path}")]
    CsvNotFoundError { path: PathBuf },

    #[error("Error reading CSV file {path}: {source}")]
    CsvReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading CSV file {path}: {source}")]
    CsvParseError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidArgumentError { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Validation,
}

impl ContactLogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigReadError { .. } | Self::ConfigParseError { .. } => {
                ErrorCategory::Configuration
            }
            Self::CsvNotFoundError { .. }
            | Self::CsvReadError { .. }
            | Self::CsvParseError { .. } => ErrorCategory::Input,
            Self::OutputWriteError { .. } => ErrorCategory::Output,
            Self::InvalidArgumentError { .. } => ErrorCategory::Validation,
        }
    }

    /// Process exit status for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Input => 3,
            ErrorCategory::Output => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("配置文件錯誤: {}", self),
            ErrorCategory::Input => format!("日誌文件錯誤: {}", self),
            ErrorCategory::Output => format!("輸出文件錯誤: {}", self),
            ErrorCategory::Validation => format!("參數錯誤: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ConfigReadError { .. } => "Check that the configuration file exists and is readable",
            Self::ConfigParseError { .. } => {
                "Make sure the configuration file is a valid JSON (or .toml) object of station fields"
            }
            Self::CsvNotFoundError { .. } => "Check the --csv path",
            Self::CsvReadError { .. } => "Make sure the CSV file is readable UTF-8 text",
            Self::CsvParseError { .. } => "Make sure the CSV file is comma-separated with a header row",
            Self::OutputWriteError { .. } => {
                "Check that the output directory exists and is writable"
            }
            Self::InvalidArgumentError { .. } => "Run with --help to see the expected arguments",
        }
    }
}

/// Why a station profile document could not be turned into a profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("file is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Toml(#[from] toml::de::Error),

    #[error("expected an object of station fields, found {found}")]
    NotAnObject { found: &'static str },
}

pub type Result<T> = std::result::Result<T, ContactLogError>;
