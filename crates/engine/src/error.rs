use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("improperly formed swap n-gram '{input}': exactly one ',' expected")]
    InvalidSwap { input: String },

    #[error("must be a .txt file: {}", path.display())]
    NotText { path: PathBuf },

    #[error("Failed to check file '{}': {source}", path.display())]
    FileStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open file '{}': {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} of '{}' is {len} bytes, exceeding the {max} byte limit", path.display())]
    LineTooLong {
        path: PathBuf,
        line: usize,
        len: usize,
        max: usize,
    },

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl EngineError {
    /// Whether the error was raised while validating input, before any file was read.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSwap { .. } | Self::NotText { .. } | Self::FileStat { .. } | Self::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
