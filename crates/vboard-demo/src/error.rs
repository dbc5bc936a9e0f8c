#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;
use vboard_core::{ConfigError, ModelError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid initial data: {0}")]
    Model(#[from] ModelError),
    #[error("failed to read trace {path}: {source}")]
    TraceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("trace line {line}: {source}")]
    TraceParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code: 2 for bad input, 1 for everything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Model(_) | Self::TraceParse { .. } => 2,
            Self::TraceIo { .. } | Self::Output(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
