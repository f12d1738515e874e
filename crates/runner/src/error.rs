//! Runner errors

use std::path::PathBuf;

use thiserror::Error;
use tickfactor_core::RecordError;
use tickfactor_factors::ConfigError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid decimal {value:?} in {} row {row}", .path.display())]
    InvalidDecimal {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("Invalid record in {} row {row}: {source}", .path.display())]
    InvalidRecord {
        path: PathBuf,
        row: usize,
        #[source]
        source: RecordError,
    },

    #[error("Table {} has no header row", .0.display())]
    MissingHeader(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Missing data root: pass --data-root or set DATA_ROOT")]
    MissingDataRoot,
}

impl RunnerError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        RunnerError::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
