//! @ai:module:intent Define error types for dataset loading and parsing
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all sortbench boundary operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read dataset {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid numeric token: {0:?}")]
    InvalidToken(String),

    #[error("Parse error at line {line}: invalid numeric token {token:?}")]
    Parse { line: usize, token: String },

    #[error("Dataset contains no values")]
    EmptyDataset,

    #[error("Unknown algorithm {0:?} (expected bubble, insertion or merge)")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, Error>;
