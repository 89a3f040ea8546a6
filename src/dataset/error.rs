//! Dataset error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing dataset documents
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse dataset: {0}")]
    Parse(String),
}
