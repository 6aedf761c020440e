// src/error.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatagenError>;

#[derive(Debug, Error)]
pub enum DatagenError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A decoded file does not carry the expected columns
    #[error("Schema mismatch: {0}")]
    Schema(String),

    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),
}

impl DatagenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatagenError::Io {
            path: path.into(),
            source,
        }
    }
}
