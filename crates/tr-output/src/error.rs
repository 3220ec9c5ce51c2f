//! Error types for tr-output.

use thiserror::Error;

/// Anything that can go wrong writing simulation output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite output: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[cfg(feature = "parquet")]
    #[error("Arrow batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet output: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

pub type OutputResult<T> = Result<T, OutputError>;
