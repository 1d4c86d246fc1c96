use thiserror::Error;

use crate::types::DataType;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for in-memory transformations.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Convenience result type for the exploration pipeline.
pub type ExploreResult<T> = Result<T, ExploreError>;

/// Error type returned when a CSV file cannot be loaded.
///
/// Any of these is fatal for the run: no partial dataset is produced.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (ragged rows, invalid UTF-8, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not conform to the provided schema (missing columns, no header, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// Error type returned by the filter/aggregate/reduce transformations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    /// A requested column is not part of the dataset schema.
    #[error("unknown column '{column}' (available: {})", available.join(", "))]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },

    /// A numeric operation was requested on a non-numeric column.
    #[error("column '{column}' has type {data_type}, expected a numeric column")]
    NotNumeric { column: String, data_type: DataType },
}

/// Error type of [`crate::explore::Explorer`], covering loading and processing.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// The input could not be loaded.
    #[error(transparent)]
    Ingestion(#[from] IngestionError),

    /// A pipeline step was given an unusable column.
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}
