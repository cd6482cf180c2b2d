use thiserror::Error;

/// Convenience result type for loading, cleaning, and writing.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by ingestion, the cleaning pipeline, and CSV output.
///
/// Field-level problems (a bad age, an unparsable date) never surface here; they are repaired
/// in-band with sentinel values. Only I/O and table-shape failures are errors.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error (malformed input, unequal record lengths, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not contain a column the cleaner requires.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}
