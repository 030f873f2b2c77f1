//! Sink trait and error types

use crate::model::Meeting;
use thiserror::Error;

/// Errors that can occur while writing records
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Receives finished meeting records, one per successfully extracted page.
///
/// Ownership of each record transfers to the sink; the engine holds no
/// reference to a record after emitting it.
pub trait RecordSink {
    /// Writes one record
    fn emit(&mut self, meeting: &Meeting) -> OutputResult<()>;

    /// Flushes and closes the sink
    fn finalize(&mut self) -> OutputResult<()>;
}
