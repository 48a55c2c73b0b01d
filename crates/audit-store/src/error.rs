//! Error types for the audit record store.

use thiserror::Error;

/// Errors that can occur while loading or serializing audit records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The log source could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the log source was not a valid JSON object.
    ///
    /// Carries the 1-based line number and the offending line text.
    /// A load that hits this aborts entirely; nothing is committed.
    #[error("invalid JSON object on line {line}: {content}")]
    Parse {
        /// 1-based line number of the bad line.
        line: usize,
        /// The raw text of the bad line.
        content: String,
    },

    /// A parsed JSON value was not an object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// Serialization of an already-loaded record failed.
    ///
    /// This should not happen for records that parsed successfully;
    /// it indicates an internal invariant violation, not bad input.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
