//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during an extraction run
///
/// There is no retry policy: every variant terminates the run, and the
/// watermark file is never written past a failure.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Missing or invalid required input (e.g. the keyword file path)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Task table or watermark store failure
    #[error("Store error: {0}")]
    Store(#[from] errsift_store::StoreError),

    /// Output or keyword file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
