//! errsift Storage Layer
//!
//! Two persistence concerns live here:
//!
//! - [`TaskStore`]: read-only SQLite access to the task table, issuing the
//!   filtered error queries the orchestrator needs
//! - [`WatermarkStore`]: the single-value watermark file, loaded at the start
//!   of a run and overwritten only on the success path
//!
//! # Examples
//!
//! ```no_run
//! use errsift_store::TaskStore;
//! use errsift_domain::Watermark;
//!
//! let store = TaskStore::open("tasks.db").unwrap();
//! let batch = store.query_errors("timeout", Watermark::Unset.lower_bound()).unwrap();
//! println!("{} new error rows", batch.records.len());
//! ```

#![warn(missing_docs)]

pub mod tasks;
pub mod watermark;

pub use tasks::{QueryBatch, TaskStore};
pub use watermark::WatermarkStore;

use errsift_domain::ParseError;
use thiserror::Error;

/// Errors that can occur during storage operations
///
/// Every variant is fatal to the run: there are no retries, and no partial
/// results are returned past a failure.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error (connection or query)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored timestamp did not match the fixed layout
    #[error("Timestamp error: {0}")]
    Parse(#[from] ParseError),

    /// Watermark file read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
