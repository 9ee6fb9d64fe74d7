//! errsift Domain Layer
//!
//! Core value types for the error-extraction pipeline. This crate defines the
//! fundamental concepts every other layer depends on:
//!
//! - **Timestamp**: a fixed-layout creation time (`YYYY-MM-DD HH:MM:SS.ffffff`)
//!   with strict chronological ordering
//! - **ErrorRecord**: one extracted error occurrence (task id, creation time,
//!   error text), immutable once built
//! - **Watermark**: the creation time of the most recently processed record,
//!   used as a lower bound for future queries
//! - **LatestSeen**: the per-query "newest row observed" result, with an
//!   explicit no-rows case instead of a sentinel value
//!
//! Infrastructure (SQL access, file persistence) lives in other crates; this
//! crate carries no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod timestamp;
pub mod watermark;

// Re-exports for convenience
pub use record::ErrorRecord;
pub use timestamp::{ParseError, Timestamp, TIMESTAMP_LAYOUT};
pub use watermark::{LatestSeen, Watermark};
