//! errsift Extractor
//!
//! Drives one incremental extraction run against the task table.
//!
//! # Overview
//!
//! A run is a single linear pass: load the prior watermark, query the task
//! table once per keyword (or once unfiltered), merge the results, and flush.
//!
//! ```text
//! Watermark file → Extractor → TaskStore (one query per keyword)
//!                      ↓
//!              JSONL output file + new watermark
//! ```
//!
//! # Key Semantics
//!
//! - **Incremental**: only rows created strictly after the watermark are
//!   reported; the first run (unset watermark) reports everything
//! - **No deduplication**: a record matching two keywords appears twice
//! - **Monotonic watermark**: a keyword with zero matches never regresses the
//!   watermark, and nothing is persisted unless the run found records
//! - **All-or-nothing**: any failure aborts the run before the watermark is
//!   written; output and watermark are only written back-to-back on the
//!   success path
//!
//! # Example Usage
//!
//! ```no_run
//! use errsift_extractor::Extractor;
//! use errsift_store::{TaskStore, WatermarkStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tasks = TaskStore::open("tasks.db")?;
//! let watermarks = WatermarkStore::new("errsift.watermark");
//! let keywords = vec!["timeout".to_string(), "oom".to_string()];
//!
//! let extractor = Extractor::new(tasks, watermarks, keywords, "errorTasks.json");
//! let outcome = extractor.run()?;
//! println!("{}", outcome.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
mod keywords;
mod sink;
mod types;

pub use error::ExtractError;
pub use extractor::Extractor;
pub use keywords::load_keywords;
pub use types::RunOutcome;
