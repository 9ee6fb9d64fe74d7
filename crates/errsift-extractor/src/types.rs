//! Result types for an extraction run

use errsift_domain::Watermark;

/// What one run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of records appended to the output file
    pub records_written: usize,

    /// The watermark the run resolved to; equals the previously loaded value
    /// when no query observed a row
    pub watermark: Watermark,

    /// True if the run wrote output and persisted the watermark
    pub flushed: bool,
}

impl RunOutcome {
    /// Human-readable one-line summary of the run
    pub fn summary(&self) -> String {
        if self.flushed {
            format!(
                "{} new error record(s) written; watermark now {}",
                self.records_written, self.watermark
            )
        } else {
            format!("no new error records since {}", self.watermark)
        }
    }
}
