//! Watermark file persistence - one timestamp, overwritten each run

use crate::StoreError;
use errsift_domain::{Timestamp, Watermark};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Loads and saves the single persisted watermark value
///
/// The file holds one timestamp string in the fixed layout, with a trailing
/// newline. An absent or empty file means no watermark has been persisted
/// yet. The caller only invokes [`WatermarkStore::save`] after a run found at
/// least one record, so a run with zero results never touches the file.
pub struct WatermarkStore {
    path: PathBuf,
}

impl WatermarkStore {
    /// Create a store backed by the given file path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted watermark
    ///
    /// Returns [`Watermark::Unset`] when the file does not exist or is empty.
    /// A file that exists but does not parse is fatal: a corrupted watermark
    /// must not silently widen or narrow the query window.
    pub fn load(&self) -> Result<Watermark, StoreError> {
        if !self.path.exists() {
            return Ok(Watermark::Unset);
        }

        let contents = fs::read_to_string(&self.path)?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(Watermark::Unset);
        }

        let ts = Timestamp::parse(trimmed)?;
        debug!(watermark = %ts, path = %self.path.display(), "loaded watermark");
        Ok(Watermark::At(ts))
    }

    /// Overwrite the persisted watermark
    ///
    /// Writes a sibling temp file first and renames it over the target, so a
    /// failed write leaves the previous value intact.
    pub fn save(&self, ts: Timestamp) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, format!("{}\n", ts))?;
        fs::rename(&tmp, &self.path)?;
        debug!(watermark = %ts, path = %self.path.display(), "saved watermark");
        Ok(())
    }
}
