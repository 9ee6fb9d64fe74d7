//! Core Extractor implementation

use crate::error::ExtractError;
use crate::sink;
use crate::types::RunOutcome;
use errsift_domain::{ErrorRecord, Watermark};
use errsift_store::{TaskStore, WatermarkStore};
use std::path::PathBuf;
use tracing::{debug, info};

/// Drives one incremental extraction run
///
/// Holds its collaborators as explicit values; there is no process-wide
/// connection or state. The caller is responsible for ensuring only one run
/// touches a given watermark file at a time.
pub struct Extractor {
    tasks: TaskStore,
    watermarks: WatermarkStore,
    keywords: Vec<String>,
    output: PathBuf,
}

impl Extractor {
    /// Create a new Extractor
    ///
    /// An empty `keywords` list means a single unfiltered query per run.
    pub fn new(
        tasks: TaskStore,
        watermarks: WatermarkStore,
        keywords: Vec<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tasks,
            watermarks,
            keywords,
            output: output.into(),
        }
    }

    /// Perform one extraction run
    ///
    /// Loads the prior watermark, queries the task table once per keyword (in
    /// list order, or once unfiltered), accumulates the results without
    /// deduplication, and folds each query's newest creation time into a
    /// candidate watermark. If anything was found, the records are appended
    /// to the output file and the new watermark is persisted, in that order;
    /// otherwise neither file is touched.
    pub fn run(&self) -> Result<RunOutcome, ExtractError> {
        let loaded = self.watermarks.load()?;
        let lower_bound = loaded.lower_bound();

        info!(
            watermark = %loaded,
            keywords = self.keywords.len(),
            "starting extraction run"
        );

        let unfiltered = [String::new()];
        let keywords: &[String] = if self.keywords.is_empty() {
            &unfiltered
        } else {
            &self.keywords
        };

        let mut collected: Vec<ErrorRecord> = Vec::new();
        let mut candidate = loaded;

        for keyword in keywords {
            let batch = self.tasks.query_errors(keyword, lower_bound)?;
            debug!(keyword = %keyword, rows = batch.records.len(), "keyword query done");

            collected.extend(batch.records);
            // NoneFound is skipped inside advance: a keyword with zero
            // matches neither regresses nor advances the candidate.
            candidate.advance(batch.latest_seen);
        }

        if collected.is_empty() {
            info!(watermark = %loaded, "no new error records");
            return Ok(RunOutcome {
                records_written: 0,
                watermark: loaded,
                flushed: false,
            });
        }

        // Output first, watermark second; both only after every query
        // succeeded. A failure between the two leaves an unadvanced
        // watermark, so the records are re-reported rather than lost.
        sink::append_records(&self.output, &collected)?;
        if let Watermark::At(ts) = candidate {
            self.watermarks.save(ts)?;
        }

        info!(
            records = collected.len(),
            watermark = %candidate,
            output = %self.output.display(),
            "extraction run complete"
        );

        Ok(RunOutcome {
            records_written: collected.len(),
            watermark: candidate,
            flushed: true,
        })
    }
}
