//! Output sink - newline-delimited JSON, appended per run

use crate::error::ExtractError;
use errsift_domain::ErrorRecord;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append records to the output file, one JSON object per line
///
/// The file is created if absent and appended to otherwise; each run's output
/// lands after the previous run's. All records are serialized before any byte
/// is written, so a serialization failure leaves the file untouched.
pub fn append_records(path: &Path, records: &[ErrorRecord]) -> Result<(), ExtractError> {
    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        lines.push(serde_json::to_string(record)?);
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    for line in &lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    Ok(())
}
