//! Keyword list loading

use crate::error::ExtractError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load keywords from a newline-delimited file
///
/// Each non-empty line is one keyword, taken verbatim (interior whitespace is
/// significant). Blank lines are skipped; filtering of other degenerate
/// keywords is the matching rule's job, not the loader's. A missing file is a
/// configuration error, since the caller explicitly asked for filtering.
pub fn load_keywords(path: &Path) -> Result<Vec<String>, ExtractError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            ExtractError::Config(format!("keyword file not found: {}", path.display()))
        }
        _ => ExtractError::Io(e),
    })?;

    Ok(contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
