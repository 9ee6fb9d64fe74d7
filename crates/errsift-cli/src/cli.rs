//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// errsift - extract new error records from the task table.
///
/// Polls the task database for rows that recorded an execution error,
/// optionally filters them by keyword, appends the matches to a JSONL output
/// file, and advances a watermark so the next run only reports new errors.
#[derive(Debug, Parser)]
#[command(name = "errsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the task database
    #[arg(short, long, env = "ERRSIFT_DATABASE")]
    pub database: PathBuf,

    /// Newline-delimited keyword file; omit to report every error
    #[arg(short, long, env = "ERRSIFT_KEYWORDS")]
    pub keywords: Option<PathBuf>,

    /// Output file for extracted records (one JSON object per line, appended)
    #[arg(short, long, env = "ERRSIFT_OUTPUT", default_value = "errorTasks.json")]
    pub output: PathBuf,

    /// Watermark file holding the last processed creation time
    #[arg(short, long, env = "ERRSIFT_WATERMARK", default_value = "errsift.watermark")]
    pub watermark: PathBuf,
}
