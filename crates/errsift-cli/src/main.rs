//! errsift binary - one extraction run per invocation.
//!
//! Intended to be driven by an external scheduler (cron or similar); the
//! binary itself does no looping and no locking, so the scheduler must not
//! overlap invocations that share a watermark file.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use errsift_extractor::{load_keywords, Extractor};
use errsift_store::{TaskStore, WatermarkStore};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let keywords = match &cli.keywords {
        Some(path) => load_keywords(path)?,
        None => Vec::new(),
    };

    let tasks = TaskStore::open(&cli.database)
        .with_context(|| format!("opening task database {}", cli.database.display()))?;
    let watermarks = WatermarkStore::new(&cli.watermark);

    let extractor = Extractor::new(tasks, watermarks, keywords, &cli.output);
    let outcome = extractor.run()?;
    println!("{}", outcome.summary());

    Ok(())
}
