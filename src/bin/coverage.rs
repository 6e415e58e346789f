// src/bin/coverage.rs

use anyhow::{Context, Result};
use lawmerge::{config::MergeConfig, logging, merge};
use std::io::{self, Write};
use tracing::info;

/// Dry run: report how the lawmakers file would join onto the scores file,
/// without touching either.
fn main() -> Result<()> {
    logging::init();

    let config = MergeConfig::from_env();
    info!(
        lookup = %config.lookup_path.display(),
        primary = %config.primary_path.display(),
        "startup"
    );
    let report = merge::coverage(&config.lookup_path, &config.primary_path)?;
    info!(
        rows = report.merge.rows_written,
        unmatched = report.merge.unmatched_ids.len(),
        "coverage computed"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report).context("serializing coverage report")?;
    out.write_all(b"\n")?;
    Ok(())
}
