use anyhow::Result;
use lawmerge::{config::MergeConfig, logging, merge};
use tracing::info;

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    logging::init();

    // ─── 2) resolve paths ────────────────────────────────────────────
    let config = MergeConfig::from_env();
    info!(
        lookup = %config.lookup_path.display(),
        primary = %config.primary_path.display(),
        "startup"
    );

    // ─── 3) join + rewrite ───────────────────────────────────────────
    let report = merge::merge_files(&config.lookup_path, &config.primary_path)?;

    for line in report.summary_lines() {
        println!("{}", line);
    }
    Ok(())
}
