// src/merge/report.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of joining a lookup table onto a primary table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Rows in the merged table (all of them are written).
    pub rows_written: usize,
    /// Rows whose id was found in the lookup table.
    pub joined: usize,
    /// Rows with a non-empty `aipac_supported` or `dmfi_supported` after merging.
    pub matched: usize,
    /// Enrichment columns that were not in the primary header.
    pub appended_columns: Vec<String>,
    /// Ids of rows with no lookup entry, in row order.
    pub unmatched_ids: Vec<String>,
}

/// Dry-run summary printed by the `coverage` binary.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub generated_at: DateTime<Utc>,
    pub lookup_path: PathBuf,
    pub primary_path: PathBuf,
    pub lookup_entries: usize,
    #[serde(flatten)]
    pub merge: MergeReport,
}

impl MergeReport {
    /// The two lines the `lawmerge` binary prints on success.
    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!("Successfully merged data for {} lawmakers", self.rows_written),
            format!("Matched {} lawmakers with AIPAC/DMFI data", self.matched),
        ]
    }
}
