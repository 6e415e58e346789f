// src/merge/mod.rs

use crate::lookup::{LookupTable, ENRICHMENT_FIELDS, KEY_COLUMN};
use crate::table::{read_table, write_table, ExtraFields, Row, Table};
use anyhow::Result;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};

pub mod report;

pub use report::{CoverageReport, MergeReport};

/// Read the primary file and check that it can be joined at all.
/// Rows longer than the header are rejected: they could not be written back.
pub fn load_primary<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let table = read_table(path, ExtraFields::Reject)?;
    table.require_column(KEY_COLUMN, path)?;
    Ok(table)
}

/// Apply the lookup entry for `row`'s id, if any. Returns `true` on a hit.
///
/// On a hit all six enrichment fields are overwritten, empty values included.
/// On a miss only absent fields are filled with `""`; values left by an
/// earlier run stay as they are.
pub fn merge_row(row: &mut Row, lookup: &LookupTable) -> bool {
    let id = row.get(KEY_COLUMN).map(String::as_str).unwrap_or("");
    match lookup.get(id) {
        Some(enrichment) => {
            for (field, value) in enrichment.fields() {
                row.insert(field.to_string(), value.to_string());
            }
            true
        }
        None => {
            for field in ENRICHMENT_FIELDS {
                row.entry(field.to_string()).or_default();
            }
            false
        }
    }
}

/// Whether the row carries any AIPAC or DMFI support flag.
pub fn has_support_flag(row: &Row) -> bool {
    ["aipac_supported", "dmfi_supported"]
        .iter()
        .any(|k| row.get(*k).is_some_and(|v| !v.is_empty()))
}

/// Left-outer-join `lookup` onto `table` in memory.
///
/// The header gains any missing enrichment columns (in fixed order); row
/// count and row order are unchanged.
pub fn merge_tables(lookup: &LookupTable, table: &mut Table) -> MergeReport {
    let mut report = MergeReport::default();
    for field in ENRICHMENT_FIELDS {
        if table.ensure_column(field) {
            report.appended_columns.push(field.to_string());
        }
    }

    for row in table.rows.iter_mut() {
        if merge_row(row, lookup) {
            report.joined += 1;
        } else {
            let id = row.get(KEY_COLUMN).cloned().unwrap_or_default();
            debug!(id = %id, "no lookup entry");
            report.unmatched_ids.push(id);
        }
        if has_support_flag(row) {
            report.matched += 1;
        }
    }
    report.rows_written = table.rows.len();
    report
}

/// Enrich the primary CSV at `primary_path` from `lookup_path` and rewrite
/// it in place. Both files are parsed before the primary file is truncated.
pub fn merge_files<P: AsRef<Path>, Q: AsRef<Path>>(
    lookup_path: P,
    primary_path: Q,
) -> Result<MergeReport> {
    let lookup = LookupTable::load(lookup_path.as_ref())?;
    let mut table = load_primary(primary_path.as_ref())?;

    let report = merge_tables(&lookup, &mut table);
    info!(
        rows = report.rows_written,
        joined = report.joined,
        matched = report.matched,
        appended = report.appended_columns.len(),
        "merged"
    );

    write_table(primary_path.as_ref(), &table)?;
    Ok(report)
}

/// Run the join without writing and describe what it would do.
pub fn coverage<P: AsRef<Path>, Q: AsRef<Path>>(
    lookup_path: P,
    primary_path: Q,
) -> Result<CoverageReport> {
    let lookup = LookupTable::load(lookup_path.as_ref())?;
    let mut table = load_primary(primary_path.as_ref())?;
    let merge = merge_tables(&lookup, &mut table);

    Ok(CoverageReport {
        generated_at: Utc::now(),
        lookup_path: lookup_path.as_ref().to_path_buf(),
        primary_path: primary_path.as_ref().to_path_buf(),
        lookup_entries: lookup.len(),
        merge,
    })
}
