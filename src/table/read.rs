// src/table/read.rs

use crate::error::TableError;
use crate::table::{ExtraFields, Row, Table, UTF8_BOM};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};
use tracing::info;

/// Open `path` and parse it as a CSV table with a header row.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_table<P: AsRef<Path>>(path: P, extra: ExtraFields) -> Result<Table> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    let table = read_table_from(file, path, extra)?;
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        "loaded table"
    );
    Ok(table)
}

/// Parse CSV from `reader`. `origin` only labels errors.
///
/// Short records are accepted and simply lack the trailing columns.
/// Records with more fields than the header are handled per `extra`.
/// A leading UTF-8 BOM is noted on the table so it can be written back.
pub fn read_table_from<R: Read>(reader: R, origin: &Path, extra: ExtraFields) -> Result<Table> {
    let mut reader = BufReader::new(reader);
    let bom = reader
        .fill_buf()
        .with_context(|| format!("Failed to read {:?}", origin))?
        .starts_with(UTF8_BOM);

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("Failed to read header row of {:?}", origin))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {:?} at record {}", origin, idx))?;

        if record.len() > headers.len() && extra == ExtraFields::Reject {
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2);
            return Err(TableError::RaggedRow {
                path: origin.to_path_buf(),
                line,
                expected: headers.len(),
                found: record.len(),
            }
            .into());
        }

        let row: Row = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    Ok(Table { headers, rows, bom })
}
