// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Structural problems with an input table.
#[derive(Error, Debug)]
pub enum TableError {
    /// A required header is absent from the file
    #[error("{path:?} has no `{column}` column")]
    MissingColumn { column: String, path: PathBuf },

    /// A record carries more fields than the header names
    #[error("{path:?} line {line}: expected at most {expected} fields, found {found}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
}
