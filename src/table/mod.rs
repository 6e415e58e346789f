// src/table/mod.rs

use crate::error::TableError;
use anyhow::Result;
use std::{collections::HashMap, path::Path};

pub mod read;
pub mod write;

pub use read::{read_table, read_table_from};
pub use write::{write_table, write_table_to};

/// Byte-order mark some spreadsheet exports put at the start of a file.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// What to do with a record that has more fields than the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraFields {
    /// Fail with [`TableError::RaggedRow`]; such a row cannot be written back.
    Reject,
    /// Drop the unnamed trailing cells.
    Ignore,
}

/// One data row, keyed by column name.
pub type Row = HashMap<String, String>;

/// A CSV file held fully in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Table {
    /// Column names in file order, plus any columns appended since loading.
    pub headers: Vec<String>,
    /// Data rows in file order. A row may lack columns the header names
    /// (short records); those are written back as empty fields.
    pub rows: Vec<Row>,
    /// The source started with a UTF-8 BOM; it is written back the same way.
    pub bom: bool,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            bom: false,
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Append `name` to the header unless it is already present.
    /// Returns `true` if the column was appended.
    pub fn ensure_column(&mut self, name: &str) -> bool {
        if self.has_column(name) {
            return false;
        }
        self.headers.push(name.to_string());
        true
    }

    /// Fail with [`TableError::MissingColumn`] if `name` is not in the header.
    pub fn require_column(&self, name: &str, origin: &Path) -> Result<()> {
        if self.has_column(name) {
            Ok(())
        } else {
            Err(TableError::MissingColumn {
                column: name.to_string(),
                path: origin.to_path_buf(),
            }
            .into())
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
