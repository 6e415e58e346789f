// src/lookup.rs

use crate::table::{read_table, ExtraFields, Row, Table};
use anyhow::Result;
use std::{collections::HashMap, path::Path};
use tracing::{info, warn};

/// The join key shared by both files.
pub const KEY_COLUMN: &str = "bioguide_id";

/// Enrichment columns, in the order they are appended to the primary table.
pub const ENRICHMENT_FIELDS: [&str; 6] = [
    "district",
    "office_phone",
    "office_address",
    "district_offices",
    "aipac_supported",
    "dmfi_supported",
];

/// The six attributes copied from a lawmaker row onto a matching score row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
    pub district: String,
    pub office_phone: String,
    pub office_address: String,
    pub district_offices: String,
    pub aipac_supported: String,
    pub dmfi_supported: String,
}

impl Enrichment {
    /// Pull the enrichment columns out of `row`; absent columns become `""`.
    pub fn from_row(row: &Row) -> Self {
        let get = |k: &str| row.get(k).cloned().unwrap_or_default();
        Self {
            district: get("district"),
            office_phone: get("office_phone"),
            office_address: get("office_address"),
            district_offices: get("district_offices"),
            aipac_supported: get("aipac_supported"),
            dmfi_supported: get("dmfi_supported"),
        }
    }

    /// `(column, value)` pairs in [`ENRICHMENT_FIELDS`] order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            (ENRICHMENT_FIELDS[0], self.district.as_str()),
            (ENRICHMENT_FIELDS[1], self.office_phone.as_str()),
            (ENRICHMENT_FIELDS[2], self.office_address.as_str()),
            (ENRICHMENT_FIELDS[3], self.district_offices.as_str()),
            (ENRICHMENT_FIELDS[4], self.aipac_supported.as_str()),
            (ENRICHMENT_FIELDS[5], self.dmfi_supported.as_str()),
        ]
    }
}

/// `bioguide_id` → enrichment record. Read-only once built.
#[derive(Debug, Default, Clone)]
pub struct LookupTable {
    entries: HashMap<String, Enrichment>,
}

impl LookupTable {
    /// Load and index the lawmakers file at `path`. Cells beyond the header
    /// are ignored, since only named columns are ever read.
    #[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let table = read_table(path, ExtraFields::Ignore)?;
        let lookup = Self::from_table(&table, path)?;
        info!(entries = lookup.len(), "indexed lookup table");
        Ok(lookup)
    }

    /// Index `table` by [`KEY_COLUMN`]. Rows with an empty key are skipped;
    /// on a repeated key the later row wins.
    pub fn from_table(table: &Table, origin: &Path) -> Result<Self> {
        table.require_column(KEY_COLUMN, origin)?;

        let mut entries = HashMap::with_capacity(table.rows.len());
        for (idx, row) in table.rows.iter().enumerate() {
            let id = row.get(KEY_COLUMN).map(String::as_str).unwrap_or("");
            if id.is_empty() {
                warn!(record = idx, "lookup row has no {}, skipping", KEY_COLUMN);
                continue;
            }
            if entries
                .insert(id.to_string(), Enrichment::from_row(row))
                .is_some()
            {
                warn!(id, "duplicate lookup id, keeping later row");
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&Enrichment> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Enrichment)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (String, Enrichment)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use crate::table::read_table_from;
    use std::fs;

    fn parse(csv: &str) -> Result<LookupTable> {
        let t = read_table_from(csv.as_bytes(), Path::new("lawmakers.csv"), ExtraFields::Ignore)?;
        LookupTable::from_table(&t, Path::new("lawmakers.csv"))
    }

    #[test]
    fn missing_optional_columns_default_to_empty() -> Result<()> {
        let lookup = parse("bioguide_id,name,district\nA001,Smith,5\n")?;
        let e = lookup.get("A001").expect("A001 indexed");
        assert_eq!(e.district, "5");
        assert_eq!(e.office_phone, "");
        assert_eq!(e.dmfi_supported, "");
        Ok(())
    }

    #[test]
    fn empty_keys_are_not_indexed() -> Result<()> {
        let lookup = parse("bioguide_id,district\n,9\nA001,5\n")?;
        assert_eq!(lookup.len(), 1);
        assert!(lookup.get("").is_none());
        Ok(())
    }

    #[test]
    fn load_ignores_cells_past_the_header() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("lawmakers.csv");
        fs::write(&path, "bioguide_id,district\nA001,5,extra\n")?;

        let lookup = LookupTable::load(&path)?;
        assert_eq!(lookup.get("A001").map(|e| e.district.as_str()), Some("5"));
        Ok(())
    }

    #[test]
    fn later_duplicate_wins() -> Result<()> {
        let lookup = parse("bioguide_id,district\nA001,5\nA001,6\n")?;
        assert_eq!(lookup.get("A001").map(|e| e.district.as_str()), Some("6"));
        Ok(())
    }

    #[test]
    fn key_column_is_required() {
        let err = parse("name,district\nSmith,5\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TableError>(),
            Some(TableError::MissingColumn { .. })
        ));
    }

    #[test]
    fn fields_follow_enrichment_order() {
        let e = Enrichment {
            district: "5".into(),
            aipac_supported: "yes".into(),
            ..Default::default()
        };
        let names: Vec<&str> = e.fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(names, ENRICHMENT_FIELDS);
        assert_eq!(e.fields()[4], ("aipac_supported", "yes"));
    }
}
