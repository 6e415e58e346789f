// src/table/write.rs

use crate::table::{Table, UTF8_BOM};
use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::{fs::File, io::Write, path::Path};
use tracing::info;

/// Truncate `path` and write `table` to it: header first, then every row.
///
/// No temp file or rename is involved, so a failure mid-write can leave
/// `path` truncated.
#[tracing::instrument(level = "info", skip(path, table), fields(path = %path.as_ref().display()))]
pub fn write_table<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("Failed to create CSV file: {:?}", path))?;
    write_table_to(file, table).with_context(|| format!("Failed to write {:?}", path))?;
    info!(rows = table.rows.len(), "wrote table");
    Ok(())
}

/// Serialize `table` as CSV with CRLF record terminators.
/// Columns a row does not carry are written as empty fields.
pub fn write_table_to<W: Write>(mut writer: W, table: &Table) -> Result<()> {
    if table.bom {
        writer.write_all(UTF8_BOM)?;
    }
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(
            table
                .headers
                .iter()
                .map(|h| row.get(h).map(String::as_str).unwrap_or("")),
        )?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{read_table, read_table_from, ExtraFields, Row};

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn writes_header_then_rows_with_crlf() -> Result<()> {
        let mut t = Table::new(vec!["bioguide_id".into(), "name".into()]);
        t.rows.push(row(&[("bioguide_id", "A001"), ("name", "Smith")]));
        t.rows.push(row(&[("bioguide_id", "B002")]));

        let mut buf = Vec::new();
        write_table_to(&mut buf, &t)?;
        assert_eq!(
            String::from_utf8(buf)?,
            "bioguide_id,name\r\nA001,Smith\r\nB002,\r\n"
        );
        Ok(())
    }

    #[test]
    fn quotes_only_when_needed() -> Result<()> {
        let mut t = Table::new(vec!["office_address".into()]);
        t.rows
            .push(row(&[("office_address", "123 Main St, Washington DC")]));
        let mut buf = Vec::new();
        write_table_to(&mut buf, &t)?;
        assert_eq!(
            String::from_utf8(buf)?,
            "office_address\r\n\"123 Main St, Washington DC\"\r\n"
        );
        Ok(())
    }

    #[test]
    fn disk_output_reads_back_unchanged() -> Result<()> {
        let src = "bioguide_id,name,office_address\nA001,Smith,\"1 \"\"Quoted\"\" Pl\"\n";
        let t = read_table_from(src.as_bytes(), Path::new("mem"), ExtraFields::Reject)?;

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.csv");
        write_table(&path, &t)?;
        assert_eq!(read_table(&path, ExtraFields::Reject)?, t);
        Ok(())
    }

    #[test]
    fn bom_is_written_back() -> Result<()> {
        let t = read_table_from(
            "\u{feff}bioguide_id\nA001\n".as_bytes(),
            Path::new("mem"),
            ExtraFields::Reject,
        )?;
        let mut buf = Vec::new();
        write_table_to(&mut buf, &t)?;
        assert_eq!(String::from_utf8(buf)?, "\u{feff}bioguide_id\r\nA001\r\n");
        Ok(())
    }
}
