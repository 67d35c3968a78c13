//! CSV and JSON export of analysis tables

use std::{fs::File, io::BufWriter, path::Path};

use serde::Serialize;

use crate::{Error, Result};

/// Write `records` as CSV with a header row taken from the field names.
pub fn write_csv<P, T>(path: P, records: &[T]) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `records` as a pretty-printed JSON array.
pub fn write_json<P, T>(path: P, records: &[T]) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)?;
    Ok(())
}

/// Pick the format from the file extension: `.json` for JSON, CSV otherwise.
pub fn write_records<P, T>(path: P, records: &[T]) -> Result<()>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let is_json = path
        .as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        write_json(path, records)
    } else {
        write_csv(path, records)
    }
}
