//! Writing a [`DataSet`] back out as CSV.

use std::io::Write;
use std::path::Path;

use crate::error::IngestionResult;
use crate::types::DataSet;

/// Write `dataset` to `path` as CSV: header row first, columns in schema order, no index column.
pub fn write_csv_to_path(dataset: &DataSet, path: impl AsRef<Path>) -> IngestionResult<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    write_csv_to_writer(dataset, &mut wtr)
}

/// Write `dataset` into an existing CSV writer and flush it.
pub fn write_csv_to_writer<W: Write>(
    dataset: &DataSet,
    wtr: &mut csv::Writer<W>,
) -> IngestionResult<()> {
    wtr.write_record(dataset.schema.field_names())?;
    for row in &dataset.rows {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}
