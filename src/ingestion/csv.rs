//! CSV ingestion implementation.

use std::path::Path;

use crate::columns::{declared_type, missing_required};
use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Ingest an employee CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain every column in [`crate::columns::REQUIRED_COLUMNS`] (order can
///   differ). Extra columns are kept, in their original position.
/// - Empty or whitespace-only cells become [`Value::Null`].
/// - Required columns never fail on a bad cell: a value that does not fit the declared type is
///   kept as [`Value::Utf8`] for the cleaning stages to judge.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestionResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<DataSet> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let missing = missing_required(headers.iter().map(String::as_str));
    if !missing.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: format!("missing required columns {missing:?}. headers={headers:?}"),
        });
    }

    let mut raw_rows: Vec<csv::StringRecord> = Vec::new();
    for result in rdr.records() {
        raw_rows.push(result?);
    }

    let fields: Vec<Field> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let data_type = declared_type(name).unwrap_or_else(|| {
                infer_column_type(raw_rows.iter().map(|r| r.get(idx).unwrap_or("")))
            });
            Field::new(name.clone(), data_type)
        })
        .collect();

    let rows = raw_rows
        .iter()
        .map(|record| {
            fields
                .iter()
                .enumerate()
                .map(|(idx, field)| parse_cell(field.data_type, record.get(idx).unwrap_or("")))
                .collect()
        })
        .collect();

    Ok(DataSet::new(Schema::new(fields), rows))
}

/// Parse a number the way a spreadsheet user would write it.
///
/// Accepts an optional leading `-`, an optional `$`, and thousands separators
/// (`"$1,234.50"`, `"-50"`, `"72000"`). Non-finite results are rejected.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s),
    };
    let body = body.strip_prefix('$').unwrap_or(body);
    if body.is_empty() || body.starts_with(['-', '+']) {
        return None;
    }
    let digits: String = body.chars().filter(|c| *c != ',').collect();
    digits
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| sign * v)
}

/// Pick a type for a passthrough column from its non-empty cells.
fn infer_column_type<'a>(cells: impl Iterator<Item = &'a str>) -> DataType {
    let mut all_int = true;
    let mut seen_any = false;
    for cell in cells.map(str::trim).filter(|c| !c.is_empty()) {
        seen_any = true;
        if cell.parse::<i64>().is_ok() {
            continue;
        }
        all_int = false;
        if !cell.parse::<f64>().is_ok_and(f64::is_finite) {
            return DataType::Utf8;
        }
    }
    match (seen_any, all_int) {
        (false, _) => DataType::Utf8,
        (true, true) => DataType::Int64,
        (true, false) => DataType::Float64,
    }
}

fn parse_cell(data_type: DataType, raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }

    match data_type {
        DataType::Utf8 => Value::Utf8(raw.to_owned()),
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .unwrap_or_else(|_| Value::Utf8(raw.to_owned())),
        DataType::Float64 => parse_number(trimmed)
            .map(Value::Float64)
            .unwrap_or_else(|| Value::Utf8(raw.to_owned())),
    }
}
