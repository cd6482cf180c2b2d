//! Employee_ID padding.

use crate::columns::EMPLOYEE_ID;
use crate::types::{DataSet, DataType, Value};

/// Width every identifier is left-padded to.
pub const ID_WIDTH: usize = 6;

/// Left-pad the textual form of `value` with `0` to [`ID_WIDTH`] characters.
///
/// This is pure padding: no numeric parsing, and longer values are never truncated. A missing
/// identifier pads the empty string. A leading `+` or `-` stays in front of the zeros
/// (`"-42"` → `"-00042"`); the sign itself is removed later by character stripping.
pub fn pad_identifier(value: &Value) -> String {
    let text = value.to_string();
    let text = text.trim();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+' | b'-') => text.split_at(1),
        _ => ("", text),
    };
    let zeros = ID_WIDTH.saturating_sub(text.chars().count());
    format!("{sign}{}{rest}", "0".repeat(zeros))
}

/// Replace every Employee_ID cell with its padded text form.
pub fn pad_identifiers(dataset: DataSet) -> DataSet {
    let Some(idx) = dataset.schema.index_of(EMPLOYEE_ID) else {
        return dataset;
    };
    dataset
        .map_column(idx, |v| Value::Utf8(pad_identifier(&v)))
        .with_column_type(idx, DataType::Utf8)
}
