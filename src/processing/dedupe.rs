//! Exact duplicate-row removal.

use std::collections::HashSet;

use crate::types::{DataSet, Value};

/// Hashable view of a cell. Floats compare by bit pattern with `-0.0` folded into `0.0`.
#[derive(Debug, PartialEq, Eq, Hash)]
enum CellKey<'a> {
    Null,
    Int(i64),
    Float(u64),
    Text(&'a str),
}

impl<'a> From<&'a Value> for CellKey<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Int64(v) => Self::Int(*v),
            Value::Float64(v) if *v == 0.0 => Self::Float(0),
            Value::Float64(v) => Self::Float(v.to_bits()),
            Value::Utf8(s) => Self::Text(s),
        }
    }
}

/// Keep only the first occurrence of each distinct row, preserving order.
///
/// Rows are equal when every cell is equal. Removed-row count is
/// `dataset.row_count() - result.row_count()`.
pub fn drop_duplicates(dataset: &DataSet) -> DataSet {
    let mut seen: HashSet<Vec<CellKey<'_>>> = HashSet::with_capacity(dataset.row_count());
    let keep: Vec<bool> = dataset
        .rows
        .iter()
        .map(|row| seen.insert(row.iter().map(CellKey::from).collect()))
        .collect();

    let mut keep = keep.into_iter();
    dataset.filter_rows(|_| keep.next().unwrap_or(false))
}
