//! Special-character stripping.

use crate::columns::UNSANITIZED_COLUMNS;
use crate::types::{DataSet, Value};

/// Drop every character that is neither a word character (alphanumeric or `_`) nor whitespace.
pub fn strip_special_characters(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Strip special characters from the text cells of every column except Hire_Date and Email.
///
/// Numeric cells are left alone, so a negative salary keeps its sign for the numeric stage.
pub fn sanitize(dataset: DataSet) -> DataSet {
    let targets: Vec<usize> = dataset
        .schema
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| !UNSANITIZED_COLUMNS.contains(&f.name.as_str()))
        .map(|(idx, _)| idx)
        .collect();

    targets.into_iter().fold(dataset, |ds, idx| {
        ds.map_column(idx, |v| match v {
            Value::Utf8(s) => Value::Utf8(strip_special_characters(&s)),
            other => other,
        })
    })
}
