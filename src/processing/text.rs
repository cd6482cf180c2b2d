//! Casing for free-text columns and gender canonicalization.

use crate::columns::{GENDER, TITLE_CASE_COLUMNS};
use crate::types::{DataSet, DataType, Value};

use super::NOT_SPECIFIED;

pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";

/// Trim, then uppercase the first letter of each whitespace-separated word and lowercase the
/// rest. Whitespace between words is kept as-is.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.trim().chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Map a raw gender value onto `Male`, `Female`, or `Not specified`.
///
/// Matching is exact after trimming and lowercasing; unrecognized values are discarded.
pub fn canonical_gender(raw: &str) -> &'static str {
    match raw.trim().to_lowercase().as_str() {
        "m" | "male" | "man" | "boy" => MALE,
        "f" | "female" | "woman" | "girl" => FEMALE,
        _ => NOT_SPECIFIED,
    }
}

/// Title-case Full_Name, Department, and Position, and canonicalize Gender.
pub fn normalize_text(dataset: DataSet) -> DataSet {
    let title_idxs: Vec<usize> = TITLE_CASE_COLUMNS
        .iter()
        .filter_map(|name| dataset.schema.index_of(name))
        .collect();
    let gender_idx = dataset.schema.index_of(GENDER);

    let dataset = title_idxs.into_iter().fold(dataset, |ds, idx| {
        ds.map_column(idx, |v| Value::Utf8(title_case(&v.to_string())))
            .with_column_type(idx, DataType::Utf8)
    });
    match gender_idx {
        Some(idx) => dataset
            .map_column(idx, |v| Value::text(canonical_gender(&v.to_string())))
            .with_column_type(idx, DataType::Utf8),
        None => dataset,
    }
}
