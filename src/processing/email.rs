//! Email validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::columns::EMAIL;
use crate::types::{DataSet, DataType, Value};

use super::INVALID_EMAIL;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// Returns `true` when `s` matches the whole email pattern.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// Clean and validate one email value.
///
/// Surrounding whitespace and literal `"` characters are removed. A valid address keeps its local
/// part as written and gets a lowercase domain; anything else becomes [`INVALID_EMAIL`].
pub fn clean_email(raw: &str) -> String {
    let cleaned = raw.trim().replace('"', "");
    let cleaned = cleaned.trim();
    if !is_valid_email(cleaned) {
        return INVALID_EMAIL.to_string();
    }
    match cleaned.split_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_ascii_lowercase()),
        None => INVALID_EMAIL.to_string(),
    }
}

/// Clean and validate every Email cell. Missing cells are invalid.
pub fn validate_emails(dataset: DataSet) -> DataSet {
    let Some(idx) = dataset.schema.index_of(EMAIL) else {
        return dataset;
    };
    dataset
        .map_column(idx, |v| match v {
            Value::Null => Value::text(INVALID_EMAIL),
            other => Value::Utf8(clean_email(&other.to_string())),
        })
        .with_column_type(idx, DataType::Utf8)
}
