//! Age and Salary validation, outlier trimming, and rendering.
//!
//! Each column goes through the same sequence:
//!
//! 1. coerce to a number (anything non-numeric is missing); Salary is rounded to cents here
//! 2. range gate (Age: whole years in `[18, 65]`; Salary: `> 0`)
//! 3. percentile trim: values strictly outside `[p1, p99]` of the surviving values are dropped
//! 4. Salary only: values above [`SALARY_CEILING`] are dropped
//! 5. render survivors (Age as an integer, Salary as USD); everything dropped becomes
//!    [`INVALID_DATA`]
//!
//! Trimming happens before the ceiling and both happen on numbers, before any cell is rendered
//! to text.

use std::ops::RangeInclusive;

use crate::columns::{AGE, SALARY};
use crate::ingestion::csv::parse_number;
use crate::types::{DataSet, DataType, Value};

use super::INVALID_DATA;

/// Accepted ages, inclusive.
pub const AGE_RANGE: RangeInclusive<f64> = 18.0..=65.0;

/// Largest salary accepted after outlier trimming.
pub const SALARY_CEILING: f64 = 999_999.0;

/// Percentile ranks (out of 100) used for outlier trimming.
const LOWER_PERCENTILE: usize = 1;
const UPPER_PERCENTILE: usize = 99;

/// Numeric reading of a cell, if it has one.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Int64(v) => Some(*v as f64),
        Value::Float64(v) => v.is_finite().then_some(*v),
        Value::Utf8(s) => parse_number(s),
    }
}

/// Nearest-rank `[p1, p99]` bounds over `values`.
///
/// `p1 = sorted[floor(0.01 * (n - 1))]` and `p99 = sorted[ceil(0.99 * (n - 1))]`, so both
/// bounds are observed values and populations of 100 or fewer are never trimmed. Returns `None`
/// for an empty population.
pub fn percentile_bounds(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let last = sorted.len() - 1;
    let lower_idx = last * LOWER_PERCENTILE / 100;
    let upper_idx = (last * UPPER_PERCENTILE).div_ceil(100);
    Some((sorted[lower_idx], sorted[upper_idx]))
}

/// Drop values strictly outside the percentile bounds of the present values.
fn trim_outliers(values: Vec<Option<f64>>, column: &str) -> Vec<Option<f64>> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let Some((lower, upper)) = percentile_bounds(&present) else {
        return values;
    };

    let trimmed: Vec<Option<f64>> = values
        .into_iter()
        .map(|v| v.filter(|x| (lower..=upper).contains(x)))
        .collect();
    tracing::debug!(
        column,
        lower,
        upper,
        trimmed = present.len() - trimmed.iter().flatten().count(),
        "percentile trim"
    );
    trimmed
}

/// Run the full Age sequence over a column of cells.
pub fn validate_ages(cells: &[Value]) -> Vec<Value> {
    let gated = cells
        .iter()
        .map(|v| coerce_number(v).filter(|age| AGE_RANGE.contains(age) && age.fract() == 0.0))
        .collect();

    trim_outliers(gated, AGE)
        .into_iter()
        .map(|v| match v {
            Some(age) => Value::Utf8(format!("{}", age as i64)),
            None => Value::text(INVALID_DATA),
        })
        .collect()
}

/// Run the full Salary sequence over a column of cells.
pub fn validate_salaries(cells: &[Value]) -> Vec<Value> {
    let gated = cells
        .iter()
        .map(|v| coerce_number(v).map(round_to_cents).filter(|salary| *salary > 0.0))
        .collect();

    trim_outliers(gated, SALARY)
        .into_iter()
        .map(|v| match v.filter(|salary| *salary <= SALARY_CEILING) {
            Some(salary) => Value::Utf8(format_usd(salary)),
            None => Value::text(INVALID_DATA),
        })
        .collect()
}

/// Salaries are judged at the precision they are rendered with.
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Render an amount as USD with thousands separators and two decimals: `1234.5` → `"$1,234.50"`.
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Validate, trim, and render the Age and Salary columns.
pub fn validate_numeric(dataset: DataSet) -> DataSet {
    let dataset = replace_column(dataset, AGE, validate_ages);
    replace_column(dataset, SALARY, validate_salaries)
}

fn replace_column(dataset: DataSet, column: &str, f: fn(&[Value]) -> Vec<Value>) -> DataSet {
    let Some(idx) = dataset.schema.index_of(column) else {
        return dataset;
    };
    let cells: Vec<Value> = dataset.column(idx).cloned().collect();
    let mut replaced = f(&cells).into_iter();
    dataset
        .map_column(idx, |_| replaced.next().unwrap_or(Value::Null))
        .with_column_type(idx, DataType::Utf8)
}
