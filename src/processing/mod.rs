//! The cleaning pipeline.
//!
//! [`normalize`] runs seven stages in a fixed order. Each stage is a plain function from one
//! [`DataSet`] to the next, and each relies on the table the previous stage left behind:
//!
//! 1. [`identifier::pad_identifiers`]: Employee_ID → 6-character zero-padded string
//! 2. [`dedupe::drop_duplicates`]: exact full-row duplicates removed, first occurrence kept
//! 3. [`sanitize::sanitize`]: special characters stripped (all columns but Hire_Date/Email)
//! 4. [`missing::fill_missing`]: missing cells → `"Not provided"`
//! 5. [`text::normalize_text`]: title-cased names/departments/positions, canonical gender
//! 6. [`numeric::validate_numeric`]: Age/Salary range checks, outlier trim, salary ceiling,
//!    rendering
//! 7. [`email::validate_emails`] and [`dates::normalize_dates`]: format validation
//!
//! Field-level problems never fail the pipeline: bad values are replaced by the sentinels below.
//!
//! ## Example
//!
//! ```rust
//! use employee_data_cleaner::processing::normalize;
//! use employee_data_cleaner::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(
//!     [
//!         ("Employee_ID", DataType::Utf8),
//!         ("Full_Name", DataType::Utf8),
//!         ("Department", DataType::Utf8),
//!         ("Position", DataType::Utf8),
//!         ("Gender", DataType::Utf8),
//!         ("Age", DataType::Float64),
//!         ("Salary", DataType::Float64),
//!         ("Email", DataType::Utf8),
//!         ("Hire_Date", DataType::Utf8),
//!     ]
//!     .into_iter()
//!     .map(|(name, ty)| Field::new(name, ty))
//!     .collect(),
//! );
//! let row = vec![
//!     Value::text("42"),
//!     Value::text("  ada LOVELACE "),
//!     Value::text("r&d"),
//!     Value::text("engineer"),
//!     Value::text("F"),
//!     Value::Float64(36.0),
//!     Value::Float64(72000.0),
//!     Value::text(" ada@Example.com "),
//!     Value::text("03/15/2020"),
//! ];
//! let cleaned = normalize(DataSet::new(schema, vec![row.clone(), row])).unwrap();
//!
//! assert_eq!(cleaned.report.duplicates_removed, 1);
//! assert_eq!(
//!     cleaned.dataset.rows[0].iter().map(|v| v.to_string()).collect::<Vec<_>>(),
//!     vec![
//!         "000042", "Ada Lovelace", "Rd", "Engineer", "Female", "36", "$72,000.00",
//!         "ada@example.com", "2020-03-15",
//!     ]
//! );
//! ```

pub mod dates;
pub mod dedupe;
pub mod email;
pub mod identifier;
pub mod missing;
pub mod numeric;
pub mod sanitize;
pub mod text;

use serde::Serialize;

use crate::columns::missing_required;
use crate::error::{IngestionError, IngestionResult};
use crate::types::DataSet;

pub use missing::FillPolicy;

/// Replaces a missing cell.
pub const NOT_PROVIDED: &str = "Not provided";
/// Replaces an unrecognized gender.
pub const NOT_SPECIFIED: &str = "Not specified";
/// Replaces an invalid Age or Salary.
pub const INVALID_DATA: &str = "Invalid Data";
/// Replaces an invalid Email.
pub const INVALID_EMAIL: &str = "Invalid email";
/// Replaces an unparsable Hire_Date.
pub const INVALID_DATE: &str = "Invalid date";

/// Aggregate counts from one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    /// Rows handed to the pipeline.
    pub input_rows: usize,
    /// Rows in the cleaned table.
    pub output_rows: usize,
    /// `input_rows - output_rows`.
    pub duplicates_removed: usize,
    /// Rows with an empty text cell just before missing-value filling. Diagnostic only.
    pub blank_rows: usize,
}

/// Cleaned table plus the counts gathered while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cleaned {
    pub dataset: DataSet,
    pub report: CleaningReport,
}

/// Run all seven stages with the default [`FillPolicy`].
pub fn normalize(input: DataSet) -> IngestionResult<Cleaned> {
    normalize_with(input, FillPolicy::default())
}

/// Run all seven stages, filling missing cells according to `fill_policy`.
///
/// Fails only when a required column is absent from the schema.
pub fn normalize_with(input: DataSet, fill_policy: FillPolicy) -> IngestionResult<Cleaned> {
    let missing = missing_required(input.schema.field_names());
    if !missing.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: format!("missing required columns {missing:?}"),
        });
    }

    let input_rows = input.row_count();

    let ds = identifier::pad_identifiers(input);
    let ds = dedupe::drop_duplicates(&ds);
    let duplicates_removed = input_rows - ds.row_count();
    tracing::debug!(duplicates_removed, "removed duplicate rows");

    let ds = sanitize::sanitize(ds);
    let blank_rows = missing::count_blank_rows(&ds);
    tracing::debug!(blank_rows, ?fill_policy, "filling missing values");
    let ds = missing::fill_missing(&ds, fill_policy);

    let ds = text::normalize_text(ds);
    let ds = numeric::validate_numeric(ds);
    let ds = email::validate_emails(ds);
    let ds = dates::normalize_dates(ds);

    let report = CleaningReport {
        input_rows,
        output_rows: ds.row_count(),
        duplicates_removed,
        blank_rows,
    };
    tracing::info!(
        input_rows,
        output_rows = report.output_rows,
        duplicates_removed,
        "cleaning complete"
    );

    Ok(Cleaned {
        dataset: ds,
        report,
    })
}
