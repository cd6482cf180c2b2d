//! `employee-data-cleaner` turns a messy employee CSV into a cleaned, normalized copy.
//!
//! The input is loaded into an in-memory [`types::DataSet`], pushed through a fixed sequence of
//! cleaning stages ([`processing::normalize`]), and written back out as CSV with the same columns
//! in the same order.
//!
//! ## What the cleaner does
//!
//! - pads `Employee_ID` to six characters with leading zeros
//! - removes exact duplicate rows, keeping the first occurrence
//! - strips special characters from every column except `Hire_Date` and `Email`
//! - fills missing cells with `"Not provided"`
//! - title-cases `Full_Name`, `Department`, `Position`; maps `Gender` onto
//!   `Male`/`Female`/`Not specified`
//! - validates `Age` (18–65) and `Salary` (> 0, ≤ 999,999), trims 1st/99th percentile outliers,
//!   and renders salaries as USD
//! - validates `Email` and normalizes `Hire_Date` to `YYYY-MM-DD`
//!
//! Values that cannot be repaired are replaced by a sentinel (`"Invalid Data"`,
//! `"Invalid email"`, `"Invalid date"`); rows are never dropped for bad fields.
//!
//! ## Quick example
//!
//! ```no_run
//! use employee_data_cleaner::clean_file;
//! use employee_data_cleaner::ingestion::IngestionOptions;
//!
//! # fn main() -> Result<(), employee_data_cleaner::IngestionError> {
//! let report = clean_file(
//!     "messy_employee_data.csv",
//!     "cleaned_employee_data.csv",
//!     &IngestionOptions::default(),
//! )?;
//! println!("removed {} duplicate rows", report.duplicates_removed);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading plus observer hooks for load outcomes
//! - [`processing`]: the cleaning stages and the pipeline that orders them
//! - [`output`]: CSV writing
//! - [`types`]: schema + in-memory dataset types
//! - [`columns`]: the column names the cleaner knows about
//! - [`logging`]: `tracing` subscriber setup for the binary
//! - [`error`]: the shared error type

use std::path::Path;

pub mod columns;
pub mod error;
pub mod ingestion;
pub mod logging;
pub mod output;
pub mod processing;
pub mod types;

pub use error::{IngestionError, IngestionResult};
pub use processing::{CleaningReport, normalize};

/// Load `input`, clean it, and write the result to `output`.
///
/// Nothing is written when loading fails.
pub fn clean_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ingestion::IngestionOptions,
) -> IngestionResult<CleaningReport> {
    let dataset = ingestion::ingest_from_path(input, options)?;
    let cleaned = processing::normalize(dataset)?;
    output::write_csv_to_path(&cleaned.dataset, output)?;
    Ok(cleaned.report)
}
