//! Column names the cleaner knows about and the types ingestion assigns to them.
//!
//! Any column not listed here is a passthrough column: its type is detected from its cells and it
//! only goes through character stripping and missing-value filling.

use crate::types::DataType;

pub const EMPLOYEE_ID: &str = "Employee_ID";
pub const FULL_NAME: &str = "Full_Name";
pub const DEPARTMENT: &str = "Department";
pub const POSITION: &str = "Position";
pub const GENDER: &str = "Gender";
pub const AGE: &str = "Age";
pub const SALARY: &str = "Salary";
pub const EMAIL: &str = "Email";
pub const HIRE_DATE: &str = "Hire_Date";

/// Columns that must be present in the input header.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    EMPLOYEE_ID,
    FULL_NAME,
    DEPARTMENT,
    POSITION,
    GENDER,
    AGE,
    SALARY,
    EMAIL,
    HIRE_DATE,
];

/// Columns that keep their punctuation through the character-stripping stage.
pub const UNSANITIZED_COLUMNS: [&str; 2] = [HIRE_DATE, EMAIL];

/// Free-text columns that get trimmed and title-cased.
pub const TITLE_CASE_COLUMNS: [&str; 3] = [FULL_NAME, DEPARTMENT, POSITION];

/// Required columns absent from `names`, in [`REQUIRED_COLUMNS`] order.
pub fn missing_required<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'static str> {
    let present: Vec<&str> = names.into_iter().collect();
    REQUIRED_COLUMNS
        .into_iter()
        .filter(|required| !present.contains(required))
        .collect()
}

/// Type ingestion assigns to a required column, or `None` for passthrough columns.
pub fn declared_type(column: &str) -> Option<DataType> {
    match column {
        AGE | SALARY => Some(DataType::Float64),
        c if REQUIRED_COLUMNS.contains(&c) => Some(DataType::Utf8),
        _ => None,
    }
}
