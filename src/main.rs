//! Employee data cleaner CLI.
//!
//! Reads `messy_employee_data.csv` from the working directory and writes
//! `cleaned_employee_data.csv` next to it.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use employee_data_cleaner::ingestion::{IngestionOptions, TracingObserver};
use employee_data_cleaner::logging::{LogConfig, init_logging};
use employee_data_cleaner::{CleaningReport, clean_file};

const INPUT_PATH: &str = "messy_employee_data.csv";
const OUTPUT_PATH: &str = "cleaned_employee_data.csv";

fn main() {
    let log_config = LogConfig::default().with_ansi(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match run() {
        Ok(report) => {
            println!("Data cleaning complete.");
            println!("Removed {} duplicate rows.", report.duplicates_removed);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<CleaningReport> {
    let options = IngestionOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };
    let report = clean_file(INPUT_PATH, OUTPUT_PATH, &options)
        .with_context(|| format!("failed to clean {INPUT_PATH} into {OUTPUT_PATH}"))?;
    let summary = serde_json::to_string(&report)?;
    tracing::debug!(report = %summary, "cleaning report");
    Ok(report)
}
