//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer and reports. Every
//! handler takes "today" as an argument instead of reading the clock.

pub mod audit;
pub mod investment;
pub mod report;
pub mod tax;
pub mod transaction;

pub use audit::handle_audit_command;
pub use investment::{handle_investment_command, InvestmentCommands};
pub use report::{handle_report_command, ReportCommands};
pub use tax::handle_tax_command;
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Money;

/// Parse a date given as `YYYY-MM-DD` or `DD/MM/YYYY`
pub fn parse_date(input: &str) -> FintrackResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d/%m/%Y"))
        .map_err(|_| {
            FintrackError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DD or DD/MM/YYYY",
                input
            ))
        })
}

/// Parse an amount such as `1500`, `1500.50` or `R$ 1.500,50`
pub fn parse_amount(input: &str) -> FintrackResult<Money> {
    Money::parse(input).map_err(|e| {
        FintrackError::Validation(format!(
            "Invalid amount '{}': {}. Use a format like '1500.50' or '1.500,50'",
            input, e
        ))
    })
}

/// Create `path` and hand a buffered writer to `write`
pub(crate) fn export_to_file<F>(path: &Path, write: F) -> FintrackResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> FintrackResult<()>,
{
    let file = File::create(path).map_err(|e| {
        FintrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)
}
