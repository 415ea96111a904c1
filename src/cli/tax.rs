//! Payroll tax estimate command

use crate::config::Settings;
use crate::display::format_tax_estimate;
use crate::error::{FintrackError, FintrackResult};
use crate::services::tax::estimate;

use super::parse_amount;

/// Print the pension and income tax breakdown for a monthly gross salary
pub fn handle_tax_command(settings: &Settings, gross: &str) -> FintrackResult<()> {
    let gross = parse_amount(gross)?;
    if gross.is_negative() {
        return Err(FintrackError::Validation(
            "Gross salary cannot be negative".into(),
        ));
    }

    print!("{}", format_tax_estimate(&estimate(gross), &settings.currency_symbol));
    Ok(())
}
