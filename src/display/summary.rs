//! Summary and tax estimate display

use crate::models::Summary;
use crate::services::tax::TaxEstimate;

use super::report::separator;

/// Format the five bucket totals and derived figures
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let line = |label: &str, amount: crate::models::Money| {
        format!("{:<20} {:>18}\n", label, amount.format_with_symbol(symbol))
    };

    let mut output = String::new();
    output.push_str("Summary\n");
    output.push_str(&separator(39));
    output.push('\n');
    output.push_str(&line("Fixed income", summary.fixed_income));
    output.push_str(&line("Variable income", summary.variable_income));
    output.push_str(&line("Fixed expenses", summary.fixed_expenses));
    output.push_str(&line("Variable expenses", summary.variable_expenses));
    output.push_str(&line("Invested", summary.invested));
    output.push_str(&separator(39));
    output.push('\n');
    output.push_str(&line("Total income", summary.total_income()));
    output.push_str(&line("Total expenses", summary.total_expenses()));
    output.push_str(&line("Net balance", summary.net_balance()));
    output
}

/// Format a payroll estimate
pub fn format_tax_estimate(estimate: &TaxEstimate, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Gross salary:        {:>16}\n",
        estimate.gross.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Pension (INSS):      {:>16}\n",
        estimate.pension_contribution.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Income tax (IRRF):   {:>16}\n",
        estimate.income_tax.format_with_symbol(symbol)
    ));
    output.push_str(&separator(38));
    output.push('\n');
    output.push_str(&format!(
        "Net salary:          {:>16}\n",
        estimate.net.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Effective rate:      {:>15.2}%\n",
        estimate.effective_rate()
    ));
    output
}
