//! Investment display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Investment, Money};

#[derive(Tabled)]
struct InvestmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Return")]
    expected_return: String,
    #[tabled(rename = "Yearly yield")]
    yearly_yield: String,
}

/// Format investments as a table followed by totals
pub fn format_investment_table(investments: &[Investment], symbol: &str) -> String {
    if investments.is_empty() {
        return "No investments found.".to_string();
    }

    let rows = investments.iter().map(|inv| InvestmentRow {
        id: inv.id.to_string(),
        date: inv.date.format("%Y-%m-%d").to_string(),
        name: inv.name.clone(),
        kind: if inv.investment_type.is_empty() {
            "-".to_string()
        } else {
            inv.investment_type.clone()
        },
        amount: inv.amount.format_with_symbol(symbol),
        expected_return: format!("{:.2}%", inv.expected_return),
        yearly_yield: inv.expected_annual_yield().format_with_symbol(symbol),
    });

    let total: Money = investments.iter().map(|i| i.amount).sum();
    let total_yield: Money = investments.iter().map(|i| i.expected_annual_yield()).sum();

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!(
        "{}\n\nTotal invested: {}\nExpected yearly yield: {}",
        table,
        total.format_with_symbol(symbol),
        total_yield.format_with_symbol(symbol)
    )
}
