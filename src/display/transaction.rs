//! Transaction display formatting

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;
use crate::services::recurrence::{end_date, installments_paid};

use super::report::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Inst.")]
    installments: String,
}

/// "paid/total" for a recurring transaction as of `as_of`, empty otherwise
pub fn installment_progress(txn: &Transaction, as_of: NaiveDate) -> String {
    match txn.schedule() {
        Some((start, total)) => format!("{}/{}", installments_paid(start, total, as_of), total),
        None => String::new(),
    }
}

/// Format transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    symbol: &str,
    as_of: NaiveDate,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.format("%Y-%m-%d").to_string(),
        description: truncate(&txn.description, 30),
        kind: txn.transaction_type.to_string(),
        category: truncate(txn.category.trim(), 20),
        amount: txn.amount.format_with_symbol(symbol),
        installments: installment_progress(txn, as_of),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(5)).with(Alignment::right()));
    table.to_string()
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str, as_of: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {} ({})\n", txn.id, txn.id.as_uuid()));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));

    if txn.category.trim().is_empty() {
        output.push_str("Category:    (uncategorized)\n");
    } else {
        output.push_str(&format!("Category:    {}\n", txn.category.trim()));
    }

    if let Some((start, total)) = txn.schedule() {
        output.push_str(&format!(
            "Recurring:   {} installments from {}\n",
            total,
            start.format("%Y-%m-%d")
        ));
        if let Ok(last) = end_date(start, total) {
            output.push_str(&format!("Ends:        {}\n", last.format("%Y-%m-%d")));
        }
        output.push_str(&format!("Paid:        {}\n", installment_progress(txn, as_of)));
    }

    output
}
