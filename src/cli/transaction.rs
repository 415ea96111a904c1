//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_table};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{NewTransaction, TransactionType};
use crate::services::{TransactionFilter, TransactionService};
use crate::storage::FinanceStore;

use super::{parse_amount, parse_date};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount (e.g., "1500.00" or "1.500,00")
        amount: String,
        /// fixed-income, variable-income, fixed-expense or variable-expense
        #[arg(short = 't', long = "type")]
        transaction_type: String,
        /// Free-text category
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD or DD/MM/YYYY), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Split into this many monthly installments
        #[arg(short = 'n', long)]
        installments: Option<u32>,
        /// First installment date, defaults to the transaction date
        #[arg(long, requires = "installments")]
        start_date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by transaction type
        #[arg(short = 't', long = "type")]
        transaction_type: Option<String>,
        /// Filter by category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Only transactions dated in this year
        #[arg(short, long)]
        year: Option<i32>,
        /// Only recurring transactions
        #[arg(long)]
        recurring: bool,
        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full UUID or at least 8 hex characters)
        id: String,
    },
}

fn parse_type(input: &str) -> FintrackResult<TransactionType> {
    input
        .parse::<TransactionType>()
        .map_err(|e| FintrackError::Validation(e.to_string()))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &dyn FinanceStore,
    audit: &AuditLogger,
    settings: &Settings,
    today: NaiveDate,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let service = TransactionService::new(store, audit);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            transaction_type,
            category,
            date,
            installments,
            start_date,
        } => {
            let amount = parse_amount(&amount)?;
            let transaction_type = parse_type(&transaction_type)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };

            let mut new = NewTransaction::new(description, amount, transaction_type, date);
            if let Some(category) = category {
                new = new.with_category(category);
            }
            if let Some(n) = installments {
                let start = match start_date {
                    Some(d) => parse_date(&d)?,
                    None => date,
                };
                new = new.recurring(n, start);
            }

            let txn = service.create(new)?;

            println!("Created transaction:");
            println!("{}", format_transaction_details(&txn, symbol, today));
        }

        TransactionCommands::List {
            transaction_type,
            category,
            year,
            recurring,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(t) = transaction_type {
                filter = filter.transaction_type(parse_type(&t)?);
            }
            if let Some(c) = category {
                filter = filter.category(c);
            }
            if let Some(y) = year {
                filter = filter.year(y);
            }
            if recurring {
                filter = filter.recurring();
            }
            if let Some(l) = limit {
                filter = filter.limit(l);
            }

            let transactions = service.list(&filter)?;
            println!("{}", format_transaction_table(&transactions, symbol, today));
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(&id)?;
            println!("Deleted transaction: {} ({})", txn.description, txn.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_aliases() {
        assert_eq!(parse_type("income").unwrap(), TransactionType::FixedIncome);
        assert_eq!(
            parse_type("variable-expense").unwrap(),
            TransactionType::VariableExpense
        );
        assert!(parse_type("bonus").unwrap_err().is_validation());
    }
}
