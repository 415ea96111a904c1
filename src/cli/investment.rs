//! Investment CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::display::format_investment_table;
use crate::error::FintrackResult;
use crate::models::NewInvestment;
use crate::services::InvestmentService;
use crate::storage::FinanceStore;

use super::{parse_amount, parse_date};

/// Investment subcommands
#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// Record a new investment
    Add {
        /// Investment name
        name: String,
        /// Amount invested
        amount: String,
        /// Kind of investment (e.g., "CDB", "Tesouro")
        #[arg(short = 't', long = "type")]
        investment_type: Option<String>,
        /// Expected yearly return in percent
        #[arg(short = 'r', long, default_value_t = 0.0)]
        expected_return: f64,
        /// Investment date (YYYY-MM-DD or DD/MM/YYYY), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List investments with totals
    List,
}

/// Handle an investment command
pub fn handle_investment_command(
    store: &dyn FinanceStore,
    audit: &AuditLogger,
    settings: &Settings,
    today: NaiveDate,
    cmd: InvestmentCommands,
) -> FintrackResult<()> {
    let service = InvestmentService::new(store, audit);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        InvestmentCommands::Add {
            name,
            amount,
            investment_type,
            expected_return,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };

            let mut new = NewInvestment::new(name, amount, date).with_expected_return(expected_return);
            if let Some(kind) = investment_type {
                new = new.with_type(kind);
            }

            let investment = service.create(new)?;

            println!("Created investment:");
            println!("  ID:       {}", investment.id);
            println!("  Name:     {}", investment.name);
            println!("  Amount:   {}", investment.amount.format_with_symbol(symbol));
            println!("  Date:     {}", investment.date);
            println!("  Return:   {:.2}% a year", investment.expected_return);
        }

        InvestmentCommands::List => {
            let investments = service.list()?;
            println!("{}", format_investment_table(&investments, symbol));
        }
    }

    Ok(())
}
