//! Report CLI commands
//!
//! Spending and period reports print to the terminal or, with `--output`,
//! export as CSV.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::{FintrackError, FintrackResult};
use crate::models::Granularity;
use crate::reports::{PeriodReport, Projection, SpendingReport};
use crate::storage::FinanceStore;

use super::{export_to_file, parse_date};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Totals per transaction kind plus invested amount
    Summary,

    /// Expenses grouped by category
    Spending {
        /// Only transactions dated in this year
        #[arg(short, long)]
        year: Option<i32>,

        /// Show only the N largest categories
        #[arg(short, long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income and expenses per month, quarter, semester or year
    Period {
        /// Year to report on, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,

        /// monthly, quarterly, semiannual or annual
        #[arg(short, long)]
        granularity: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Month-by-month balance forecast from recurring transactions
    Projection {
        /// Number of months to project
        #[arg(short, long)]
        months: Option<u32>,

        /// Reference date, defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &dyn FinanceStore,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    match cmd {
        ReportCommands::Summary => {
            let summary = store.read_summary()?;
            print!("{}", format_summary(&summary, &settings.currency_symbol));
            Ok(())
        }
        ReportCommands::Spending { year, top, output } => {
            handle_spending_report(store, year, top, output)
        }
        ReportCommands::Period {
            year,
            granularity,
            output,
        } => handle_period_report(store, settings, today, year, granularity, output),
        ReportCommands::Projection { months, as_of } => {
            handle_projection_report(store, settings, today, months, as_of)
        }
    }
}

fn handle_spending_report(
    store: &dyn FinanceStore,
    year: Option<i32>,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> FintrackResult<()> {
    let transactions = store.list_transactions()?;
    let report = match year {
        Some(y) => SpendingReport::generate_for_year(&transactions, y),
        None => SpendingReport::generate(&transactions),
    };

    if let Some(path) = output {
        export_to_file(&path, |w| report.export_csv(w))?;
        println!("Spending report exported to: {}", path.display());
    } else if let Some(n) = top {
        println!("{}", report.format_terminal_top(n));
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

fn handle_period_report(
    store: &dyn FinanceStore,
    settings: &Settings,
    today: NaiveDate,
    year: Option<i32>,
    granularity: Option<String>,
    output: Option<PathBuf>,
) -> FintrackResult<()> {
    let granularity = match granularity {
        Some(g) => g
            .parse::<Granularity>()
            .map_err(|e| FintrackError::Validation(e.to_string()))?,
        None => settings.default_granularity,
    };
    let year = year.unwrap_or_else(|| today.year());

    let transactions = store.list_transactions()?;
    let report = PeriodReport::generate(&transactions, year, granularity);

    if let Some(path) = output {
        export_to_file(&path, |w| report.export_csv(w))?;
        println!("Period report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

fn handle_projection_report(
    store: &dyn FinanceStore,
    settings: &Settings,
    today: NaiveDate,
    months: Option<u32>,
    as_of: Option<String>,
) -> FintrackResult<()> {
    let months = months.unwrap_or(settings.projection_months);
    if months == 0 {
        return Err(FintrackError::Validation(
            "Projection needs at least one month".into(),
        ));
    }
    let as_of = match as_of {
        Some(d) => parse_date(&d)?,
        None => today,
    };

    let transactions = store.list_transactions()?;
    let summary = store.read_summary()?;
    let projection = Projection::generate(&transactions, &summary, months, as_of);

    println!("{}", projection.format_terminal());
    Ok(())
}
