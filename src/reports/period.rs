//! Periodic income/expense report
//!
//! Buckets one calendar year of transactions by month, quarter, half-year or
//! the whole year.

use chrono::Datelike;
use serde::Serialize;
use std::io::Write;

use crate::display::report::{format_bar, separator};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Granularity, Money, Transaction};

/// Totals for one bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRow {
    pub label: String,
    pub income: Money,
    pub expenses: Money,
}

impl PeriodRow {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Income and expenses per bucket for one year, in chronological order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodReport {
    pub year: i32,
    pub granularity: Granularity,
    pub rows: Vec<PeriodRow>,
}

impl PeriodReport {
    /// Aggregate `transactions` dated in `year`; other years are ignored
    pub fn generate(transactions: &[Transaction], year: i32, granularity: Granularity) -> Self {
        let mut rows: Vec<PeriodRow> = (0..granularity.bucket_count())
            .map(|index| PeriodRow {
                label: granularity.label(year, index),
                income: Money::zero(),
                expenses: Money::zero(),
            })
            .collect();

        for txn in transactions.iter().filter(|t| t.date.year() == year) {
            let row = &mut rows[granularity.bucket_of(txn.date)];
            if txn.is_income() {
                row.income += txn.amount;
            } else {
                row.expenses += txn.amount;
            }
        }

        Self {
            year,
            granularity,
            rows,
        }
    }

    pub fn total_income(&self) -> Money {
        self.rows.iter().map(|r| r.income).sum()
    }

    pub fn total_expenses(&self) -> Money {
        self.rows.iter().map(|r| r.expenses).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Period Report: {} ({})\n",
            self.year, self.granularity
        ));
        output.push_str(&"=".repeat(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>16} {:>16} {:>16}  {}\n",
            "Period", "Income", "Expenses", "Net", "Expenses/Income"
        ));
        output.push_str(&separator(78));
        output.push('\n');

        let scale = self
            .rows
            .iter()
            .map(|r| r.income.max(r.expenses).cents())
            .max()
            .unwrap_or(0) as f64;

        for row in &self.rows {
            output.push_str(&format!(
                "{:<12} {:>16} {:>16} {:>16}  {}\n",
                row.label,
                row.income.to_string(),
                row.expenses.to_string(),
                row.net().to_string(),
                format_bar(row.expenses.cents() as f64, scale, 10)
            ));
        }

        output.push_str(&separator(78));
        output.push('\n');
        let net = self.total_income() - self.total_expenses();
        output.push_str(&format!(
            "{:<12} {:>16} {:>16} {:>16}\n",
            "TOTAL",
            self.total_income().to_string(),
            self.total_expenses().to_string(),
            net.to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Year", "Granularity", "Period", "Income", "Expenses", "Net"])?;

        let year = self.year.to_string();
        let granularity = self.granularity.to_string();
        for row in &self.rows {
            csv.write_record([
                year.as_str(),
                granularity.as_str(),
                row.label.as_str(),
                &row.income.to_decimal_string(),
                &row.expenses.to_decimal_string(),
                &row.net().to_decimal_string(),
            ])?;
        }

        csv.flush()
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionId, TransactionType};
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, cents: i64, kind: TransactionType) -> Transaction {
        Transaction::from_new(
            TransactionId::new(),
            NewTransaction::new(
                "entry",
                Money::from_cents(cents),
                kind,
                NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            ),
        )
    }

    fn ledger() -> Vec<Transaction> {
        use TransactionType::*;
        vec![
            txn(2025, 1, 5, 500_000, FixedIncome),
            txn(2025, 1, 10, 150_000, FixedExpense),
            txn(2025, 3, 31, 20_000, VariableExpense),
            txn(2025, 4, 1, 30_000, VariableIncome),
            txn(2025, 6, 30, 10_000, VariableExpense),
            txn(2025, 7, 1, 500_000, FixedIncome),
            txn(2025, 12, 31, 45_000, VariableExpense),
            txn(2024, 12, 31, 999_999, FixedIncome),
            txn(2026, 1, 1, 999_999, FixedExpense),
        ]
    }

    #[test]
    fn test_monthly_buckets() {
        let report = PeriodReport::generate(&ledger(), 2025, Granularity::Monthly);
        assert_eq!(report.rows.len(), 12);
        assert_eq!(report.rows[0].label, "January");
        assert_eq!(report.rows[0].income, Money::from_cents(500_000));
        assert_eq!(report.rows[0].expenses, Money::from_cents(150_000));
        assert_eq!(report.rows[1].income, Money::zero());
        assert_eq!(report.rows[2].expenses, Money::from_cents(20_000));
        assert_eq!(report.rows[11].expenses, Money::from_cents(45_000));
    }

    #[test]
    fn test_quarter_boundaries() {
        let report = PeriodReport::generate(&ledger(), 2025, Granularity::Quarterly);
        let labels: Vec<_> = report.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Q1", "Q2", "Q3", "Q4"]);
        assert_eq!(report.rows[0].expenses, Money::from_cents(170_000));
        assert_eq!(report.rows[1].income, Money::from_cents(30_000));
        assert_eq!(report.rows[1].expenses, Money::from_cents(10_000));
        assert_eq!(report.rows[2].income, Money::from_cents(500_000));
    }

    #[test]
    fn test_semiannual_split() {
        let report = PeriodReport::generate(&ledger(), 2025, Granularity::Semiannual);
        assert_eq!(report.rows[0].label, "Half 1");
        assert_eq!(report.rows[0].income, Money::from_cents(530_000));
        assert_eq!(report.rows[0].expenses, Money::from_cents(180_000));
        assert_eq!(report.rows[1].income, Money::from_cents(500_000));
        assert_eq!(report.rows[1].expenses, Money::from_cents(45_000));
    }

    #[test]
    fn test_granularities_agree_on_totals() {
        let transactions = ledger();
        let annual = PeriodReport::generate(&transactions, 2025, Granularity::Annual);
        assert_eq!(annual.rows.len(), 1);
        assert_eq!(annual.rows[0].label, "2025");

        for granularity in [
            Granularity::Monthly,
            Granularity::Quarterly,
            Granularity::Semiannual,
        ] {
            let report = PeriodReport::generate(&transactions, 2025, granularity);
            assert_eq!(report.total_income(), annual.rows[0].income);
            assert_eq!(report.total_expenses(), annual.rows[0].expenses);
        }
    }

    #[test]
    fn test_other_years_excluded() {
        let report = PeriodReport::generate(&ledger(), 2025, Granularity::Annual);
        assert_eq!(report.total_income(), Money::from_cents(1_030_000));
        assert_eq!(report.total_expenses(), Money::from_cents(225_000));

        let empty = PeriodReport::generate(&ledger(), 2023, Granularity::Quarterly);
        assert!(empty.rows.iter().all(|r| r.income.is_zero() && r.expenses.is_zero()));
    }

    #[test]
    fn test_idempotent() {
        let transactions = ledger();
        assert_eq!(
            PeriodReport::generate(&transactions, 2025, Granularity::Monthly),
            PeriodReport::generate(&transactions, 2025, Granularity::Monthly)
        );
    }

    #[test]
    fn test_export_csv() {
        let report = PeriodReport::generate(&ledger(), 2025, Granularity::Semiannual);
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Year,Granularity,Period,Income,Expenses,Net");
        assert_eq!(lines[1], "2025,semiannual,Half 1,5300.00,1800.00,3500.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_format_terminal() {
        let report = PeriodReport::generate(&ledger(), 2025, Granularity::Quarterly);
        let text = report.format_terminal();
        assert!(text.contains("Period Report: 2025 (quarterly)"));
        assert!(text.contains("Q4"));
        assert!(text.contains("R$ 10.300,00"));
    }
}
