//! Spending Report
//!
//! Expense totals grouped by category label.

use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use crate::display::report::{format_bar, format_percentage, truncate};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Transaction};

/// Label used for expenses recorded without a category
pub const UNCATEGORIZED: &str = "(uncategorized)";

/// Spending total for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingByCategory {
    /// Category label
    pub category: String,
    /// Total spending
    pub amount: Money,
    /// Number of transactions
    pub transaction_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingReport {
    /// Year filter applied, if any
    pub year: Option<i32>,
    /// Categories sorted by amount, largest first
    pub categories: Vec<SpendingByCategory>,
    /// Total spending across all categories
    pub total_spending: Money,
    /// Number of expense transactions counted
    pub total_transactions: usize,
}

impl SpendingReport {
    /// Generate a spending report over all transactions
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self::build(transactions, None)
    }

    /// Generate a spending report restricted to one calendar year
    pub fn generate_for_year(transactions: &[Transaction], year: i32) -> Self {
        Self::build(transactions, Some(year))
    }

    fn build(transactions: &[Transaction], year: Option<i32>) -> Self {
        let mut totals: HashMap<String, (Money, usize)> = HashMap::new();
        let mut total_spending = Money::zero();
        let mut total_transactions = 0;

        let expenses = transactions
            .iter()
            .filter(|t| t.is_expense())
            .filter(|t| year.map_or(true, |y| t.date.year() == y));

        for txn in expenses {
            let label = match txn.category.trim() {
                "" => UNCATEGORIZED.to_string(),
                other => other.to_string(),
            };
            let entry = totals.entry(label).or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
            total_spending += txn.amount;
            total_transactions += 1;
        }

        let mut categories: Vec<SpendingByCategory> = totals
            .into_iter()
            .map(|(category, (amount, transaction_count))| SpendingByCategory {
                percentage: if total_spending.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 / total_spending.cents() as f64 * 100.0
                },
                category,
                amount,
                transaction_count,
            })
            .collect();

        categories.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            year,
            categories,
            total_spending,
            total_transactions,
        }
    }

    /// Get top spending categories
    pub fn top_categories(&self, limit: usize) -> &[SpendingByCategory] {
        &self.categories[..limit.min(self.categories.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        self.format_rows(&self.categories)
    }

    /// Format only the `limit` largest categories
    pub fn format_terminal_top(&self, limit: usize) -> String {
        self.format_rows(self.top_categories(limit))
    }

    fn format_rows(&self, rows: &[SpendingByCategory]) -> String {
        let mut output = String::new();

        match self.year {
            Some(year) => output.push_str(&format!("Spending Report: {}\n", year)),
            None => output.push_str("Spending Report: all time\n"),
        }
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!("Total Spending: {}\n", self.total_spending));
        output.push_str(&format!("Total Transactions: {}\n\n", self.total_transactions));

        if rows.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>16} {:>6} {:>6}  {}\n",
            "Category", "Amount", "Count", "%", ""
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        let largest = self
            .categories
            .first()
            .map(|c| c.amount.cents() as f64)
            .unwrap_or(0.0);

        for row in rows {
            output.push_str(&format!(
                "{:<28} {:>16} {:>6} {:>6}  {}\n",
                truncate(&row.category, 28),
                row.amount.to_string(),
                row.transaction_count,
                format_percentage(row.percentage),
                format_bar(row.amount.cents() as f64, largest, 10)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>16} {:>6}\n",
            "TOTAL SPENDING",
            self.total_spending.to_string(),
            self.total_transactions
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Amount", "Transaction Count", "Percentage"])?;

        for row in &self.categories {
            csv.write_record([
                row.category.as_str(),
                &row.amount.to_decimal_string(),
                &row.transaction_count.to_string(),
                &format!("{:.2}", row.percentage),
            ])?;
        }

        let total_pct = if self.total_spending.is_zero() {
            "0.00"
        } else {
            "100.00"
        };
        csv.write_record([
            "TOTAL",
            &self.total_spending.to_decimal_string(),
            &self.total_transactions.to_string(),
            total_pct,
        ])?;

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

    fn txn(year: i32, cents: i64, kind: TransactionType, category: &str) -> Transaction {
        Transaction::from_new(
            TransactionId::new(),
            NewTransaction::new(
                "entry",
                Money::from_cents(cents),
                kind,
                NaiveDate::from_ymd_opt(year, 5, 10).unwrap(),
            )
            .with_category(category),
        )
    }

    fn ledger() -> Vec<Transaction> {
        use TransactionType::*;
        vec![
            txn(2025, 500_000, FixedIncome, "Salary"),
            txn(2025, 150_000, FixedExpense, "Housing"),
            txn(2025, 30_000, VariableExpense, "Food"),
            txn(2025, 20_000, VariableExpense, " Food "),
            txn(2025, 5_000, VariableExpense, ""),
            txn(2024, 70_000, VariableExpense, "Travel"),
        ]
    }

    #[test]
    fn test_groups_expenses_by_category() {
        let report = SpendingReport::generate(&ledger());
        let labels: Vec<_> = report.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(labels, ["Housing", "Travel", "Food", UNCATEGORIZED]);

        let food = &report.categories[2];
        assert_eq!(food.amount, Money::from_cents(50_000));
        assert_eq!(food.transaction_count, 2);
        assert_eq!(report.total_transactions, 5);
    }

    #[test]
    fn test_income_is_ignored() {
        let report = SpendingReport::generate(&ledger());
        assert!(report.categories.iter().all(|c| c.category != "Salary"));
    }

    #[test]
    fn test_totals_match_expenses() {
        let transactions = ledger();
        let report = SpendingReport::generate(&transactions);
        let by_category: Money = report.categories.iter().map(|c| c.amount).sum();
        let expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();
        assert_eq!(by_category, expenses);
        assert_eq!(report.total_spending, expenses);

        let pct: f64 = report.categories.iter().map(|c| c.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_year_filter() {
        let report = SpendingReport::generate_for_year(&ledger(), 2024);
        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].category, "Travel");
        assert_eq!(report.total_spending, Money::from_cents(70_000));
    }

    #[test]
    fn test_ties_break_by_label() {
        use TransactionType::*;
        let transactions = vec![
            txn(2025, 1_000, VariableExpense, "Zoo"),
            txn(2025, 1_000, VariableExpense, "Books"),
        ];
        let report = SpendingReport::generate(&transactions);
        assert_eq!(report.categories[0].category, "Books");
    }

    #[test]
    fn test_top_categories() {
        let report = SpendingReport::generate(&ledger());
        assert_eq!(report.top_categories(2).len(), 2);
        assert_eq!(report.top_categories(2)[0].category, "Housing");
        assert_eq!(report.top_categories(50).len(), 4);
    }

    #[test]
    fn test_empty_report() {
        let report = SpendingReport::generate(&[]);
        assert!(report.categories.is_empty());
        assert!(report.total_spending.is_zero());
        assert!(report.format_terminal().contains("No expenses recorded."));
    }

    #[test]
    fn test_export_csv() {
        let report = SpendingReport::generate_for_year(&ledger(), 2025);
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Category,Amount,Transaction Count,Percentage");
        assert!(lines[1].starts_with("Housing,1500.00,1,"));
        assert_eq!(lines.last().copied(), Some("TOTAL,2050.00,4,100.00"));
    }
}
