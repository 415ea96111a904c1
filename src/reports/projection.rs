//! Balance projection
//!
//! Extends the current net balance forward month by month using the net of
//! recurring income and recurring expenses. Installment end dates are not
//! taken into account.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::display::report::format_money_colored_right;
use crate::models::{Money, Summary, Transaction};

/// Projected balance at the start of one future month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionPoint {
    /// First day of the projected month
    pub month: NaiveDate,
    /// "Mon/YYYY"
    pub label: String,
    pub balance: Money,
}

/// Linear balance projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub as_of: NaiveDate,
    pub recurring_income: Money,
    pub recurring_expenses: Money,
    pub starting_balance: Money,
    pub points: Vec<ProjectionPoint>,
}

impl Projection {
    /// Project `horizon_months` months past the month containing `as_of`
    pub fn generate(
        transactions: &[Transaction],
        summary: &Summary,
        horizon_months: u32,
        as_of: NaiveDate,
    ) -> Self {
        let mut recurring_income = Money::zero();
        let mut recurring_expenses = Money::zero();
        for txn in transactions.iter().filter(|t| t.is_recurring) {
            if txn.is_income() {
                recurring_income += txn.amount;
            } else {
                recurring_expenses += txn.amount;
            }
        }

        let starting_balance = summary.net_balance();
        let monthly_net = recurring_income - recurring_expenses;
        let first_of_month = as_of.with_day(1).unwrap_or(as_of);

        let points = (0..horizon_months)
            .map_while(|i| {
                let month = first_of_month.checked_add_months(Months::new(i + 1))?;
                Some(ProjectionPoint {
                    month,
                    label: month.format("%b/%Y").to_string(),
                    balance: monthly_net * i64::from(i + 1) + starting_balance,
                })
            })
            .collect();

        Self {
            as_of,
            recurring_income,
            recurring_expenses,
            starting_balance,
            points,
        }
    }

    /// Recurring income minus recurring expenses
    pub fn monthly_net(&self) -> Money {
        self.recurring_income - self.recurring_expenses
    }

    pub fn final_balance(&self) -> Money {
        self.points
            .last()
            .map(|p| p.balance)
            .unwrap_or(self.starting_balance)
    }

    /// Format the projection for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Balance Projection from {}\n", self.as_of));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("Starting balance:   {:>16}\n", self.starting_balance.to_string()));
        output.push_str(&format!("Recurring income:   {:>16}\n", self.recurring_income.to_string()));
        output.push_str(&format!("Recurring expenses: {:>16}\n", self.recurring_expenses.to_string()));
        output.push_str(&format!("Monthly net:        {:>16}\n\n", self.monthly_net().to_string()));

        output.push_str(&format!("{:<10} {:>16}\n", "Month", "Balance"));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for point in &self.points {
            output.push_str(&format!(
                "{:<10} {}\n",
                point.label,
                format_money_colored_right(point.balance, 16)
            ));
        }

        output
    }
}
