//! Summary aggregation
//!
//! Routes every transaction amount into exactly one bucket by its type and
//! totals investment positions into the invested bucket.

use crate::models::{Investment, Money, Summary, Transaction, TransactionType};

/// Derive a [`Summary`] from raw records
pub fn aggregate(transactions: &[Transaction], investments: &[Investment]) -> Summary {
    let mut summary = Summary::default();

    for txn in transactions {
        let bucket = match txn.transaction_type {
            TransactionType::FixedIncome => &mut summary.fixed_income,
            TransactionType::VariableIncome => &mut summary.variable_income,
            TransactionType::FixedExpense => &mut summary.fixed_expenses,
            TransactionType::VariableExpense => &mut summary.variable_expenses,
        };
        *bucket += txn.amount;
    }

    summary.invested = investments.iter().map(|inv| inv.amount).sum::<Money>();
    summary
}
