//! Aggregate snapshot of the ledger
//!
//! The external API serves a precomputed summary; the local store derives one
//! with [`crate::services::summary::aggregate`].

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Per-bucket totals; every field is non-negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "income", default)]
    pub fixed_income: Money,
    #[serde(default)]
    pub variable_income: Money,
    #[serde(rename = "fixed", default)]
    pub fixed_expenses: Money,
    #[serde(rename = "variable", default)]
    pub variable_expenses: Money,
    #[serde(default)]
    pub invested: Money,
}

impl Summary {
    pub fn total_income(&self) -> Money {
        self.fixed_income + self.variable_income
    }

    pub fn total_expenses(&self) -> Money {
        self.fixed_expenses + self.variable_expenses
    }

    /// Income minus expenses; investments are not subtracted
    pub fn net_balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Sum of all five buckets
    pub fn total(&self) -> Money {
        self.total_income() + self.total_expenses() + self.invested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_totals() {
        let summary = Summary {
            fixed_income: Money::from_cents(500000),
            variable_income: Money::from_cents(80000),
            fixed_expenses: Money::from_cents(200000),
            variable_expenses: Money::from_cents(95050),
            invested: Money::from_cents(100000),
        };
        assert_eq!(summary.total_income(), Money::from_cents(580000));
        assert_eq!(summary.total_expenses(), Money::from_cents(295050));
        assert_eq!(summary.net_balance(), Money::from_cents(284950));
        assert_eq!(summary.total(), Money::from_cents(975050));
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"income": 5000, "variable_income": 800.5, "fixed": 2000, "variable": 950.5, "invested": 1000}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.fixed_income, Money::from_cents(500000));
        assert_eq!(summary.variable_income, Money::from_cents(80050));
        assert_eq!(summary.variable_expenses, Money::from_cents(95050));

        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(value["fixed"], 2000.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let summary: Summary = serde_json::from_str(r#"{"income": 10}"#).unwrap();
        assert_eq!(summary.total(), Money::from_cents(1000));
    }
}
