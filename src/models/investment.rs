//! Investment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InvestmentId;
use super::money::Money;

/// Payload for creating an investment; the store assigns the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvestment {
    pub name: String,
    pub amount: Money,
    /// Free-text asset class ("CDB", "Tesouro Selic", "stocks", ...)
    #[serde(rename = "type", default)]
    pub investment_type: String,
    /// Annualized percentage, e.g. `12.5` for 12.5% a year
    #[serde(default)]
    pub expected_return: f64,
    pub date: NaiveDate,
}

impl NewInvestment {
    pub fn new(name: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            amount,
            investment_type: String::new(),
            expected_return: 0.0,
            date,
        }
    }

    pub fn with_type(mut self, investment_type: impl Into<String>) -> Self {
        self.investment_type = investment_type.into();
        self
    }

    pub fn with_expected_return(mut self, expected_return: f64) -> Self {
        self.expected_return = expected_return;
        self
    }

    pub fn validate(&self) -> Result<(), InvestmentValidationError> {
        if self.name.trim().is_empty() {
            return Err(InvestmentValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(InvestmentValidationError::NonPositiveAmount(self.amount));
        }
        if !self.expected_return.is_finite() {
            return Err(InvestmentValidationError::InvalidReturn);
        }
        Ok(())
    }
}

/// A persisted investment position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,
    pub name: String,
    pub amount: Money,
    #[serde(rename = "type", default)]
    pub investment_type: String,
    #[serde(default)]
    pub expected_return: f64,
    pub date: NaiveDate,
}

impl Investment {
    pub fn from_new(id: InvestmentId, new: NewInvestment) -> Self {
        Self {
            id,
            name: new.name,
            amount: new.amount,
            investment_type: new.investment_type,
            expected_return: new.expected_return,
            date: new.date,
        }
    }

    /// Yield over one year at the expected rate, rounded to the cent
    pub fn expected_annual_yield(&self) -> Money {
        Money::from_f64(self.amount.as_f64() * self.expected_return / 100.0)
            .unwrap_or_else(Money::zero)
    }
}

impl fmt::Display for Investment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({:.2}% a.a.)",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount,
            self.expected_return
        )
    }
}

/// Validation errors for investments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestmentValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    InvalidReturn,
}

impl fmt::Display for InvestmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Investment name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Investment amount must be positive, got {}", amount)
            }
            Self::InvalidReturn => write!(f, "Expected return must be a finite number"),
        }
    }
}

impl std::error::Error for InvestmentValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cdb() -> NewInvestment {
        NewInvestment::new(
            "CDB Banco X",
            Money::from_cents(1_000_000),
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        )
        .with_type("CDB")
        .with_expected_return(12.5)
    }

    #[test]
    fn test_validate() {
        assert!(cdb().validate().is_ok());

        let mut unnamed = cdb();
        unnamed.name = String::new();
        assert_eq!(unnamed.validate(), Err(InvestmentValidationError::EmptyName));

        let mut negative = cdb();
        negative.amount = Money::from_cents(-1);
        assert!(matches!(
            negative.validate(),
            Err(InvestmentValidationError::NonPositiveAmount(_))
        ));

        let nan = cdb().with_expected_return(f64::NAN);
        assert_eq!(nan.validate(), Err(InvestmentValidationError::InvalidReturn));
    }

    #[test]
    fn test_expected_annual_yield() {
        let inv = Investment::from_new(InvestmentId::new(), cdb());
        assert_eq!(inv.expected_annual_yield(), Money::from_cents(125_000));
    }

    #[test]
    fn test_wire_format() {
        let inv = Investment::from_new(InvestmentId::new(), cdb());
        let value = serde_json::to_value(&inv).unwrap();
        assert_eq!(value["type"], "CDB");
        assert_eq!(value["amount"], 10000.0);
        assert_eq!(value["expected_return"], 12.5);

        let back: Investment = serde_json::from_value(value).unwrap();
        assert_eq!(back, inv);
    }
}
