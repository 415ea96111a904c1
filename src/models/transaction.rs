//! Transaction model
//!
//! Income and expense records. A transaction is immutable once the store has
//! assigned it an id; the create payload without an id is [`NewTransaction`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Kind of cash flow a transaction represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Salary and other steady inflows
    #[serde(alias = "income")]
    FixedIncome,
    VariableIncome,
    /// Rent, subscriptions and other steady outflows
    FixedExpense,
    VariableExpense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [
        Self::FixedIncome,
        Self::VariableIncome,
        Self::FixedExpense,
        Self::VariableExpense,
    ];

    pub fn is_income(&self) -> bool {
        matches!(self, Self::FixedIncome | Self::VariableIncome)
    }

    pub fn is_expense(&self) -> bool {
        !self.is_income()
    }

    /// Wire tag, as used in JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FixedIncome => "fixed_income",
            Self::VariableIncome => "variable_income",
            Self::FixedExpense => "fixed_expense",
            Self::VariableExpense => "variable_expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedIncome => write!(f, "Fixed income"),
            Self::VariableIncome => write!(f, "Variable income"),
            Self::FixedExpense => write!(f, "Fixed expense"),
            Self::VariableExpense => write!(f, "Variable expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fixed_income" | "income" => Ok(Self::FixedIncome),
            "variable_income" => Ok(Self::VariableIncome),
            "fixed_expense" | "fixed" => Ok(Self::FixedExpense),
            "variable_expense" | "variable" => Ok(Self::VariableExpense),
            _ => Err(TransactionValidationError::UnknownType(s.to_string())),
        }
    }
}

/// Payload for creating a transaction; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Money,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl NewTransaction {
    /// A one-off transaction with no category
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        transaction_type: TransactionType,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            transaction_type,
            category: String::new(),
            date,
            is_recurring: false,
            installments: None,
            start_date: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Mark as a monthly series of `installments` payments from `start_date`
    pub fn recurring(mut self, installments: u32, start_date: NaiveDate) -> Self {
        self.is_recurring = true;
        self.installments = Some(installments);
        self.start_date = Some(start_date);
        self
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(
            &self.description,
            self.amount,
            self.date,
            self.is_recurring,
            self.installments,
            self.start_date,
        )
    }
}

/// A persisted financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    /// Always positive; the direction comes from `transaction_type`
    pub amount: Money,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl Transaction {
    /// Attach a store-assigned id to a create payload
    pub fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        Self {
            id,
            description: new.description,
            amount: new.amount,
            transaction_type: new.transaction_type,
            category: new.category,
            date: new.date,
            is_recurring: new.is_recurring,
            installments: new.installments,
            start_date: new.start_date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type.is_expense()
    }

    /// First due date and installment count of a recurring series
    ///
    /// Returns `None` for one-off transactions. A missing start date falls
    /// back to the transaction's own date.
    pub fn schedule(&self) -> Option<(NaiveDate, u32)> {
        if !self.is_recurring {
            return None;
        }
        let installments = self.installments.unwrap_or(1);
        Some((self.start_date.unwrap_or(self.date), installments))
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(
            &self.description,
            self.amount,
            self.date,
            self.is_recurring,
            self.installments,
            self.start_date,
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

fn validate_fields(
    description: &str,
    amount: Money,
    date: NaiveDate,
    is_recurring: bool,
    installments: Option<u32>,
    start_date: Option<NaiveDate>,
) -> Result<(), TransactionValidationError> {
    if description.trim().is_empty() {
        return Err(TransactionValidationError::EmptyDescription);
    }

    if !amount.is_positive() {
        return Err(TransactionValidationError::NonPositiveAmount(amount));
    }

    if is_recurring {
        match installments {
            Some(n) if n >= 1 => {}
            _ => return Err(TransactionValidationError::InvalidInstallments),
        }
        if let Some(start) = start_date {
            if start > date {
                return Err(TransactionValidationError::StartAfterDate { start, date });
            }
        }
    }

    Ok(())
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    InvalidInstallments,
    StartAfterDate { start: NaiveDate, date: NaiveDate },
    UnknownType(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
            Self::InvalidInstallments => {
                write!(f, "Recurring transactions need at least one installment")
            }
            Self::StartAfterDate { start, date } => write!(
                f,
                "Series start date {} is after the transaction date {}",
                start, date
            ),
            Self::UnknownType(value) => write!(
                f,
                "Unknown transaction type '{}' (expected fixed_income, variable_income, fixed_expense or variable_expense)",
                value
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
