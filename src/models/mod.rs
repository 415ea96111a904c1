//! Core data models for fintrack
//!
//! Transactions, investments, the aggregate summary, and the value types they
//! are built from.

pub mod ids;
pub mod investment;
pub mod money;
pub mod period;
pub mod summary;
pub mod transaction;

pub use ids::{InvestmentId, TransactionId};
pub use investment::{Investment, InvestmentValidationError, NewInvestment};
pub use money::{Money, MoneyParseError};
pub use period::{Granularity, GranularityParseError};
pub use summary::Summary;
pub use transaction::{NewTransaction, Transaction, TransactionType, TransactionValidationError};
