//! Service layer for fintrack
//!
//! `tax`, `summary` and `recurrence` are pure calculations over plain values.
//! The transaction and investment services sit on top of a
//! [`FinanceStore`](crate::storage::FinanceStore), adding validation, lookup
//! and audit logging.

pub mod investment;
pub mod recurrence;
pub mod summary;
pub mod tax;
pub mod transaction;

pub use investment::InvestmentService;
pub use summary::aggregate;
pub use tax::{estimate, TaxEstimate};
pub use transaction::{TransactionFilter, TransactionService};
