//! Display formatting for terminal output
//!
//! Tables for records, plus the text blocks used by the summary and tax
//! commands and the shared helpers the reports draw with.

pub mod investment;
pub mod report;
pub mod summary;
pub mod transaction;

pub use investment::format_investment_table;
pub use summary::{format_summary, format_tax_estimate};
pub use transaction::{format_transaction_details, format_transaction_table, installment_progress};
