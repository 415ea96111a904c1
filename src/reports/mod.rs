//! Reports module for fintrack
//!
//! Spending by category, periodic income/expense breakdowns, and the balance
//! projection. Each report is computed from plain record slices so it can be
//! fed from either storage backend.

pub mod period;
pub mod projection;
pub mod spending;

pub use period::{PeriodReport, PeriodRow};
pub use projection::{Projection, ProjectionPoint};
pub use spending::{SpendingByCategory, SpendingReport};
