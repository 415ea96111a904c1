//! fintrack - personal finance tracker
//!
//! Records income, expenses and investments, and derives from them a
//! five-bucket summary, spending and period reports, a balance projection
//! driven by recurring transactions, and a payroll tax estimate.
//!
//! # Architecture
//!
//! - `models`: money, ids, transactions, investments, summary and periods
//! - `services`: business rules (validation, aggregation, recurrence, tax)
//! - `reports`: spending, period and projection reports
//! - `storage`: the `FinanceStore` boundary with JSON-file and HTTP backends
//! - `audit`: append-only log of creates and deletes
//! - `config`: paths and user settings
//! - `display`: terminal formatting
//! - `cli`: clap command handlers used by the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{FintrackPaths, Settings};
//! use fintrack::storage::open_store;
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = open_store(&paths, &settings)?;
//! println!("{}", store.read_summary()?.net_balance());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
