//! Configuration module for fintrack
//!
//! - Data directory resolution
//! - User settings persistence, including the storage backend choice

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::{ApiSettings, Backend, Settings};
