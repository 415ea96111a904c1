//! Audit logging for fintrack
//!
//! Every create and delete made through the services is appended to
//! `audit.log` as one JSON object per line, carrying the record as it was
//! after a create or before a delete.
//!
//! ```rust,ignore
//! use fintrack::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Transaction,
//!     txn.id.as_uuid().to_string(),
//!     Some(txn.description.clone()),
//!     &txn,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
