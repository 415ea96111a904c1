//! Transaction service
//!
//! Validation, lookup by short id, filtering, and audit logging on top of a
//! [`FinanceStore`].

use chrono::Datelike;
use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::storage::FinanceStore;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a dyn FinanceStore,
    audit: &'a AuditLogger,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub transaction_type: Option<TransactionType>,
    /// Case-insensitive category label
    pub category: Option<String>,
    /// Calendar year of the transaction date
    pub year: Option<i32>,
    /// Only recurring transactions
    pub recurring_only: bool,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn recurring(mut self) -> Self {
        self.recurring_only = true;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.transaction_type {
            if txn.transaction_type != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !txn.category.trim().eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if txn.date.year() != year {
                return false;
            }
        }
        !self.recurring_only || txn.is_recurring
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a dyn FinanceStore, audit: &'a AuditLogger) -> Self {
        Self { store, audit }
    }

    /// Validate and store a new transaction
    pub fn create(&self, new: NewTransaction) -> FintrackResult<Transaction> {
        if let Err(e) = new.validate() {
            warn!(error = %e, "rejected transaction");
            return Err(FintrackError::Validation(e.to_string()));
        }

        let txn = self.store.create_transaction(new)?;

        self.audit.log(&AuditEntry::create(
            EntityType::Transaction,
            txn.id.as_uuid().to_string(),
            Some(txn.description.clone()),
            &txn,
        ))?;
        info!(id = %txn.id, kind = txn.transaction_type.as_str(), "created transaction");

        Ok(txn)
    }

    /// List transactions matching `filter`, in store order (newest first)
    pub fn list(&self, filter: &TransactionFilter) -> FintrackResult<Vec<Transaction>> {
        let mut transactions: Vec<_> = self
            .store
            .list_transactions()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Find a transaction by full UUID or by the short form shown in listings
    ///
    /// A short form that matches more than one transaction is rejected.
    pub fn find(&self, identifier: &str) -> FintrackResult<Option<Transaction>> {
        let mut matches = self
            .store
            .list_transactions()?
            .into_iter()
            .filter(|t| t.id.matches(identifier));

        let first = matches.next();
        if matches.next().is_some() {
            return Err(FintrackError::Validation(format!(
                "Identifier '{}' matches more than one transaction",
                identifier
            )));
        }
        Ok(first)
    }

    /// Delete a transaction by identifier, returning the removed record
    pub fn delete(&self, identifier: &str) -> FintrackResult<Transaction> {
        let txn = self
            .find(identifier)?
            .ok_or_else(|| FintrackError::transaction_not_found(identifier))?;

        self.store.delete_transaction(txn.id)?;

        self.audit.log(&AuditEntry::delete(
            EntityType::Transaction,
            txn.id.as_uuid().to_string(),
            Some(txn.description.clone()),
            &txn,
        ))?;
        info!(id = %txn.id, "deleted transaction");

        Ok(txn)
    }
}
