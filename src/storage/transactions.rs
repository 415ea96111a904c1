//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of transactions.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

/// Newest first; ties broken by id so listings are stable
fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk, replacing what is in memory
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Insert or replace a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Remove a transaction, returning it if it existed
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id))
    }

    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
