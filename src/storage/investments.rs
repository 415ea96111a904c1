//! Investment repository for JSON storage
//!
//! Manages loading and saving investments to investments.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{Investment, InvestmentId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct InvestmentData {
    investments: Vec<Investment>,
}

/// Repository for investment persistence
pub struct InvestmentRepository {
    path: PathBuf,
    data: RwLock<HashMap<InvestmentId, Investment>>,
}

impl InvestmentRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: InvestmentData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for investment in file_data.investments {
            data.insert(investment.id, investment);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), FintrackError> {
        let investments = self.get_all()?;
        write_json_atomic(&self.path, &InvestmentData { investments })
    }

    /// Get all investments, most recent first
    pub fn get_all(&self) -> Result<Vec<Investment>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut investments: Vec<_> = data.values().cloned().collect();
        investments.sort_by(|a, b| b.date.cmp(&a.date).then(a.name.cmp(&b.name)));
        Ok(investments)
    }

    pub fn upsert(&self, investment: Investment) -> Result<(), FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(investment.id, investment);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
