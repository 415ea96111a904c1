//! Storage layer for fintrack
//!
//! [`FinanceStore`] is the persistence boundary. Two backends implement it:
//! [`Storage`] keeps JSON files under the data directory, and
//! [`ApiStore`] forwards to a remote finance API. [`open_store`] picks one
//! from the user's settings.

pub mod api;
pub mod file_io;
pub mod investments;
pub mod transactions;

pub use api::ApiStore;
pub use file_io::{read_json, write_json_atomic};
pub use investments::InvestmentRepository;
pub use transactions::TransactionRepository;

use tracing::{debug, info};

use crate::config::paths::FintrackPaths;
use crate::config::settings::{Backend, Settings};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Investment, InvestmentId, NewInvestment, NewTransaction, Summary, Transaction, TransactionId,
};
use crate::services::summary::aggregate;

/// Operations every storage backend provides
pub trait FinanceStore: Send + Sync {
    fn list_transactions(&self) -> FintrackResult<Vec<Transaction>>;

    fn list_investments(&self) -> FintrackResult<Vec<Investment>>;

    /// Bucket totals across all stored records
    fn read_summary(&self) -> FintrackResult<Summary>;

    /// Persist a new transaction and return it with its assigned id
    fn create_transaction(&self, new: NewTransaction) -> FintrackResult<Transaction>;

    /// Persist a new investment and return it with its assigned id
    fn create_investment(&self, new: NewInvestment) -> FintrackResult<Investment>;

    /// Remove a transaction; unknown ids are a not-found error
    fn delete_transaction(&self, id: TransactionId) -> FintrackResult<()>;
}

/// JSON file backend
pub struct Storage {
    paths: FintrackPaths,
    pub transactions: TransactionRepository,
    pub investments: InvestmentRepository,
}

impl Storage {
    /// Create the backend, making sure its directories exist
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            investments: InvestmentRepository::new(paths.investments_file()),
            paths,
        })
    }

    /// Create the backend and load everything from disk
    pub fn open(paths: FintrackPaths) -> Result<Self, FintrackError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    pub fn load_all(&self) -> Result<(), FintrackError> {
        self.transactions.load()?;
        self.investments.load()?;
        debug!(
            transactions = self.transactions.count()?,
            investments = self.investments.count()?,
            "loaded data files"
        );
        Ok(())
    }

    pub fn save_all(&self) -> Result<(), FintrackError> {
        self.transactions.save()?;
        self.investments.save()?;
        Ok(())
    }
}

impl FinanceStore for Storage {
    fn list_transactions(&self) -> FintrackResult<Vec<Transaction>> {
        self.transactions.get_all()
    }

    fn list_investments(&self) -> FintrackResult<Vec<Investment>> {
        self.investments.get_all()
    }

    fn read_summary(&self) -> FintrackResult<Summary> {
        let transactions = self.transactions.get_all()?;
        let investments = self.investments.get_all()?;
        Ok(aggregate(&transactions, &investments))
    }

    fn create_transaction(&self, new: NewTransaction) -> FintrackResult<Transaction> {
        new.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let txn = Transaction::from_new(TransactionId::new(), new);
        self.transactions.upsert(txn.clone())?;
        self.transactions.save()?;
        info!(id = %txn.id, "stored transaction");
        Ok(txn)
    }

    fn create_investment(&self, new: NewInvestment) -> FintrackResult<Investment> {
        new.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let investment = Investment::from_new(InvestmentId::new(), new);
        self.investments.upsert(investment.clone())?;
        self.investments.save()?;
        info!(id = %investment.id, "stored investment");
        Ok(investment)
    }

    fn delete_transaction(&self, id: TransactionId) -> FintrackResult<()> {
        match self.transactions.delete(id)? {
            Some(_) => {
                self.transactions.save()?;
                info!(%id, "removed transaction");
                Ok(())
            }
            None => Err(FintrackError::transaction_not_found(id.as_uuid().to_string())),
        }
    }
}

/// Open the backend selected in `settings`
pub fn open_store(paths: &FintrackPaths, settings: &Settings) -> FintrackResult<Box<dyn FinanceStore>> {
    match settings.backend {
        Backend::File => {
            debug!(dir = %paths.data_dir().display(), "using JSON file backend");
            Ok(Box::new(Storage::open(paths.clone())?))
        }
        Backend::Api => {
            debug!(url = %settings.api.base_url, "using HTTP backend");
            Ok(Box::new(ApiStore::new(&settings.api)?))
        }
    }
}
