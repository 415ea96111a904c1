//! Investment service

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Investment, Money, NewInvestment};
use crate::storage::FinanceStore;

/// Service for investment positions
pub struct InvestmentService<'a> {
    store: &'a dyn FinanceStore,
    audit: &'a AuditLogger,
}

impl<'a> InvestmentService<'a> {
    pub fn new(store: &'a dyn FinanceStore, audit: &'a AuditLogger) -> Self {
        Self { store, audit }
    }

    /// Validate and store a new investment
    pub fn create(&self, new: NewInvestment) -> FintrackResult<Investment> {
        if let Err(e) = new.validate() {
            warn!(error = %e, "rejected investment");
            return Err(FintrackError::Validation(e.to_string()));
        }

        let investment = self.store.create_investment(new)?;

        self.audit.log(&AuditEntry::create(
            EntityType::Investment,
            investment.id.as_uuid().to_string(),
            Some(investment.name.clone()),
            &investment,
        ))?;
        info!(id = %investment.id, "created investment");

        Ok(investment)
    }

    pub fn list(&self) -> FintrackResult<Vec<Investment>> {
        self.store.list_investments()
    }

    /// Sum of all positions and of their expected yearly yield
    pub fn totals(&self) -> FintrackResult<(Money, Money)> {
        let investments = self.list()?;
        let invested: Money = investments.iter().map(|i| i.amount).sum();
        let expected_yield: Money = investments.iter().map(|i| i.expected_annual_yield()).sum();
        Ok((invested, expected_yield))
    }
}
