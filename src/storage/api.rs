//! HTTP backend for a remote finance API
//!
//! Records and the summary live on the server; this client only forwards
//! requests. JSON bodies use the same field names as the local files.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiSettings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Investment, NewInvestment, NewTransaction, Summary, Transaction, TransactionId,
};

use super::FinanceStore;

/// Blocking client for `{base_url}/transactions`, `/investments` and `/summary`
pub struct ApiStore {
    client: Client,
    base_url: String,
}

impl ApiStore {
    pub fn new(settings: &ApiSettings) -> FintrackResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| FintrackError::Api(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> FintrackResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send()?;
        Ok(check_status(response, path)?.json()?)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> FintrackResult<T> {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send()?;
        Ok(check_status(response, path)?.json()?)
    }
}

/// Pass successful responses through; map everything else to an error
fn check_status(response: Response, path: &str) -> FintrackResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(status_error(status, path, &body))
}

fn status_error(status: StatusCode, path: &str, body: &str) -> FintrackError {
    let body = body.trim();
    if body.is_empty() {
        FintrackError::Api(format!("{} returned {}", path, status))
    } else {
        FintrackError::Api(format!("{} returned {}: {}", path, status, body))
    }
}

impl FinanceStore for ApiStore {
    fn list_transactions(&self) -> FintrackResult<Vec<Transaction>> {
        self.get("transactions")
    }

    fn list_investments(&self) -> FintrackResult<Vec<Investment>> {
        self.get("investments")
    }

    fn read_summary(&self) -> FintrackResult<Summary> {
        self.get("summary")
    }

    fn create_transaction(&self, new: NewTransaction) -> FintrackResult<Transaction> {
        self.post("transactions", &new)
    }

    fn create_investment(&self, new: NewInvestment) -> FintrackResult<Investment> {
        self.post("investments", &new)
    }

    fn delete_transaction(&self, id: TransactionId) -> FintrackResult<()> {
        let path = format!("transactions/{}", id.as_uuid());
        let url = self.url(&path);
        debug!(%url, "DELETE");

        let response = self.client.delete(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(FintrackError::transaction_not_found(id.as_uuid().to_string()));
        }
        check_status(response, &path)?;
        Ok(())
    }
}
