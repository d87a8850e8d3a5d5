//! # API Client
//!
//! The single `ApiClient` every screen talks through, with one endpoint
//! group per backend resource.
//!
//! ## Usage
//! ```rust,no_run
//! use sauda_client::{ApiClient, ClientConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::load()?;
//! let client = ApiClient::new(&config);
//!
//! let products = client.products().list().await?;
//! let balance = client.balance().await?;
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sauda_core::types::Balance;

use crate::config::ClientConfig;
use crate::endpoints::{
    CategoriesApi, ExpenseCategoriesApi, ExpensesApi, ProductsApi, ReportsApi, ReturnsApi,
    SalesApi, SetsApi, TransfersApi,
};
use crate::error::{ClientError, ClientResult};

// =============================================================================
// ApiClient
// =============================================================================

/// HTTP client for the billing backend.
///
/// Cheap to clone; all endpoint groups borrow from it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body shape the backend uses for failures.
#[derive(Debug, Deserialize)]
struct ApiDetail {
    detail: String,
}

impl ApiClient {
    /// Creates a client against the configured base URL.
    pub fn new(config: &ClientConfig) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Endpoint groups
    // -------------------------------------------------------------------------

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(self)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    pub fn sets(&self) -> SetsApi<'_> {
        SetsApi::new(self)
    }

    pub fn expense_categories(&self) -> ExpenseCategoriesApi<'_> {
        ExpenseCategoriesApi::new(self)
    }

    pub fn expenses(&self) -> ExpensesApi<'_> {
        ExpensesApi::new(self)
    }

    pub fn transfers(&self) -> TransfersApi<'_> {
        TransfersApi::new(self)
    }

    pub fn sales(&self) -> SalesApi<'_> {
        SalesApi::new(self)
    }

    pub fn returns(&self) -> ReturnsApi<'_> {
        ReturnsApi::new(self)
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(self)
    }

    /// `GET /api/balance` — the backend's fold of the full history.
    pub async fn balance(&self) -> ClientResult<Balance> {
        self.get("/balance").await
    }

    // -------------------------------------------------------------------------
    // Plumbing shared by the endpoint groups
    // -------------------------------------------------------------------------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        debug!(path = %path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        debug!(path = %path, "GET");
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path = %path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!(path = %path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        debug!(path = %path, "DELETE");
        let response = self.http.delete(self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Decodes a success body, or reduces a failure to `ClientError::Status`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Prefer the backend's detail message when it sent one
        let message = match response.json::<ApiDetail>().await {
            Ok(body) => body.detail,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
