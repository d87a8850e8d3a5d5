//! # Sale Endpoints
//!
//! Sale payloads are produced by the cart engine's checkout
//! ([`sauda_core::cart`]); the backend computes subtotal, discount
//! amount, total and any outstanding balance, decrements stock, and
//! returns the recorded sale.

use sauda_core::cart::SaleDraft;
use sauda_core::types::Sale;

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Operations on `/api/sales`.
#[derive(Debug, Clone, Copy)]
pub struct SalesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SalesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        SalesApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Sale>> {
        self.client.get("/sales").await
    }

    pub async fn create(&self, draft: &SaleDraft) -> ClientResult<Sale> {
        self.client.post("/sales", draft).await
    }

    /// `GET /api/sales/credit` — credit sales with an outstanding balance.
    pub async fn credit(&self) -> ClientResult<Vec<Sale>> {
        self.client.get("/sales/credit").await
    }
}
