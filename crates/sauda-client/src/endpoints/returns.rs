//! # Return Endpoints

use sauda_core::refund::ReturnRequest;
use sauda_core::types::SaleReturn;

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Operations on `/api/returns`.
#[derive(Debug, Clone, Copy)]
pub struct ReturnsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReturnsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        ReturnsApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<SaleReturn>> {
        self.client.get("/returns").await
    }

    /// The backend computes `refund_amount` from the submitted items.
    pub async fn create(&self, request: &ReturnRequest) -> ClientResult<SaleReturn> {
        self.client.post("/returns", request).await
    }
}
