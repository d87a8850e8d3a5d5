//! # Money Transfer Endpoints
//!
//! Transfer requests are planned by the core ledger module
//! ([`sauda_core::ledger`]); this group only carries them to the wire.
//! A multi-leg plan (e.g. withdraw-all) is two independent POSTs with
//! no rollback on partial failure.

use sauda_core::ledger::TransferRequest;
use sauda_core::types::MoneyTransfer;

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Operations on `/api/money-transfers`.
#[derive(Debug, Clone, Copy)]
pub struct TransfersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TransfersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        TransfersApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<MoneyTransfer>> {
        self.client.get("/money-transfers").await
    }

    pub async fn create(&self, request: &TransferRequest) -> ClientResult<MoneyTransfer> {
        self.client.post("/money-transfers", request).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/money-transfers/{}", id)).await
    }
}
