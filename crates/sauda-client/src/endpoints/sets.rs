//! # Product Set Endpoints

use serde::{Deserialize, Serialize};

use sauda_core::types::{ProductSet, SetItem};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// The `POST /api/sets` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCreate {
    pub name: String,
    pub items: Vec<SetItem>,
}

/// Operations on `/api/sets`.
#[derive(Debug, Clone, Copy)]
pub struct SetsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SetsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        SetsApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<ProductSet>> {
        self.client.get("/sets").await
    }

    pub async fn get(&self, id: &str) -> ClientResult<ProductSet> {
        self.client.get(&format!("/sets/{}", id)).await
    }

    pub async fn create(&self, request: &SetCreate) -> ClientResult<ProductSet> {
        self.client.post("/sets", request).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/sets/{}", id)).await
    }
}
