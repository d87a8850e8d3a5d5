//! # Category Endpoints
//!
//! Product categories and expense categories share a shape but live at
//! different routes; both groups are defined here.

use serde::{Deserialize, Serialize};

use sauda_core::types::{Category, ExpenseCategory};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// The `POST /api/categories` and `POST /api/expense-categories` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}

/// Operations on `/api/categories`.
#[derive(Debug, Clone, Copy)]
pub struct CategoriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoriesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        CategoriesApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Category>> {
        self.client.get("/categories").await
    }

    pub async fn create(&self, request: &CategoryCreate) -> ClientResult<Category> {
        self.client.post("/categories", request).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/categories/{}", id)).await
    }
}

/// Operations on `/api/expense-categories`.
#[derive(Debug, Clone, Copy)]
pub struct ExpenseCategoriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ExpenseCategoriesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        ExpenseCategoriesApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<ExpenseCategory>> {
        self.client.get("/expense-categories").await
    }

    pub async fn create(&self, request: &CategoryCreate) -> ClientResult<ExpenseCategory> {
        self.client.post("/expense-categories", request).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .delete(&format!("/expense-categories/{}", id))
            .await
    }
}
