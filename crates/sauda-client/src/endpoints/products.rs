//! # Product Endpoints
//!
//! Catalogue CRUD, restocking and the stock valuation summary.

use serde::{Deserialize, Serialize};

use sauda_core::money::Money;
use sauda_core::types::{InventoryValue, PaymentMethod, Product, Unit};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// The `POST /api/products` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category_id: String,
    pub quantity: i64,
    pub unit: Unit,
    pub cost_price: Money,
    pub retail_price: Money,
    pub wholesale_price: Money,
}

/// The `PUT /api/products/{id}` body; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wholesale_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_balance: Option<Money>,
}

/// The `POST /api/products/{id}/restock` body.
///
/// Adds `quantity` to stock; a supplied `cost_price` replaces the
/// product's. When a supplier is named, `paid_amount` settles part of
/// the bill from `payment_source` and the remainder accrues on the
/// product's supplier balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockRequest {
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_source: Option<PaymentMethod>,
}

/// Operations on `/api/products` and `/api/inventory`.
#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        ProductsApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        self.client.get("/products").await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        self.client.get(&format!("/products/{}", id)).await
    }

    pub async fn create(&self, request: &ProductCreate) -> ClientResult<Product> {
        self.client.post("/products", request).await
    }

    pub async fn update(&self, id: &str, request: &ProductUpdate) -> ClientResult<Product> {
        self.client.put(&format!("/products/{}", id), request).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/products/{}", id)).await
    }

    /// `POST /api/products/{id}/restock`.
    pub async fn restock(&self, id: &str, request: &RestockRequest) -> ClientResult<Product> {
        self.client
            .post(&format!("/products/{}/restock", id), request)
            .await
    }

    /// `GET /api/inventory/total-value` — stock valued at each price list.
    pub async fn total_value(&self) -> ClientResult<InventoryValue> {
        self.client.get("/inventory/total-value").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restock_request_omits_unset_fields() {
        let bare = RestockRequest {
            quantity: 10,
            cost_price: None,
            supplier_name: None,
            paid_amount: None,
            payment_source: None,
        };
        let value = serde_json::to_value(&bare).unwrap();
        assert_eq!(value, serde_json::json!({ "quantity": 10 }));
    }

    #[test]
    fn test_restock_request_supplier_leg() {
        let request = RestockRequest {
            quantity: 10,
            cost_price: Some(Money::from_paise(4500)),
            supplier_name: Some("Sharma Supplies".to_string()),
            paid_amount: Some(Money::from_paise(30000)),
            payment_source: Some(PaymentMethod::Gpay),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["cost_price"], 45.0);
        assert_eq!(value["payment_source"], "gpay");
    }

    #[test]
    fn test_product_update_is_sparse() {
        let update = ProductUpdate {
            retail_price: Some(Money::from_paise(12000)),
            ..ProductUpdate::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({ "retail_price": 120.0 }));
    }
}
