//! # Inventory Screen
//!
//! Catalogue management: categories, products, sets, restocking, and the
//! stock valuation cards.

use tracing::{debug, info};

use sauda_client::{
    ApiClient, CategoryCreate, ProductCreate, ProductUpdate, RestockRequest, SetCreate,
};
use sauda_core::types::{Category, InventoryValue, Product, ProductSet};
use sauda_core::validation::{validate_amount, validate_name, validate_price, validate_quantity};
use sauda_core::CoreError;

use crate::error::{AppError, AppResult};

/// Snapshot of the inventory page.
#[derive(Debug)]
pub struct InventoryScreen {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub sets: Vec<ProductSet>,
    /// Stock valued at cost, retail and wholesale price lists.
    pub value: InventoryValue,
}

impl InventoryScreen {
    /// Loads the four independent lists concurrently.
    pub async fn load(client: &ApiClient) -> AppResult<Self> {
        debug!("loading inventory screen");
        let categories_api = client.categories();
        let products_api = client.products();
        let sets_api = client.sets();
        let (categories, products, sets, value) = tokio::join!(
            categories_api.list(),
            products_api.list(),
            sets_api.list(),
            products_api.total_value()
        );

        Ok(InventoryScreen {
            categories: categories?,
            products: products?,
            sets: sets?,
            value: value?,
        })
    }

    /// Case-insensitive name search over the loaded products.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .collect()
    }

    pub async fn add_category(self, client: &ApiClient, name: &str) -> AppResult<Self> {
        validate_name("category name", name).map_err(CoreError::from)?;

        client
            .categories()
            .create(&CategoryCreate {
                name: name.trim().to_string(),
            })
            .await?;
        info!(name = %name.trim(), "category created");

        Self::load(client).await
    }

    pub async fn remove_category(self, client: &ApiClient, id: &str) -> AppResult<Self> {
        client.categories().delete(id).await?;
        Self::load(client).await
    }

    /// Validates and creates a product, then reloads.
    pub async fn add_product(self, client: &ApiClient, request: ProductCreate) -> AppResult<Self> {
        validate_product(&request)?;

        let product = client.products().create(&request).await?;
        info!(id = %product.id, name = %product.name, "product created");

        Self::load(client).await
    }

    pub async fn update_product(
        self,
        client: &ApiClient,
        id: &str,
        request: ProductUpdate,
    ) -> AppResult<Self> {
        if let Some(name) = &request.name {
            validate_name("name", name).map_err(CoreError::from)?;
        }
        for (field, price) in [
            ("cost price", request.cost_price),
            ("retail price", request.retail_price),
            ("wholesale price", request.wholesale_price),
        ] {
            if let Some(price) = price {
                validate_price(field, price).map_err(CoreError::from)?;
            }
        }

        client.products().update(id, &request).await?;
        info!(id = %id, "product updated");

        Self::load(client).await
    }

    pub async fn remove_product(self, client: &ApiClient, id: &str) -> AppResult<Self> {
        client.products().delete(id).await?;
        Self::load(client).await
    }

    /// Restocks a product: adds stock, optionally updates the cost price
    /// and settles part of the supplier bill.
    pub async fn restock(
        self,
        client: &ApiClient,
        id: &str,
        request: RestockRequest,
    ) -> AppResult<Self> {
        validate_quantity(request.quantity).map_err(CoreError::from)?;
        if let Some(cost_price) = request.cost_price {
            validate_price("cost price", cost_price).map_err(CoreError::from)?;
        }
        if let Some(paid) = request.paid_amount {
            validate_amount("paid amount", paid).map_err(CoreError::from)?;
        }

        let product = client.products().restock(id, &request).await?;
        info!(id = %id, quantity = product.quantity, "product restocked");

        Self::load(client).await
    }

    /// Validates and creates a set, then reloads.
    pub async fn add_set(self, client: &ApiClient, request: SetCreate) -> AppResult<Self> {
        validate_name("set name", &request.name).map_err(CoreError::from)?;
        if request.items.is_empty() {
            return Err(AppError::validation("A set needs at least one product"));
        }
        for item in &request.items {
            validate_quantity(item.quantity).map_err(CoreError::from)?;
        }

        let set = client.sets().create(&request).await?;
        info!(id = %set.id, name = %set.name, "set created");

        Self::load(client).await
    }

    pub async fn remove_set(self, client: &ApiClient, id: &str) -> AppResult<Self> {
        client.sets().delete(id).await?;
        Self::load(client).await
    }
}

fn validate_product(request: &ProductCreate) -> AppResult<()> {
    validate_name("name", &request.name).map_err(CoreError::from)?;
    if request.category_id.trim().is_empty() {
        return Err(AppError::validation("Category is required"));
    }
    if request.quantity < 0 {
        return Err(AppError::validation("Stock cannot be negative"));
    }
    for (field, price) in [
        ("cost price", request.cost_price),
        ("retail price", request.retail_price),
        ("wholesale price", request.wholesale_price),
    ] {
        validate_price(field, price).map_err(CoreError::from)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sauda_core::types::Unit;
    use sauda_core::Money;

    fn create_request(name: &str, retail: i64) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            category_id: "cat-1".to_string(),
            quantity: 10,
            unit: Unit::Pieces,
            cost_price: Money::from_paise(5000),
            retail_price: Money::from_paise(retail),
            wholesale_price: Money::from_paise(8000),
        }
    }

    #[test]
    fn test_validate_product_accepts_zero_price() {
        assert!(validate_product(&create_request("Freebie", 0)).is_ok());
    }

    #[test]
    fn test_validate_product_rejects_bad_input() {
        assert!(validate_product(&create_request("  ", 10000)).is_err());
        assert!(validate_product(&create_request("Wire", -100)).is_err());

        let mut request = create_request("Wire", 10000);
        request.category_id = "".to_string();
        assert!(validate_product(&request).is_err());
    }
}
