//! # Sale Screen
//!
//! One screen serves both the retail and the wholesale counter; the
//! channel picked at load time selects the price list and the credit
//! rules. The catalogue is an immutable snapshot; the cart is this
//! screen's own working state, discarded on navigation.

use tracing::{debug, info};

use sauda_client::ApiClient;
use sauda_core::cart::{Cart, CartTotals, Checkout};
use sauda_core::types::{Discount, Product, ProductSet, Sale, SaleChannel};

use crate::error::{AppError, AppResult};

/// Snapshot of the catalogue plus the in-progress cart.
#[derive(Debug)]
pub struct SaleScreen {
    pub channel: SaleChannel,
    pub products: Vec<Product>,
    pub sets: Vec<ProductSet>,
    pub cart: Cart,
}

impl SaleScreen {
    /// Loads the catalogue; products and sets are fetched concurrently.
    pub async fn load(client: &ApiClient, channel: SaleChannel) -> AppResult<Self> {
        debug!(%channel, "loading sale screen");
        let products_api = client.products();
        let sets_api = client.sets();
        let (products, sets) = tokio::join!(products_api.list(), sets_api.list());

        Ok(SaleScreen {
            channel,
            products: products?,
            sets: sets?,
            cart: Cart::new(channel),
        })
    }

    /// Case-insensitive name search over the product catalogue.
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Case-insensitive name search over the sets.
    pub fn search_sets(&self, query: &str) -> Vec<&ProductSet> {
        let query = query.trim().to_lowercase();
        self.sets
            .iter()
            .filter(|s| query.is_empty() || s.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Adds a catalogue product to the cart.
    pub fn add_product(&mut self, product_id: &str, quantity: i64) -> AppResult<()> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::not_found("Product", product_id))?;
        self.cart.add_product(product, quantity)?;
        Ok(())
    }

    /// Adds a set to the cart; member stock is checked against the
    /// loaded catalogue.
    pub fn add_set(&mut self, set_id: &str, quantity: i64) -> AppResult<()> {
        let set = self
            .sets
            .iter()
            .find(|s| s.id == set_id)
            .ok_or_else(|| AppError::not_found("Set", set_id))?;
        self.cart.add_set(set, quantity, &self.products)?;
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) {
        self.cart.remove_line(index);
    }

    /// The money column re-derived on every render.
    pub fn totals(&self, discount: Discount) -> CartTotals {
        self.cart.totals(discount)
    }

    /// Validates the payment, posts the sale, and reloads the catalogue.
    ///
    /// Returns the recorded sale (for the bill) together with the fresh
    /// screen; the cart starts empty again.
    pub async fn checkout(
        self,
        client: &ApiClient,
        discount: Discount,
        payment: Checkout,
    ) -> AppResult<(Sale, Self)> {
        let draft = self.cart.checkout(discount, payment)?;
        let sale = client.sales().create(&draft).await?;
        info!(sale_id = %sale.id, total = %sale.total, "sale completed");

        let screen = Self::load(client, self.channel).await?;
        Ok((sale, screen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sauda_core::types::Unit;
    use sauda_core::Money;

    fn screen_with(products: Vec<Product>) -> SaleScreen {
        SaleScreen {
            channel: SaleChannel::Retail,
            products,
            sets: Vec::new(),
            cart: Cart::new(SaleChannel::Retail),
        }
    }

    fn product(id: &str, name: &str, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category_id: "c".to_string(),
            category_name: "Electrical".to_string(),
            quantity: stock,
            unit: Unit::Pieces,
            cost_price: Money::from_paise(5000),
            retail_price: Money::from_paise(10000),
            wholesale_price: Money::from_paise(8000),
            supplier_name: None,
            supplier_balance: Money::zero(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_filters_by_name() {
        let screen = screen_with(vec![
            product("1", "Copper Wire", 10),
            product("2", "Switch Board", 10),
        ]);

        let hits = screen.search_products("wire");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Copper Wire");

        // Blank query returns everything
        assert_eq!(screen.search_products("  ").len(), 2);
    }

    #[test]
    fn test_add_product_by_id() {
        let mut screen = screen_with(vec![product("1", "Copper Wire", 10)]);

        screen.add_product("1", 3).unwrap();
        assert_eq!(screen.cart.lines().len(), 1);

        let err = screen.add_product("ghost", 1).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[test]
    fn test_totals_rederive_from_cart() {
        let mut screen = screen_with(vec![product("1", "Copper Wire", 10)]);
        screen.add_product("1", 3).unwrap();

        let totals = screen.totals(Discount::Percentage(10.0));
        assert_eq!(totals.subtotal.paise(), 30000);
        assert_eq!(totals.total.paise(), 27000);
    }
}
