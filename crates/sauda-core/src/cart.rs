//! # Cart/Pricing Engine
//!
//! Per-sale cart accumulation, discount application and checkout
//! validation for both sales channels.
//!
//! ## Cart Operations Flow
//! ```text
//! Select product/set ──► add_product / add_set ──► merge or append line
//!                                                       │
//! Pick discount ────────► totals(discount) ──► { subtotal, discount,
//!                                                total, over_discounted }
//!                                                       │
//! Complete sale ────────► checkout(...) ──► SaleDraft (wire payload)
//! ```
//!
//! ## Invariants
//! - Lines are unique by referenced id; re-adding merges quantities and
//!   recomputes `total = quantity × unit_price`
//! - Unit prices are resolved at add time from the screen's channel and
//!   frozen on the line; set prices are derived from member prices and
//!   never cached on the set entity
//! - `subtotal == Σ line.total`, `total == subtotal − discount`

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{
    CartLine, Discount, LineKind, PaymentMethod, PaymentType, Product, ProductSet, SaleChannel,
};
use crate::validation::{validate_cart_size, validate_quantity};

// =============================================================================
// Cart
// =============================================================================

/// The in-progress cart of one sale screen.
///
/// Each screen owns its own cart, discarded on navigation; nothing here
/// is shared or persisted.
#[derive(Debug, Clone)]
pub struct Cart {
    channel: SaleChannel,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart for the given sales channel.
    pub fn new(channel: SaleChannel) -> Self {
        Cart {
            channel,
            lines: Vec::new(),
        }
    }

    pub fn channel(&self) -> SaleChannel {
        self.channel
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds a product to the cart, or merges into an existing line.
    ///
    /// ## Behavior
    /// - Rejects when `quantity` exceeds the product's available stock
    /// - Price is the channel's price list at add time, frozen on the line
    /// - Merge recomputes the line total from the merged quantity
    ///
    /// ## Example
    /// ```rust
    /// use sauda_core::cart::Cart;
    /// use sauda_core::types::SaleChannel;
    /// # let product = sauda_core::cart::doc_product();
    ///
    /// let mut cart = Cart::new(SaleChannel::Retail);
    /// cart.add_product(&product, 2).unwrap();
    /// cart.add_product(&product, 3).unwrap();
    ///
    /// assert_eq!(cart.lines().len(), 1);
    /// assert_eq!(cart.lines()[0].quantity, 5);
    /// ```
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if !product.in_stock(quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.quantity,
                requested: quantity,
            });
        }

        let unit_price = product.price_for(self.channel);
        let kind = LineKind::Product {
            product_id: product.id.clone(),
        };
        self.push_or_merge(kind, &product.name, quantity, unit_price)
    }

    /// Adds a set (bundle) to the cart, or merges into an existing line.
    ///
    /// ## Behavior
    /// - Every member product must have `quantity × member.quantity` in
    ///   stock, else the whole add is rejected
    /// - The set's unit price is derived at add time:
    ///   `Σ member_price_for_channel × member.quantity`
    pub fn add_set(
        &mut self,
        set: &ProductSet,
        quantity: i64,
        products: &[Product],
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let mut set_price = Money::zero();
        for member in &set.items {
            let product = products
                .iter()
                .find(|p| p.id == member.product_id)
                .ok_or_else(|| CoreError::ProductNotFound(member.product_name.clone()))?;

            let needed = member.quantity * quantity;
            if !product.in_stock(needed) {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.quantity,
                    requested: needed,
                });
            }

            set_price += product.price_for(self.channel).multiply_quantity(member.quantity);
        }

        let kind = LineKind::Set {
            set_id: set.id.clone(),
        };
        self.push_or_merge(kind, &set.name, quantity, set_price)
    }

    /// Merges into the line with the same referenced id, or appends.
    fn push_or_merge(
        &mut self,
        kind: LineKind,
        name: &str,
        quantity: i64,
        unit_price: Money,
    ) -> CoreResult<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.kind == kind) {
            line.quantity += quantity;
            line.total = line.unit_price.multiply_quantity(line.quantity);
            return Ok(());
        }

        validate_cart_size(self.lines.len())
            .map_err(|_| CoreError::CartTooLarge { max: crate::MAX_CART_LINES })?;

        self.lines.push(CartLine {
            kind,
            name: name.to_string(),
            quantity,
            unit_price,
            total: unit_price.multiply_quantity(quantity),
        });
        Ok(())
    }

    /// Removes the line at `index`; out-of-range indices are ignored.
    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Clears all lines (sale completed or cancelled).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line totals, before discount.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.total).sum()
    }

    /// Computes the money column of the cart under a discount.
    pub fn totals(&self, discount: Discount) -> CartTotals {
        let subtotal = self.subtotal();
        let discount_amount = discount.amount_on(subtotal);
        CartTotals {
            subtotal,
            discount: discount_amount,
            total: subtotal - discount_amount,
            over_discounted: discount_amount > subtotal,
        }
    }

    /// Validates payment details and produces the sale payload.
    ///
    /// ## Rules
    /// - Cart must not be empty
    /// - Full cash payment: `cash_received ≥ total`, or
    ///   `cash_received + gpay_return ≥ total` when a mixed GPay-return
    ///   leg is supplied
    /// - Wholesale credit: customer name and phone are required
    pub fn checkout(&self, discount: Discount, payment: Checkout) -> CoreResult<SaleDraft> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let totals = self.totals(discount);

        if payment.payment_type == PaymentType::Credit
            && self.channel == SaleChannel::Wholesale
            && (blank(&payment.customer_name) || blank(&payment.customer_phone))
        {
            return Err(CoreError::CustomerRequired);
        }

        if payment.payment_method == PaymentMethod::Cash
            && payment.payment_type == PaymentType::Full
        {
            let cash = payment.cash_received.unwrap_or_default();
            let gpay_return = payment.gpay_return.unwrap_or_default();
            let offered = cash + gpay_return;
            if offered < totals.total {
                return Err(CoreError::InsufficientPayment {
                    required: totals.total,
                    offered,
                });
            }
        }

        Ok(SaleDraft {
            sale_type: self.channel,
            customer_name: payment.customer_name,
            customer_phone: payment.customer_phone,
            items: self.lines.clone(),
            discount,
            payment_method: payment.payment_method,
            payment_type: payment.payment_type,
            cash_received: payment.cash_received,
            gpay_return: payment.gpay_return.filter(|g| g.is_positive()),
            amount_paid: match payment.payment_type {
                PaymentType::Credit => Some(payment.amount_paid.unwrap_or_default()),
                PaymentType::Full => None,
            },
        })
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

// =============================================================================
// Totals
// =============================================================================

/// The money column of a cart under a given discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Money,
    pub discount: Money,
    /// `subtotal − discount`; may be negative when a fixed-amount
    /// discount exceeds the subtotal (flagged, not clamped).
    pub total: Money,
    pub over_discounted: bool,
}

impl CartTotals {
    /// Change owed to the customer on a cash payment.
    pub fn change_due(&self, cash_received: Money) -> Money {
        (cash_received - self.total).max(Money::zero())
    }
}

// =============================================================================
// Checkout Payloads
// =============================================================================

/// Payment details entered on the checkout form.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    pub payment_method: PaymentMethod,
    pub payment_type: PaymentType,
    pub cash_received: Option<Money>,
    pub gpay_return: Option<Money>,
    /// Collected now on a credit sale; remainder becomes the balance.
    pub amount_paid: Option<Money>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

/// The `POST /api/sales` body. Subtotal, discount amount, total and the
/// outstanding balance are computed by the backend from this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDraft {
    pub sale_type: SaleChannel,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub items: Vec<CartLine>,
    #[serde(flatten)]
    pub discount: Discount,
    pub payment_method: PaymentMethod,
    pub payment_type: PaymentType,
    pub cash_received: Option<Money>,
    pub gpay_return: Option<Money>,
    pub amount_paid: Option<Money>,
}

// =============================================================================
// Doc-test Support
// =============================================================================

/// Sample product for doc examples.
#[doc(hidden)]
pub fn doc_product() -> Product {
    use chrono::Utc;
    Product {
        id: "doc-product".to_string(),
        name: "Switch Board".to_string(),
        category_id: "doc-category".to_string(),
        category_name: "Electrical".to_string(),
        quantity: 100,
        unit: crate::types::Unit::Pieces,
        cost_price: Money::from_paise(6000),
        retail_price: Money::from_paise(10000),
        wholesale_price: Money::from_paise(8000),
        supplier_name: None,
        supplier_balance: Money::zero(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
