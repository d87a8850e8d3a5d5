//! # Domain Types
//!
//! Core domain types for the Sauda billing dashboard.
//!
//! Every entity here mirrors the REST wire format exactly; the backend is
//! the authoritative owner of all of them. The client never mutates an
//! entity in place — it posts a request and reloads.
//!
//! ## Shape Conventions
//! - Closed vocabularies (`sale_type`, `payment_method`, `transfer_type`,
//!   ...) are enums with `snake_case` wire names, never strings.
//! - The product-vs-set duality of a cart line is a tagged union
//!   ([`LineKind`]), not a pair of optional id fields.
//! - Monetary fields are [`Money`] (integer paise internally, decimal
//!   rupees on the wire).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Catalogue
// =============================================================================

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Stock-keeping unit of measure for a product's quantity.
///
/// Stock is tracked at the unit's granularity: a product measured in
/// `ml` with `quantity = 650` holds 650 millilitres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Pieces,
    Ml,
    Meter,
}

/// A product available for sale.
///
/// Mutated only server-side: restocking adds `quantity` (optionally
/// updating `cost_price`), and completed sales decrement it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4, minted by the backend).
    pub id: String,

    /// Display name shown in the catalogue and on bills.
    pub name: String,

    /// Category this product belongs to.
    pub category_id: String,

    /// Category name denormalized by the backend.
    pub category_name: String,

    /// Current stock, in this product's [`Unit`] granularity.
    pub quantity: i64,

    /// Unit of measure for `quantity`.
    pub unit: Unit,

    /// Purchase cost per unit (drives report cost/profit).
    pub cost_price: Money,

    /// Selling price per unit on the retail channel.
    pub retail_price: Money,

    /// Selling price per unit on the wholesale channel.
    pub wholesale_price: Money,

    /// Supplier of the most recent restock, if recorded.
    #[serde(default)]
    pub supplier_name: Option<String>,

    /// Amount still owed to the supplier for restocks.
    #[serde(default)]
    pub supplier_balance: Money,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the per-unit selling price for the given channel.
    #[inline]
    pub fn price_for(&self, channel: SaleChannel) -> Money {
        match channel {
            SaleChannel::Retail => self.retail_price,
            SaleChannel::Wholesale => self.wholesale_price,
        }
    }

    /// Checks whether `quantity` units can be sold from current stock.
    #[inline]
    pub fn in_stock(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }
}

/// One member of a product set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetItem {
    pub product_id: String,
    pub product_name: String,
    /// Units of the member product included per set sold.
    pub quantity: i64,
}

/// A virtual bundle of products sold as a single cart line.
///
/// A set has no stored price; it is derived from member prices at
/// add-to-cart time (see the cart engine).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSet {
    pub id: String,
    pub name: String,
    pub items: Vec<SetItem>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Sale Vocabulary
// =============================================================================

/// Sales channel; selects which price list applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleChannel {
    Retail,
    Wholesale,
}

impl fmt::Display for SaleChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleChannel::Retail => write!(f, "retail"),
            SaleChannel::Wholesale => write!(f, "wholesale"),
        }
    }
}

/// Settlement account: physical cash or the GPay balance.
///
/// Doubles as the `payment_source` of expenses and the `refund_method`
/// of returns; every movement of value names one of these two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Gpay,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Gpay => write!(f, "gpay"),
        }
    }
}

/// Whether the sale was settled in full at the counter or part-paid
/// with the remainder tracked as an outstanding balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Full,
    Credit,
}

impl Default for PaymentType {
    fn default() -> Self {
        PaymentType::Full
    }
}

/// A sale-level discount.
///
/// Adjacently tagged so the enum flattens to the wire pair
/// `discount_type` / `discount_value`:
///
/// ```json
/// { "discount_type": "percentage", "discount_value": 10.0 }
/// { "discount_type": "amount", "discount_value": 50.0 }
/// ```
///
/// A fixed-amount discount is applied verbatim and is NOT capped to the
/// subtotal; carts flag over-discounting instead of silently clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "discount_type", content = "discount_value", rename_all = "snake_case")]
pub enum Discount {
    /// Percent of the subtotal, e.g. `10.0` for 10%.
    Percentage(f64),
    /// Fixed rupee amount.
    Amount(Money),
}

impl Discount {
    /// No discount.
    pub const NONE: Discount = Discount::Percentage(0.0);

    /// Computes the discount amount for a given subtotal.
    ///
    /// Percentages go through integer basis-point math; fractional
    /// percents like 12.5% are exact to the basis point.
    pub fn amount_on(&self, subtotal: Money) -> Money {
        match *self {
            Discount::Percentage(percent) => {
                let bps = (percent * 100.0).round() as i64;
                subtotal.percentage(bps)
            }
            Discount::Amount(amount) => amount,
        }
    }
}

// =============================================================================
// Cart Lines
// =============================================================================

/// What a cart line points at: a product or a set.
///
/// Untagged: the wire shape carries a `product_id` or a `set_id` field,
/// never both non-null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineKind {
    Product { product_id: String },
    Set { set_id: String },
}

impl LineKind {
    /// The referenced entity id, regardless of kind.
    pub fn id(&self) -> &str {
        match self {
            LineKind::Product { product_id } => product_id,
            LineKind::Set { set_id } => set_id,
        }
    }

    pub fn is_product(&self) -> bool {
        matches!(self, LineKind::Product { .. })
    }
}

/// One line of a cart or a completed sale.
///
/// Invariant: `total == quantity × unit_price`. The cart engine is the
/// only writer and maintains it on every merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub kind: LineKind,
    /// Name snapshot at time of adding; survives later renames.
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub total: Money,
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale, as recorded by the backend.
///
/// Invariants: `total == subtotal − discount_amount`; for credit sales
/// `balance_amount == total − amount_paid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub sale_type: SaleChannel,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub items: Vec<CartLine>,
    pub subtotal: Money,
    #[serde(flatten)]
    pub discount: Discount,
    pub discount_amount: Money,
    pub total: Money,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_type: PaymentType,
    /// Cash tendered by the customer (cash payments only).
    #[serde(default)]
    pub cash_received: Option<Money>,
    /// Change returned digitally on a mixed cash-plus-GPay settlement.
    #[serde(default)]
    pub gpay_return: Option<Money>,
    /// Collected at the counter on a credit sale.
    #[serde(default)]
    pub amount_paid: Option<Money>,
    /// Outstanding remainder on a credit sale.
    #[serde(default)]
    pub balance_amount: Option<Money>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// The amount that actually entered the drawer at sale time:
    /// the full total, or `amount_paid` for a credit sale.
    pub fn collected(&self) -> Money {
        match self.payment_type {
            PaymentType::Full => self.total,
            PaymentType::Credit => self.amount_paid.unwrap_or_default(),
        }
    }

    /// Outstanding balance still owed by the customer.
    pub fn outstanding(&self) -> Money {
        self.balance_amount.unwrap_or_default()
    }
}

// =============================================================================
// Expenses
// =============================================================================

/// An expense category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A recorded business expense, paid out of cash or GPay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub category_id: String,
    /// Category name denormalized by the backend; report grouping keys on it.
    pub category_name: String,
    pub amount: Money,
    /// Which balance the expense was paid from.
    #[serde(default)]
    pub payment_source: PaymentMethod,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Money Transfers
// =============================================================================

/// Classification of a money transfer.
///
/// Drawer movements (withdrawals and deposits) change the business's net
/// holdings; exchange movements shift value between the cash and GPay
/// sides. See the ledger module for the exact balance effect of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    /// Own money: cash handed to the bank/app side.
    CashToGpay,
    /// Own money: GPay balance converted to drawer cash.
    GpayToCash,
    /// Customer hands over cash, business GPays them back.
    CustomerCashToGpay,
    /// Customer GPays the business, business hands out cash.
    CustomerGpayToCash,
    CashWithdrawal,
    GpayWithdrawal,
    CashDeposit,
    GpayDeposit,
}

impl TransferType {
    /// Drawer transfers: withdrawals and deposits.
    ///
    /// The drawer screen's history is exactly the transfers for which
    /// this returns true; the transfer-history view is the complement.
    pub fn is_drawer(&self) -> bool {
        self.is_withdrawal() || self.is_deposit()
    }

    pub fn is_withdrawal(&self) -> bool {
        matches!(self, TransferType::CashWithdrawal | TransferType::GpayWithdrawal)
    }

    pub fn is_deposit(&self) -> bool {
        matches!(self, TransferType::CashDeposit | TransferType::GpayDeposit)
    }
}

/// A recorded movement of money between or out of the two balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyTransfer {
    pub id: String,
    pub transfer_type: TransferType,
    pub amount: Money,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Returns
// =============================================================================

/// A processed return against a completed sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleReturn {
    pub id: String,
    pub sale_id: String,
    /// Subset of the original sale's lines that came back.
    pub items: Vec<CartLine>,
    /// Computed by the backend from the selected items' totals.
    pub refund_amount: Money,
    pub refund_method: PaymentMethod,
    #[serde(default)]
    pub reason: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Derived Read Models
// =============================================================================

/// The two settlement balances, as folded by the backend from the full
/// transfer/sale/expense/return history. Never mutated client-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub cash: Money,
    pub gpay: Money,
}

impl Balance {
    pub fn total(&self) -> Money {
        self.cash + self.gpay
    }
}

/// Valuation of current stock at each price list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InventoryValue {
    pub total_cost_value: Money,
    pub total_retail_value: Money,
    pub total_wholesale_value: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
