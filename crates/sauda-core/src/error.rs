//! # Error Types
//!
//! Domain-specific error types for sauda-core.
//!
//! Errors flow upward through the layers:
//! `ValidationError → CoreError → ClientError → AppError`.
//!
//! Every variant here is a validation-class failure: it is raised *before*
//! any network request is issued, and the triggering user action simply
//! does not happen.

use thiserror::Error;

use crate::money::Money;
use crate::types::PaymentMethod;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
///
/// Caught by the dashboard layer and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A referenced product is missing from the loaded catalogue,
    /// e.g. a set member whose product was deleted.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds available stock.
    ///
    /// For set lines the check runs per member: selling `qty` sets needs
    /// `qty × member.quantity` of every member product.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Cart has exceeded the maximum allowed lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Tendered payment does not cover the sale total.
    #[error("Insufficient payment: {offered} offered, {required} required")]
    InsufficientPayment { required: Money, offered: Money },

    /// Credit sales must identify the customer.
    #[error("Customer name and phone are required for credit sales")]
    CustomerRequired,

    /// A withdrawal or deposit was requested with no amount on either side.
    #[error("Enter a cash or GPay amount")]
    EmptyTransfer,

    /// Withdraw-all requested while both balances are zero.
    #[error("No balance to withdraw")]
    NothingToWithdraw,

    /// A withdrawal leg exceeds the queried balance.
    #[error("Insufficient {method} balance: available {available}, requested {requested}")]
    InsufficientBalance {
        method: PaymentMethod,
        available: Money,
        requested: Money,
    },

    /// A return was submitted with no line items selected.
    #[error("No items selected for return")]
    NoItemsSelected,

    /// Input validation failure (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. malformed phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
