//! # sauda-core: Pure Business Logic for the Sauda Billing Dashboard
//!
//! This crate is the heart of Sauda. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     apps/dashboard                              │
//! │   screen snapshots + operations (load → act → reload)           │
//! └───────────────┬─────────────────────────────┬───────────────────┘
//!                 │                             │
//! ┌───────────────▼───────────────┐  ┌──────────▼───────────────────┐
//! │   ★ sauda-core (THIS CRATE) ★ │  │   sauda-client               │
//! │                               │  │   typed REST consumer        │
//! │  money   cart    ledger       │  │   of the billing backend     │
//! │  types   report  refund       │  └──────────┬───────────────────┘
//! │  validation                   │             │ HTTP
//! │                               │  ┌──────────▼───────────────────┐
//! │  NO I/O • PURE FUNCTIONS      │  │   backend REST API (external)│
//! └───────────────────────────────┘  └──────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer paise arithmetic (no floats!)
//! - [`types`] - Domain types mirroring the REST wire format
//! - [`cart`] - Cart/pricing engine for retail and wholesale checkout
//! - [`ledger`] - Cash/GPay balance semantics and transfer planning
//! - [`report`] - Report aggregation and calendar-day filtering
//! - [`refund`] - Return selection and submission building
//! - [`validation`] - Form-field validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic, same input = same output
//! 2. **No I/O**: network, file system and clocks are forbidden here;
//!    callers pass in dates
//! 3. **Integer Money**: all amounts are paise (i64); decimals exist
//!    only at the wire boundary
//! 4. **Explicit Errors**: typed errors, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod ledger;
pub mod money;
pub mod refund;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals, Checkout, SaleDraft};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::TransferRequest;
pub use money::Money;
pub use refund::{ReturnDraft, ReturnRequest};
pub use report::{DailyReport, MonthlyReport, ReportSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
///
/// Prevents runaway carts and keeps transactions at counter scale.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line.
///
/// Guards against mistyped quantities (e.g. 10000 instead of 10) while
/// leaving room for bulk wholesale orders.
pub const MAX_LINE_QUANTITY: i64 = 9_999;
