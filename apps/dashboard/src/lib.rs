//! # sauda-dashboard
//!
//! The dashboard application layer: one module per screen, each an
//! immutable snapshot loaded from concurrent fetches, plus the
//! operations that validate locally, call the backend, and reload.
//!
//! The rendering surface (web, desktop, terminal) is deliberately out
//! of scope; everything here is UI-agnostic state and operations.

pub mod error;
pub mod screens;

pub use error::{AppError, AppResult, ErrorCode};
pub use screens::{DrawerScreen, ExpenseScreen, InventoryScreen, ReportScreen, SaleScreen};
