//! # Dashboard Screens
//!
//! One module per screen. Each screen is an explicit, immutable snapshot
//! of server state, rebuilt by a pure async `load` from concurrent
//! fetches — there are no ambient globals and no client-side caches of
//! authoritative totals.
//!
//! ## Operation Shape
//! ```text
//! user action ──► validate locally (sauda-core)
//!                      │ ok
//!                      ▼
//!                 POST/PUT/DELETE (sauda-client)
//!                      │ ok
//!                      ▼
//!                 unconditional full reload ──► fresh snapshot
//! ```
//!
//! A failed request surfaces one [`crate::error::AppError`] and the
//! prior snapshot keeps being displayed (stale but consistent). Screen
//! state is discarded on navigation; nothing is shared between screens.

pub mod drawer;
pub mod expense;
pub mod inventory;
pub mod report;
pub mod sale;

pub use drawer::DrawerScreen;
pub use expense::ExpenseScreen;
pub use inventory::InventoryScreen;
pub use report::ReportScreen;
pub use sale::SaleScreen;
