//! # sauda-client: REST API Client
//!
//! Typed async consumer of the billing backend's REST contract. The
//! backend owns all storage and all authoritative totals; this crate
//! mirrors its wire format and reduces failures to a small error type.
//!
//! ## Data Flow
//! ```text
//! screen load ──► ApiClient ──► GET  /api/...  ──► entities (sauda-core)
//! user action ──► ApiClient ──► POST /api/...  ──► full reload by caller
//! ```
//!
//! There is no retry, caching or cancellation layer: a failed request
//! surfaces one error and the previously displayed state stands.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sauda_client::{ApiClient, ClientConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(&ClientConfig::load()?);
//! let sales = client.sales().list().await?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use endpoints::{
    CategoryCreate, ExpenseCreate, ProductCreate, ProductUpdate, RestockRequest, SetCreate,
};
pub use error::{ClientError, ClientResult};
