//! # App Error Type
//!
//! Unified error for dashboard operations.
//!
//! ## Error Flow
//! ```text
//! ValidationError ── CoreError ──┐
//!                                ├──► AppError { code, message } ──► UI
//! ClientError (network/status) ──┘
//! ```
//!
//! Validation-class failures keep their specific message so the form can
//! show it. Network and API failures are reduced to one generic
//! notification — the specific cause goes to the log, and the previously
//! displayed snapshot stands.

use serde::Serialize;

use sauda_client::ClientError;
use sauda_core::CoreError;

/// Error surfaced to the user for a failed operation.
#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    /// Machine-readable code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable message for display.
    pub message: String,
}

/// Error codes for dashboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed; nothing was sent.
    ValidationError,

    /// Referenced entity is missing from the loaded snapshot.
    NotFound,

    /// Requested quantity exceeds available stock.
    InsufficientStock,

    /// Tendered payment does not cover the total.
    PaymentError,

    /// Cart operation failed.
    CartError,

    /// The backend request failed (network or non-2xx).
    ApiError,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            CoreError::EmptyCart | CoreError::CartTooLarge { .. } => ErrorCode::CartError,
            CoreError::InsufficientPayment { .. } => ErrorCode::PaymentError,
            CoreError::CustomerRequired
            | CoreError::EmptyTransfer
            | CoreError::NothingToWithdraw
            | CoreError::InsufficientBalance { .. }
            | CoreError::NoItemsSelected
            | CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        AppError::new(code, err.to_string())
    }
}

/// Network and API failures reduce to one generic notification; the
/// cause is logged, not shown.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        tracing::error!("API request failed: {}", err);
        AppError::new(ErrorCode::ApiError, "Request failed. Please try again.")
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

/// Convenience alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sauda_core::Money;

    #[test]
    fn test_core_errors_keep_their_message() {
        let err: AppError = CoreError::InsufficientStock {
            name: "Copper Wire".to_string(),
            available: 3,
            requested: 5,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert!(err.message.contains("Copper Wire"));

        let err: AppError = CoreError::InsufficientPayment {
            required: Money::from_paise(27000),
            offered: Money::from_paise(20000),
        }
        .into();
        assert_eq!(err.code, ErrorCode::PaymentError);
    }

    #[test]
    fn test_serializes_with_code_and_message() {
        let err = AppError::validation("Cart is empty");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["code"], "VALIDATION_ERROR");
        assert_eq!(value["message"], "Cart is empty");
    }
}
