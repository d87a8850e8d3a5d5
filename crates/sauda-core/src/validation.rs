//! # Validation Module
//!
//! Input validation for form fields, run before any request is issued.
//!
//! The backend validates again on its side; these checks exist so a bad
//! form never costs a network round-trip.

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (product, set, category).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use sauda_core::validation::validate_name;
///
/// assert!(validate_name("name", "Copper Wire 2.5mm").is_ok());
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a monetary amount that must be strictly positive
/// (expense amounts, deposit legs, restock payments).
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a price field.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of distinct lines) before an append.
pub fn validate_cart_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_CART_LINES {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
