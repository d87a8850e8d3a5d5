//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All amounts in the system are integer paise (`i64`). Floating point is
//! confined to the wire boundary: the backend speaks two-decimal rupee
//! numbers, so `Money` serializes as `10.99` and deserializes back to
//! `1099` paise, rounding half away from zero.
//!
//! ## Usage
//! ```rust
//! use sauda_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(1099); // Rs 10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                        // Rs 21.98
//! let total = price + Money::from_paise(500);     // Rs 15.99
//! assert_eq!(format!("{}", total), "₹15.99");
//! ```

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (the smallest currency unit).
///
/// ## Design
/// - **i64 (signed)**: refunds and over-discounted totals can be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Wire form**: a JSON number of rupees (`1099` paise ⇄ `10.99`),
///   because the REST backend stores decimal amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use sauda_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // Rs 10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the rupee (major unit) portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise (minor unit) portion, always 0-99.
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use sauda_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(299);
    /// assert_eq!(unit_price.multiply_quantity(3).paise(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Takes a percentage of this amount, expressed in basis points
    /// (1000 bps = 10%).
    ///
    /// Integer math with rounding: `(paise * bps + 5000) / 10000`,
    /// computed over i128 so large amounts cannot overflow.
    ///
    /// ## Example
    /// ```rust
    /// use sauda_core::money::Money;
    ///
    /// let subtotal = Money::from_paise(30000); // Rs 300.00
    /// let discount = subtotal.percentage(1000); // 10%
    /// assert_eq!(discount.paise(), 3000); // Rs 30.00
    /// ```
    pub fn percentage(&self, bps: i64) -> Money {
        let part = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_paise(part as i64)
    }

    /// Converts a decimal rupee amount (as received on the wire) to paise,
    /// rounding half away from zero.
    pub fn from_rupee_float(rupees: f64) -> Self {
        Money((rupees * 100.0).round() as i64)
    }

    /// Returns the decimal rupee amount (as sent on the wire).
    pub fn to_rupee_float(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Serialized as a decimal rupee number, matching the REST contract.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_rupee_float())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        if !rupees.is_finite() {
            return Err(D::Error::custom("monetary amount must be finite"));
        }
        Ok(Money::from_rupee_float(rupees))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal fixed formatting with the currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
