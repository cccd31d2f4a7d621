//! # Money Module
//!
//! Provides the `Money` type for edition prices and cart line totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The catalog API sends prices as JSON numbers:                          │
//! │    { "price": 19.99, "currency": "MDL" }                                │
//! │                                                                         │
//! │  Multiplying floats for line totals drifts:                             │
//! │    19.99 × 3 = 59.970000000000006                                       │
//! │                                                                         │
//! │  OUR SOLUTION: convert ONCE at the serde boundary to minor units        │
//! │    19.99 → 1999 minor units, × 3 = 5997 → "59.97"                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::money::Money;
//!
//! let price = Money::from_minor(1999);
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.to_string(), "59.97");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest currency unit (bani, cents).
///
/// `Money` carries no currency; the owning [`Edition`](crate::types::Edition)
/// does. Amounts in different currencies are never added together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Converts a decimal amount from the wire into minor units.
    ///
    /// Rounds half away from zero at the second decimal place, so
    /// `19.995` becomes `20.00`. Non-finite input is rejected.
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let minor = (amount * 100.0).round();
        if minor.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Money(minor as i64))
    }

    /// Returns the amount as a decimal, for the wire format only.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a unit price by a quantity, saturating at the `i64` bounds.
    ///
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `major.minor` rendering; the currency code is printed by the caller.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

/// Saturating, like [`Money::multiply_quantity`].
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// Prices travel as decimal JSON numbers.
impl Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

/// Accepts a JSON number or a numeric string.
///
/// Form inputs post prices as strings (`"12.5"`); an empty string is the
/// untouched form field and reads as zero.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrice {
            Integer(i64),
            Decimal(f64),
            Text(String),
        }

        let amount = match RawPrice::deserialize(deserializer)? {
            RawPrice::Integer(major) => {
                return major.checked_mul(100).map(Money).ok_or_else(|| {
                    serde::de::Error::custom(format!("price out of range: {}", major))
                });
            }
            RawPrice::Decimal(amount) => amount,
            RawPrice::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(Money::zero());
                }
                text.parse::<f64>().map_err(|_| {
                    serde::de::Error::custom(format!("invalid price: '{}'", text))
                })?
            }
        };

        Money::from_decimal(amount)
            .ok_or_else(|| serde::de::Error::custom(format!("price out of range: {}", amount)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
