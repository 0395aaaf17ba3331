//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    15.00 × 0.2 = 3.0000000000000004  ❌ ceil() gives 4!                 │
//! │    35.35 - 35.0 = 0.35000000000000142 ❌ cents are not exact            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "15.00" → 1500 cents, "35.35" → 3535 cents                          │
//! │    Every rule that looks at an amount works on exact integers          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert_eq!(total.cents_part(), 35);
//!
//! // Exactly two fraction digits, nothing else
//! assert!("1.005".parse::<Money>().is_err());
//! assert!("00000".parse::<Money>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Same representation as every other amount in the
///   workspace; receipts never produce negative values because the format
///   rule admits digits only
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No float constructor**: amounts enter only through [`FromStr`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(900).cents_part(), 0);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why a decimal string could not become [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// The string is not `digits.dd`.
    #[error("'{0}' is not a decimal amount with exactly two fraction digits")]
    InvalidFormat(String),

    /// The digits are well formed but do not fit in i64 cents.
    #[error("'{0}' is too large")]
    Overflow(String),
}

/// Parses `^\d+\.\d{2}$` into cents.
///
/// ## Parsing Flow
/// ```text
/// "12.25"
///    │
///    ├── split at '.' ──► "12" / "25"
///    │
///    ├── whole: one or more ASCII digits?     no ──► InvalidFormat
///    ├── fraction: exactly two ASCII digits?  no ──► InvalidFormat
///    │
///    └── 12 × 100 + 25 = 1225 cents (checked) ──► Overflow on wrap
/// ```
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (whole, fraction) = s.split_once('.').ok_or_else(invalid)?;

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() != 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let overflow = || MoneyParseError::Overflow(s.to_string());

        // Only digits remain, so parse() can fail on magnitude alone
        let dollars: i64 = whole.parse().map_err(|_| overflow())?;
        let minor: i64 = fraction.parse().map_err(|_| invalid())?;

        dollars
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
            .ok_or_else(overflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the same `digits.dd` form the amount was parsed from.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
