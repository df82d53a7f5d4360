//! # Money Module
//!
//! Provides the `Money` type for monetary values, the `Rate` type for
//! percentages, and `ExactAmount` for intermediate results.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents, Exact Intermediates                       │
//! │    Prices and final amounts are whole cents (i64).                      │
//! │    Percentages of an amount are kept at 1e-8 cent resolution (i128)    │
//! │    and rounded to cents once, at the result boundary.                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderdesk_core::money::{Money, Rate};
//!
//! let subtotal = Money::from_cents(10_000); // 100.00
//! let discount = subtotal.exact().apply(Rate::from_bps(1500));
//! assert_eq!(discount.round_to_cents(), Some(Money::from_cents(1500)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Basis points in 100%.
pub const BPS_PER_UNIT: u32 = 10_000;

/// Resolution of [`ExactAmount`]: units per cent.
const EXACT_UNITS_PER_CENT: i128 = 100_000_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic on differences stays in-type
/// - **Serialized as plain cents**: `1099` on the wire means 10.99
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
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

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, or `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(500);
    /// assert_eq!(unit_price.checked_mul_quantity(15), Some(Money::from_cents(7500)));
    /// assert_eq!(Money::from_cents(i64::MAX / 2).checked_mul_quantity(3), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two values, or `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Lifts this value into full-precision arithmetic.
    #[inline]
    pub const fn exact(&self) -> ExactAmount {
        ExactAmount(self.0 as i128 * EXACT_UNITS_PER_CENT)
    }
}

/// Plain decimal rendering, no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Rate
// =============================================================================

/// A percentage in basis points.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 15% is `1500` and 8% is `800`.
/// Every rate in a pricing policy is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Exact Amount
// =============================================================================

/// A monetary amount at 1e-8 cent resolution.
///
/// Discount and tax are percentages of whole-cent amounts, so one or two
/// chained rate applications stay exact at this scale. Comparisons such as
/// "bulk discount beats tier discount" run on these values; rounding to
/// cents only happens in [`ExactAmount::round_to_cents`].
///
/// Any `i64` cent amount lifted here, with rates of at most 100%, stays far
/// inside `i128`; only the way back to `Money` can overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExactAmount(i128);

impl ExactAmount {
    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        ExactAmount(0)
    }

    /// Takes `rate` of this amount.
    #[inline]
    pub const fn apply(&self, rate: Rate) -> Self {
        ExactAmount(self.0 * rate.bps() as i128 / BPS_PER_UNIT as i128)
    }

    /// Rounds to whole cents, half away from zero.
    ///
    /// Returns `None` when the rounded value does not fit in `Money`.
    ///
    /// ## Example
    /// ```rust
    /// use orderdesk_core::money::{Money, Rate};
    ///
    /// // 0.05 * 8% = 0.004 -> 0.00
    /// let small = Money::from_cents(5).exact().apply(Rate::from_bps(800));
    /// assert_eq!(small.round_to_cents(), Some(Money::zero()));
    ///
    /// // 0.25 * 10% = 0.025 -> 0.03
    /// let half = Money::from_cents(25).exact().apply(Rate::from_bps(1000));
    /// assert_eq!(half.round_to_cents(), Some(Money::from_cents(3)));
    /// ```
    pub fn round_to_cents(&self) -> Option<Money> {
        let half = EXACT_UNITS_PER_CENT / 2;
        let cents = if self.0 >= 0 {
            (self.0 + half) / EXACT_UNITS_PER_CENT
        } else {
            (self.0 - half) / EXACT_UNITS_PER_CENT
        };
        i64::try_from(cents).ok().map(Money::from_cents)
    }
}

impl Add for ExactAmount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        ExactAmount(self.0 + other.0)
    }
}

impl Sub for ExactAmount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        ExactAmount(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(2160).to_string(), "21.60");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Rate::from_bps(825).to_string(), "8.25%");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(b.checked_mul_quantity(3), Some(Money::from_cents(1500)));
        assert_eq!(Money::zero().checked_mul_quantity(i64::MAX), Some(Money::zero()));

        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MAX / 2).checked_mul_quantity(3), None);
    }

    #[test]
    fn test_round_out_of_range() {
        let max = Money::from_cents(i64::MAX).exact();
        assert_eq!(max.round_to_cents(), Some(Money::from_cents(i64::MAX)));
        assert_eq!((max + max).round_to_cents(), None);
    }

    #[test]
    fn test_rate_application_is_exact() {
        // 15% of 100.00 = 15.00, then 8% of the remaining 85.00 = 6.80
        let subtotal = Money::from_cents(10_000).exact();
        let discount = subtotal.apply(Rate::from_bps(1500));
        let tax = (subtotal - discount).apply(Rate::from_bps(800));
        assert_eq!(discount.round_to_cents().unwrap().cents(), 1500);
        assert_eq!(tax.round_to_cents().unwrap().cents(), 680);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 0.125 -> 0.13
        let v = Money::from_cents(125).exact().apply(Rate::from_bps(1000));
        assert_eq!(v.round_to_cents().unwrap().cents(), 13);

        // -0.125 -> -0.13
        let v = Money::from_cents(-125).exact().apply(Rate::from_bps(1000));
        assert_eq!(v.round_to_cents().unwrap().cents(), -13);

        // 0.124 -> 0.12
        let v = Money::from_cents(124).exact().apply(Rate::from_bps(1000));
        assert_eq!(v.round_to_cents().unwrap().cents(), 12);
    }

    #[test]
    fn test_comparisons_use_unrounded_values() {
        // 5% of 0.10 = 0.005 and 4% of 0.10 = 0.004 both round to 0.01 / 0.00,
        // but the unrounded ordering is what callers see.
        let base = Money::from_cents(10).exact();
        assert!(base.apply(Rate::from_bps(500)) > base.apply(Rate::from_bps(400)));
        assert_eq!(
            base.apply(Rate::from_bps(500)).round_to_cents(),
            Some(Money::from_cents(1))
        );
    }

    #[test]
    fn test_money_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(2160)).unwrap();
        assert_eq!(json, "2160");
        let rate: Rate = serde_json::from_str("800").unwrap();
        assert_eq!(rate, Rate::from_bps(800));
    }
}
