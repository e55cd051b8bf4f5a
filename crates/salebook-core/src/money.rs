//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All amounts are held in integer kobo (the smallest naira unit), so
//! `₦10.50` is `Money(1050)`. Arithmetic stays exact; only `Display`
//! produces the two-decimal `₦` form the rest of the application shows.
//!
//! ## Usage
//! ```rust
//! use salebook_core::money::Money;
//!
//! let price: Money = "10.50".parse().unwrap();
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.kobo(), 3150);
//! assert_eq!(line_total.to_string(), "₦31.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;
use thiserror::Error;

/// Fixed currency prefix used everywhere money is displayed.
pub const CURRENCY_SYMBOL: &str = "₦";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (kobo).
///
/// Single-field tuple struct over `i64`: zero-cost, ordered, and it
/// serializes as the bare integer in the storage slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kobo.
    ///
    /// ## Example
    /// ```rust
    /// use salebook_core::money::Money;
    ///
    /// let price = Money::from_kobo(1099); // ₦10.99
    /// assert_eq!(price.kobo(), 1099);
    /// ```
    #[inline]
    pub const fn from_kobo(kobo: i64) -> Self {
        Money(kobo)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use salebook_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // ₦10.99
    /// assert_eq!(price.kobo(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Returns the value in kobo.
    #[inline]
    pub const fn kobo(&self) -> i64 {
        self.0
    }

    /// Returns the whole-naira portion.
    #[inline]
    pub const fn naira(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the kobo portion (always 0-99).
    #[inline]
    pub const fn kobo_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a unit price by a quantity, saturating on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use salebook_core::money::Money;
    ///
    /// let unit_price = Money::from_kobo(299); // ₦2.99
    /// assert_eq!(unit_price.multiply_quantity(3).kobo(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error produced when a free-text amount cannot be read as Money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount: {0}")]
pub struct ParseMoneyError(pub &'static str);

/// Parses amounts the way they are typed into the entry form.
///
/// ## Accepted forms
/// - `"10"`, `"10.5"`, `"10.50"`, `".50"`
/// - an optional leading `₦`
///
/// ## Rejected forms
/// - empty input, signs, more than two decimal places, any other
///   character. Sub-kobo precision is refused rather than rounded.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(CURRENCY_SYMBOL).unwrap_or(s).trim();

        if s.is_empty() {
            return Err(ParseMoneyError("amount is empty"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(ParseMoneyError("amount is empty"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError("amount must contain only digits"));
        }
        if !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError("amount must contain only digits"));
        }
        if frac.len() > 2 {
            return Err(ParseMoneyError("amount has more than two decimal places"));
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| ParseMoneyError("amount is too large"))?
        };

        // "10.5" means fifty kobo, not five
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().unwrap_or(0) * 10,
            _ => frac.parse::<i64>().unwrap_or(0),
        };

        major
            .checked_mul(100)
            .and_then(|k| k.checked_add(minor))
            .map(Money)
            .ok_or(ParseMoneyError("amount is too large"))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Fixed-symbol, two-decimal display: `₦1234.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.naira().abs(),
            self.kobo_part()
        )
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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kobo() {
        let money = Money::from_kobo(1099);
        assert_eq!(money.kobo(), 1099);
        assert_eq!(money.naira(), 10);
        assert_eq!(money.kobo_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).kobo(), 1099);
        assert_eq!(Money::from_major_minor(0, 5).kobo(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_kobo(1099).to_string(), "₦10.99");
        assert_eq!(Money::from_kobo(500).to_string(), "₦5.00");
        assert_eq!(Money::from_kobo(0).to_string(), "₦0.00");
        assert_eq!(Money::from_kobo(123450).to_string(), "₦1234.50");
    }

    #[test]
    fn test_parse_whole_and_decimal() {
        assert_eq!("10".parse::<Money>().unwrap().kobo(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().kobo(), 1050);
        assert_eq!("10.50".parse::<Money>().unwrap().kobo(), 1050);
        assert_eq!(".50".parse::<Money>().unwrap().kobo(), 50);
        assert_eq!("0.01".parse::<Money>().unwrap().kobo(), 1);
    }

    #[test]
    fn test_parse_currency_prefix() {
        assert_eq!("₦10.00".parse::<Money>().unwrap().kobo(), 1000);
        assert_eq!("₦ 10".parse::<Money>().unwrap().kobo(), 1000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("   ".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("-5".parse::<Money>().is_err());
        assert!("10.505".parse::<Money>().is_err());
        assert!("1,000".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_kobo(1000);
        let b = Money::from_kobo(500);

        assert_eq!((a + b).kobo(), 1500);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.kobo(), 1500);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.kobo(), 2000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_kobo(299);
        assert_eq!(unit_price.multiply_quantity(3).kobo(), 897);
        assert_eq!((unit_price * 2).kobo(), 598);
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_kobo(3000)).unwrap();
        assert_eq!(json, "3000");
        let back: Money = serde_json::from_str("3000").unwrap();
        assert_eq!(back, Money::from_kobo(3000));
    }
}
