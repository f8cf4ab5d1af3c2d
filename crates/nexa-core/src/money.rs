//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Cart totals are sums of price × quantity over many lines, and the     │
//! │  order history sums those totals again. Float drift compounds.         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (paise for INR)                      │
//! │    ₹1349.00 is stored as 134900                                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nexa_core::money::Money;
//!
//! let price = Money::from_major(26_990); // ₹26990.00
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total, Money::from_major(53_980));
//! assert_eq!(price.to_string(), "₹26990.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Currency symbol used by `Display`.
///
/// The storefront sells in INR. `StorefrontConfig` can format with a
/// different symbol through [`Money::format_with_symbol`].
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Minor units per major unit (100 paise = 1 rupee).
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts and differences can go negative
/// - **Single field tuple struct**: serializes as a bare number, so the
///   persisted cart blob stays compact
/// - **Saturating arithmetic**: `+`, `-`, `*` and `sum` clamp at the i64
///   bounds instead of panicking on a huge cart
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartEntry line total ──► Cart total ──► Invoice.subtotal
///                                                               │
///                                  Invoice.total_amount ◄───────┘
///                                        │
///                                        ▼
///                           OrderHistory.total_spent
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (paise).
    ///
    /// ```rust
    /// use nexa_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole major units (rupees).
    ///
    /// Catalog prices are whole rupees, so this is the usual constructor.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use nexa_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ```rust
    /// use nexa_core::money::Money;
    ///
    /// let subtotal = Money::from_major(100);
    /// assert_eq!(subtotal.apply_percentage_discount(1000), Money::from_major(90));
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_minor(self.0.saturating_sub(discount_amount as i64))
    }

    /// Formats with an explicit currency symbol, e.g. `"₹1349.00"`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.major().abs(),
            self.minor_part()
        )
    }
}

/// Percentage saved going from `original` to `current`, rounded to the
/// nearest whole percent (halves round up).
///
/// Returns 0 when there is no saving or `original` is not positive.
///
/// ```rust
/// use nexa_core::money::{discount_percent, Money};
///
/// let original = Money::from_major(159_900);
/// let current = Money::from_major(134_900);
/// assert_eq!(discount_percent(original, current), 16);
/// ```
pub fn discount_percent(original: Money, current: Money) -> u32 {
    if original.0 <= 0 || current.0 >= original.0 {
        return 0;
    }

    let saved = (original.0 - current.0) as i128;
    let original = original.0 as i128;
    // floor(saved * 100 / original + 0.5)
    let pct = (saved * 200 + original).div_euclid(original * 2);
    pct as u32
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

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
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_and_parts() {
        let money = Money::from_major(1349);
        assert_eq!(money.minor(), 134_900);
        assert_eq!(money.major(), 1349);
        assert_eq!(money.minor_part(), 0);

        let odd = Money::from_minor(1099);
        assert_eq!(odd.major(), 10);
        assert_eq!(odd.minor_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(134_900).to_string(), "₹134900.00");
        assert_eq!(Money::from_minor(505).to_string(), "₹5.05");
        assert_eq!(Money::from_minor(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
        assert_eq!(Money::from_minor(1099).format_with_symbol("$"), "$10.99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((a * 3).minor(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_minor(200);
        assert_eq!(c.minor(), 1300);
    }

    #[test]
    fn test_sum() {
        let values = [Money::from_minor(100), Money::from_minor(250)];
        let total: Money = values.iter().sum();
        assert_eq!(total.minor(), 350);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_minor(i64::MAX);
        let min = Money::from_minor(i64::MIN);

        assert_eq!(max + Money::from_minor(1), max);
        assert_eq!(min - Money::from_minor(1), min);
        assert_eq!(Money::from_major(64_999) * u32::MAX, Money::from_minor(6_499_900 * u32::MAX as i64));
        assert_eq!(max.multiply_quantity(2), max);

        let mut c = max;
        c += max;
        assert_eq!(c, max);

        let total: Money = [max, max, Money::from_minor(5)].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::from_minor(999);
        // 10% of 999 = 99.9 → 100 (rounded)
        assert_eq!(subtotal.apply_percentage_discount(1000).minor(), 899);
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(
            discount_percent(Money::from_major(136_999), Money::from_major(108_999)),
            20
        );
        assert_eq!(
            discount_percent(Money::from_major(100), Money::from_major(99)),
            1
        );
        // exactly half a percent rounds up
        assert_eq!(
            discount_percent(Money::from_major(200), Money::from_minor(19_900)),
            1
        );
        assert_eq!(
            discount_percent(Money::from_major(100), Money::from_major(100)),
            0
        );
        assert_eq!(
            discount_percent(Money::from_major(100), Money::from_major(120)),
            0
        );
        assert_eq!(discount_percent(Money::zero(), Money::from_major(5)), 0);
    }
}
