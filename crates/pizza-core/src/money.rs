//! # Money Module
//!
//! Provides the `Money` type for menu prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Adding menu prices as binary floats:                                   │
//! │    18.99 + 1.00 + 1.50 + 2.99 = 24.479999999999997  ❌                 │
//! │                                                                         │
//! │  Rounding "at display time" hides the drift until it doesn't.          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1899 + 100 + 150 + 299 = 2448 cents → "24.48"                       │
//! │    Formatting happens once, at the boundary.                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::money::Money;
//!
//! let large = Money::from_cents(1899);         // $18.99
//! let total = large + Money::from_cents(100);  // thin crust
//! assert_eq!(total.to_decimal_string(), "19.99");
//! assert_eq!(total.to_string(), "$19.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  PizzaSize::base_price ──┐                                              │
/// │  Crust::surcharge ───────┼──► pizza-only subtotal ──┐                   │
/// │                          │                          ├──► order total    │
/// │  TOPPING_PRICE × count ──┴──────────────────────────┤                   │
/// │  DELIVERY_FEE (delivery only) ──────────────────────┘                   │
/// │                                                                         │
/// │  Only `to_decimal_string` / `Display` ever produce "24.48"              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let price = Money::from_cents(1599); // $15.99
    /// assert_eq!(price.cents(), 1599);
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
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1599).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a count (e.g. toppings).
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let topping = Money::from_cents(150);
    /// assert_eq!(topping.multiply_quantity(3).cents(), 450);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Renders the value with exactly two fraction digits and no symbol.
    ///
    /// This is the boundary format handed to the order form ("15.99").
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1599).to_decimal_string(), "15.99");
    /// assert_eq!(Money::from_cents(300).to_decimal_string(), "3.00");
    /// assert_eq!(Money::zero().to_decimal_string(), "0.00");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with a dollar sign ("$15.99").
///
/// ## Note
/// Hosts with a configured currency symbol format through
/// `DeskConfig::format_currency` instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        let money = Money::from_cents(1899);
        assert_eq!(money.cents(), 1899);
        assert_eq!(money.dollars(), 18);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(2448)), "$24.48");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(1999).to_decimal_string(), "19.99");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_cents(-299).to_decimal_string(), "-2.99");
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Money::from_cents(1899);
        total += Money::from_cents(100);
        assert_eq!(total.cents(), 1999);

        let toppings: Money = Money::from_cents(150) * 2;
        assert_eq!(toppings.cents(), 300);
        assert_eq!((total + toppings).cents(), 2299);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1899, 100, 150, 150, 299]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.to_decimal_string(), "25.98");
    }

    /// The float version of this sum is 24.479999999999997.
    #[test]
    fn test_no_float_drift() {
        let float_total = 18.99_f64 + 1.00 + 1.50 + 2.99;
        assert_ne!(float_total, 24.48);

        let cents_total = Money::from_cents(1899)
            + Money::from_cents(100)
            + Money::from_cents(150).multiply_quantity(1)
            + Money::from_cents(299);
        assert_eq!(cents_total.cents(), 2448);
    }
}
