//! Integer price representation and tax arithmetic.
//!
//! Bitewala prices are whole rupees: the catalog, cart, and order totals all
//! carry integer amounts in the currency's smallest unit the shop uses. Tax
//! is the only place a fractional amount appears, so it goes through
//! [`rust_decimal`] and is rounded back to a whole unit.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in whole currency units (INR).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Currency symbol used for display.
    pub const SYMBOL: &'static str = "₹";

    /// Create a price from a whole-unit amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The whole-unit amount.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Format for display (e.g., "₹394").
    #[must_use]
    pub fn display(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SYMBOL, self.0)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        self.times(rhs)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// A proportional tax rate.
///
/// Tax is computed as `round(amount × rate)` with midpoints rounded away from
/// zero, which for the non-negative amounts a cart produces is the usual
/// round-half-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Create a rate from a whole percentage (e.g., `18` for 18%).
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        Self(Decimal::new(i64::from(percent), 2))
    }

    /// The rate as a decimal fraction (e.g., `0.18`).
    #[must_use]
    pub const fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Tax owed on `amount`, rounded to a whole unit.
    #[must_use]
    pub fn tax_on(self, amount: Price) -> Price {
        let raw = Decimal::from(amount.amount()) * self.0;
        let rounded = raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // |rate| < 1 for every rate the shop uses, so the result fits in i64
        Price::new(rounded.to_i64().unwrap_or(amount.amount()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Price::new(394).to_string(), "₹394");
        assert_eq!(Price::ZERO.display(), "₹0");
    }

    #[test]
    fn test_arithmetic() {
        let total: Price = [Price::new(99) * 2, Price::new(49).times(4)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(394));
    }

    #[test]
    fn test_tax_rounds_half_up() {
        let gst = TaxRate::from_percent(18);
        // 394 * 0.18 = 70.92
        assert_eq!(gst.tax_on(Price::new(394)), Price::new(71));
        // 25 * 0.18 = 4.5
        assert_eq!(gst.tax_on(Price::new(25)), Price::new(5));
        // 24 * 0.18 = 4.32
        assert_eq!(gst.tax_on(Price::new(24)), Price::new(4));
        assert_eq!(gst.tax_on(Price::ZERO), Price::ZERO);
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Price::new(49)).unwrap(), "49");
        let parsed: Price = serde_json::from_str("599").unwrap();
        assert_eq!(parsed.amount(), 599);
    }
}
