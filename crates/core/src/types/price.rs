//! Type-safe price representation using decimal arithmetic.

use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A non-negative currency amount.
///
/// The full decimal precision is kept internally; rounding to two decimal
/// places happens only in [`Price::display`], so summing many prices never
/// accumulates rounding error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents (e.g., `8999` for `$89.99`).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the full-precision amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with exactly two decimal places (e.g., "$19.99").
    ///
    /// Midpoints round away from zero, matching typical storefront display.
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "${:.2}",
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        )
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_cents_matches_decimal() {
        assert_eq!(Price::from_cents(8999).amount(), Decimal::new(8999, 2));
        assert_eq!(Price::new(Decimal::new(8999, 2)), Price::from_cents(8999));
    }

    #[test]
    fn display_pads_to_two_places() {
        assert_eq!(Price::from_cents(12900).display(), "$129.00");
        assert_eq!(Price::ZERO.display(), "$0.00");
    }

    #[test]
    fn sum_keeps_full_precision() {
        let total: Price = [Price::from_cents(8999), Price::from_cents(2999)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(11998));
    }

    #[test]
    fn serializes_as_string() {
        // serde-with-str keeps the decimal exact in persisted JSON.
        let json = serde_json::to_string(&Price::from_cents(2999)).unwrap();
        assert_eq!(json, "\"29.99\"");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Price::from_cents(2999));
    }
}
