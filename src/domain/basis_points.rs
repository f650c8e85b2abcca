//! Basis-point percentages.

use core::fmt;

use super::{Amount, Rounding};

/// A percentage expressed in basis points (1 bp = 0.01 %, 10 000 bp = 100 %).
///
/// Any `u32` can be stored; [`is_valid_percent`](Self::is_valid_percent)
/// tells whether the value is a meaningful percentage.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::{Amount, BasisPoints, Rounding};
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.complement(), Some(BasisPoints::new(9_970)));
/// assert_eq!(bp.apply(Amount::new(1_000), Rounding::Up), Some(Amount::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// The basis-point denominator: 10 000 bp = 100 %.
    pub const DENOMINATOR: u32 = 10_000;

    /// 0 %.
    pub const ZERO: Self = Self(0);

    /// 100 %.
    pub const MAX_PERCENT: Self = Self(Self::DENOMINATOR);

    /// Creates `BasisPoints` from a raw `u32`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// `true` if the value lies in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= Self::DENOMINATOR
    }

    /// `10 000 - self`, or `None` if the value exceeds 100 %.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match Self::DENOMINATOR.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount × self / 10 000` in the given direction.
    ///
    /// Returns `None` if the intermediate product overflows.
    #[must_use]
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> Option<Amount> {
        let Some(product) = amount.get().checked_mul(self.0 as u128) else {
            return None;
        };
        match rounding.divide(product, Self::DENOMINATOR as u128) {
            Some(v) => Some(Amount::new(v)),
            None => None,
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_percent_range() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn complement() {
        assert_eq!(
            BasisPoints::new(30).complement(),
            Some(BasisPoints::new(9_970))
        );
        assert_eq!(BasisPoints::MAX_PERCENT.complement(), Some(BasisPoints::ZERO));
        assert_eq!(BasisPoints::new(10_001).complement(), None);
    }

    // -- apply ---------------------------------------------------------------

    #[test]
    fn apply_rounds_in_requested_direction() {
        let bp = BasisPoints::new(30);
        assert_eq!(bp.apply(Amount::new(100), Rounding::Down), Some(Amount::ZERO));
        assert_eq!(bp.apply(Amount::new(100), Rounding::Up), Some(Amount::new(1)));
        assert_eq!(
            bp.apply(Amount::new(1_000_000), Rounding::Down),
            Some(Amount::new(3_000))
        );
    }

    #[test]
    fn apply_full_percent_is_identity() {
        assert_eq!(
            BasisPoints::MAX_PERCENT.apply(Amount::new(1_234), Rounding::Down),
            Some(Amount::new(1_234))
        );
    }

    #[test]
    fn apply_overflow() {
        assert_eq!(BasisPoints::new(2).apply(Amount::MAX, Rounding::Down), None);
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(30).to_string(), "30bp");
    }
}
