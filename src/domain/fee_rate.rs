//! Swap fee rate retained by the pool.

use core::fmt;

use super::{Amount, BasisPoints, Rounding};

/// The share of every swap input that stays in the pool as a fee.
///
/// The fee is never paid out separately: it is simply excluded from the
/// pricing formula while the full input is added to the reserve, which is
/// what makes the constant product grow with every trade.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::{Amount, FeeRate};
///
/// let fee = FeeRate::DEFAULT;
/// assert_eq!(fee.basis_points().get(), 30);
/// assert_eq!(fee.fee_on(Amount::new(1_000)), Some(Amount::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeRate(BasisPoints);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.30 %, the classic constant-product fee.
    pub const DEFAULT: Self = Self(BasisPoints::new(30));

    /// Creates a fee rate from arbitrary basis points. Range checks happen
    /// in [`ExchangeConfig::validate`](crate::config::ExchangeConfig::validate).
    #[must_use]
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying basis points.
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` for a zero fee.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.get() == 0
    }

    /// Multiplier applied to the input before pricing: `10 000 - fee_bps`.
    ///
    /// Returns `None` for rates above 100 %.
    #[must_use]
    pub const fn input_multiplier(&self) -> Option<u128> {
        match self.0.complement() {
            Some(bp) => Some(bp.get() as u128),
            None => None,
        }
    }

    /// Fee reported for `amount_in`, rounded down.
    ///
    /// Pricing discounts the input by the exact fraction; this is the
    /// whole-unit figure shown in quotes, so it is always below a
    /// non-zero input for rates under 100 %.
    #[must_use]
    pub const fn fee_on(&self, amount_in: Amount) -> Option<Amount> {
        self.0.apply(amount_in, Rounding::Down)
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeRate({})", self.0)
    }
}
