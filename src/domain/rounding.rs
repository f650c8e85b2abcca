//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the exchange.
///
/// Outputs paid by the pool and reported fees round [`Down`](Self::Down);
/// amounts a caller must supply round [`Up`](Self::Up). Either way the
/// remainder stays with the pool.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::Rounding;
///
/// assert_eq!(Rounding::Down.divide(10, 3), Some(3));
/// assert_eq!(Rounding::Up.divide(10, 3), Some(4));
/// assert_eq!(Rounding::Up.divide(10, 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Divides `numerator` by `denominator` in this direction.
    ///
    /// Returns `None` when `denominator` is zero.
    #[must_use]
    pub const fn divide(self, numerator: u128, denominator: u128) -> Option<u128> {
        if denominator == 0 {
            return None;
        }
        let q = numerator / denominator;
        match self {
            Self::Down => Some(q),
            // q + 1 cannot overflow: a non-zero remainder implies q < u128::MAX.
            Self::Up if numerator % denominator != 0 => Some(q + 1),
            Self::Up => Some(q),
        }
    }

    /// Returns `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }
}
