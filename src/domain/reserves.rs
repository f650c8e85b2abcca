//! Snapshot of the pool's two reserves.

use core::fmt;

use super::{Amount, Asset, SwapDirection};

/// The token and currency balances held by the pool.
///
/// `Reserves` is a plain value: the [`ReserveLedger`](crate::ledger::ReserveLedger)
/// owns the live copy and hands out snapshots for pricing.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::{Amount, Reserves, SwapDirection};
///
/// let r = Reserves::new(Amount::new(1_000), Amount::new(2_000));
/// let (r_in, r_out) = r.in_out(SwapDirection::TokenToCurrency);
/// assert_eq!((r_in.get(), r_out.get()), (1_000, 2_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reserves {
    token: Amount,
    currency: Amount,
}

impl Reserves {
    /// Both reserves empty.
    pub const EMPTY: Self = Self {
        token: Amount::ZERO,
        currency: Amount::ZERO,
    };

    /// Creates a snapshot.
    #[must_use]
    pub const fn new(token: Amount, currency: Amount) -> Self {
        Self { token, currency }
    }

    /// Token reserve.
    pub const fn token(&self) -> Amount {
        self.token
    }

    /// Currency reserve.
    pub const fn currency(&self) -> Amount {
        self.currency
    }

    /// Reserve of the given asset.
    pub const fn of(&self, asset: Asset) -> Amount {
        match asset {
            Asset::Token => self.token,
            Asset::Currency => self.currency,
        }
    }

    /// `(input reserve, output reserve)` for a swap direction.
    #[must_use]
    pub const fn in_out(&self, direction: SwapDirection) -> (Amount, Amount) {
        (self.of(direction.input()), self.of(direction.output()))
    }

    /// A copy with one side replaced.
    #[must_use]
    pub const fn with(self, asset: Asset, amount: Amount) -> Self {
        match asset {
            Asset::Token => Self {
                token: amount,
                currency: self.currency,
            },
            Asset::Currency => Self {
                token: self.token,
                currency: amount,
            },
        }
    }

    /// `true` if either side is zero; such a pool cannot price anything.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.token.is_zero() || self.currency.is_zero()
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reserves(token={}, currency={})", self.token, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reserves {
        Reserves::new(Amount::new(1_000), Amount::new(2_000))
    }

    #[test]
    fn accessors() {
        let r = sample();
        assert_eq!(r.token(), Amount::new(1_000));
        assert_eq!(r.currency(), Amount::new(2_000));
        assert_eq!(r.of(Asset::Currency), Amount::new(2_000));
    }

    #[test]
    fn in_out_follows_direction() {
        let r = sample();
        assert_eq!(
            r.in_out(SwapDirection::CurrencyToToken),
            (Amount::new(2_000), Amount::new(1_000))
        );
    }

    #[test]
    fn with_replaces_one_side() {
        let r = sample().with(Asset::Token, Amount::new(5));
        assert_eq!(r, Reserves::new(Amount::new(5), Amount::new(2_000)));
    }

    #[test]
    fn depletion() {
        assert!(Reserves::EMPTY.is_depleted());
        assert!(sample().with(Asset::Currency, Amount::ZERO).is_depleted());
        assert!(!sample().is_depleted());
    }

    #[test]
    fn display() {
        assert_eq!(sample().to_string(), "Reserves(token=1000, currency=2000)");
    }
}
