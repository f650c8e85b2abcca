//! A pair of token and currency balances.

use core::fmt;

use super::{Amount, Asset};

/// Token and currency held by one party, or moved in one direction.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::{Amount, Asset, Holdings};
///
/// let h = Holdings::new(Amount::new(5), Amount::new(7));
/// assert_eq!(h.of(Asset::Currency), Amount::new(7));
/// assert_eq!(Holdings::only(Asset::Token, Amount::new(3)).currency(), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Holdings {
    token: Amount,
    currency: Amount,
}

impl Holdings {
    /// Nothing of either asset.
    pub const ZERO: Self = Self {
        token: Amount::ZERO,
        currency: Amount::ZERO,
    };

    /// Creates holdings from both balances.
    #[must_use]
    pub const fn new(token: Amount, currency: Amount) -> Self {
        Self { token, currency }
    }

    /// Holdings of a single asset.
    #[must_use]
    pub const fn only(asset: Asset, amount: Amount) -> Self {
        match asset {
            Asset::Token => Self::new(amount, Amount::ZERO),
            Asset::Currency => Self::new(Amount::ZERO, amount),
        }
    }

    /// Token balance.
    pub const fn token(&self) -> Amount {
        self.token
    }

    /// Currency balance.
    pub const fn currency(&self) -> Amount {
        self.currency
    }

    /// Balance of `asset`.
    pub const fn of(&self, asset: Asset) -> Amount {
        match asset {
            Asset::Token => self.token,
            Asset::Currency => self.currency,
        }
    }

    /// `true` if both balances are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.token.is_zero() && self.currency.is_zero()
    }

    /// Component-wise checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        let Some(token) = self.token.checked_add(&other.token) else {
            return None;
        };
        let Some(currency) = self.currency.checked_add(&other.currency) else {
            return None;
        };
        Some(Self::new(token, currency))
    }

    /// Component-wise checked subtraction.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        let Some(token) = self.token.checked_sub(&other.token) else {
            return None;
        };
        let Some(currency) = self.currency.checked_sub(&other.currency) else {
            return None;
        };
        Some(Self::new(token, currency))
    }

    /// First asset whose balance is below `required`, if any.
    #[must_use]
    pub fn shortfall(&self, required: &Self) -> Option<Asset> {
        [Asset::Token, Asset::Currency]
            .into_iter()
            .find(|asset| self.of(*asset) < required.of(*asset))
    }
}

impl fmt::Display for Holdings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Holdings(token={}, currency={})", self.token, self.currency)
    }
}
