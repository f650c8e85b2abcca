//! Proportional changes to the pool's reserves and share supply.

use core::fmt;

use super::{Amount, Shares};
use crate::error::ExchangeError;

/// A deposit or withdrawal of liquidity, already priced.
///
/// Deposits move all three quantities up, withdrawals move all three
/// down; the [`ReserveLedger`](crate::ledger::ReserveLedger) applies the
/// change as one unit.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::{Amount, LiquidityChange, Shares};
///
/// let change = LiquidityChange::deposit(Amount::new(100), Amount::new(200), Shares::new(10));
/// assert!(change.is_ok());
/// assert!(LiquidityChange::withdrawal(Amount::new(1), Amount::new(1), Shares::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiquidityChange {
    /// Reserves and share supply grow.
    Deposit {
        /// Token added to the reserve.
        token: Amount,
        /// Currency added to the reserve.
        currency: Amount,
        /// Shares minted.
        shares: Shares,
    },
    /// Reserves and share supply shrink.
    Withdrawal {
        /// Token removed from the reserve.
        token: Amount,
        /// Currency removed from the reserve.
        currency: Amount,
        /// Shares burned.
        shares: Shares,
    },
}

impl LiquidityChange {
    /// Creates a `Deposit`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidAmount`] if no shares are minted or
    /// either asset amount is zero.
    pub const fn deposit(
        token: Amount,
        currency: Amount,
        shares: Shares,
    ) -> crate::error::Result<Self> {
        if shares.is_zero() {
            return Err(ExchangeError::InvalidAmount("deposit must mint shares"));
        }
        if token.is_zero() || currency.is_zero() {
            return Err(ExchangeError::InvalidAmount(
                "deposit requires both assets",
            ));
        }
        Ok(Self::Deposit {
            token,
            currency,
            shares,
        })
    }

    /// Creates a `Withdrawal`.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::InvalidAmount`] if no shares are burned.
    pub const fn withdrawal(
        token: Amount,
        currency: Amount,
        shares: Shares,
    ) -> crate::error::Result<Self> {
        if shares.is_zero() {
            return Err(ExchangeError::InvalidAmount("withdrawal must burn shares"));
        }
        Ok(Self::Withdrawal {
            token,
            currency,
            shares,
        })
    }

    /// Token moved by this change.
    pub const fn token(&self) -> Amount {
        match self {
            Self::Deposit { token, .. } | Self::Withdrawal { token, .. } => *token,
        }
    }

    /// Currency moved by this change.
    pub const fn currency(&self) -> Amount {
        match self {
            Self::Deposit { currency, .. } | Self::Withdrawal { currency, .. } => *currency,
        }
    }

    /// Shares minted or burned.
    pub const fn shares(&self) -> Shares {
        match self {
            Self::Deposit { shares, .. } | Self::Withdrawal { shares, .. } => *shares,
        }
    }

    /// `true` for a deposit.
    #[must_use]
    pub const fn is_deposit(&self) -> bool {
        matches!(self, Self::Deposit { .. })
    }
}

impl fmt::Display for LiquidityChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_deposit() { "Deposit" } else { "Withdrawal" };
        write!(
            f,
            "{kind}(token={}, currency={}, shares={})",
            self.token(),
            self.currency(),
            self.shares()
        )
    }
}
