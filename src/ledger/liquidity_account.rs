//! Per-provider share balances.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Shares};
use crate::error::{ExchangeError, Result};
use crate::math::CheckedArithmetic;

/// Share balances keyed by provider.
///
/// Only non-zero balances are stored; a debit that empties a balance
/// removes the entry. Iteration is ordered by [`AccountId`].
///
/// The facade keeps `total()` equal to
/// [`ReserveLedger::total_shares`](crate::ledger::ReserveLedger::total_shares)
/// by crediting and debiting in the same operation that mints or burns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LiquidityAccount {
    balances: BTreeMap<AccountId, Shares>,
    total: Shares,
}

impl LiquidityAccount {
    /// Creates an empty account book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            balances: BTreeMap::new(),
            total: Shares::ZERO,
        }
    }

    /// Shares held by `provider` (zero if unknown).
    pub fn balance_of(&self, provider: &AccountId) -> Shares {
        self.balances.get(provider).copied().unwrap_or(Shares::ZERO)
    }

    /// Sum of all balances.
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Number of providers with a non-zero balance.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// `true` if nobody holds shares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Providers and their balances, ordered by account.
    pub fn providers(&self) -> impl Iterator<Item = (&AccountId, Shares)> + '_ {
        self.balances.iter().map(|(id, shares)| (id, *shares))
    }

    /// Adds `shares` to `provider`.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::InvalidAmount`] on overflow; nothing changes.
    pub fn credit(&mut self, provider: AccountId, shares: Shares) -> Result<()> {
        if shares.is_zero() {
            return Ok(());
        }
        let balance = self.balance_of(&provider).safe_add(&shares)?;
        let total = self.total.safe_add(&shares)?;
        self.balances.insert(provider, balance);
        self.total = total;
        Ok(())
    }

    /// Removes `shares` from `provider`, pruning an emptied balance.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::InsufficientShares`] if the balance is too small;
    /// nothing changes.
    pub fn debit(&mut self, provider: &AccountId, shares: Shares) -> Result<()> {
        let balance = self.balance_of(provider).safe_sub(&shares)?;
        // total >= any single balance, so this only fails on a corrupted book
        let total = self
            .total
            .checked_sub(&shares)
            .ok_or(ExchangeError::InvariantViolation)?;
        if balance.is_zero() {
            self.balances.remove(provider);
        } else {
            self.balances.insert(*provider, balance);
        }
        self.total = total;
        Ok(())
    }
}
