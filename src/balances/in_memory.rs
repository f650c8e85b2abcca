//! In-process host ledger.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{AccountId, Amount, Asset, Holdings};
use crate::error::{ExchangeError, Result};
use crate::traits::{Settlement, Transfer};

/// Caller balances and pool holdings kept in memory.
///
/// Useful for tests, simulations, and hosts that keep balances in the same
/// process. The pool's holdings track the assets it has received and paid
/// out, so after every settled operation they equal the exchange reserves.
///
/// # Examples
///
/// ```
/// use dex_exchange::balances::InMemoryBalances;
/// use dex_exchange::domain::{AccountId, Amount, Holdings};
/// use dex_exchange::traits::{Settlement, Transfer};
///
/// let alice = AccountId::from_bytes([1; 20]);
/// let mut host = InMemoryBalances::new();
/// host.fund(alice, Holdings::new(Amount::new(10), Amount::new(10))).ok();
///
/// let t = Transfer::deposit(alice, Amount::new(4), Amount::new(6));
/// assert!(host.settle(&t).is_ok());
/// assert_eq!(host.holdings_of(&alice), Holdings::new(Amount::new(6), Amount::new(4)));
/// assert_eq!(host.pool_holdings(), Holdings::new(Amount::new(4), Amount::new(6)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBalances {
    accounts: HashMap<AccountId, Holdings>,
    pool: Holdings,
}

impl InMemoryBalances {
    /// Creates an empty host ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` to `account` from outside the exchange.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::InvalidAmount`] if a balance would overflow.
    pub fn fund(&mut self, account: AccountId, amount: Holdings) -> Result<()> {
        let next = self
            .holdings_of(&account)
            .checked_add(&amount)
            .ok_or(ExchangeError::InvalidAmount("balance overflow"))?;
        self.accounts.insert(account, next);
        Ok(())
    }

    /// Both balances of `account`.
    #[must_use]
    pub fn holdings_of(&self, account: &AccountId) -> Holdings {
        self.accounts.get(account).copied().unwrap_or_default()
    }

    /// Balance of one asset.
    pub fn balance_of(&self, account: &AccountId, asset: Asset) -> Amount {
        self.holdings_of(account).of(asset)
    }

    /// Assets currently held on the pool's behalf.
    #[must_use]
    pub const fn pool_holdings(&self) -> Holdings {
        self.pool
    }
}

impl Settlement for InMemoryBalances {
    fn settle(&mut self, transfer: &Transfer) -> Result<()> {
        let caller = transfer.caller();
        let inbound = transfer.inbound();
        let outbound = transfer.outbound();
        let held = self.holdings_of(&caller);

        if let Some(asset) = held.shortfall(&inbound) {
            debug!(%caller, %asset, "settlement refused: caller balance too low");
            return Err(ExchangeError::InsufficientBalance {
                asset,
                requested: inbound.of(asset),
                available: held.of(asset),
            });
        }
        let pool = self
            .pool
            .checked_add(&inbound)
            .ok_or(ExchangeError::InvalidAmount("pool holdings overflow"))?;
        let pool = pool
            .checked_sub(&outbound)
            .ok_or(ExchangeError::InsufficientReserve(
                "pool holdings cannot cover payout",
            ))?;
        let account = held
            .checked_sub(&inbound)
            .and_then(|h| h.checked_add(&outbound))
            .ok_or(ExchangeError::InvalidAmount("balance overflow"))?;

        self.pool = pool;
        if account.is_zero() {
            self.accounts.remove(&caller);
        } else {
            self.accounts.insert(caller, account);
        }
        debug!(%transfer, "settled");
        Ok(())
    }
}
