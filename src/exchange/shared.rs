//! Thread-safe handle to one exchange.

use std::sync::Arc;

use parking_lot::Mutex;

use super::Exchange;
use crate::config::ExchangeConfig;
use crate::domain::{
    AccountId, Amount, DepositReceipt, InitReceipt, Reserves, Shares, SwapQuote,
    WithdrawalReceipt,
};
use crate::error::Result;
use crate::traits::Settlement;

/// Cloneable handle serializing every operation on one pool.
///
/// Each call holds the pool's mutex from quote through commit, so
/// concurrent callers observe operations in some total order. Separate
/// `SharedExchange` values built from separate exchanges share nothing.
///
/// # Examples
///
/// ```
/// use dex_exchange::exchange::SharedExchange;
///
/// let shared = SharedExchange::default();
/// let other = shared.clone();
/// assert!(!other.is_initialized());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedExchange {
    inner: Arc<Mutex<Exchange>>,
}

impl SharedExchange {
    /// Wraps an existing exchange.
    #[must_use]
    pub fn new(exchange: Exchange) -> Self {
        Self {
            inner: Arc::new(Mutex::new(exchange)),
        }
    }

    /// Creates an uninitialized exchange with `config`.
    #[must_use]
    pub fn with_config(config: ExchangeConfig) -> Self {
        Self::new(Exchange::new(config))
    }

    /// See [`Exchange::init`].
    ///
    /// # Errors
    ///
    /// As for [`Exchange::init`].
    pub fn init<S: Settlement + ?Sized>(
        &self,
        settlement: &mut S,
        caller: AccountId,
        token: Amount,
        currency: Amount,
    ) -> Result<InitReceipt> {
        self.inner.lock().init(settlement, caller, token, currency)
    }

    /// See [`Exchange::swap_token_to_eth`].
    ///
    /// # Errors
    ///
    /// As for [`Exchange::swap_token_to_eth`].
    pub fn swap_token_to_eth<S: Settlement + ?Sized>(
        &self,
        settlement: &mut S,
        caller: AccountId,
        token_in: Amount,
    ) -> Result<SwapQuote> {
        self.inner
            .lock()
            .swap_token_to_eth(settlement, caller, token_in)
    }

    /// See [`Exchange::swap_eth_to_token`].
    ///
    /// # Errors
    ///
    /// As for [`Exchange::swap_eth_to_token`].
    pub fn swap_eth_to_token<S: Settlement + ?Sized>(
        &self,
        settlement: &mut S,
        caller: AccountId,
        currency_in: Amount,
    ) -> Result<SwapQuote> {
        self.inner
            .lock()
            .swap_eth_to_token(settlement, caller, currency_in)
    }

    /// See [`Exchange::provide_liquidity`].
    ///
    /// # Errors
    ///
    /// As for [`Exchange::provide_liquidity`].
    pub fn provide_liquidity<S: Settlement + ?Sized>(
        &self,
        settlement: &mut S,
        caller: AccountId,
        token: Amount,
        currency: Amount,
    ) -> Result<DepositReceipt> {
        self.inner
            .lock()
            .provide_liquidity(settlement, caller, token, currency)
    }

    /// See [`Exchange::withdraw`].
    ///
    /// # Errors
    ///
    /// As for [`Exchange::withdraw`].
    pub fn withdraw<S: Settlement + ?Sized>(
        &self,
        settlement: &mut S,
        caller: AccountId,
        shares: Shares,
    ) -> Result<WithdrawalReceipt> {
        self.inner.lock().withdraw(settlement, caller, shares)
    }

    /// Current reserves.
    #[must_use]
    pub fn reserves(&self) -> Reserves {
        self.inner.lock().reserves()
    }

    /// Outstanding share supply.
    pub fn total_shares(&self) -> Shares {
        self.inner.lock().total_shares()
    }

    /// Shares held by `provider`.
    pub fn shares_of(&self, provider: &AccountId) -> Shares {
        self.inner.lock().shares_of(provider)
    }

    /// `true` once `init` has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.lock().is_initialized()
    }

    /// See [`Exchange::fingerprint`].
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.inner.lock().fingerprint()
    }
}
