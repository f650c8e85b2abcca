//! The single-pool exchange and its five operations.

use core::fmt;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{debug, info, instrument};

use crate::config::ExchangeConfig;
use crate::domain::{
    AccountId, Amount, DepositReceipt, InitReceipt, Reserves, Rounding, Shares, SwapDirection,
    SwapQuote, WithdrawalReceipt,
};
use crate::error::{ExchangeError, Result};
use crate::ledger::{LiquidityAccount, ReserveLedger};
use crate::pricing::PricingEngine;
use crate::traits::{Settlement, Transfer};

/// Lifecycle of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolState {
    /// No `init` has succeeded yet.
    Uninitialized,
    /// Seeded; stays here even after every share is withdrawn.
    Initialized,
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Initialized => write!(f, "initialized"),
        }
    }
}

/// A constant-product token/currency exchange.
///
/// Every operation takes the caller explicitly and a [`Settlement`]
/// backend that moves the caller's own balances. Operations run in four
/// steps:
///
/// 1. quote against the current reserves,
/// 2. apply the result to staged copies of the ledger and share book,
/// 3. settle the caller's balances through the host,
/// 4. commit the staged copies.
///
/// Any failure before step 4 returns an error with reserves, total shares
/// and every provider balance unchanged.
///
/// # Examples
///
/// ```
/// use dex_exchange::balances::InMemoryBalances;
/// use dex_exchange::domain::{AccountId, Amount, Holdings, Shares};
/// use dex_exchange::exchange::Exchange;
///
/// let alice = AccountId::from_bytes([1; 20]);
/// let mut host = InMemoryBalances::new();
/// host.fund(alice, Holdings::new(Amount::new(5_000), Amount::new(5_000))).ok();
///
/// let mut dex = Exchange::default();
/// let Ok(receipt) = dex.init(&mut host, alice, Amount::new(1_000), Amount::new(1_000)) else {
///     panic!("init failed");
/// };
/// assert_eq!(receipt.shares_minted, Shares::new(1_000));
///
/// let Ok(quote) = dex.swap_token_to_eth(&mut host, alice, Amount::new(100)) else {
///     panic!("swap failed");
/// };
/// assert_eq!(quote.output_amount(), Amount::new(90));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    config: ExchangeConfig,
    engine: PricingEngine,
    ledger: ReserveLedger,
    accounts: LiquidityAccount,
}

impl Exchange {
    /// Creates an uninitialized exchange.
    #[must_use]
    pub fn new(config: ExchangeConfig) -> Self {
        Self {
            config,
            engine: PricingEngine::new(config.fee_rate()),
            ledger: ReserveLedger::new(),
            accounts: LiquidityAccount::new(),
        }
    }

    // -- operations -----------------------------------------------------------

    /// Seeds the pool with both assets and credits the baseline shares.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::AlreadyInitialized`] on a second call.
    /// - [`ExchangeError::InvalidAmount`] if either amount is zero or no
    ///   share would be minted.
    /// - Any error from `settlement`, typically
    ///   [`ExchangeError::InsufficientBalance`].
    #[instrument(level = "debug", skip(self, settlement, caller), fields(caller = %caller))]
    pub fn init<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        token: Amount,
        currency: Amount,
    ) -> Result<InitReceipt> {
        let result = self.try_init(settlement, caller, token, currency);
        match &result {
            Ok(r) => info!(
                %caller,
                token = %r.token,
                currency = %r.currency,
                shares = %r.shares_minted,
                "pool initialized"
            ),
            Err(e) => debug!(%caller, error = %e, "init rejected"),
        }
        result
    }

    /// Sells `token_in` for currency.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::NotInitialized`] before `init`.
    /// - [`ExchangeError::InvalidAmount`] for a zero or oversized input.
    /// - [`ExchangeError::ZeroOutput`] if the output floors to zero.
    /// - [`ExchangeError::InsufficientReserve`] on a drained pool.
    /// - [`ExchangeError::InvariantViolation`] if the reserve product would
    ///   shrink. Quotes from the pricing engine never do this, so the error
    ///   marks an internal fault rather than a trading outcome to retry.
    /// - Any error from `settlement`.
    #[instrument(level = "debug", skip(self, settlement, caller), fields(caller = %caller))]
    pub fn swap_token_to_eth<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        token_in: Amount,
    ) -> Result<SwapQuote> {
        self.swap(settlement, caller, SwapDirection::TokenToCurrency, token_in)
    }

    /// Sells `currency_in` for token.
    ///
    /// # Errors
    ///
    /// Same as [`swap_token_to_eth`](Self::swap_token_to_eth).
    #[instrument(level = "debug", skip(self, settlement, caller), fields(caller = %caller))]
    pub fn swap_eth_to_token<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        currency_in: Amount,
    ) -> Result<SwapQuote> {
        self.swap(settlement, caller, SwapDirection::CurrencyToToken, currency_in)
    }

    /// Deposits both assets at the current ratio and credits new shares.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::NotInitialized`] before `init`.
    /// - [`ExchangeError::RatioMismatch`] if `currency` is outside the
    ///   accepted window for `token`.
    /// - [`ExchangeError::InvalidAmount`] for zero amounts or a deposit too
    ///   small to mint a share.
    /// - [`ExchangeError::InsufficientReserve`] on a drained pool.
    /// - Any error from `settlement`.
    #[instrument(level = "debug", skip(self, settlement, caller), fields(caller = %caller))]
    pub fn provide_liquidity<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        token: Amount,
        currency: Amount,
    ) -> Result<DepositReceipt> {
        let result = self.try_provide_liquidity(settlement, caller, token, currency);
        match &result {
            Ok(r) => info!(
                %caller,
                receipt = %r,
                reserves = %self.ledger.reserves(),
                "liquidity provided"
            ),
            Err(e) => debug!(%caller, %token, %currency, error = %e, "deposit rejected"),
        }
        result
    }

    /// Burns `shares` and pays out the proportional reserves.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::NotInitialized`] before `init`.
    /// - [`ExchangeError::InvalidAmount`] if `shares` is zero.
    /// - [`ExchangeError::InsufficientShares`] if the caller holds fewer.
    /// - [`ExchangeError::ZeroOutput`] if both payouts floor to zero.
    /// - Any error from `settlement`.
    #[instrument(level = "debug", skip(self, settlement, caller), fields(caller = %caller))]
    pub fn withdraw<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        shares: Shares,
    ) -> Result<WithdrawalReceipt> {
        let result = self.try_withdraw(settlement, caller, shares);
        match &result {
            Ok(r) => info!(
                %caller,
                receipt = %r,
                reserves = %self.ledger.reserves(),
                "liquidity withdrawn"
            ),
            Err(e) => debug!(%caller, %shares, error = %e, "withdrawal rejected"),
        }
        result
    }

    // -- queries --------------------------------------------------------------

    /// Lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        if self.ledger.is_initialized() {
            PoolState::Initialized
        } else {
            PoolState::Uninitialized
        }
    }

    /// `true` once `init` has succeeded.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.ledger.is_initialized()
    }

    /// Current reserves.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        self.ledger.reserves()
    }

    /// Outstanding share supply.
    pub const fn total_shares(&self) -> Shares {
        self.ledger.total_shares()
    }

    /// Shares held by `provider`.
    pub fn shares_of(&self, provider: &AccountId) -> Shares {
        self.accounts.balance_of(provider)
    }

    /// Every provider with a non-zero balance.
    pub fn providers(&self) -> impl Iterator<Item = (&AccountId, Shares)> + '_ {
        self.accounts.providers()
    }

    /// The configuration this exchange was built with.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// The quote `swap_token_to_eth(token_in)` would execute now.
    ///
    /// # Errors
    ///
    /// As for the swap, minus settlement errors.
    pub fn quote_token_to_eth(&self, token_in: Amount) -> Result<SwapQuote> {
        self.ensure_initialized()?;
        self.engine.quote_token_to_eth(&self.ledger.reserves(), token_in)
    }

    /// The quote `swap_eth_to_token(currency_in)` would execute now.
    ///
    /// # Errors
    ///
    /// As for the swap, minus settlement errors.
    pub fn quote_eth_to_token(&self, currency_in: Amount) -> Result<SwapQuote> {
        self.ensure_initialized()?;
        self.engine.quote_eth_to_token(&self.ledger.reserves(), currency_in)
    }

    /// Currency to pair with `token_in` in a deposit, rounded up.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::NotInitialized`] before `init`.
    /// - [`ExchangeError::InsufficientReserve`] on a drained pool.
    pub fn required_currency(&self, token_in: Amount) -> Result<Amount> {
        self.ensure_initialized()?;
        self.engine
            .required_currency(&self.ledger.reserves(), token_in, Rounding::Up)
    }

    /// Currency per token, for display. `None` when the pool is empty.
    #[must_use]
    pub fn spot_price(&self) -> Option<f64> {
        PricingEngine::spot_price(&self.ledger.reserves())
    }

    /// Hash of reserves, share supply, lifecycle state, and every provider
    /// balance.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.ledger.hash(&mut hasher);
        self.accounts.hash(&mut hasher);
        hasher.finish()
    }

    // -- internals ------------------------------------------------------------

    fn ensure_initialized(&self) -> Result<()> {
        if self.ledger.is_initialized() {
            Ok(())
        } else {
            Err(ExchangeError::NotInitialized)
        }
    }

    fn try_init<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        token: Amount,
        currency: Amount,
    ) -> Result<InitReceipt> {
        if self.ledger.is_initialized() {
            return Err(ExchangeError::AlreadyInitialized);
        }
        let shares = PricingEngine::initial_shares(self.config.initial_shares(), token, currency)?;

        let mut ledger = self.ledger;
        ledger.initialize(token, currency, shares)?;
        let mut accounts = self.accounts.clone();
        accounts.credit(caller, shares)?;

        settlement.settle(&Transfer::deposit(caller, token, currency))?;

        self.ledger = ledger;
        self.accounts = accounts;
        Ok(InitReceipt {
            token,
            currency,
            shares_minted: shares,
        })
    }

    fn swap<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote> {
        let result = self.try_swap(settlement, caller, direction, amount_in);
        match &result {
            Ok(q) => info!(
                %caller,
                quote = %q,
                reserves = %self.ledger.reserves(),
                "swap executed"
            ),
            Err(e) => debug!(%caller, %direction, %amount_in, error = %e, "swap rejected"),
        }
        result
    }

    fn try_swap<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote> {
        self.ensure_initialized()?;
        let quote = self
            .engine
            .quote_swap(&self.ledger.reserves(), direction, amount_in)?;

        let mut ledger = self.ledger;
        ledger.apply_swap(direction, quote.input_amount(), quote.output_amount())?;

        settlement.settle(&Transfer::swap(caller, &quote))?;

        self.ledger = ledger;
        Ok(quote)
    }

    fn try_provide_liquidity<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        token: Amount,
        currency: Amount,
    ) -> Result<DepositReceipt> {
        self.ensure_initialized()?;
        let change = self.engine.quote_deposit(
            &self.ledger.reserves(),
            self.ledger.total_shares(),
            token,
            currency,
            self.config.ratio_tolerance(),
        )?;

        let mut ledger = self.ledger;
        ledger.apply_liquidity_change(&change)?;
        let mut accounts = self.accounts.clone();
        accounts.credit(caller, change.shares())?;

        settlement.settle(&Transfer::deposit(caller, change.token(), change.currency()))?;

        self.ledger = ledger;
        self.accounts = accounts;
        Ok(DepositReceipt {
            token: change.token(),
            currency: change.currency(),
            shares_minted: change.shares(),
        })
    }

    fn try_withdraw<S: Settlement + ?Sized>(
        &mut self,
        settlement: &mut S,
        caller: AccountId,
        shares: Shares,
    ) -> Result<WithdrawalReceipt> {
        self.ensure_initialized()?;
        let change = self.engine.quote_withdrawal(
            &self.ledger.reserves(),
            self.ledger.total_shares(),
            shares,
            self.accounts.balance_of(&caller),
        )?;

        let mut ledger = self.ledger;
        ledger.apply_liquidity_change(&change)?;
        let mut accounts = self.accounts.clone();
        accounts.debit(&caller, shares)?;

        settlement.settle(&Transfer::withdrawal(caller, change.token(), change.currency()))?;

        self.ledger = ledger;
        self.accounts = accounts;
        Ok(WithdrawalReceipt {
            shares_burned: shares,
            token: change.token(),
            currency: change.currency(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::balances::InMemoryBalances;
    use crate::config::InitialShares;
    use crate::domain::{Asset, BasisPoints, FeeRate, Holdings};

    // -- helpers --------------------------------------------------------------

    fn alice() -> AccountId {
        AccountId::from_bytes([0xa1; 20])
    }

    fn bob() -> AccountId {
        AccountId::from_bytes([0xb0; 20])
    }

    fn host() -> InMemoryBalances {
        let mut host = InMemoryBalances::new();
        for who in [alice(), bob()] {
            let funds = Holdings::new(Amount::new(1_000_000), Amount::new(1_000_000));
            let Ok(()) = host.fund(who, funds) else {
                panic!("expected Ok");
            };
        }
        host
    }

    fn seeded(host: &mut InMemoryBalances, token: u128, currency: u128) -> Exchange {
        let mut dex = Exchange::default();
        let Ok(_) = dex.init(host, alice(), Amount::new(token), Amount::new(currency)) else {
            panic!("expected Ok");
        };
        dex
    }

    // -- init -----------------------------------------------------------------

    #[test]
    fn init_mints_geometric_mean() {
        let mut h = host();
        let mut dex = Exchange::default();
        assert_eq!(dex.state(), PoolState::Uninitialized);
        let Ok(r) = dex.init(&mut h, alice(), Amount::new(1_000), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(r.shares_minted, Shares::new(1_000));
        assert_eq!(dex.total_shares(), Shares::new(1_000));
        assert_eq!(dex.shares_of(&alice()), Shares::new(1_000));
        assert_eq!(dex.state(), PoolState::Initialized);
        assert_eq!(
            h.pool_holdings(),
            Holdings::new(Amount::new(1_000), Amount::new(1_000))
        );
    }

    #[test]
    fn init_twice_rejected() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 1_000);
        let r = dex.init(&mut h, bob(), Amount::new(1), Amount::new(1));
        assert_eq!(r, Err(ExchangeError::AlreadyInitialized));
    }

    #[test]
    fn init_without_funds_leaves_pool_uninitialized() {
        let mut h = InMemoryBalances::new();
        let mut dex = Exchange::default();
        let r = dex.init(&mut h, alice(), Amount::new(10), Amount::new(10));
        assert!(matches!(r, Err(ExchangeError::InsufficientBalance { .. })));
        assert!(!dex.is_initialized());
        assert_eq!(dex.total_shares(), Shares::ZERO);
    }

    #[test]
    fn init_with_configured_grant() {
        let Ok(cfg) = ExchangeConfig::new(
            FeeRate::DEFAULT,
            InitialShares::Fixed(Shares::new(1_000_000)),
            Amount::ZERO,
        ) else {
            panic!("expected Ok");
        };
        let mut h = host();
        let mut dex = Exchange::new(cfg);
        let Ok(r) = dex.init(&mut h, alice(), Amount::new(5), Amount::new(7)) else {
            panic!("expected Ok");
        };
        assert_eq!(r.shares_minted, Shares::new(1_000_000));
    }

    // -- swaps ----------------------------------------------------------------

    #[test]
    fn swap_before_init_rejected() {
        let mut h = host();
        let mut dex = Exchange::default();
        let r = dex.swap_eth_to_token(&mut h, alice(), Amount::new(10));
        assert_eq!(r, Err(ExchangeError::NotInitialized));
    }

    #[test]
    fn swap_token_to_eth_reference() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 1_000);
        let Ok(q) = dex.swap_token_to_eth(&mut h, bob(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(q.output_amount(), Amount::new(90));
        assert_eq!(
            dex.reserves(),
            Reserves::new(Amount::new(1_100), Amount::new(910))
        );
        assert_eq!(h.balance_of(&bob(), Asset::Token), Amount::new(999_900));
        assert_eq!(h.balance_of(&bob(), Asset::Currency), Amount::new(1_000_090));
    }

    #[test]
    fn zero_swap_rejected() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 1_000);
        let r = dex.swap_token_to_eth(&mut h, bob(), Amount::ZERO);
        assert!(matches!(r, Err(ExchangeError::InvalidAmount(_))));
    }

    #[test]
    fn quote_matches_execution() {
        let mut h = host();
        let mut dex = seeded(&mut h, 50_000, 20_000);
        let Ok(quoted) = dex.quote_eth_to_token(Amount::new(777)) else {
            panic!("expected Ok");
        };
        let Ok(executed) = dex.swap_eth_to_token(&mut h, bob(), Amount::new(777)) else {
            panic!("expected Ok");
        };
        assert_eq!(quoted, executed);
    }

    #[test]
    fn unfunded_swap_is_atomic() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 1_000);
        let before = dex.fingerprint();
        let carol = AccountId::from_bytes([0xcc; 20]);
        let r = dex.swap_token_to_eth(&mut h, carol, Amount::new(100));
        assert!(matches!(r, Err(ExchangeError::InsufficientBalance { .. })));
        assert_eq!(dex.fingerprint(), before);
    }

    // -- liquidity ------------------------------------------------------------

    #[test]
    fn deposit_credits_shares() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 2_000);
        let Ok(required) = dex.required_currency(Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(required, Amount::new(200));
        let Ok(r) = dex.provide_liquidity(&mut h, bob(), Amount::new(100), required) else {
            panic!("expected Ok");
        };
        assert_eq!(r.shares_minted, Shares::new(141));
        assert_eq!(dex.shares_of(&bob()), Shares::new(141));
        assert_eq!(dex.total_shares(), Shares::new(1_414 + 141));
    }

    #[test]
    fn mismatched_deposit_leaves_state() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 1_000);
        let before = dex.fingerprint();
        let r = dex.provide_liquidity(&mut h, bob(), Amount::new(100), Amount::new(150));
        assert!(matches!(r, Err(ExchangeError::RatioMismatch { .. })));
        assert_eq!(dex.fingerprint(), before);
        assert_eq!(dex.reserves(), Reserves::new(Amount::new(1_000), Amount::new(1_000)));
    }

    #[test]
    fn tolerance_from_config_applies() {
        let Ok(cfg) = ExchangeConfig::new(
            FeeRate::new(BasisPoints::new(30)),
            InitialShares::GeometricMean,
            Amount::new(5),
        ) else {
            panic!("expected Ok");
        };
        let mut h = host();
        let mut dex = Exchange::new(cfg);
        let Ok(_) = dex.init(&mut h, alice(), Amount::new(1_000), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        let r = dex.provide_liquidity(&mut h, bob(), Amount::new(100), Amount::new(104));
        assert!(r.is_ok());
    }

    #[test]
    fn withdraw_all_drains_pool() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 1_000);
        let Ok(r) = dex.withdraw(&mut h, alice(), Shares::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(r.token, Amount::new(1_000));
        assert_eq!(r.currency, Amount::new(1_000));
        assert_eq!(dex.total_shares(), Shares::ZERO);
        assert_eq!(dex.reserves(), Reserves::EMPTY);
        assert_eq!(dex.state(), PoolState::Initialized);
        assert_eq!(dex.providers().count(), 0);
        assert_eq!(h.pool_holdings(), Holdings::ZERO);

        let swap = dex.swap_token_to_eth(&mut h, bob(), Amount::new(10));
        assert!(matches!(swap, Err(ExchangeError::InsufficientReserve(_))));
        let deposit = dex.provide_liquidity(&mut h, bob(), Amount::new(10), Amount::new(10));
        assert!(matches!(deposit, Err(ExchangeError::InsufficientReserve(_))));
        let init = dex.init(&mut h, bob(), Amount::new(10), Amount::new(10));
        assert_eq!(init, Err(ExchangeError::AlreadyInitialized));
    }

    #[test]
    fn withdraw_more_than_held_rejected() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 1_000);
        let before = dex.fingerprint();
        let r = dex.withdraw(&mut h, bob(), Shares::new(1));
        assert_eq!(
            r,
            Err(ExchangeError::InsufficientShares {
                requested: Shares::new(1),
                available: Shares::ZERO,
            })
        );
        assert_eq!(dex.fingerprint(), before);
    }

    #[test]
    fn withdraw_zero_rejected() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 1_000);
        let r = dex.withdraw(&mut h, alice(), Shares::ZERO);
        assert!(matches!(r, Err(ExchangeError::InvalidAmount(_))));
    }

    // -- queries --------------------------------------------------------------

    #[test]
    fn queries_before_init() {
        let dex = Exchange::default();
        assert_eq!(dex.quote_token_to_eth(Amount::new(1)), Err(ExchangeError::NotInitialized));
        assert_eq!(dex.required_currency(Amount::new(1)), Err(ExchangeError::NotInitialized));
        assert_eq!(dex.spot_price(), None);
        assert_eq!(dex.config(), &ExchangeConfig::default());
    }

    #[test]
    fn spot_price_tracks_reserves() {
        let mut h = host();
        let dex = seeded(&mut h, 1_000, 3_000);
        assert_eq!(dex.spot_price(), Some(3.0));
    }

    #[test]
    fn fingerprint_changes_with_state() {
        let mut h = host();
        let mut dex = seeded(&mut h, 1_000, 1_000);
        let before = dex.fingerprint();
        let Ok(_) = dex.swap_eth_to_token(&mut h, bob(), Amount::new(50)) else {
            panic!("expected Ok");
        };
        assert_ne!(dex.fingerprint(), before);
    }

    #[test]
    fn state_display() {
        assert_eq!(PoolState::Uninitialized.to_string(), "uninitialized");
        assert_eq!(PoolState::Initialized.to_string(), "initialized");
    }
}
