//! Pool reserves and total share supply.

use core::fmt;

use tracing::warn;

use crate::domain::{Amount, LiquidityChange, Reserves, Shares, SwapDirection};
use crate::error::{ExchangeError, Result};
use crate::math::{product, CheckedArithmetic};

/// The pool's persisted quantities: both reserves and the share supply.
///
/// Every mutator computes the complete next state before assigning it, so
/// an `Err` always leaves the ledger unchanged.
///
/// # Invariants
///
/// - After a swap, `token × currency` never decreases.
/// - `total_shares == 0` after initialization means the pool is drained;
///   it stays initialized and refuses further swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReserveLedger {
    reserves: Reserves,
    total_shares: Shares,
    initialized: bool,
}

impl ReserveLedger {
    /// Creates an uninitialized, empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserves: Reserves::EMPTY,
            total_shares: Shares::ZERO,
            initialized: false,
        }
    }

    /// Current reserves.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }

    /// Outstanding shares.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// `true` once `initialize` has succeeded.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Seeds the reserves and mints the baseline supply.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::AlreadyInitialized`] if called twice, including
    ///   on a drained pool.
    /// - [`ExchangeError::InvalidAmount`] if any quantity is zero.
    pub fn initialize(&mut self, token: Amount, currency: Amount, shares: Shares) -> Result<()> {
        if self.initialized {
            return Err(ExchangeError::AlreadyInitialized);
        }
        if token.is_zero() || currency.is_zero() {
            return Err(ExchangeError::InvalidAmount(
                "initial deposit requires both assets",
            ));
        }
        if shares.is_zero() {
            return Err(ExchangeError::InvalidAmount(
                "initial deposit must mint shares",
            ));
        }
        self.reserves = Reserves::new(token, currency);
        self.total_shares = shares;
        self.initialized = true;
        Ok(())
    }

    /// Moves `amount_in` into the input reserve and `amount_out` out of the
    /// output reserve.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::NotInitialized`] before `initialize`.
    /// - [`ExchangeError::InsufficientReserve`] on a drained pool or if
    ///   `amount_out` exceeds the output reserve.
    /// - [`ExchangeError::InvalidAmount`] for a zero input or overflow.
    /// - [`ExchangeError::InvariantViolation`] if the reserve product would
    ///   shrink.
    pub fn apply_swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<()> {
        self.ensure_tradable()?;
        if amount_in.is_zero() {
            return Err(ExchangeError::InvalidAmount("swap input must be positive"));
        }

        let (reserve_in, reserve_out) = self.reserves.in_out(direction);
        let new_in = reserve_in.safe_add(&amount_in)?;
        let new_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(ExchangeError::InsufficientReserve(
                "swap output exceeds reserve",
            ))?;
        let next = self
            .reserves
            .with(direction.input(), new_in)
            .with(direction.output(), new_out);

        let k_before = product(self.reserves.token().get(), self.reserves.currency().get());
        let k_after = product(next.token().get(), next.currency().get());
        if k_after < k_before {
            warn!(
                %direction,
                %amount_in,
                %amount_out,
                reserves = %self.reserves,
                "swap rejected: reserve product would decrease"
            );
            return Err(ExchangeError::InvariantViolation);
        }

        self.reserves = next;
        Ok(())
    }

    /// Applies a priced deposit or withdrawal to reserves and supply.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::NotInitialized`] before `initialize`.
    /// - [`ExchangeError::InsufficientReserve`] when depositing into a
    ///   drained pool or withdrawing more than a reserve holds.
    /// - [`ExchangeError::InsufficientShares`] when burning more than the
    ///   supply.
    /// - [`ExchangeError::InvalidAmount`] on overflow.
    pub fn apply_liquidity_change(&mut self, change: &LiquidityChange) -> Result<()> {
        if !self.initialized {
            return Err(ExchangeError::NotInitialized);
        }
        let (reserves, total_shares) = match *change {
            LiquidityChange::Deposit {
                token,
                currency,
                shares,
            } => {
                if self.total_shares.is_zero() {
                    return Err(ExchangeError::InsufficientReserve("pool has been drained"));
                }
                (
                    Reserves::new(
                        self.reserves.token().safe_add(&token)?,
                        self.reserves.currency().safe_add(&currency)?,
                    ),
                    self.total_shares.safe_add(&shares)?,
                )
            }
            LiquidityChange::Withdrawal {
                token,
                currency,
                shares,
            } => (
                Reserves::new(
                    self.reserves.token().safe_sub(&token)?,
                    self.reserves.currency().safe_sub(&currency)?,
                ),
                self.total_shares.safe_sub(&shares)?,
            ),
        };
        self.reserves = reserves;
        self.total_shares = total_shares;
        Ok(())
    }

    fn ensure_tradable(&self) -> Result<()> {
        if !self.initialized {
            return Err(ExchangeError::NotInitialized);
        }
        if self.total_shares.is_zero() || self.reserves.is_depleted() {
            return Err(ExchangeError::InsufficientReserve("pool has been drained"));
        }
        Ok(())
    }
}

impl fmt::Display for ReserveLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReserveLedger({}, shares={})",
            self.reserves, self.total_shares
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn seeded(token: u128, currency: u128, shares: u128) -> ReserveLedger {
        let mut ledger = ReserveLedger::new();
        let r = ledger.initialize(Amount::new(token), Amount::new(currency), Shares::new(shares));
        let Ok(()) = r else {
            panic!("expected Ok");
        };
        ledger
    }

    #[test]
    fn new_is_uninitialized() {
        let ledger = ReserveLedger::new();
        assert!(!ledger.is_initialized());
        assert_eq!(ledger.total_shares(), Shares::ZERO);
        assert_eq!(ledger.reserves(), Reserves::EMPTY);
        assert_eq!(ledger, ReserveLedger::default());
    }

    #[test]
    fn initialize_sets_state() {
        let ledger = seeded(1_000, 2_000, 1_414);
        assert!(ledger.is_initialized());
        assert_eq!(
            ledger.reserves(),
            Reserves::new(Amount::new(1_000), Amount::new(2_000))
        );
        assert_eq!(ledger.total_shares(), Shares::new(1_414));
    }

    #[test]
    fn initialize_twice_rejected() {
        let mut ledger = seeded(1_000, 1_000, 1_000);
        let r = ledger.initialize(Amount::new(1), Amount::new(1), Shares::new(1));
        assert_eq!(r, Err(ExchangeError::AlreadyInitialized));
    }

    #[test]
    fn initialize_zero_rejected() {
        let mut ledger = ReserveLedger::new();
        let r = ledger.initialize(Amount::ZERO, Amount::new(1), Shares::new(1));
        assert!(matches!(r, Err(ExchangeError::InvalidAmount(_))));
        assert!(!ledger.is_initialized());
    }

    #[test]
    fn swap_moves_reserves() {
        let mut ledger = seeded(1_000, 1_000, 1_000);
        let Ok(()) = ledger.apply_swap(
            SwapDirection::TokenToCurrency,
            Amount::new(100),
            Amount::new(90),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(
            ledger.reserves(),
            Reserves::new(Amount::new(1_100), Amount::new(910))
        );
    }

    #[test]
    fn swap_before_init_rejected() {
        let mut ledger = ReserveLedger::new();
        let r = ledger.apply_swap(SwapDirection::CurrencyToToken, Amount::new(1), Amount::new(1));
        assert_eq!(r, Err(ExchangeError::NotInitialized));
    }

    #[test]
    fn product_decrease_rejected_without_mutation() {
        let mut ledger = seeded(1_000, 1_000, 1_000);
        let before = ledger;
        // 1100 * 900 = 990_000 < 1_000_000
        let r = ledger.apply_swap(
            SwapDirection::TokenToCurrency,
            Amount::new(100),
            Amount::new(100),
        );
        assert_eq!(r, Err(ExchangeError::InvariantViolation));
        assert_eq!(ledger, before);
    }

    #[test]
    fn output_above_reserve_rejected() {
        let mut ledger = seeded(1_000, 1_000, 1_000);
        let r = ledger.apply_swap(
            SwapDirection::CurrencyToToken,
            Amount::new(1_000_000),
            Amount::new(1_001),
        );
        assert!(matches!(r, Err(ExchangeError::InsufficientReserve(_))));
    }

    #[test]
    fn deposit_and_withdrawal() {
        let mut ledger = seeded(1_000, 2_000, 1_000);
        let Ok(deposit) =
            LiquidityChange::deposit(Amount::new(100), Amount::new(200), Shares::new(100))
        else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.apply_liquidity_change(&deposit) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.total_shares(), Shares::new(1_100));

        let Ok(withdrawal) =
            LiquidityChange::withdrawal(Amount::new(1_100), Amount::new(2_200), Shares::new(1_100))
        else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.apply_liquidity_change(&withdrawal) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.total_shares(), Shares::ZERO);
        assert!(ledger.is_initialized());
        assert_eq!(ledger.reserves(), Reserves::EMPTY);
    }

    #[test]
    fn drained_pool_refuses_swaps_and_deposits() {
        let mut ledger = seeded(10, 10, 10);
        let Ok(all) = LiquidityChange::withdrawal(Amount::new(10), Amount::new(10), Shares::new(10))
        else {
            panic!("expected Ok");
        };
        let Ok(()) = ledger.apply_liquidity_change(&all) else {
            panic!("expected Ok");
        };

        let swap = ledger.apply_swap(SwapDirection::TokenToCurrency, Amount::new(1), Amount::ZERO);
        assert!(matches!(swap, Err(ExchangeError::InsufficientReserve(_))));

        let Ok(deposit) = LiquidityChange::deposit(Amount::new(1), Amount::new(1), Shares::new(1))
        else {
            panic!("expected Ok");
        };
        let r = ledger.apply_liquidity_change(&deposit);
        assert!(matches!(r, Err(ExchangeError::InsufficientReserve(_))));

        let init = ledger.initialize(Amount::new(1), Amount::new(1), Shares::new(1));
        assert_eq!(init, Err(ExchangeError::AlreadyInitialized));
    }

    #[test]
    fn over_burn_rejected_without_mutation() {
        let mut ledger = seeded(1_000, 1_000, 1_000);
        let before = ledger;
        let Ok(w) = LiquidityChange::withdrawal(Amount::new(1), Amount::new(1), Shares::new(1_001))
        else {
            panic!("expected Ok");
        };
        let r = ledger.apply_liquidity_change(&w);
        assert!(matches!(r, Err(ExchangeError::InsufficientShares { .. })));
        assert_eq!(ledger, before);
    }

    #[test]
    fn display() {
        let ledger = seeded(1, 2, 3);
        assert_eq!(
            ledger.to_string(),
            "ReserveLedger(Reserves(token=1, currency=2), shares=3)"
        );
    }
}
