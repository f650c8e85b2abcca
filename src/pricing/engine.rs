//! Constant-product pricing (`token × currency = k`).
//!
//! # Swap formula
//!
//! With fee `f` in basis points and `m = 10 000 − f`:
//!
//! ```text
//! out = ⌊ R_out × in × m / (R_in × 10 000 + in × m) ⌋
//! ```
//!
//! which is `R_out × in' / (R_in + in')` for the fee-discounted input
//! `in' = in × (1 − f)`, evaluated in 256-bit precision with a single
//! floor at the end. Since `in' / (R_in + in') < 1`, the output is always
//! strictly below `R_out`.
//!
//! # Liquidity
//!
//! Deposits mint `min(T × Δtoken / R_token, T × Δcurrency / R_currency)`
//! shares and must match the pool ratio within the configured tolerance.
//! Withdrawals pay `R × s / T` of each reserve. Every quotient floors.

use primitive_types::U256;

use crate::config::InitialShares;
use crate::domain::{
    Amount, BasisPoints, FeeRate, LiquidityChange, Reserves, Rounding, Shares, SwapDirection,
    SwapQuote,
};
use crate::error::{ExchangeError, Result};
use crate::math::{div_wide, mul_div, product};

/// Stateless quoting for a single pool at a fixed fee rate.
///
/// Every method takes the reserves it prices against; nothing is mutated.
/// The [`ReserveLedger`](crate::ledger::ReserveLedger) applies the results.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::{Amount, FeeRate, Reserves};
/// use dex_exchange::pricing::PricingEngine;
///
/// let engine = PricingEngine::new(FeeRate::DEFAULT);
/// let reserves = Reserves::new(Amount::new(1_000), Amount::new(1_000));
/// let Ok(quote) = engine.quote_token_to_eth(&reserves, Amount::new(100)) else {
///     panic!("expected a quote");
/// };
/// assert_eq!(quote.output_amount(), Amount::new(90));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PricingEngine {
    fee_rate: FeeRate,
}

impl PricingEngine {
    /// Creates an engine charging `fee_rate` on swap inputs.
    #[must_use]
    pub const fn new(fee_rate: FeeRate) -> Self {
        Self { fee_rate }
    }

    /// The fee rate applied to swap inputs.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Output of selling `x_in` into a pool holding `x_reserve` of the
    /// input asset and `y_reserve` of the output asset.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidAmount`] if `x_in` is zero or the
    ///   intermediate product exceeds 256 bits.
    /// - [`ExchangeError::InsufficientReserve`] if either reserve is zero.
    /// - [`ExchangeError::ZeroOutput`] if the output floors to zero.
    pub fn price(&self, x_in: Amount, x_reserve: Amount, y_reserve: Amount) -> Result<Amount> {
        if x_in.is_zero() {
            return Err(ExchangeError::InvalidAmount("swap input must be positive"));
        }
        if x_reserve.is_zero() || y_reserve.is_zero() {
            return Err(ExchangeError::InsufficientReserve("pool has no liquidity"));
        }
        let multiplier = self.fee_rate.input_multiplier().ok_or_else(|| {
            ExchangeError::InvalidConfiguration(format!(
                "fee rate {} exceeds 100%",
                self.fee_rate.basis_points()
            ))
        })?;

        let numerator = product(y_reserve.get(), x_in.get())
            .checked_mul(U256::from(multiplier))
            .ok_or(ExchangeError::InvalidAmount("swap input out of range"))?;
        let denominator = product(x_reserve.get(), u128::from(BasisPoints::DENOMINATOR))
            + product(x_in.get(), multiplier);

        let out = div_wide(numerator, denominator, Rounding::Down)
            .map(Amount::new)
            .ok_or(ExchangeError::InvalidAmount("swap output out of range"))?;

        if out.is_zero() {
            return Err(ExchangeError::ZeroOutput);
        }
        if out >= y_reserve {
            return Err(ExchangeError::InsufficientReserve(
                "swap would drain the output reserve",
            ));
        }
        Ok(out)
    }

    /// Quotes a swap of `amount_in` in `direction`.
    ///
    /// # Errors
    ///
    /// Same as [`price`](Self::price); additionally
    /// [`ExchangeError::InvalidAmount`] if the fee computation overflows.
    pub fn quote_swap(
        &self,
        reserves: &Reserves,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote> {
        let (reserve_in, reserve_out) = reserves.in_out(direction);
        let amount_out = self.price(amount_in, reserve_in, reserve_out)?;
        let fee = self
            .fee_rate
            .fee_on(amount_in)
            .ok_or(ExchangeError::InvalidAmount("fee calculation overflow"))?;
        SwapQuote::new(direction, amount_in, amount_out, fee)
    }

    /// Quotes selling `token_in` for currency.
    ///
    /// # Errors
    ///
    /// See [`quote_swap`](Self::quote_swap).
    pub fn quote_token_to_eth(&self, reserves: &Reserves, token_in: Amount) -> Result<SwapQuote> {
        self.quote_swap(reserves, SwapDirection::TokenToCurrency, token_in)
    }

    /// Quotes selling `currency_in` for token.
    ///
    /// # Errors
    ///
    /// See [`quote_swap`](Self::quote_swap).
    pub fn quote_eth_to_token(
        &self,
        reserves: &Reserves,
        currency_in: Amount,
    ) -> Result<SwapQuote> {
        self.quote_swap(reserves, SwapDirection::CurrencyToToken, currency_in)
    }

    /// Currency that matches a deposit of `token_in` at the current ratio.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InsufficientReserve`] if the token reserve is zero.
    /// - [`ExchangeError::InvalidAmount`] if the result exceeds `u128`.
    pub fn required_currency(
        &self,
        reserves: &Reserves,
        token_in: Amount,
        rounding: Rounding,
    ) -> Result<Amount> {
        if reserves.token().is_zero() {
            return Err(ExchangeError::InsufficientReserve("pool has no liquidity"));
        }
        mul_div(
            token_in.get(),
            reserves.currency().get(),
            reserves.token().get(),
            rounding,
        )
        .map(Amount::new)
        .ok_or(ExchangeError::InvalidAmount("deposit out of range"))
    }

    /// Prices a deposit of both assets against the current pool.
    ///
    /// `currency_in` must lie in
    /// `[⌊required⌋ − tolerance, ⌈required⌉ + tolerance]`.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidAmount`] if either amount is zero or no
    ///   share would be minted.
    /// - [`ExchangeError::InsufficientReserve`] if the pool is drained.
    /// - [`ExchangeError::RatioMismatch`] if `currency_in` is outside the
    ///   accepted window.
    pub fn quote_deposit(
        &self,
        reserves: &Reserves,
        total_shares: Shares,
        token_in: Amount,
        currency_in: Amount,
        tolerance: Amount,
    ) -> Result<LiquidityChange> {
        if token_in.is_zero() || currency_in.is_zero() {
            return Err(ExchangeError::InvalidAmount("deposit requires both assets"));
        }
        if total_shares.is_zero() || reserves.is_depleted() {
            return Err(ExchangeError::InsufficientReserve("pool has been drained"));
        }

        let floor = self.required_currency(reserves, token_in, Rounding::Down)?;
        let ceil = self.required_currency(reserves, token_in, Rounding::Up)?;
        let expected_min = floor.checked_sub(&tolerance).unwrap_or(Amount::ZERO);
        let expected_max = ceil.checked_add(&tolerance).unwrap_or(Amount::MAX);
        if currency_in < expected_min || currency_in > expected_max {
            return Err(ExchangeError::RatioMismatch {
                expected_min,
                expected_max,
                provided: currency_in,
            });
        }

        let total = total_shares.get();
        let by_token = mul_div(total, token_in.get(), reserves.token().get(), Rounding::Down);
        let by_currency = mul_div(
            total,
            currency_in.get(),
            reserves.currency().get(),
            Rounding::Down,
        );
        let (Some(by_token), Some(by_currency)) = (by_token, by_currency) else {
            return Err(ExchangeError::InvalidAmount("deposit out of range"));
        };
        let minted = core::cmp::min(by_token, by_currency);
        if minted == 0 {
            return Err(ExchangeError::InvalidAmount(
                "deposit too small to mint shares",
            ));
        }

        LiquidityChange::deposit(token_in, currency_in, Shares::new(minted))
    }

    /// Prices burning `shares` out of a provider holding `balance`.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidAmount`] if `shares` is zero.
    /// - [`ExchangeError::InsufficientShares`] if `shares` exceeds
    ///   `balance` or the total supply.
    /// - [`ExchangeError::ZeroOutput`] if both payouts floor to zero.
    pub fn quote_withdrawal(
        &self,
        reserves: &Reserves,
        total_shares: Shares,
        shares: Shares,
        balance: Shares,
    ) -> Result<LiquidityChange> {
        if shares.is_zero() {
            return Err(ExchangeError::InvalidAmount("withdrawal must burn shares"));
        }
        if shares > balance {
            return Err(ExchangeError::InsufficientShares {
                requested: shares,
                available: balance,
            });
        }
        if shares > total_shares {
            return Err(ExchangeError::InsufficientShares {
                requested: shares,
                available: total_shares,
            });
        }

        let share_of = |reserve: Amount| {
            mul_div(
                reserve.get(),
                shares.get(),
                total_shares.get(),
                Rounding::Down,
            )
            .map(Amount::new)
            .ok_or(ExchangeError::InvalidAmount("withdrawal out of range"))
        };
        let token_out = share_of(reserves.token())?;
        let currency_out = share_of(reserves.currency())?;
        if token_out.is_zero() && currency_out.is_zero() {
            return Err(ExchangeError::ZeroOutput);
        }

        LiquidityChange::withdrawal(token_out, currency_out, shares)
    }

    /// Baseline shares minted by the seeding deposit.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::InvalidAmount`] if either amount is zero or the
    /// policy grants no shares.
    pub fn initial_shares(
        policy: InitialShares,
        token: Amount,
        currency: Amount,
    ) -> Result<Shares> {
        if token.is_zero() || currency.is_zero() {
            return Err(ExchangeError::InvalidAmount(
                "initial deposit requires both assets",
            ));
        }
        let shares = policy.baseline(token, currency);
        if shares.is_zero() {
            return Err(ExchangeError::InvalidAmount(
                "initial deposit too small to mint shares",
            ));
        }
        Ok(shares)
    }

    /// Currency per token at the current reserves, for display.
    ///
    /// `None` when the token reserve is empty.
    #[must_use]
    pub fn spot_price(reserves: &Reserves) -> Option<f64> {
        if reserves.token().is_zero() {
            return None;
        }
        Some(reserves.currency().get() as f64 / reserves.token().get() as f64)
    }
}
