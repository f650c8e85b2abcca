//! Priced swap, produced by the pricing engine and consumed by the facade.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::ExchangeError;

/// A fully priced swap.
///
/// Produced by [`PricingEngine`](crate::pricing::PricingEngine) from a
/// reserve snapshot and consumed by the same operation that asked for it;
/// the facade also returns it to the caller as the swap receipt.
///
/// # Invariants
///
/// - `input_amount > 0` and `output_amount > 0`.
/// - `fee_amount < input_amount`.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::{Amount, SwapDirection, SwapQuote};
///
/// let q = SwapQuote::new(
///     SwapDirection::TokenToCurrency,
///     Amount::new(100),
///     Amount::new(90),
///     Amount::new(1),
/// );
/// assert!(q.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapQuote {
    direction: SwapDirection,
    input_amount: Amount,
    output_amount: Amount,
    fee_amount: Amount,
}

impl SwapQuote {
    /// Creates a quote, validating its invariants.
    ///
    /// # Errors
    ///
    /// - [`ExchangeError::InvalidAmount`] if `input_amount` is zero or the
    ///   fee is not below the input.
    /// - [`ExchangeError::ZeroOutput`] if `output_amount` is zero.
    pub const fn new(
        direction: SwapDirection,
        input_amount: Amount,
        output_amount: Amount,
        fee_amount: Amount,
    ) -> crate::error::Result<Self> {
        if input_amount.is_zero() {
            return Err(ExchangeError::InvalidAmount("swap input must be positive"));
        }
        if output_amount.is_zero() {
            return Err(ExchangeError::ZeroOutput);
        }
        if fee_amount.get() >= input_amount.get() {
            return Err(ExchangeError::InvalidAmount("fee must be below the input"));
        }
        Ok(Self {
            direction,
            input_amount,
            output_amount,
            fee_amount,
        })
    }

    /// Swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Amount paid in by the trader (fee included).
    pub const fn input_amount(&self) -> Amount {
        self.input_amount
    }

    /// Amount paid out to the trader.
    pub const fn output_amount(&self) -> Amount {
        self.output_amount
    }

    /// Part of the input retained by the pool as a fee.
    pub const fn fee_amount(&self) -> Amount {
        self.fee_amount
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote({}: in={}, out={}, fee={})",
            self.direction, self.input_amount, self.output_amount, self.fee_amount
        )
    }
}
