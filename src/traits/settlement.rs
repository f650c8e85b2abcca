//! Host seam for moving a caller's external balances.
//!
//! The exchange only tracks reserves and shares. The token and currency a
//! caller actually owns live in the host environment; every operation
//! describes the movement it needs as a [`Transfer`] and hands it to a
//! [`Settlement`] backend before committing its own state.
//!
//! # Atomicity contract
//!
//! `settle` either applies both legs of the transfer or neither. The
//! exchange calls it after all of its own checks have passed and commits
//! only on `Ok`, so a refused settlement leaves pool state untouched.

use core::fmt;

use crate::domain::{AccountId, Amount, Holdings, SwapQuote};
use crate::error::Result;

/// Asset movement between a caller and the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transfer {
    caller: AccountId,
    inbound: Holdings,
    outbound: Holdings,
}

impl Transfer {
    /// Creates a transfer with explicit legs.
    #[must_use]
    pub const fn new(caller: AccountId, inbound: Holdings, outbound: Holdings) -> Self {
        Self {
            caller,
            inbound,
            outbound,
        }
    }

    /// Caller pays the quote's input and receives its output.
    #[must_use]
    pub const fn swap(caller: AccountId, quote: &SwapQuote) -> Self {
        let direction = quote.direction();
        Self::new(
            caller,
            Holdings::only(direction.input(), quote.input_amount()),
            Holdings::only(direction.output(), quote.output_amount()),
        )
    }

    /// Caller pays both assets into the pool.
    #[must_use]
    pub const fn deposit(caller: AccountId, token: Amount, currency: Amount) -> Self {
        Self::new(caller, Holdings::new(token, currency), Holdings::ZERO)
    }

    /// Pool pays both assets out to the caller.
    #[must_use]
    pub const fn withdrawal(caller: AccountId, token: Amount, currency: Amount) -> Self {
        Self::new(caller, Holdings::ZERO, Holdings::new(token, currency))
    }

    /// Account on the other side of the pool.
    #[must_use]
    pub const fn caller(&self) -> AccountId {
        self.caller
    }

    /// Caller → pool.
    #[must_use]
    pub const fn inbound(&self) -> Holdings {
        self.inbound
    }

    /// Pool → caller.
    #[must_use]
    pub const fn outbound(&self) -> Holdings {
        self.outbound
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer({}: in={}, out={})",
            self.caller, self.inbound, self.outbound
        )
    }
}

/// Host backend that moves caller balances atomically.
///
/// # Errors
///
/// Implementations return
/// [`ExchangeError::InsufficientBalance`](crate::error::ExchangeError::InsufficientBalance)
/// when the caller cannot fund the inbound leg, and must leave every
/// balance unchanged on any `Err`.
pub trait Settlement {
    /// Applies both legs of `transfer`, or neither.
    ///
    /// # Errors
    ///
    /// Any error refuses the whole transfer.
    fn settle(&mut self, transfer: &Transfer) -> Result<()>;
}

impl<S: Settlement + ?Sized> Settlement for &mut S {
    fn settle(&mut self, transfer: &Transfer) -> Result<()> {
        (**self).settle(transfer)
    }
}
