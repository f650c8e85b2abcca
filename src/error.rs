//! Unified error type for the exchange.
//!
//! Every fallible operation in the crate returns [`ExchangeError`]. Each
//! variant is terminal for the call that produced it: the exchange never
//! retries internally, and a failed operation leaves reserves, total
//! shares and provider balances exactly as they were before the call.

use thiserror::Error;

use crate::domain::{Amount, Asset, Shares};

/// Errors produced by pricing, ledger and facade operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// The pool has not been initialized yet.
    #[error("pool is not initialized")]
    NotInitialized,

    /// `Init` was called on a pool that has already been initialized.
    #[error("pool is already initialized")]
    AlreadyInitialized,

    /// A zero amount, or an amount whose arithmetic overflows `u128`.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The pool cannot cover a requested reserve decrease.
    #[error("insufficient reserve: {0}")]
    InsufficientReserve(&'static str),

    /// A share debit or burn exceeds the available balance.
    #[error("insufficient shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller tried to spend.
        requested: Shares,
        /// Shares actually held.
        available: Shares,
    },

    /// A deposit's currency leg does not match the current reserve ratio.
    #[error("ratio mismatch: expected currency in [{expected_min}, {expected_max}], got {provided}")]
    RatioMismatch {
        /// Smallest currency amount accepted for the token leg.
        expected_min: Amount,
        /// Largest currency amount accepted for the token leg.
        expected_max: Amount,
        /// Currency amount the caller supplied.
        provided: Amount,
    },

    /// The computed output rounds down to zero.
    #[error("computed output is zero")]
    ZeroOutput,

    /// A swap would decrease the constant product of the reserves.
    #[error("constant-product invariant violated")]
    InvariantViolation,

    /// The host refused to move the caller's external balance.
    #[error("insufficient {asset} balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Asset whose balance is short.
        asset: Asset,
        /// Amount the transfer needed.
        requested: Amount,
        /// Amount the account holds.
        available: Amount,
    },

    /// Configuration rejected during validation or parsing.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, ExchangeError>;
