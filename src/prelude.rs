//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use dex_exchange::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, Asset, BasisPoints, DepositReceipt, FeeRate, Holdings, InitReceipt,
    Reserves, Shares, SwapDirection, SwapQuote, WithdrawalReceipt,
};

pub use crate::balances::InMemoryBalances;
pub use crate::config::{ExchangeConfig, InitialShares};
pub use crate::error::{ExchangeError, Result};
pub use crate::exchange::{Exchange, PoolState, SharedExchange};
pub use crate::traits::{Settlement, Transfer};
