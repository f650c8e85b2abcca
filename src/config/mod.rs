//! Exchange configuration.
//!
//! [`ExchangeConfig`] carries the immutable parameters of one pool: the
//! swap fee, the [`InitialShares`] policy for `Init`, and the currency
//! tolerance accepted on deposits. It can be built in code or loaded from
//! TOML with [`ExchangeConfig::from_toml_str`].

mod exchange_config;

pub use exchange_config::{ExchangeConfig, InitialShares};
