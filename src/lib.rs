//! # dex-exchange
//!
//! A single-pool constant-product exchange between a token and the native
//! currency. Liquidity providers deposit both assets at the current ratio
//! and receive shares; traders swap one asset for the other against the
//! reserves, paying a fee that stays in the pool.
//!
//! The crate is a library: every operation takes an explicit caller and a
//! [`Settlement`](traits::Settlement) backend that moves the caller's own
//! balances, and returns a typed receipt or an
//! [`ExchangeError`](error::ExchangeError).
//!
//! # Quick Start
//!
//! ```rust
//! use dex_exchange::prelude::*;
//!
//! let alice = AccountId::from_bytes([0xa1; 20]);
//! let bob = AccountId::from_bytes([0xb0; 20]);
//!
//! // 1. Fund two callers in an in-memory host
//! let mut host = InMemoryBalances::new();
//! for who in [alice, bob] {
//!     host.fund(who, Holdings::new(Amount::new(10_000), Amount::new(10_000)))
//!         .expect("funded");
//! }
//!
//! // 2. Seed the pool (30 bp fee, geometric-mean share baseline)
//! let mut dex = Exchange::new(ExchangeConfig::default());
//! let init = dex
//!     .init(&mut host, alice, Amount::new(1_000), Amount::new(1_000))
//!     .expect("initialized");
//! assert_eq!(init.shares_minted, Shares::new(1_000));
//!
//! // 3. Sell 100 tokens for currency
//! let quote = dex
//!     .swap_token_to_eth(&mut host, bob, Amount::new(100))
//!     .expect("swap succeeded");
//! assert_eq!(quote.output_amount(), Amount::new(90));
//! assert_eq!(dex.reserves(), Reserves::new(Amount::new(1_100), Amount::new(910)));
//!
//! // 4. Withdraw everything
//! let out = dex.withdraw(&mut host, alice, Shares::new(1_000)).expect("withdrawn");
//! assert_eq!(out.token, Amount::new(1_100));
//! assert_eq!(dex.total_shares(), Shares::ZERO);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │     Caller       │  init / swap / provide_liquidity / withdraw
//! └────────┬─────────┘
//!          │ (caller, amounts, &mut Settlement)
//!          ▼
//! ┌──────────────────┐
//! │ Exchange facade  │  stage → settle → commit, one mutex per pool
//! └──┬─────┬──────┬──┘
//!    │     │      │
//!    ▼     ▼      ▼
//! Pricing  Ledger  Settlement
//! Engine   (reserves, (host balances,
//! (quotes)  shares)    atomic transfer)
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`FeeRate`](domain::FeeRate), [`SwapQuote`](domain::SwapQuote), receipts |
//! | [`math`] | Checked arithmetic and 256-bit ratio helpers |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig), TOML loading |
//! | [`pricing`] | [`PricingEngine`](pricing::PricingEngine): swap, deposit, withdrawal quotes |
//! | [`ledger`] | [`ReserveLedger`](ledger::ReserveLedger) and [`LiquidityAccount`](ledger::LiquidityAccount) |
//! | [`traits`] | [`Settlement`](traits::Settlement) host seam |
//! | [`balances`] | [`InMemoryBalances`](balances::InMemoryBalances) backend |
//! | [`exchange`] | [`Exchange`](exchange::Exchange) and [`SharedExchange`](exchange::SharedExchange) |
//! | [`error`] | [`ExchangeError`](error::ExchangeError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! Operations emit [`tracing`] events: `info` for committed operations,
//! `debug` for rejections, `warn` if a swap would break the reserve
//! invariant. Install any subscriber to see them.

pub mod balances;
pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod pricing;
pub mod traits;
