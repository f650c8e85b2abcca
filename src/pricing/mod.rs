//! Swap and liquidity quoting.
//!
//! [`PricingEngine`] turns a reserve snapshot and a requested trade into a
//! [`SwapQuote`](crate::domain::SwapQuote) or a
//! [`LiquidityChange`](crate::domain::LiquidityChange) without touching any
//! state.

mod engine;

pub use engine::PricingEngine;
