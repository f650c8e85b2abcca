//! Overflow-safe arithmetic for exchange calculations.
//!
//! [`CheckedArithmetic`] lifts the domain types' `Option`-returning
//! operations into [`ExchangeError`](crate::error::ExchangeError)s. The
//! wide helpers ([`mul_div`], [`product`], [`geometric_mean`]) evaluate
//! ratio formulas in 256-bit precision so no intermediate rounding or
//! overflow leaks into a `u128` result.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{div_wide, geometric_mean, isqrt, mul_div, product};
