//! The exchange facade.
//!
//! [`Exchange`] exposes the five pool operations over an owned state;
//! [`SharedExchange`] wraps it in a mutex for multi-threaded callers.

mod facade;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use facade::{Exchange, PoolState};
pub use shared::SharedExchange;
