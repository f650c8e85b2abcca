//! Trait seams between the exchange and its host.
//!
//! [`Settlement`] is the only external dependency of the exchange: it moves
//! the caller's token and currency as described by a [`Transfer`].

mod settlement;

pub use settlement::{Settlement, Transfer};
