//! Host-side balance backends.
//!
//! [`InMemoryBalances`] implements [`Settlement`](crate::traits::Settlement)
//! over a map of caller holdings.

mod in_memory;

pub use in_memory::InMemoryBalances;
