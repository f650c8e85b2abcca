//! Mutable pool state.
//!
//! [`ReserveLedger`] owns the reserves and the share supply;
//! [`LiquidityAccount`] owns who holds those shares. Both reject invalid
//! changes without partial mutation.

mod liquidity_account;
mod reserve_ledger;

pub use liquidity_account::LiquidityAccount;
pub use reserve_ledger::ReserveLedger;
