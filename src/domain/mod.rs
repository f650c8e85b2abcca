//! Domain value types used throughout the exchange.
//!
//! Amounts, shares, fee rates, caller identities, reserve snapshots, swap
//! quotes, and the receipts returned by each operation. Quantities are
//! newtypes over `u128` with checked arithmetic.

mod account_id;
mod amount;
mod asset;
mod basis_points;
mod fee_rate;
mod holdings;
mod liquidity_change;
mod receipts;
mod reserves;
mod rounding;
mod shares;
mod swap_quote;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset::{Asset, SwapDirection};
pub use basis_points::BasisPoints;
pub use fee_rate::FeeRate;
pub use holdings::Holdings;
pub use liquidity_change::LiquidityChange;
pub use receipts::{DepositReceipt, InitReceipt, WithdrawalReceipt};
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_quote::SwapQuote;
