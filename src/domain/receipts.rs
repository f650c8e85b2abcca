//! Results returned to callers of the liquidity operations.

use core::fmt;

use super::{Amount, Shares};

/// Outcome of `Init`: the seeded reserves and the baseline share grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InitReceipt {
    /// Token deposited.
    pub token: Amount,
    /// Currency deposited.
    pub currency: Amount,
    /// Shares credited to the initializer.
    pub shares_minted: Shares,
}

/// Outcome of `ProvideLiquidity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositReceipt {
    /// Token deposited.
    pub token: Amount,
    /// Currency deposited.
    pub currency: Amount,
    /// Shares credited to the provider.
    pub shares_minted: Shares,
}

/// Outcome of `Withdraw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalReceipt {
    /// Shares burned.
    pub shares_burned: Shares,
    /// Token paid out.
    pub token: Amount,
    /// Currency paid out.
    pub currency: Amount,
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(token={}, currency={}, minted={})",
            self.token, self.currency, self.shares_minted
        )
    }
}

impl fmt::Display for WithdrawalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(burned={}, token={}, currency={})",
            self.shares_burned, self.token, self.currency
        )
    }
}
