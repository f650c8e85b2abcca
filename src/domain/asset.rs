//! The two assets held by the pool and the two swap directions.

use core::fmt;

/// One side of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Asset {
    /// The ERC20-like token.
    Token,
    /// The native currency (ETH).
    Currency,
}

impl Asset {
    /// The other side of the pool.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Token => Self::Currency,
            Self::Currency => Self::Token,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => f.write_str("token"),
            Self::Currency => f.write_str("currency"),
        }
    }
}

/// Direction of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token, receive currency.
    TokenToCurrency,
    /// Sell currency, receive token.
    CurrencyToToken,
}

impl SwapDirection {
    /// The asset the trader pays in.
    #[must_use]
    pub const fn input(self) -> Asset {
        match self {
            Self::TokenToCurrency => Asset::Token,
            Self::CurrencyToToken => Asset::Currency,
        }
    }

    /// The asset the trader receives.
    #[must_use]
    pub const fn output(self) -> Asset {
        self.input().other()
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.input(), self.output())
    }
}
