//! Checked arithmetic that reports failures as [`ExchangeError`]s.
//!
//! The domain newtypes return `Option` from their `checked_*` methods;
//! [`CheckedArithmetic`] lifts those into the crate error type so ledger
//! code can use `?` directly.
//!
//! # Examples
//!
//! ```
//! use dex_exchange::domain::{Amount, Shares};
//! use dex_exchange::math::CheckedArithmetic;
//!
//! assert_eq!(Amount::new(1).safe_add(&Amount::new(2)), Ok(Amount::new(3)));
//! assert!(Shares::new(1).safe_sub(&Shares::new(2)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::ExchangeError;

/// Fallible addition and subtraction for quantities held by the pool.
///
/// # Contract
///
/// - No panics and no saturation: every out-of-range result is an `Err`.
/// - Addition overflow is [`ExchangeError::InvalidAmount`], matching the
///   rule that oversized inputs are rejected rather than wrapped.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// [`ExchangeError::InvalidAmount`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, ExchangeError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// - `Amount`: [`ExchangeError::InsufficientReserve`].
    /// - `Shares`: [`ExchangeError::InsufficientShares`] carrying both sides.
    fn safe_sub(&self, other: &Self) -> Result<Self, ExchangeError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, ExchangeError> {
        self.checked_add(other)
            .ok_or(ExchangeError::InvalidAmount("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, ExchangeError> {
        self.checked_sub(other)
            .ok_or(ExchangeError::InsufficientReserve("amount exceeds balance"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, ExchangeError> {
        self.checked_add(other)
            .ok_or(ExchangeError::InvalidAmount("share supply overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, ExchangeError> {
        self.checked_sub(other)
            .ok_or(ExchangeError::InsufficientShares {
                requested: *other,
                available: *self,
            })
    }
}
