//! 256-bit intermediates for ratio math on `u128` amounts.
//!
//! Reserve products and `a × b / c` ratios overflow `u128` long before
//! their results do. These helpers widen to [`U256`], divide with an
//! explicit [`Rounding`], and only fail when the final value does not fit.

use primitive_types::U256;

use crate::domain::Rounding;

/// Computes `a × b / denominator` without intermediate overflow.
///
/// Returns `None` if `denominator` is zero or the quotient exceeds
/// `u128::MAX`.
///
/// # Examples
///
/// ```
/// use dex_exchange::domain::Rounding;
/// use dex_exchange::math::mul_div;
///
/// assert_eq!(mul_div(u128::MAX, 2, 4, Rounding::Down), Some(u128::MAX / 2));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Some(4));
/// assert_eq!(mul_div(1, 1, 0, Rounding::Down), None);
/// ```
#[must_use]
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    div_wide(U256::from(a) * U256::from(b), U256::from(denominator), rounding)
}

/// Divides a 256-bit numerator by a 256-bit denominator, narrowing to
/// `u128`. `None` on a zero denominator or an oversized quotient.
#[must_use]
pub fn div_wide(numerator: U256, denominator: U256, rounding: Rounding) -> Option<u128> {
    if denominator.is_zero() {
        return None;
    }
    let (mut q, r) = numerator.div_mod(denominator);
    if rounding.is_up() && !r.is_zero() {
        q = q.checked_add(U256::one())?;
    }
    narrow(q)
}

/// Exact product of two `u128` values.
#[must_use]
pub fn product(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Floor square root of `a × b`: the geometric mean of two amounts.
///
/// Always fits in `u128` because `√(2²⁵⁶) = 2¹²⁸`.
#[must_use]
pub fn geometric_mean(a: u128, b: u128) -> u128 {
    isqrt(product(a, b)).low_u128()
}

/// Integer square root via Newton's method.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return n;
    }
    let mut x = n;
    // ceil(n / 2) without the n + 1 overflow at U256::MAX
    let mut y = (n >> 1) + (n & U256::one());
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x
}

fn narrow(value: U256) -> Option<u128> {
    if value > U256::from(u128::MAX) {
        None
    } else {
        Some(value.low_u128())
    }
}
