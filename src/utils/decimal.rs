//! Decimal arithmetic helpers.
//!
//! All prices and amounts are `BigDecimal`. Zero doubles as the "unknown"
//! value, so helpers here never fail and never panic.

use bigdecimal::BigDecimal;
use num_traits::Zero;
use once_cell::sync::Lazy;

/// 2, used for averaging (volume) and doubling (liquidity).
pub(crate) static TWO: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(2));

/// Divide `numerator` by `denominator`, returning zero when the divisor is zero.
///
/// Any divisor that comes from stored data must go through this helper.
#[inline]
pub fn safe_div(numerator: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
    if denominator.is_zero() {
        BigDecimal::zero()
    } else {
        numerator / denominator
    }
}
