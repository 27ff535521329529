//! Checked multiply-then-divide.

use crate::domain::Rounding;

/// Computes `a * b / c` with an explicit rounding direction.
///
/// Returns `None` if `c` is zero or if `a * b` overflows `u128`.
///
/// # Examples
///
/// ```
/// use puddle_amm::domain::Rounding;
/// use puddle_amm::math::mul_div;
///
/// assert_eq!(mul_div(500, 1000, 1000, Rounding::Down), Some(500));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Some(4));
/// ```
#[must_use]
pub const fn mul_div(a: u128, b: u128, c: u128, rounding: Rounding) -> Option<u128> {
    if c == 0 {
        return None;
    }
    let product = match a.checked_mul(b) {
        Some(p) => p,
        None => return None,
    };
    let q = product / c;
    match rounding {
        Rounding::Down => Some(q),
        Rounding::Up => {
            if product % c != 0 {
                Some(q + 1)
            } else {
                Some(q)
            }
        }
    }
}
