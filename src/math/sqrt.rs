//! Integer square root.

/// Integer square root via Newton's method.
///
/// Returns the largest `r` such that `r * r <= n`.
///
/// # Examples
///
/// ```
/// use puddle_amm::math::isqrt;
///
/// assert_eq!(isqrt(10_000), 100);
/// assert_eq!(isqrt(99), 9);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_one() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
    }

    #[test]
    fn perfect_squares() {
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(10_000), 100);
        assert_eq!(isqrt(1_000_000_000_000), 1_000_000);
    }

    #[test]
    fn floors_between_squares() {
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(99), 9);
        assert_eq!(isqrt(101), 10);
    }

    #[test]
    fn large_values() {
        // floor(sqrt(u128::MAX)) = 2^64 - 1
        assert_eq!(isqrt(u128::MAX), u64::MAX as u128);
    }

    #[test]
    fn result_squared_bounds_input() {
        for n in [7u128, 50, 12_345, 987_654_321, 1 << 100] {
            let r = isqrt(n);
            assert!(r * r <= n);
            assert!((r + 1).checked_mul(r + 1).map_or(true, |sq| sq > n));
        }
    }
}
