/// Greatest common divisor by Euclid's algorithm.
///
/// Negative inputs follow the sign rules of `%` and are not normalised.
pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple, dividing before multiplying.
///
/// # Panics
/// When both `a` and `b` are zero.
pub fn lcm(a: i64, b: i64) -> i64 {
    (a / gcd(a, b)) * b
}

/// [`lcm`] that returns `None` instead of dividing by zero or overflowing.
pub fn checked_lcm(a: i64, b: i64) -> Option<i64> {
    let g = gcd(a, b);
    if g == 0 {
        return None
    }
    (a / g).checked_mul(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_small() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(17, 13), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn lcm_small() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(21, 6), 42);
        assert_eq!(lcm(7, 1), 7);
        assert_eq!(lcm(0, 3), 0);
    }

    #[test]
    fn lcm_divides_first() {
        // a * b overflows, the result does not
        let a = 3_000_000_000_i64 * 2;
        let b = 3_000_000_000_i64 * 3;
        assert_eq!(lcm(a, b), 18_000_000_000);
    }

    #[test]
    #[should_panic]
    fn lcm_of_zeros_panics() {
        lcm(0, 0);
    }

    #[test]
    fn checked_lcm_edges() {
        assert_eq!(checked_lcm(0, 0), None);
        assert_eq!(checked_lcm(i64::MAX, i64::MAX - 1), None);
        assert_eq!(checked_lcm(4, 6), Some(12));
    }
}
