/// Prime modulus used by [`Mint`](crate::modint::Mint).
pub const MOD: u64 = 1_000_000_007;

/// Sentinel for "unreachable" distances; `INF + INF` still fits in an `i64`.
pub const INF: i64 = 1_000_000_000_000_000_000;

/// Preallocation bound for per-element tables.
pub const N: usize = 200_005;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inf_sum_does_not_overflow() {
        assert!(INF.checked_add(INF).is_some());
        assert!(INF.checked_mul(10).is_none());
    }

    #[test]
    fn mod_fits_in_u32() {
        assert!(MOD < u32::MAX as u64);
        assert!((MOD - 1).checked_mul(MOD - 1).is_some());
    }
}
