use std::cell::RefCell;
use std::num::Wrapping;

// 6684531970241121646 is random, because I said so
const FALLBACK_SEED: u64 = 6684531970241121646;

/// Xorshift64* generator.
///
/// Construct one per component that needs randomness; use [`Rng::with_seed`]
/// for reproducible runs and [`Rng::from_clock`] otherwise.
#[derive(Clone, Debug)]
pub struct Rng(Wrapping<u64>);

impl Rng {
    /// A zero seed would lock xorshift at zero, so it is replaced.
    pub fn with_seed(seed: u64) -> Self {
        Rng(Wrapping(if seed == 0 { FALLBACK_SEED } else { seed }))
    }

    /// Seeded from the monotonic clock, mixed through a randomly keyed hasher.
    pub fn from_clock() -> Self {
        use std::collections::hash_map::RandomState;
        use std::hash::BuildHasher;
        use std::time::Instant;

        let hasher = RandomState::new();
        let now = Instant::now();

        let mut out = 0;
        let mut cnt = 0_u64;
        while out == 0 {
            cnt += 1;
            out = hasher.hash_one((now, cnt));
        }
        Rng(Wrapping(out))
    }

    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let mut n = self.0;
        debug_assert_ne!(n.0, 0);
        n ^= n >> 12;
        n ^= n << 25;
        n ^= n >> 27;
        self.0 = n;
        n.0.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Uniform in `0..bound` by rejection; `bound` must be non-zero.
    fn below(&mut self, bound: u64) -> u64 {
        let zone = u64::MAX - u64::MAX % bound;
        loop {
            let x = self.next_u64();
            if x < zone {
                return x % bound
            }
        }
    }

    /// Uniform integer in the closed range `[l, r]`.
    ///
    /// # Panics
    /// When `l > r`.
    pub fn gen_range(&mut self, l: i64, r: i64) -> i64 {
        assert!(l <= r, "empty range {l}..={r}");
        let span = (r as u64).wrapping_sub(l as u64).wrapping_add(1);
        let offset = match span {
            // the whole of i64
            0 => self.next_u64(),
            _ => self.below(span),
        };
        (l as u64).wrapping_add(offset) as i64
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, xs: &mut [T]) {
        for i in (1..xs.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            xs.swap(i, j);
        }
    }
}

thread_local! {
    static RNG: RefCell<Rng> = RefCell::new(Rng::from_clock());
}

/// Uniform integer in `[l, r]` from the clock-seeded, process-wide generator.
pub fn rand_int(l: i64, r: i64) -> i64 {
    RNG.with(|rng| rng.borrow_mut().gen_range(l, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn zero_seed_still_moves() {
        let mut rng = Rng::with_seed(0);
        assert_ne!(rng.next_u64(), rng.next_u64());
    }

    #[test]
    fn degenerate_range() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..10 {
            assert_eq!(rng.gen_range(5, 5), 5);
            assert_eq!(rng.gen_range(i64::MIN, i64::MIN), i64::MIN);
        }
    }

    #[test]
    fn full_range_does_not_panic() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..10 {
            rng.gen_range(i64::MIN, i64::MAX);
        }
    }

    #[test]
    fn roughly_uniform() {
        let mut rng = Rng::with_seed(12345);
        let mut counts = [0_u32; 6];
        for _ in 0..60_000 {
            let v = rng.gen_range(1, 6);
            counts[(v - 1) as usize] += 1;
        }
        for c in counts {
            assert!((9_000..11_000).contains(&c), "{counts:?}");
        }
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn reversed_bounds_panic() {
        Rng::with_seed(1).gen_range(3, 2);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = Rng::with_seed(99);
        let mut xs: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut xs);
        let mut sorted = xs.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn process_wide_in_bounds() {
        for _ in 0..1000 {
            let v = rand_int(-3, 3);
            assert!((-3..=3).contains(&v));
        }
    }
}
