use std::collections::BTreeSet;

use contest_template::num::{gcd, lcm};
use contest_template::ordered_set::OrderedSet;
use contest_template::rng::Rng;
use proptest::prelude::*;

proptest! {
    #[test]
    fn gcd_is_symmetric(a in 0_i64..1_000_000_000_000, b in 0_i64..1_000_000_000_000) {
        prop_assert_eq!(gcd(a, b), gcd(b, a));
    }

    #[test]
    fn gcd_is_the_greatest_common_divisor(a in 1_i64..1_000_000_000, b in 1_i64..1_000_000_000) {
        let g = gcd(a, b);
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
        // nothing larger divides both once g is factored out
        prop_assert_eq!(gcd(a / g, b / g), 1);
    }

    #[test]
    fn lcm_times_gcd_is_product(a in 1_i64..1_000_000_000, b in 1_i64..1_000_000_000) {
        prop_assert_eq!(lcm(a, b) as i128 * gcd(a, b) as i128, a as i128 * b as i128);
    }

    #[test]
    fn gen_range_stays_in_bounds(seed in any::<u64>(), l in -1_000_000_i64..1_000_000, len in 0_i64..1_000) {
        let mut rng = Rng::with_seed(seed);
        for _ in 0..64 {
            let v = rng.gen_range(l, l + len);
            prop_assert!(l <= v && v <= l + len);
        }
    }

    #[test]
    fn ordered_set_matches_btreeset(ops in prop::collection::vec((any::<bool>(), -50_i32..50), 0..300)) {
        let mut set = OrderedSet::new();
        let mut reference = BTreeSet::new();
        for (insert, v) in ops {
            if insert {
                prop_assert_eq!(set.insert(v), reference.insert(v));
            } else {
                prop_assert_eq!(set.remove(&v), reference.remove(&v));
            }
        }

        prop_assert_eq!(set.len(), reference.len());
        for k in -52..52 {
            prop_assert_eq!(set.order_of_key(&k), reference.range(..k).count());
            prop_assert_eq!(set.contains(&k), reference.contains(&k));
        }
        for (i, v) in reference.iter().enumerate() {
            prop_assert_eq!(set.find_by_order(i), Some(v));
        }
        prop_assert_eq!(set.find_by_order(reference.len()), None);
        prop_assert!(set.iter().eq(reference.iter()));
    }
}
