//! Property-based tests for digit reduction.

use lumir_base::{ALL_POLICIES, MASTER_NUMBERS, ReductionPolicy, digit_sum, reduce};
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = ReductionPolicy> {
    prop::sample::select(ALL_POLICIES.to_vec())
}

proptest! {
    /// Single-digit reduction always lands in 0..=9.
    #[test]
    fn prop_single_digit_range(n: u32) {
        prop_assert!(reduce(n, ReductionPolicy::SingleDigit) <= 9);
    }

    /// Master-preserving reduction lands on 1..=9 or a master, 0 only for 0.
    #[test]
    fn prop_master_range(n in 1u32..) {
        let r = reduce(n, ReductionPolicy::Master11_22_33);
        prop_assert!((1..=9).contains(&r) || MASTER_NUMBERS.contains(&r), "{} -> {}", n, r);
    }

    /// Reducing a terminal value changes nothing.
    #[test]
    fn prop_idempotent(n: u32, p in policy()) {
        let once = reduce(n, p);
        prop_assert_eq!(reduce(once, p), once);
    }

    /// A digit-sum step preserves the value mod 9, so single-digit reduction
    /// of a positive number is its digital root.
    #[test]
    fn prop_digital_root(n in 1u32..) {
        let expected = 1 + (n - 1) % 9;
        prop_assert_eq!(reduce(n, ReductionPolicy::SingleDigit), expected);
    }

    /// Digit sum strictly shrinks any multi-digit number.
    #[test]
    fn prop_digit_sum_shrinks(n in 10u32..) {
        prop_assert!(digit_sum(n) < n);
    }

    /// The 11/22 policy never returns 33.
    #[test]
    fn prop_master_11_22_never_33(n: u32) {
        prop_assert_ne!(reduce(n, ReductionPolicy::Master11_22), 33);
    }
}
