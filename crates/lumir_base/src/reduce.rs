//! Digit reduction with optional master-number preservation.
//!
//! A reduction repeatedly replaces a number with the sum of its decimal
//! digits until the active [`ReductionPolicy`] accepts it as terminal.

/// The master numbers: 11, 22 and 33.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// How far a number is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReductionPolicy {
    /// Reduce until the value is in 0..=9.
    SingleDigit,
    /// Stop at 0..=9, 11 or 22.
    Master11_22,
    /// Stop at 0..=9, 11, 22 or 33.
    Master11_22_33,
}

/// All policies, in order of increasing master preservation.
pub const ALL_POLICIES: [ReductionPolicy; 3] = [
    ReductionPolicy::SingleDigit,
    ReductionPolicy::Master11_22,
    ReductionPolicy::Master11_22_33,
];

impl ReductionPolicy {
    /// Master numbers this policy leaves untouched.
    pub const fn masters(self) -> &'static [u32] {
        match self {
            Self::SingleDigit => &[],
            Self::Master11_22 => &[11, 22],
            Self::Master11_22_33 => &MASTER_NUMBERS,
        }
    }

    /// Whether `n` is already a terminal value under this policy.
    pub fn is_terminal(self, n: u32) -> bool {
        n <= 9 || self.masters().contains(&n)
    }

    /// Short label used on the command line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleDigit => "single",
            Self::Master11_22 => "11-22",
            Self::Master11_22_33 => "11-22-33",
        }
    }

    /// Inverse of [`label`](Self::label).
    pub fn from_label(s: &str) -> Option<Self> {
        ALL_POLICIES.iter().copied().find(|p| p.label() == s)
    }
}

/// Sum of the base-10 digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Base-10 digits of `n`, most significant first. `0` yields `[0]`.
pub fn decimal_digits(n: u32) -> Vec<u32> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        digits.push(rest % 10);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// Reduce `n` by repeated digit summing until `policy` accepts the result.
///
/// Terminates for every input: the digit sum of any `n >= 10` is strictly
/// smaller than `n`.
pub fn reduce(n: u32, policy: ReductionPolicy) -> u32 {
    let mut n = n;
    while !policy.is_terminal(n) {
        n = digit_sum(n);
    }
    n
}

/// Whether `n` is one of 11, 22, 33.
pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sum_basic() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(2003), 5);
        assert_eq!(digit_sum(99_999), 45);
    }

    #[test]
    fn decimal_digits_order() {
        assert_eq!(decimal_digits(0), vec![0]);
        assert_eq!(decimal_digits(5), vec![5]);
        assert_eq!(decimal_digits(1975), vec![1, 9, 7, 5]);
    }

    #[test]
    fn single_digit_never_keeps_masters() {
        assert_eq!(reduce(11, ReductionPolicy::SingleDigit), 2);
        assert_eq!(reduce(22, ReductionPolicy::SingleDigit), 4);
        assert_eq!(reduce(33, ReductionPolicy::SingleDigit), 6);
        assert_eq!(reduce(1999, ReductionPolicy::SingleDigit), 1);
    }

    #[test]
    fn master_11_22_reduces_33() {
        assert_eq!(reduce(11, ReductionPolicy::Master11_22), 11);
        assert_eq!(reduce(22, ReductionPolicy::Master11_22), 22);
        assert_eq!(reduce(33, ReductionPolicy::Master11_22), 6);
    }

    #[test]
    fn master_11_22_33_keeps_all() {
        for m in MASTER_NUMBERS {
            assert_eq!(reduce(m, ReductionPolicy::Master11_22_33), m);
        }
    }

    #[test]
    fn reaches_master_through_intermediate() {
        // 2009 -> 11
        assert_eq!(reduce(2009, ReductionPolicy::Master11_22_33), 11);
        // 1993 -> 22
        assert_eq!(reduce(1993, ReductionPolicy::Master11_22), 22);
        // 1983 -> 21 -> 3
        assert_eq!(reduce(1983, ReductionPolicy::Master11_22_33), 3);
    }

    #[test]
    fn zero_stays_zero() {
        for p in ALL_POLICIES {
            assert_eq!(reduce(0, p), 0);
        }
    }

    #[test]
    fn label_round_trip() {
        for p in ALL_POLICIES {
            assert_eq!(ReductionPolicy::from_label(p.label()), Some(p));
        }
        assert_eq!(ReductionPolicy::from_label("44"), None);
    }

    #[test]
    fn master_detection() {
        assert!(is_master(11));
        assert!(is_master(33));
        assert!(!is_master(44));
        assert!(!is_master(9));
    }
}
