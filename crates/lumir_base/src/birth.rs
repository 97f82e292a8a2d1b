//! Birth date components and their two reduced forms.

use crate::date::CalendarDate;
use crate::reduce::{ReductionPolicy, digit_sum, reduce};

/// Day, month and year each reduced under one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducedComponents {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl ReducedComponents {
    fn of(date: &CalendarDate, policy: ReductionPolicy) -> Self {
        Self {
            day: reduce(date.day, policy),
            month: reduce(date.month, policy),
            year: reduce(date.year, policy),
        }
    }
}

/// A birth date with both reduced variants kept side by side.
///
/// Life path reads the master-preserving components; the challenge numbers
/// read the single-digit ones. Collapsing them changes one family or the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDateProfile {
    pub date: CalendarDate,
    /// Reduced keeping 11, 22 and 33.
    pub with_masters: ReducedComponents,
    /// Reduced to a single digit.
    pub no_master: ReducedComponents,
}

impl BirthDateProfile {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            date,
            with_masters: ReducedComponents::of(&date, ReductionPolicy::Master11_22_33),
            no_master: ReducedComponents::of(&date, ReductionPolicy::SingleDigit),
        }
    }

    /// Day, month and year reduced under an arbitrary policy.
    pub fn reduced(&self, policy: ReductionPolicy) -> ReducedComponents {
        ReducedComponents::of(&self.date, policy)
    }

    /// Sum of every decimal digit of day, month and year.
    pub fn digit_total(&self) -> u32 {
        digit_sum(self.date.day) + digit_sum(self.date.month) + digit_sum(self.date.year)
    }
}
