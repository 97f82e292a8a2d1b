//! Index formulas.
//!
//! Each index is a pure function of the decoded name, the birth date profile
//! and (for the alignment signals) the reference date. [`ChartContext`]
//! computes the numbers several indices share once and threads them through.

use std::ops::RangeInclusive;

use lumir_base::{
    BirthDateProfile, CalendarDate, LetterClass, NameProfile, ReductionPolicy, decimal_digits,
    digit_sum, is_master, reduce,
};

use crate::report_types::{
    AlignmentSignals, Challenge, Generation, KarmicDebt, MilestonePhase, NumerologyReport,
};

/// Karmic debt numbers.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// Birth years of Generation Y.
pub const GEN_Y_YEARS: RangeInclusive<u32> = 1981..=1996;

/// Birth years of Generation Z.
pub const GEN_Z_YEARS: RangeInclusive<u32> = 1997..=2012;

/// Number of leading name characters read by the emotional response style.
pub const EMOTIONAL_PREFIX_LEN: usize = 4;

/// Age milestones start at `36 - life_path`, or here for master life paths.
const MASTER_FIRST_MILESTONE: u32 = 32;

const KEEP_ALL: ReductionPolicy = ReductionPolicy::Master11_22_33;
const KEEP_11_22: ReductionPolicy = ReductionPolicy::Master11_22;
const SINGLE: ReductionPolicy = ReductionPolicy::SingleDigit;

/// Sum of master-preserving reductions of the dd/mm/yyyy components, reduced.
pub fn life_path(birth: &BirthDateProfile) -> u32 {
    let r = birth.with_masters;
    reduce(r.day + r.month + r.year, KEEP_ALL)
}

/// Reduced sum of every letter code in the name.
pub fn life_purpose(name: &NameProfile) -> u32 {
    reduce(name.code_sum(), KEEP_ALL)
}

/// Single-digit reduction of the first letter of every word.
pub fn balance(name: &NameProfile) -> u32 {
    let sum = name.words().iter().map(|w| w.first_code()).sum();
    reduce(sum, SINGLE)
}

/// Per-word reduced sums of one letter class, summed and reduced again.
fn class_number(name: &NameProfile, class: LetterClass) -> u32 {
    let sum = name
        .words()
        .iter()
        .map(|w| reduce(w.class_sum(class), KEEP_ALL))
        .sum();
    reduce(sum, KEEP_ALL)
}

/// Soul number, from vowels.
pub fn soul(name: &NameProfile) -> u32 {
    class_number(name, LetterClass::Vowel)
}

/// Personality number, from consonants.
pub fn personality(name: &NameProfile) -> u32 {
    class_number(name, LetterClass::Consonant)
}

pub fn birth_day(birth: &BirthDateProfile) -> u32 {
    reduce(birth.date.day, KEEP_ALL)
}

/// Which of 1..=9 occur in the decimal digits of the name's letter codes.
fn present_digits(name: &NameProfile) -> [bool; 10] {
    let mut present = [false; 10];
    for &code in name.flat_codes() {
        for d in decimal_digits(code as u32) {
            present[d as usize] = true;
        }
    }
    present
}

/// Digits 1..=9 that never occur in the name, ascending.
pub fn missing_aspects(name: &NameProfile) -> Vec<u32> {
    let present = present_digits(name);
    (1..=9u32).filter(|&d| !present[d as usize]).collect()
}

pub fn subconscious_strength(missing: &[u32]) -> u32 {
    9 - missing.len() as u32
}

pub fn maturity(life_path: u32, life_purpose: u32) -> u32 {
    reduce(life_path + life_purpose, KEEP_ALL)
}

/// Karmic debt when the birth-date digit total or the name total is 13, 14,
/// 16 or 19 (unreduced).
pub fn karmic_debt(birth: &BirthDateProfile, name: &NameProfile) -> KarmicDebt {
    let hit = |n: u32| KARMIC_DEBT_NUMBERS.contains(&n);
    if hit(birth.digit_total()) || hit(name.code_sum()) {
        KarmicDebt::Present
    } else {
        KarmicDebt::Absent
    }
}

/// The most frequent digits of the name's letter codes, in order of first
/// appearance. Empty when no letter maps.
pub fn passion(name: &NameProfile) -> Vec<u32> {
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for &code in name.flat_codes() {
        for d in decimal_digits(code as u32) {
            match counts.iter_mut().find(|(digit, _)| *digit == d) {
                Some((_, n)) => *n += 1,
                None => counts.push((d, 1)),
            }
        }
    }
    let Some(max) = counts.iter().map(|&(_, n)| n).max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter(|&(_, n)| n == max)
        .map(|(d, _)| d)
        .collect()
}

pub fn generation(birth_year: u32) -> Generation {
    if GEN_Y_YEARS.contains(&birth_year) {
        Generation::GenY
    } else if GEN_Z_YEARS.contains(&birth_year) {
        Generation::GenZ
    } else {
        Generation::Other
    }
}

/// First four characters of the whitespace-stripped name, reduced keeping
/// 11 and 22 only.
pub fn emotional_response_style(name: &NameProfile) -> u32 {
    reduce(name.leading_code_sum(EMOTIONAL_PREFIX_LEN), KEEP_11_22)
}

pub fn lifepath_life_purpose_link(life_path: u32, life_purpose: u32) -> u32 {
    reduce(life_path.abs_diff(life_purpose), KEEP_11_22)
}

/// A master soul number is collapsed by one digit-sum step first; the
/// personality number is used as is.
pub fn soul_personality_link(soul: u32, personality: u32) -> u32 {
    let soul = if is_master(soul) { digit_sum(soul) } else { soul };
    reduce(soul.abs_diff(personality), SINGLE)
}

pub fn milestone_phase(birth: &BirthDateProfile) -> MilestonePhase {
    let m = birth.reduced(KEEP_11_22);
    let milestone_1 = reduce(m.month + m.day, KEEP_11_22);
    let milestone_2 = reduce(m.day + m.year, KEEP_11_22);
    MilestonePhase {
        milestone_1,
        milestone_2,
        milestone_3: reduce(milestone_1 + milestone_2, KEEP_11_22),
        milestone_4: reduce(m.month + m.year, KEEP_11_22),
    }
}

/// Differences of the single-digit birth components; not reduced further.
pub fn challenge(birth: &BirthDateProfile) -> Challenge {
    let r = birth.no_master;
    let challenge_1 = r.day.abs_diff(r.month);
    let challenge_2 = r.day.abs_diff(r.year);
    Challenge {
        challenge_1,
        challenge_2,
        challenge_3: challenge_1.abs_diff(challenge_2),
        challenge_4: r.month.abs_diff(r.year),
    }
}

/// Birth day plus the letter codes of the given (last) name.
pub fn rational_thinking(birth: &BirthDateProfile, name: &NameProfile) -> u32 {
    match name.given_name() {
        Some(given) => reduce(birth.date.day + given.code_sum(), KEEP_ALL),
        None => 0,
    }
}

pub fn age_milestones(life_path: u32) -> [u32; 4] {
    let start = if is_master(life_path) {
        MASTER_FIRST_MILESTONE
    } else {
        36u32.saturating_sub(life_path)
    };
    [start, start + 9, start + 18, start + 27]
}

/// Personal year and day as of `reference`.
///
/// The personal year counts from the last birthday: before this year's
/// birthday the reference year is taken as one less. The personal day has
/// no such adjustment.
pub fn alignment_signals(birth: &BirthDateProfile, reference: &CalendarDate) -> AlignmentSignals {
    let mut year_sum = birth.date.day + birth.date.month + reference.year;
    if reference.precedes_in_year(&birth.date) {
        year_sum -= 1;
    }
    let personal_year = reduce(year_sum, KEEP_11_22);
    let personal_day = reduce(reference.day + reference.month + personal_year, KEEP_11_22);
    AlignmentSignals {
        personal_year,
        personal_day,
    }
}

/// Inputs of one report plus the numbers several indices share.
#[derive(Debug, Clone)]
pub struct ChartContext {
    pub birth: BirthDateProfile,
    pub reference: CalendarDate,
    pub name: NameProfile,
    pub life_path: u32,
    pub life_purpose: u32,
    pub soul: u32,
    pub personality: u32,
}

impl ChartContext {
    pub fn new(birth: BirthDateProfile, name: NameProfile, reference: CalendarDate) -> Self {
        Self {
            life_path: life_path(&birth),
            life_purpose: life_purpose(&name),
            soul: soul(&name),
            personality: personality(&name),
            birth,
            reference,
            name,
        }
    }

    /// Evaluate every index.
    pub fn report(&self) -> NumerologyReport {
        let missing = missing_aspects(&self.name);
        NumerologyReport {
            day_of_birth: self.birth.date.to_string(),
            current_date: self.reference.to_string(),
            life_path: self.life_path,
            life_purpose: self.life_purpose,
            balance: balance(&self.name),
            soul: self.soul,
            personality: self.personality,
            birth_day: birth_day(&self.birth),
            subconscious_strength: subconscious_strength(&missing),
            maturity: maturity(self.life_path, self.life_purpose),
            missing_aspects: missing,
            shadow_challenge_code: karmic_debt(&self.birth, &self.name),
            passion: passion(&self.name),
            societal_adaptability_index: generation(self.birth.date.year),
            emotional_response_style: emotional_response_style(&self.name),
            lifepath_life_purpose_link: lifepath_life_purpose_link(
                self.life_path,
                self.life_purpose,
            ),
            soul_personality_link: soul_personality_link(self.soul, self.personality),
            milestone_phase: milestone_phase(&self.birth),
            challenge: challenge(&self.birth),
            rational_thinking: rational_thinking(&self.birth, &self.name),
            age_milestones: age_milestones(self.life_path),
            alignment_signals: alignment_signals(&self.birth, &self.reference),
        }
    }
}
