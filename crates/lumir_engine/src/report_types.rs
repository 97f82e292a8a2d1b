//! Types for the numerology report.
//!
//! Serialized field names are the JSON contract of the numerology service
//! and must not change.

use serde::{Deserialize, Serialize};

/// Whether a karmic debt number (13, 14, 16, 19) shows up in the birth date
/// digits or the name total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KarmicDebt {
    #[serde(rename = "Có Karmic Debt")]
    Present,
    #[serde(rename = "Không có Karmic Debt")]
    Absent,
}

impl KarmicDebt {
    /// Label as serialized.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Present => "Có Karmic Debt",
            Self::Absent => "Không có Karmic Debt",
        }
    }
}

/// Generation cohort by birth year (societal adaptability index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generation {
    /// Born 1981–1996.
    #[serde(rename = "Gen Y (Millennials) - Cân bằng công việc-cuộc sống, công nghệ")]
    GenY,
    /// Born 1997–2012.
    #[serde(rename = "Gen Z - Công nghệ số, đa dạng, thay đổi nhanh")]
    GenZ,
    #[serde(rename = "Khác")]
    Other,
}

impl Generation {
    /// Label as serialized.
    pub const fn label(self) -> &'static str {
        match self {
            Self::GenY => "Gen Y (Millennials) - Cân bằng công việc-cuộc sống, công nghệ",
            Self::GenZ => "Gen Z - Công nghệ số, đa dạng, thay đổi nhanh",
            Self::Other => "Khác",
        }
    }
}

/// Four milestone numbers from pairwise sums of the reduced birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestonePhase {
    /// Month + day.
    pub milestone_1: u32,
    /// Day + year.
    pub milestone_2: u32,
    /// Milestone 1 + milestone 2.
    pub milestone_3: u32,
    /// Month + year.
    pub milestone_4: u32,
}

/// Four challenge numbers from differences of the single-digit birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// |day - month|
    pub challenge_1: u32,
    /// |day - year|
    pub challenge_2: u32,
    /// |challenge 1 - challenge 2|
    pub challenge_3: u32,
    /// |month - year|
    pub challenge_4: u32,
}

/// Personal year and day relative to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentSignals {
    pub personal_year: u32,
    pub personal_day: u32,
}

/// The full set of indices for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyReport {
    /// Date of birth as `DD/MM/YYYY`.
    pub day_of_birth: String,
    /// Reference date actually used, as `DD/MM/YYYY`.
    pub current_date: String,
    pub life_path: u32,
    pub life_purpose: u32,
    pub balance: u32,
    pub soul: u32,
    pub personality: u32,
    pub birth_day: u32,
    pub subconscious_strength: u32,
    pub maturity: u32,
    /// Digits 1..=9 absent from the name, ascending.
    pub missing_aspects: Vec<u32>,
    pub shadow_challenge_code: KarmicDebt,
    /// Most frequent digits in the name, in order of first appearance.
    pub passion: Vec<u32>,
    pub societal_adaptability_index: Generation,
    pub emotional_response_style: u32,
    #[serde(alias = "link_connection")]
    pub lifepath_life_purpose_link: u32,
    pub soul_personality_link: u32,
    pub milestone_phase: MilestonePhase,
    pub challenge: Challenge,
    pub rational_thinking: u32,
    pub age_milestones: [u32; 4],
    pub alignment_signals: AlignmentSignals,
}
