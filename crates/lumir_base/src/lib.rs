//! Primitives for Vietnamese-alphabet numerology.
//!
//! This crate provides:
//! - The letter-to-code table covering A–Z and every Vietnamese variant
//! - Word-sensitive vowel/consonant classification (the Y rule)
//! - Digit reduction with master-number policies
//! - `DD/MM/YYYY` dates, birth-date reductions and the reference date
//!
//! Everything here is pure and allocation-light; the index formulas built on
//! these primitives live in `lumir_engine`.

pub mod birth;
pub mod date;
pub mod error;
pub mod letters;
pub mod name;
pub mod reduce;

pub use birth::{BirthDateProfile, ReducedComponents};
pub use date::{
    CalendarDate, DMY_FORMAT, ReferenceDate, ReferenceSource, VIETNAM_UTC_OFFSET_SECS,
};
pub use error::DateError;
pub use letters::{
    LetterClass, VIETNAMESE_LETTERS, base_letter, classify, is_vowel_letter, is_y_letter,
    letter_code,
};
pub use name::{Letter, NameProfile, WordPart, decode, normalize_name};
pub use reduce::{
    ALL_POLICIES, MASTER_NUMBERS, ReductionPolicy, decimal_digits, digit_sum, is_master, reduce,
};
