//! Error types for date parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing a `DD/MM/YYYY` calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// Not `DD/MM/YYYY`, or not a real calendar date.
    Format(String),
    /// Parsed, but the year is before 1 CE.
    YearOutOfRange(i32),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(msg) => write!(f, "expected a DD/MM/YYYY date: {msg}"),
            Self::YearOutOfRange(year) => write!(f, "year {year} is out of range"),
        }
    }
}

impl Error for DateError {}

impl From<chrono::ParseError> for DateError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Format(e.to_string())
    }
}
