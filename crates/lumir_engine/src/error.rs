//! Error types for report computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use lumir_base::DateError;

/// Errors that abort a report. Everything else degrades to a defined value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumerologyError {
    /// The date of birth is not a `DD/MM/YYYY` calendar date.
    InvalidDateOfBirth(DateError),
}

impl Display for NumerologyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateOfBirth(e) => write!(f, "invalid date of birth: {e}"),
        }
    }
}

impl Error for NumerologyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDateOfBirth(e) => Some(e),
        }
    }
}
