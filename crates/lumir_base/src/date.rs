//! `DD/MM/YYYY` calendar dates and the as-of reference date.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, FixedOffset, NaiveDate, Utc};

use crate::error::DateError;

/// Vietnam time (ICT) is UTC+7 with no daylight saving.
pub const VIETNAM_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// chrono format string for `DD/MM/YYYY`.
pub const DMY_FORMAT: &str = "%d/%m/%Y";

/// A validated Gregorian calendar date.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Build a date, rejecting impossible day/month combinations.
    pub fn new(day: u32, month: u32, year: u32) -> Result<Self, DateError> {
        let y = i32::try_from(year).map_err(|_| DateError::Format(format!("year {year}")))?;
        let naive = NaiveDate::from_ymd_opt(y, month, day).ok_or_else(|| {
            DateError::Format(format!("{day:02}/{month:02}/{year:04} is not a calendar date"))
        })?;
        Self::from_naive(naive)
    }

    /// Parse `DD/MM/YYYY`. Single-digit day and month are accepted; the year
    /// must be exactly four digits.
    pub fn parse_dmy(s: &str) -> Result<Self, DateError> {
        let s = s.trim();
        let naive = NaiveDate::parse_from_str(s, DMY_FORMAT)?;
        // chrono's %Y takes 1 to 4 digits.
        let year_field = s.rsplit_once('/').map_or("", |(_, y)| y);
        if year_field.len() != 4 || !year_field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::Format(format!(
                "year '{year_field}' must have four digits"
            )));
        }
        Self::from_naive(naive)
    }

    /// Convert from chrono, rejecting years before 1 CE.
    pub fn from_naive(date: NaiveDate) -> Result<Self, DateError> {
        let year = u32::try_from(date.year())
            .ok()
            .filter(|&y| y >= 1)
            .ok_or(DateError::YearOutOfRange(date.year()))?;
        Ok(Self {
            year,
            month: date.month(),
            day: date.day(),
        })
    }

    /// Today's date at a fixed UTC offset.
    pub fn today_at_offset(offset_secs: i32) -> Self {
        let now = Utc::now();
        let local = match FixedOffset::east_opt(offset_secs) {
            Some(tz) => now.with_timezone(&tz).date_naive(),
            None => now.date_naive(),
        };
        Self {
            year: local.year().unsigned_abs(),
            month: local.month(),
            day: local.day(),
        }
    }

    /// Today's date in Vietnam (UTC+7).
    pub fn today_in_vietnam() -> Self {
        Self::today_at_offset(VIETNAM_UTC_OFFSET_SECS)
    }

    /// Whether this date's month/day falls strictly before `other`'s within a
    /// year, ignoring the years.
    pub fn precedes_in_year(&self, other: &Self) -> bool {
        (self.month, self.day) < (other.month, other.day)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_dmy(s)
    }
}

/// Where a [`ReferenceDate`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSource {
    /// Parsed from the caller's input.
    Supplied,
    /// No input was given; today's date was used.
    Today,
    /// Input was given but did not parse; today's date was used instead.
    FallbackToday,
}

/// The as-of date for time-dependent indices (personal year/day).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDate {
    pub date: CalendarDate,
    pub source: ReferenceSource,
}

impl ReferenceDate {
    /// Resolve an optional `DD/MM/YYYY` input against today's date in Vietnam.
    pub fn resolve(input: Option<&str>) -> Self {
        Self::resolve_with(input, CalendarDate::today_in_vietnam)
    }

    /// Resolve an optional input; `today` is called only when the input is
    /// absent or unparseable.
    pub fn resolve_with(input: Option<&str>, today: impl FnOnce() -> CalendarDate) -> Self {
        match input.map(str::parse::<CalendarDate>) {
            Some(Ok(date)) => Self {
                date,
                source: ReferenceSource::Supplied,
            },
            Some(Err(_)) => Self {
                date: today(),
                source: ReferenceSource::FallbackToday,
            },
            None => Self {
                date: today(),
                source: ReferenceSource::Today,
            },
        }
    }
}
