//! Personal numerology report from a full name and date of birth.
//!
//! The single entry point is [`compute`]: it parses the `DD/MM/YYYY` date of
//! birth, decodes the name with the Vietnamese letter table and evaluates
//! every index in one pass.
//!
//! ```rust
//! let report = lumir_engine::compute("03/01/2003", "Nguyễn Hữu Thành Trung", Some("15/08/2025"))
//!     .expect("valid date of birth");
//! assert_eq!(report.life_path, 9);
//! assert_eq!(report.alignment_signals.personal_year, 4);
//! ```
//!
//! Only an unparseable date of birth is an error. A missing or unparseable
//! reference date falls back to today in Vietnam (UTC+7); callers that need
//! to know which date was used can resolve it themselves with
//! [`ReferenceDate::resolve`] and call [`compute_at`].

pub mod error;
pub mod indices;
pub mod report_types;

use lumir_base::{BirthDateProfile, CalendarDate, ReferenceSource, decode};
use tracing::{debug, warn};

pub use error::NumerologyError;
pub use indices::ChartContext;
pub use lumir_base::ReferenceDate;
pub use report_types::{
    AlignmentSignals, Challenge, Generation, KarmicDebt, MilestonePhase, NumerologyReport,
};

/// Compute a report. `reference_date` defaults to today in Vietnam when
/// omitted or unparseable.
pub fn compute(
    date_of_birth: &str,
    full_name: &str,
    reference_date: Option<&str>,
) -> Result<NumerologyReport, NumerologyError> {
    let reference = ReferenceDate::resolve(reference_date);
    if reference.source == ReferenceSource::FallbackToday {
        warn!(
            input = reference_date.unwrap_or_default(),
            used = %reference.date,
            "unparseable reference date, using today in Vietnam"
        );
    }
    compute_at(date_of_birth, full_name, reference.date)
}

/// Compute a report against an explicit reference date.
///
/// A reference date that is not a real calendar date (month 0, day 40) is
/// replaced by today in Vietnam.
pub fn compute_at(
    date_of_birth: &str,
    full_name: &str,
    reference: CalendarDate,
) -> Result<NumerologyReport, NumerologyError> {
    let dob = CalendarDate::parse_dmy(date_of_birth).map_err(NumerologyError::InvalidDateOfBirth)?;
    let reference = match CalendarDate::new(reference.day, reference.month, reference.year) {
        Ok(date) => date,
        Err(e) => {
            let today = CalendarDate::today_in_vietnam();
            warn!(error = %e, used = %today, "invalid reference date, using today in Vietnam");
            today
        }
    };
    let name = decode(full_name);
    if name.is_empty() {
        debug!("name has no word parts; name-based indices are zero");
    }

    let ctx = ChartContext::new(BirthDateProfile::new(dob), name, reference);
    debug!(
        dob = %dob,
        reference = %reference,
        life_path = ctx.life_path,
        life_purpose = ctx.life_purpose,
        soul = ctx.soul,
        personality = ctx.personality,
        "computed core numbers"
    );
    Ok(ctx.report())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dob_is_an_error() {
        let err = compute("31/31/2002", "Lê Văn An", Some("01/01/2025")).unwrap_err();
        assert!(matches!(err, NumerologyError::InvalidDateOfBirth(_)));
        assert!(err.to_string().starts_with("invalid date of birth"));
    }

    /// Runs `f` and checks its report equals one computed as of today in
    /// Vietnam. Midnight may pass during the call, so either side of it is
    /// accepted.
    fn assert_as_of_today(dob: &str, name: &str, f: impl FnOnce() -> NumerologyReport) {
        let before = CalendarDate::today_in_vietnam();
        let report = f();
        let after = CalendarDate::today_in_vietnam();
        let expected: Vec<NumerologyReport> = [before, after]
            .into_iter()
            .map(|today| compute_at(dob, name, today).unwrap())
            .collect();
        assert!(
            expected
                .iter()
                .any(|e| e.alignment_signals == report.alignment_signals),
            "{:?}",
            report.alignment_signals
        );
        assert!(expected.contains(&report), "{}", report.current_date);
    }

    #[test]
    fn missing_reference_uses_today() {
        assert_as_of_today("27/10/2002", "Lê Văn An", || {
            compute("27/10/2002", "Lê Văn An", None).unwrap()
        });
    }

    #[test]
    fn garbage_reference_uses_today() {
        assert_as_of_today("27/10/2002", "Lê Văn An", || {
            compute("27/10/2002", "Lê Văn An", Some("tomorrow")).unwrap()
        });
    }

    #[test]
    fn short_year_reference_uses_today() {
        assert_as_of_today("29/11/1988", "Trần Thị Mỹ Duyên", || {
            compute("29/11/1988", "Trần Thị Mỹ Duyên", Some("15/08/25")).unwrap()
        });
    }

    #[test]
    fn impossible_reference_struct_uses_today() {
        let bogus = CalendarDate {
            year: 2025,
            month: 0,
            day: 40,
        };
        assert_as_of_today("03/01/2003", "Nguyễn Hữu Thành Trung", || {
            compute_at("03/01/2003", "Nguyễn Hữu Thành Trung", bogus).unwrap()
        });
    }

    #[test]
    fn short_year_dob_is_an_error() {
        let err = compute("01/01/99", "Lê Văn An", Some("01/01/2025")).unwrap_err();
        assert!(matches!(err, NumerologyError::InvalidDateOfBirth(_)));
    }

    #[test]
    fn compute_at_matches_compute_with_supplied_date() {
        let a = compute("29/11/1988", "Trần Thị Mỹ Duyên", Some("01/03/2024")).unwrap();
        let reference = CalendarDate {
            year: 2024,
            month: 3,
            day: 1,
        };
        let b = compute_at("29/11/1988", "Trần Thị Mỹ Duyên", reference).unwrap();
        assert_eq!(a, b);
    }
}
