//! The Gregorian leap-year rule, assembled from predicate combinators.
//!
//! A year is a leap year iff it is divisible by 4 and not by 100, or
//! divisible by 400. Rather than writing that as one boolean expression,
//! this module builds the rule out of named predicates, so each sub-rule
//! stays individually visible, testable, and reusable:
//!
//! ```
//! use bissextile::calendar::is_leap_year;
//!
//! assert!(is_leap_year(2000));  // divisible by 400
//! assert!(!is_leap_year(1900)); // century year, not divisible by 400
//! assert!(is_leap_year(2024));  // divisible by 4, not a century year
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::predicate::{
    and, is_divisible_by, not_divisible_by, or, And, DivisibleBy, Not, Or, Predicate,
};

/// The composed rule: `(year % 4 == 0 && year % 100 != 0) || year % 400 == 0`.
type LeapYearRule = Or<And<DivisibleBy, Not<DivisibleBy>>, DivisibleBy>;

/// Built once at module initialization and never mutated.
static LEAP_YEAR: Lazy<LeapYearRule> = Lazy::new(|| {
    or(
        and(is_divisible_by(4), not_divisible_by(100)),
        is_divisible_by(400),
    )
});

/// True iff `year` is a leap year in the proleptic Gregorian calendar.
///
/// Divisibility is sign-agnostic, so the rule applies arithmetically to
/// negative years as well; the whole `i64` range is a valid input.
pub fn is_leap_year(year: i64) -> bool {
    LEAP_YEAR.check(&year)
}

/// How each divisibility sub-rule voted for one year.
///
/// `leap` always agrees with [`is_leap_year`]; the other fields expose the
/// intermediate verdicts the composed rule is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeapYearBreakdown {
    pub year: i64,
    pub divisible_by_4: bool,
    pub divisible_by_100: bool,
    pub divisible_by_400: bool,
    pub leap: bool,
}

/// Pure: Evaluate each sub-rule separately for one year.
pub fn explain(year: i64) -> LeapYearBreakdown {
    LeapYearBreakdown {
        year,
        divisible_by_4: is_divisible_by(4).check(&year),
        divisible_by_100: is_divisible_by(100).check(&year),
        divisible_by_400: is_divisible_by(400).check(&year),
        leap: is_leap_year(year),
    }
}

/// Leap years in the inclusive range `[from, to]`, ascending.
///
/// Returns [`Error::EmptyRange`] when `from` is after `to`.
pub fn leap_years_between(from: i64, to: i64) -> Result<Vec<i64>> {
    if from > to {
        return Err(Error::EmptyRange { from, to });
    }

    debug!("scanning {}..={} for leap years", from, to);
    Ok((from..=to).filter(|year| LEAP_YEAR.check(year)).collect())
}

/// Parse a year argument, rejecting non-integer input with a typed error.
///
/// Accepts surrounding ASCII whitespace and an optional leading sign. This
/// is the crate's single input-validation policy: malformed input fails
/// here, before any predicate runs.
pub fn parse_year(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|source| Error::InvalidYear {
            input: input.to_string(),
            source,
        })
}
