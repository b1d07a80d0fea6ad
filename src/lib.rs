//! # Bissextile
//!
//! Composable predicates and the Gregorian leap-year rule built from them.
//!
//! The crate is organized as a few small modules:
//!
//! - `predicate` - a [`Predicate`] trait plus `and`/`or`/`not` combinators
//!   and their n-ary forms, for assembling boolean rules from named parts
//! - `compose` - right-to-left function composition (`compose(f, g)` is
//!   "f after g"), with the empty composition defined as the identity
//! - `calendar` - the leap-year rule assembled from the above, plus the
//!   range and parsing helpers the CLI demo uses
//! - `error` - the crate's error type for input validation
//!
//! Currying shows up as ordinary predicate factories: `is_divisible_by(4)`
//! closes over its divisor and returns a predicate, and `not_divisible_by`
//! is literally `compose(not, is_divisible_by)` applied to a divisor.
//!
//! ```
//! use bissextile::is_leap_year;
//!
//! assert!(is_leap_year(2000));
//! assert!(!is_leap_year(1900));
//! assert!(is_leap_year(2024));
//! assert!(!is_leap_year(2023));
//! ```

pub mod calendar;
pub mod compose;
pub mod error;
pub mod predicate;

#[cfg(test)]
mod property_tests;

pub use calendar::is_leap_year;
pub use error::{Error, Result};
pub use predicate::{Predicate, PredicateExt};
