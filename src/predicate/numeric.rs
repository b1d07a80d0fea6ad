//! Divisibility predicates over integers.

use super::combinators::{not, Not};
use super::Predicate;
use crate::compose::compose;

/// Divisibility test produced by [`is_divisible_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisibleBy {
    divisor: i64,
}

impl Predicate<i64> for DivisibleBy {
    fn check(&self, value: &i64) -> bool {
        value % self.divisor == 0
    }
}

/// Pure: Build a predicate that accepts exact multiples of `divisor`.
///
/// This is a curried factory: the divisor is supplied now, the tested value
/// later. Rust's `%` keeps the dividend's sign, so the test agrees with
/// mathematical divisibility for negative values as well.
///
/// # Panics
///
/// Checking the returned predicate panics if `divisor` is zero, exactly as
/// integer remainder does.
pub fn is_divisible_by(divisor: i64) -> DivisibleBy {
    DivisibleBy { divisor }
}

/// Pure: Build a predicate that rejects exact multiples of `divisor`.
///
/// Defined point-free as `compose(not, is_divisible_by)` applied to the
/// divisor: [`is_divisible_by`] is a two-stage curried factory, so lifting
/// [`not`] over it only becomes well-typed once the divisor is supplied.
/// `not_divisible_by(100).check(&n)` is `!(n % 100 == 0)`.
pub fn not_divisible_by(divisor: i64) -> Not<DivisibleBy> {
    compose(not, is_divisible_by)(divisor)
}
