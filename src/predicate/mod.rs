//! Composable boolean predicates.
//!
//! A [`Predicate`] is a pure unary test: a borrowed value in, a `bool` out.
//! Small named predicates combine through the logical combinators in
//! [`combinators`] (`and`, `or`, `not`, and their n-ary forms) so complex
//! rules are assembled from reusable pieces instead of written as one
//! opaque boolean expression.
//!
//! Closures are predicates too: any `Fn(&T) -> bool` implements
//! [`Predicate<T>`](Predicate), so handwritten tests and combinator-built
//! rules mix freely.

pub mod combinators;
pub mod numeric;

pub use combinators::{all_of, and, any_of, none_of, not, or, AllOf, And, AnyOf, NoneOf, Not, Or};
pub use numeric::{is_divisible_by, not_divisible_by, DivisibleBy};

/// A unary boolean test over `T`.
///
/// Implementations must be pure: same input, same answer, no side effects.
pub trait Predicate<T: ?Sized> {
    /// Test a single value.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Chaining adapters mirroring the free functions in [`combinators`].
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Both `self` and `other` must accept the value.
    fn and<Q: Predicate<T>>(self, other: Q) -> And<Self, Q> {
        and(self, other)
    }

    /// Either `self` or `other` must accept the value.
    fn or<Q: Predicate<T>>(self, other: Q) -> Or<Self, Q> {
        or(self, other)
    }

    /// Invert the verdict.
    fn not(self) -> Not<Self> {
        not(self)
    }
}

impl<T: ?Sized, P> PredicateExt<T> for P where P: Predicate<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_predicates() {
        let positive = |value: &i64| *value > 0;

        assert!(positive.check(&3));
        assert!(!positive.check(&-3));
    }

    #[test]
    fn test_chained_combinators_match_free_functions() {
        let chained = is_divisible_by(4).and(not_divisible_by(100));
        let free = and(is_divisible_by(4), not_divisible_by(100));

        for year in [1900, 1996, 2000, 2023, 2024] {
            assert_eq!(chained.check(&year), free.check(&year));
        }
    }

    #[test]
    fn test_chained_or_and_not() {
        let rule = is_divisible_by(3).or(is_divisible_by(5)).not();

        assert!(rule.check(&7));
        assert!(!rule.check(&9));
        assert!(!rule.check(&10));
        assert!(!rule.check(&15));
    }
}
