//! Property-based tests for the combinator laws

#[cfg(test)]
mod tests {
    use crate::calendar::{explain, is_leap_year};
    use crate::compose::{compose, compose_all};
    use crate::predicate::{
        all_of, and, any_of, is_divisible_by, not_divisible_by, or, AllOf, AnyOf, Predicate,
    };
    use proptest::prelude::*;

    // Property test: The combinator form matches the ground-truth expression
    proptest! {
        #[test]
        fn test_leap_year_matches_ground_truth(year in any::<i64>()) {
            let ground_truth = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            prop_assert_eq!(is_leap_year(year), ground_truth);
        }
    }

    // Property test: The breakdown never disagrees with the composed rule
    proptest! {
        #[test]
        fn test_explain_is_consistent(year in any::<i64>()) {
            let breakdown = explain(year);

            prop_assert_eq!(breakdown.leap, is_leap_year(year));
            prop_assert_eq!(breakdown.divisible_by_4, year % 4 == 0);
            prop_assert_eq!(breakdown.divisible_by_100, year % 100 == 0);
            prop_assert_eq!(breakdown.divisible_by_400, year % 400 == 0);
        }
    }

    // Property test: Composing zero functions is the identity
    proptest! {
        #[test]
        fn test_empty_composition_is_identity(x in any::<i64>()) {
            let composed = compose_all::<i64>(Vec::new());
            prop_assert_eq!(composed(x), x);
        }
    }

    // Property test: compose(f, g) is nested application, rightmost first
    proptest! {
        #[test]
        fn test_compose_matches_nested_application(x in any::<i64>()) {
            let f = |n: i64| n.wrapping_mul(3);
            let g = |n: i64| n.wrapping_sub(7);

            prop_assert_eq!(compose(f, g)(x), f(g(x)));
            prop_assert_eq!(compose(g, f)(x), g(f(x)));
        }
    }

    // Property test: Empty and/or lists fold to their identities
    proptest! {
        #[test]
        fn test_empty_quantifier_identities(x in any::<i64>()) {
            let vacuously_true: AllOf<fn(&i64) -> bool> = all_of(Vec::new());
            let vacuously_false: AnyOf<fn(&i64) -> bool> = any_of(Vec::new());

            prop_assert!(vacuously_true.check(&x));
            prop_assert!(!vacuously_false.check(&x));
        }
    }

    // Property test: Negated divisibility is exactly the complement
    proptest! {
        #[test]
        fn test_not_divisible_by_is_complement(n in any::<i64>(), divisor in 1i64..=1000) {
            prop_assert_eq!(not_divisible_by(divisor).check(&n), n % divisor != 0);
            prop_assert_ne!(
                not_divisible_by(divisor).check(&n),
                is_divisible_by(divisor).check(&n)
            );
        }
    }

    // Property test: Binary combinators agree with the boolean operators
    proptest! {
        #[test]
        fn test_binary_combinators_match_operators(
            n in any::<i64>(),
            a in 1i64..=500,
            b in 1i64..=500,
        ) {
            let conjunction = and(is_divisible_by(a), is_divisible_by(b));
            let disjunction = or(is_divisible_by(a), is_divisible_by(b));

            prop_assert_eq!(conjunction.check(&n), n % a == 0 && n % b == 0);
            prop_assert_eq!(disjunction.check(&n), n % a == 0 || n % b == 0);
        }
    }
}
