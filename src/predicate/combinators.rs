//! Logical combinators over predicates.
//!
//! Binary [`And`]/[`Or`] and unary [`Not`] compose predicates of different
//! concrete types, which is the form the leap-year rule uses. The n-ary
//! [`AllOf`]/[`AnyOf`]/[`NoneOf`] take an ordered `Vec` of same-type
//! predicates and carry the standard fold identities: an empty `AllOf` is
//! vacuously true, an empty `AnyOf` vacuously false. For a mixed-type list,
//! use `Box<dyn Fn(&T) -> bool>` elements; boxed closures are predicates
//! like any other.

use super::Predicate;

/// Conjunction of two predicates. See [`and`].
#[derive(Debug, Clone, Copy)]
pub struct And<P, Q> {
    left: P,
    right: Q,
}

impl<T: ?Sized, P, Q> Predicate<T> for And<P, Q>
where
    P: Predicate<T>,
    Q: Predicate<T>,
{
    fn check(&self, value: &T) -> bool {
        self.left.check(value) && self.right.check(value)
    }
}

/// Disjunction of two predicates. See [`or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<P, Q> {
    left: P,
    right: Q,
}

impl<T: ?Sized, P, Q> Predicate<T> for Or<P, Q>
where
    P: Predicate<T>,
    Q: Predicate<T>,
{
    fn check(&self, value: &T) -> bool {
        self.left.check(value) || self.right.check(value)
    }
}

/// Negation of a predicate. See [`not`].
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    inner: P,
}

impl<T: ?Sized, P> Predicate<T> for Not<P>
where
    P: Predicate<T>,
{
    fn check(&self, value: &T) -> bool {
        !self.inner.check(value)
    }
}

/// Universal quantification over an ordered list. See [`all_of`].
#[derive(Debug, Clone)]
pub struct AllOf<P> {
    predicates: Vec<P>,
}

impl<T: ?Sized, P> Predicate<T> for AllOf<P>
where
    P: Predicate<T>,
{
    fn check(&self, value: &T) -> bool {
        self.predicates.iter().all(|p| p.check(value))
    }
}

/// Existential quantification over an ordered list. See [`any_of`].
#[derive(Debug, Clone)]
pub struct AnyOf<P> {
    predicates: Vec<P>,
}

impl<T: ?Sized, P> Predicate<T> for AnyOf<P>
where
    P: Predicate<T>,
{
    fn check(&self, value: &T) -> bool {
        self.predicates.iter().any(|p| p.check(value))
    }
}

/// Rejection of every predicate in a list. See [`none_of`].
#[derive(Debug, Clone)]
pub struct NoneOf<P> {
    predicates: Vec<P>,
}

impl<T: ?Sized, P> Predicate<T> for NoneOf<P>
where
    P: Predicate<T>,
{
    fn check(&self, value: &T) -> bool {
        !self.predicates.iter().any(|p| p.check(value))
    }
}

/// Both `left` and `right` must accept the value.
///
/// Short-circuits: when `left` rejects, `right` is not evaluated.
pub fn and<P, Q>(left: P, right: Q) -> And<P, Q> {
    And { left, right }
}

/// Either `left` or `right` must accept the value.
///
/// Short-circuits: when `left` accepts, `right` is not evaluated.
pub fn or<P, Q>(left: P, right: Q) -> Or<P, Q> {
    Or { left, right }
}

/// Invert a predicate: `not(p).check(x) == !p.check(x)`.
pub fn not<P>(predicate: P) -> Not<P> {
    Not { inner: predicate }
}

/// Every predicate in the list must accept the value.
///
/// Evaluates in order and stops at the first rejection. An empty list is
/// vacuously true.
pub fn all_of<P>(predicates: Vec<P>) -> AllOf<P> {
    AllOf { predicates }
}

/// At least one predicate in the list must accept the value.
///
/// Evaluates in order and stops at the first acceptance. An empty list is
/// vacuously false.
pub fn any_of<P>(predicates: Vec<P>) -> AnyOf<P> {
    AnyOf { predicates }
}

/// No predicate in the list may accept the value.
///
/// The negation of [`any_of`], so an empty list is vacuously true.
pub fn none_of<P>(predicates: Vec<P>) -> NoneOf<P> {
    NoneOf { predicates }
}
