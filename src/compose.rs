//! Right-to-left function composition.
//!
//! `compose(f, g)` builds "f after g": the rightmost function runs first and
//! its result is threaded leftward. [`compose_all`] chains any number of
//! same-type unary functions the same way; composing zero functions yields
//! [`identity`], the fold identity.

/// Pure: Return the input unchanged.
///
/// The unit of composition: `compose(identity, f)` and `compose(f, identity)`
/// both behave exactly like `f`.
pub fn identity<T>(x: T) -> T {
    x
}

/// Pure: Compose two unary functions right-to-left.
///
/// `compose(f, g)(x)` is `f(g(x))`. The domain and codomain types are free,
/// so the output of `g` only has to match the input of `f`. That freedom is
/// what lets a predicate factory slot in as the right-hand function (see
/// [`not_divisible_by`](crate::predicate::not_divisible_by)).
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Pure: Compose an ordered sequence of endofunctions right-to-left.
///
/// The rightmost function is applied first, mirroring [`compose`]. An empty
/// sequence composes to the identity function. Panics inside a constituent
/// function propagate unchanged to the caller.
pub fn compose_all<T>(fns: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |x| fns.iter().rev().fold(x, |acc, f| f(acc))
}
