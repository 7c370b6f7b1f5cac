//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the boolean
//! combinators for composing classifiers. Composition happens entirely at
//! construction time: every combinator owns its operands by value and returns
//! a concrete type, so a deep predicate tree evaluates with no virtual
//! dispatch and no allocation.

use crate::repr::Char;

/// A composable classification predicate over character values.
///
/// A predicate is a pure function of its input and its immutable
/// construction-time parameters: `test` never blocks, never allocates, and
/// never mutates shared state, so predicate values can be shared across
/// threads and invoked concurrently without synchronization.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// let ident = is_alpha().or(is_num());
/// assert!(ident.test('x'));
/// assert!(ident.test('7'));
/// assert!(!ident.test('!'));
/// ```
pub trait Predicate<C: Char>: Send + Sync {
    /// Check whether the character belongs to this predicate's class.
    fn test(&self, c: C) -> bool;
}

// Blanket impl for closures
impl<C: Char, F> Predicate<C> for F
where
    F: Fn(C) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, c: C) -> bool {
        self(c)
    }
}

/// Extension trait for combining predicates with boolean logic.
///
/// All methods return concrete combinator types, so composition is resolved
/// statically. The methods place no bounds on their operands: a classifier
/// that works over every representation stays polymorphic through
/// composition, and the [`Predicate`] impls on [`And`], [`Or`], [`Xor`], and
/// [`Not`] enforce the constraints at the point of use. The same
/// compositions are also available as operators (`&`, `|`, `^`, `!`) on
/// every predicate type in this crate.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// // Alphanumeric, but not an underscore.
/// let p = is_alnum().and(lit('_').negate());
/// assert!(p.test('a'));
/// assert!(!p.test('_'));
/// ```
pub trait PredicateExt: Sized {
    /// Combine with AND logic.
    ///
    /// Short-circuits: the right operand is not evaluated when the left is
    /// already false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use charsift::prelude::*;
    ///
    /// let p = is_hex().and(is_alpha());
    /// assert!(p.test('c'));
    /// assert!(!p.test('3'));
    /// ```
    fn and<P>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Short-circuits: the right operand is not evaluated when the left is
    /// already true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use charsift::prelude::*;
    ///
    /// let p = is_num().or(is_space());
    /// assert!(p.test('4'));
    /// assert!(p.test('\t'));
    /// assert!(!p.test('x'));
    /// ```
    fn or<P>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Combine with XOR logic.
    ///
    /// Unlike [`and`](PredicateExt::and) and [`or`](PredicateExt::or), XOR
    /// never short-circuits: both operands are evaluated on every test, since
    /// the result cannot be determined from one operand alone. Consumers may
    /// rely on both operands being invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use charsift::prelude::*;
    ///
    /// let p = is_alpha().xor(is_num());
    /// assert!(p.test('5'));
    /// assert!(p.test('A'));
    /// assert!(!p.test('!')); // neither holds
    /// ```
    fn xor<P>(self, other: P) -> Xor<Self, P> {
        Xor(self, other)
    }

    /// Invert the predicate.
    ///
    /// Named `negate` rather than `not` so that calls do not collide with
    /// [`core::ops::Not`], which this crate also implements as the `!`
    /// operator on its predicate types.
    ///
    /// # Example
    ///
    /// ```rust
    /// use charsift::prelude::*;
    ///
    /// let p = is_space().negate();
    /// assert!(p.test('a'));
    /// assert!(!p.test(' '));
    /// ```
    fn negate(self) -> Not<Self> {
        Not(self)
    }
}

impl<P> PredicateExt for P {}

/// AND combinator - both predicates must be true.
///
/// Short-circuits on a false left operand.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct And<P1, P2>(pub P1, pub P2);

impl<C: Char, P1: Predicate<C>, P2: Predicate<C>> Predicate<C> for And<P1, P2> {
    #[inline]
    fn test(&self, c: C) -> bool {
        self.0.test(c) && self.1.test(c)
    }
}

/// OR combinator - either predicate must be true.
///
/// Short-circuits on a true left operand.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<C: Char, P1: Predicate<C>, P2: Predicate<C>> Predicate<C> for Or<P1, P2> {
    #[inline]
    fn test(&self, c: C) -> bool {
        self.0.test(c) || self.1.test(c)
    }
}

/// XOR combinator - exactly one predicate must be true.
///
/// Both operands are always evaluated; this is part of the contract, not an
/// implementation detail.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xor<P1, P2>(pub P1, pub P2);

impl<C: Char, P1: Predicate<C>, P2: Predicate<C>> Predicate<C> for Xor<P1, P2> {
    #[inline]
    fn test(&self, c: C) -> bool {
        // Both operands must be invoked on every call.
        let left = self.0.test(c);
        let right = self.1.test(c);
        left ^ right
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Not<P>(pub P);

impl<C: Char, P: Predicate<C>> Predicate<C> for Not<P> {
    #[inline]
    fn test(&self, c: C) -> bool {
        !self.0.test(c)
    }
}

/// Check if all predicates match (const generic, zero-allocation).
///
/// Requires homogeneous predicate types; for mixed predicates, chain with
/// [`and`](PredicateExt::and) instead.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<C: Char, P: Predicate<C>, const N: usize> Predicate<C> for AllOf<P, N> {
    #[inline]
    fn test(&self, c: C) -> bool {
        self.0.iter().all(|p| p.test(c))
    }
}

/// Create a predicate that matches when all given predicates match.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// // Inside both ranges at once.
/// let p = all_of([range('0', 'z'), range('A', 'f')]);
/// assert!(p.test('a'));
/// assert!(!p.test('0'));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Check if any predicate matches (const generic, zero-allocation).
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<C: Char, P: Predicate<C>, const N: usize> Predicate<C> for AnyOf<P, N> {
    #[inline]
    fn test(&self, c: C) -> bool {
        self.0.iter().any(|p| p.test(c))
    }
}

/// Create a predicate that matches when any given predicate matches.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// let quote = any_of([lit('\''), lit('"'), lit('`')]);
/// assert!(quote.test('"'));
/// assert!(!quote.test('x'));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// Check if no predicate matches (const generic, zero-allocation).
///
/// Equivalent to `!any_of(...)`.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<C: Char, P: Predicate<C>, const N: usize> Predicate<C> for NoneOf<P, N> {
    #[inline]
    fn test(&self, c: C) -> bool {
        !self.0.iter().any(|p| p.test(c))
    }
}

/// Create a predicate that matches when none of the given predicates match.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// let not_bracket = none_of([lit('('), lit(')'), lit('[')]);
/// assert!(not_bracket.test('x'));
/// assert!(!not_bracket.test('('));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any::{lit, range};
    use crate::class::{is_alpha, is_hex, is_num, is_space};

    #[test]
    fn test_and() {
        let p = is_alpha().and(is_hex());
        assert!(p.test('b'));
        assert!(!p.test('z'));
        assert!(!p.test('3'));
    }

    #[test]
    fn test_or() {
        let p = is_num().or(is_space());
        assert!(p.test('1'));
        assert!(p.test(' '));
        assert!(!p.test('q'));
    }

    #[test]
    fn test_xor() {
        let p = is_alpha().xor(is_num());
        assert!(p.test('5')); // num only
        assert!(p.test('A')); // alpha only
        assert!(!p.test('!')); // neither
    }

    #[test]
    fn test_negate() {
        let p = is_num().negate();
        assert!(p.test('a'));
        assert!(!p.test('7'));
    }

    #[test]
    fn test_truth_tables() {
        for a in [false, true] {
            for b in [false, true] {
                let p1 = move |_: char| a;
                let p2 = move |_: char| b;
                assert_eq!(And(p1, p2).test('x'), a && b);
                assert_eq!(Or(p1, p2).test('x'), a || b);
                assert_eq!(Xor(p1, p2).test('x'), a ^ b);
            }
            let p1 = move |_: char| a;
            assert_eq!(Not(p1).test('x'), !a);
        }
    }

    #[test]
    fn test_all_of() {
        let p = all_of([range('0', 'z'), range('A', 'f')]);
        assert!(p.test('a'));
        assert!(p.test('F'));
        assert!(!p.test('~'));
    }

    #[test]
    fn test_any_of() {
        let p = any_of([lit('a'), lit('e'), lit('i')]);
        assert!(p.test('e'));
        assert!(!p.test('b'));
    }

    #[test]
    fn test_none_of() {
        let p = none_of([lit('a'), lit('e'), lit('i')]);
        assert!(!p.test('e'));
        assert!(p.test('b'));
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_vowel = |c: char| "aeiou".contains(c);
        assert!(is_vowel.test('a'));
        assert!(!is_vowel.test('b'));

        let vowel_or_digit = is_vowel.or(is_num());
        assert!(vowel_or_digit.test('o'));
        assert!(vowel_or_digit.test('4'));
        assert!(!vowel_or_digit.test('z'));
    }

    #[test]
    fn test_chained_classifiers_stay_polymorphic() {
        // Composing representation-generic classifiers needs no type
        // annotations, and the composed tree still serves every
        // representation.
        let p = is_alpha().or(is_num()).xor(is_space().negate());
        assert!(!p.test('a')); // both sides hold
        assert!(!p.test(b'a'));
        assert!(!p.test(' ')); // neither side holds
        assert!(!p.test(b' '));
        assert!(p.test('!')); // only the negated space holds
        assert!(p.test(0x21_u16));
    }

    #[test]
    fn test_deep_composition() {
        // Alphanumeric, but not underscore, or any whitespace.
        let p = is_num().or(is_alpha()).and(lit('_').negate()).or(is_space());
        assert!(p.test('a'));
        assert!(p.test('0'));
        assert!(p.test('\n'));
        assert!(!p.test('_'));
        assert!(!p.test('!'));
    }
}
