//! Parameterized predicates
//!
//! The "match one of..." family: literal equality ([`lit`]), an inclusive
//! range ([`range`]), membership in a caller-supplied set ([`one_of`]), and
//! the unconditional wildcard ([`any`]). Which variant applies is decided by
//! the type chosen at construction, never by a runtime tag: the wildcard in
//! particular is its own type so the hot path does zero comparisons instead
//! of testing a degenerate range.

use crate::repr::Char;
use crate::combinators::Predicate;

/// Predicate for equality against one stored character.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lit<C>(pub C);

impl<C: Char> Predicate<C> for Lit<C> {
    #[inline]
    fn test(&self, c: C) -> bool {
        c == self.0
    }
}

/// Create a predicate matching exactly one character.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(lit(';').test(';'));
/// assert!(!lit(';').test(','));
/// ```
pub fn lit<C: Char>(target: C) -> Lit<C> {
    Lit(target)
}

/// Predicate that matches every input unconditionally.
///
/// This is the default wildcard matcher used when no bounds are supplied. It
/// is a distinct type rather than a degenerate [`Range`], so testing it
/// performs no comparisons at all.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any;

impl<C: Char> Predicate<C> for Any {
    #[inline]
    fn test(&self, _: C) -> bool {
        true
    }
}

/// Create the wildcard predicate, true for every input.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(any().test('x'));
/// assert!(any().test('\0'));
/// assert!(any().test(u32::MAX));
/// ```
pub fn any() -> Any {
    Any
}

/// Predicate for an inclusive character range.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<C> {
    from: C,
    to: C,
}

impl<C: Char> Predicate<C> for Range<C> {
    #[inline]
    fn test(&self, c: C) -> bool {
        c >= self.from && c <= self.to
    }
}

/// Create a predicate matching characters in `[from, to]`, both ends
/// inclusive.
///
/// The tested value must have the same representation as the bounds; mixing
/// representations is rejected at compile time by the [`Char`] bound, never
/// at runtime.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// let p = range('b', 'y');
/// assert!(!p.test('a'));
/// assert!(p.test('b'));
/// assert!(p.test('y'));
/// assert!(!p.test('z'));
/// ```
pub fn range<C: Char>(from: C, to: C) -> Range<C> {
    Range { from, to }
}

/// Predicate for membership in a borrowed sequence of characters.
///
/// The sequence is scanned up to its end or up to the first sentinel element
/// (the representation's zero value), whichever comes first; elements behind
/// the sentinel are never compared. An empty sequence is a valid "matches
/// nothing" predicate.
#[derive(Clone, Copy, Debug)]
pub struct OneOf<'a, C>(&'a [C]);

impl<C: Char> Predicate<C> for OneOf<'_, C> {
    #[inline]
    fn test(&self, c: C) -> bool {
        for &allowed in self.0 {
            if allowed == C::sentinel() {
                break;
            }
            if allowed == c {
                return true;
            }
        }
        false
    }
}

/// Create a predicate matching any character in the given sequence.
///
/// Testing is O(length of the sequence). The scan stops at the sequence end
/// or at a sentinel (zero) element.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// let p = one_of(&['a', 'b', 'c']);
/// assert!(p.test('b'));
/// assert!(!p.test('d'));
///
/// // Empty sets are valid and match nothing.
/// let none = one_of::<char>(&[]);
/// assert!(!none.test('a'));
/// ```
pub fn one_of<C: Char>(chars: &[C]) -> OneOf<'_, C> {
    OneOf(chars)
}

/// Create a set-membership predicate from an optional sequence.
///
/// An absent sequence behaves identically to an empty one: the predicate
/// matches nothing. It is not an error.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// let p = one_of_opt::<char>(None);
/// assert!(!p.test('a'));
///
/// let set = ['x', 'y'];
/// let q = one_of_opt(Some(&set[..]));
/// assert!(q.test('y'));
/// ```
pub fn one_of_opt<C: Char>(chars: Option<&[C]>) -> OneOf<'_, C> {
    OneOf(chars.unwrap_or(&[]))
}
