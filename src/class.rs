//! Atomic ASCII classifiers
//!
//! Parameterless predicates testing membership in the fixed character
//! classes a lexer needs: alphabetic, digit, alphanumeric, hex/oct/bin
//! digit, printable, whitespace. All bounds are inclusive and expressed by
//! comparison against ASCII literals re-expressed through
//! [`Char::from_ascii`], so every classifier works uniformly over `u8`,
//! `char`, and wide code units. ASCII-range semantics only: inputs outside
//! the described ranges simply test false.

use crate::repr::Char;
use crate::combinators::Predicate;

/// Alphabetic: `A-Z`, `a-z`, or `_`.
///
/// Underscore counts as alphabetic so identifier scanners can treat
/// `is_alpha` as "may start an identifier".
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alpha;

impl<C: Char> Predicate<C> for Alpha {
    #[inline]
    fn test(&self, c: C) -> bool {
        (c >= C::from_ascii(b'A') && c <= C::from_ascii(b'Z'))
            || (c >= C::from_ascii(b'a') && c <= C::from_ascii(b'z'))
            || c == C::from_ascii(b'_')
    }
}

/// Create a predicate matching ASCII alphabetic characters and `_`.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(is_alpha().test('A'));
/// assert!(is_alpha().test('_'));
/// assert!(!is_alpha().test('1'));
/// ```
pub fn is_alpha() -> Alpha {
    Alpha
}

/// Decimal digit: `0-9`.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Num;

impl<C: Char> Predicate<C> for Num {
    #[inline]
    fn test(&self, c: C) -> bool {
        c >= C::from_ascii(b'0') && c <= C::from_ascii(b'9')
    }
}

/// Create a predicate matching decimal digits.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(is_num().test('5'));
/// assert!(!is_num().test('x'));
/// ```
pub fn is_num() -> Num {
    Num
}

/// Alphanumeric: alphabetic or decimal digit.
///
/// Defined by delegation to [`Alpha`] and [`Num`], so
/// `is_alnum(c) == is_alpha(c) || is_num(c)` holds by construction.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alnum;

impl<C: Char> Predicate<C> for Alnum {
    #[inline]
    fn test(&self, c: C) -> bool {
        Alpha.test(c) || Num.test(c)
    }
}

/// Create a predicate matching alphanumeric characters (and `_`, via
/// [`is_alpha`]).
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(is_alnum().test('g'));
/// assert!(is_alnum().test('3'));
/// assert!(!is_alnum().test('-'));
/// ```
pub fn is_alnum() -> Alnum {
    Alnum
}

/// Hexadecimal digit: `0-9`, `a-f`, or `A-F`.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hex;

impl<C: Char> Predicate<C> for Hex {
    #[inline]
    fn test(&self, c: C) -> bool {
        Num.test(c)
            || (c >= C::from_ascii(b'a') && c <= C::from_ascii(b'f'))
            || (c >= C::from_ascii(b'A') && c <= C::from_ascii(b'F'))
    }
}

/// Create a predicate matching hexadecimal digits.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(is_hex().test('b'));
/// assert!(is_hex().test('E'));
/// assert!(is_hex().test('9'));
/// assert!(!is_hex().test('g'));
/// ```
pub fn is_hex() -> Hex {
    Hex
}

/// Octal digit: `0-7`.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oct;

impl<C: Char> Predicate<C> for Oct {
    #[inline]
    fn test(&self, c: C) -> bool {
        c >= C::from_ascii(b'0') && c <= C::from_ascii(b'7')
    }
}

/// Create a predicate matching octal digits.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(is_oct().test('7'));
/// assert!(!is_oct().test('8'));
/// ```
pub fn is_oct() -> Oct {
    Oct
}

/// Binary digit: `0` or `1`.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin;

impl<C: Char> Predicate<C> for Bin {
    #[inline]
    fn test(&self, c: C) -> bool {
        c == C::from_ascii(b'0') || c == C::from_ascii(b'1')
    }
}

/// Create a predicate matching binary digits.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(is_bin().test('0'));
/// assert!(is_bin().test('1'));
/// assert!(!is_bin().test('2'));
/// ```
pub fn is_bin() -> Bin {
    Bin
}

/// Printable: the inclusive ASCII range from space (0x20) to `~` (0x7E).
///
/// DEL (0x7F) and all control characters are excluded.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Printable;

impl<C: Char> Predicate<C> for Printable {
    #[inline]
    fn test(&self, c: C) -> bool {
        c >= C::from_ascii(b' ') && c <= C::from_ascii(b'~')
    }
}

/// Create a predicate matching printable ASCII characters.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(is_printable().test(' '));
/// assert!(is_printable().test('~'));
/// assert!(!is_printable().test(0x7F_u8)); // DEL
/// assert!(!is_printable().test('\n'));
/// ```
pub fn is_printable() -> Printable {
    Printable
}

/// Whitespace: space, tab, line feed, or carriage return.
#[derive(Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Space;

impl<C: Char> Predicate<C> for Space {
    #[inline]
    fn test(&self, c: C) -> bool {
        c == C::from_ascii(b' ')
            || c == C::from_ascii(b'\t')
            || c == C::from_ascii(b'\n')
            || c == C::from_ascii(b'\r')
    }
}

/// Create a predicate matching whitespace separators.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// assert!(is_space().test('\t'));
/// assert!(is_space().test(' '));
/// assert!(!is_space().test('a'));
/// ```
pub fn is_space() -> Space {
    Space
}
