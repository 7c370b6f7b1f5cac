//! Character representations
//!
//! Every predicate in this crate is generic over [`Char`]: the capability a
//! character-like value needs so that classification can be written once and
//! reused across narrow and wide representations. Classification is defined
//! purely in terms of `==`, `>=`, `<=` against ASCII literals re-expressed in
//! the representation via [`Char::from_ascii`], so the same predicate logic
//! runs over `u8` bytes, `char` scalars, or wide `u16`/`u32` code units with
//! no runtime dispatch.

/// A character-like value that predicates can classify.
///
/// Implementors only need ordering, equality, and a way to express an ASCII
/// literal in their own representation. The trait is implemented for `u8`,
/// `char`, `u16`, and `u32`; values outside the ASCII range are still valid
/// inputs and simply fall outside every fixed class.
///
/// # Example
///
/// ```rust
/// use charsift::prelude::*;
///
/// // The same classifier works over bytes and scalars.
/// assert!(is_num().test(b'7'));
/// assert!(is_num().test('7'));
/// assert!(!is_num().test(0x2460_u32)); // circled one, not an ASCII digit
/// ```
pub trait Char: Copy + PartialOrd + PartialEq + Send + Sync + 'static {
    /// Re-express an ASCII literal in this representation.
    fn from_ascii(byte: u8) -> Self;

    /// The zero value of this representation, used as the terminator of
    /// set-membership sequences (see [`one_of`](crate::one_of)).
    fn sentinel() -> Self;
}

impl Char for u8 {
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte
    }

    #[inline]
    fn sentinel() -> Self {
        0
    }
}

impl Char for char {
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte as char
    }

    #[inline]
    fn sentinel() -> Self {
        '\0'
    }
}

impl Char for u16 {
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte as u16
    }

    #[inline]
    fn sentinel() -> Self {
        0
    }
}

impl Char for u32 {
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte as u32
    }

    #[inline]
    fn sentinel() -> Self {
        0
    }
}
