//! # charsift
//!
//! Composable character-classification predicates: the pure leaf layer of a
//! parser combinator.
//!
//! ## Philosophy
//!
//! A grammar bottoms out in questions about single characters: is this a
//! digit, a letter, a quote, anything at all? **charsift** answers exactly
//! that question, in constant time and with no side effects, and lets the
//! answers be combined with boolean logic (AND, OR, XOR, NOT) into arbitrary
//! predicate trees. A predicate is a plain value: composition happens at
//! construction time through static generics, so a deep tree evaluates with
//! no virtual dispatch, no allocation, and no mutable state - safe to share
//! across threads without synchronization.
//!
//! Classification is generic over the character representation. Everything is
//! defined by ordering and equality against ASCII literals re-expressed
//! through the [`Char`] trait, so the same predicate logic serves `u8` bytes,
//! `char` scalars, and wide `u16`/`u32` code units. Semantics are ASCII-range
//! only; inputs outside a class's range simply test false.
//!
//! ## Quick Example
//!
//! ```rust
//! use charsift::prelude::*;
//!
//! // Identifier characters: alphanumeric, but we also accept '$'.
//! let ident = is_alnum() | lit('$');
//! assert!(ident.test('x'));
//! assert!(ident.test('_'));
//! assert!(ident.test('$'));
//! assert!(!ident.test('-'));
//!
//! // The same tree via named methods, over bytes this time.
//! let ident = is_alnum().or(lit(b'$'));
//! assert!(ident.test(b'7'));
//! ```
//!
//! ## Evaluation contract
//!
//! [`And`] and [`Or`] short-circuit: the right operand is skipped once the
//! left determines the result. [`Xor`] deliberately does not - both operands
//! are evaluated on every test, and consumers may rely on that. [`Not`]
//! negates a single operand.
//!
//! There are no runtime error conditions: every `test` call is total over its
//! input domain, and mixing character representations in one predicate is
//! rejected at compile time by the [`Char`] bound.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod any;
pub mod class;
pub mod combinators;
mod ops;
pub mod prelude;
pub mod repr;

// Re-exports
pub use crate::any::{any, lit, one_of, one_of_opt, range, Any, Lit, OneOf, Range};
pub use crate::class::{
    is_alnum, is_alpha, is_bin, is_hex, is_num, is_oct, is_printable, is_space, Alnum, Alpha, Bin,
    Hex, Num, Oct, Printable, Space,
};
pub use crate::combinators::{
    all_of, any_of, none_of, AllOf, And, AnyOf, NoneOf, Not, Or, Predicate, PredicateExt, Xor,
};
pub use crate::repr::Char;
