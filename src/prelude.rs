//! Prelude for convenient imports
//!
//! Re-exports the predicate trait, the atomic classifiers, the parameterized
//! predicates, and the combinators.
//!
//! # Example
//!
//! ```rust
//! use charsift::prelude::*;
//!
//! let ident = is_alpha().or(is_num());
//! assert!(ident.test('x'));
//! ```

// Core traits
pub use crate::repr::Char;
pub use crate::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use crate::combinators::{all_of, any_of, none_of, And, Not, Or, Xor};

// Atomic classifiers
pub use crate::class::{
    is_alnum, is_alpha, is_bin, is_hex, is_num, is_oct, is_printable, is_space,
};

// Parameterized predicates
pub use crate::any::{any, lit, one_of, one_of_opt, range};
