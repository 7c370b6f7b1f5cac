//! Operator composition
//!
//! `&`, `|`, `^`, and `!` over predicate values, building the same concrete
//! [`And`]/[`Or`]/[`Xor`]/[`Not`] trees as the named methods on
//! [`PredicateExt`](crate::PredicateExt):
//!
//! ```rust
//! use charsift::prelude::*;
//!
//! // Alphanumeric but not underscore, or any whitespace.
//! let p = (is_alpha() | is_num()) & !lit('_') | is_space();
//! assert!(p.test('a'));
//! assert!(p.test('\t'));
//! assert!(!p.test('_'));
//! ```
//!
//! The operators carry the per-operator evaluation contract: `&` and `|`
//! short-circuit, `^` always evaluates both operands. Closures get the named
//! methods only; a blanket operator impl over `Fn` is ruled out by coherence.

use crate::any::{Any, Lit, OneOf, Range};
use crate::class::{Alnum, Alpha, Bin, Hex, Num, Oct, Printable, Space};
use crate::combinators::{AllOf, And, AnyOf, NoneOf, Not, Or, Xor};

macro_rules! impl_predicate_ops {
    ($ty:ty, [$($gen:tt)*]) => {
        impl<$($gen)* Rhs> core::ops::BitAnd<Rhs> for $ty {
            type Output = And<Self, Rhs>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                And(self, rhs)
            }
        }

        impl<$($gen)* Rhs> core::ops::BitOr<Rhs> for $ty {
            type Output = Or<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                Or(self, rhs)
            }
        }

        impl<$($gen)* Rhs> core::ops::BitXor<Rhs> for $ty {
            type Output = Xor<Self, Rhs>;

            fn bitxor(self, rhs: Rhs) -> Self::Output {
                Xor(self, rhs)
            }
        }

        impl<$($gen)*> core::ops::Not for $ty {
            type Output = Not<Self>;

            fn not(self) -> Self::Output {
                Not(self)
            }
        }
    };
}

impl_predicate_ops!(Alpha, []);
impl_predicate_ops!(Num, []);
impl_predicate_ops!(Alnum, []);
impl_predicate_ops!(Hex, []);
impl_predicate_ops!(Oct, []);
impl_predicate_ops!(Bin, []);
impl_predicate_ops!(Printable, []);
impl_predicate_ops!(Space, []);
impl_predicate_ops!(Any, []);
impl_predicate_ops!(Lit<C>, [C,]);
impl_predicate_ops!(Range<C>, [C,]);
impl_predicate_ops!(OneOf<'a, C>, ['a, C,]);
impl_predicate_ops!(And<P1, P2>, [P1, P2,]);
impl_predicate_ops!(Or<P1, P2>, [P1, P2,]);
impl_predicate_ops!(Xor<P1, P2>, [P1, P2,]);
impl_predicate_ops!(Not<P>, [P,]);
impl_predicate_ops!(AllOf<P, N>, [P, const N: usize,]);
impl_predicate_ops!(AnyOf<P, N>, [P, const N: usize,]);
impl_predicate_ops!(NoneOf<P, N>, [P, const N: usize,]);
