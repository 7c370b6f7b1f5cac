//! Property-based tests for the atomic classifiers and combinators.

use proptest::prelude::*;

use charsift::{
    is_alnum, is_alpha, is_bin, is_hex, is_num, is_oct, is_printable, is_space, lit, one_of, range,
    Predicate, PredicateExt,
};

proptest! {
    #[test]
    fn prop_alnum_is_alpha_or_num(c in any::<char>()) {
        prop_assert_eq!(is_alnum().test(c), is_alpha().test(c) || is_num().test(c));
    }

    #[test]
    fn prop_hex_is_num_or_hex_letters(c in any::<char>()) {
        let letters = ('a'..='f').contains(&c) || ('A'..='F').contains(&c);
        prop_assert_eq!(is_hex().test(c), is_num().test(c) || letters);
    }

    #[test]
    fn prop_bin_implies_oct_implies_num(c in any::<char>()) {
        if is_bin().test(c) {
            prop_assert!(is_oct().test(c));
        }
        if is_oct().test(c) {
            prop_assert!(is_num().test(c));
        }
    }

    #[test]
    fn prop_wildcard_is_total(c in any::<char>()) {
        prop_assert!(charsift::any().test(c));
    }

    #[test]
    fn prop_combinators_match_plain_boolean(c in any::<char>()) {
        let alpha = is_alpha().test(c);
        let num = is_num().test(c);
        prop_assert_eq!(is_alpha().and(is_num()).test(c), alpha && num);
        prop_assert_eq!(is_alpha().or(is_num()).test(c), alpha || num);
        prop_assert_eq!(is_alpha().xor(is_num()).test(c), alpha ^ num);
        prop_assert_eq!(is_alpha().negate().test(c), !alpha);
    }

    #[test]
    fn prop_operators_match_named_methods(c in any::<char>()) {
        prop_assert_eq!((is_hex() & is_alpha()).test(c), is_hex().and(is_alpha()).test(c));
        prop_assert_eq!((is_hex() | is_space()).test(c), is_hex().or(is_space()).test(c));
        prop_assert_eq!((is_hex() ^ is_num()).test(c), is_hex().xor(is_num()).test(c));
        prop_assert_eq!((!is_hex()).test(c), is_hex().negate().test(c));
    }

    #[test]
    fn prop_range_matches_inclusive_bounds(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(range(lo, hi).test(c), c >= lo && c <= hi);
    }

    #[test]
    fn prop_range_boundary_neighbors(lo in 1u8..=254, hi in 1u8..=254) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let p = range(lo, hi);
        prop_assert!(!p.test(lo - 1));
        prop_assert!(p.test(lo));
        prop_assert!(p.test(hi));
        prop_assert!(!p.test(hi + 1));
    }

    #[test]
    fn prop_one_of_agrees_with_contains(
        set in prop::collection::vec(any::<char>().prop_filter("no sentinel", |c| *c != '\0'), 0..12),
        c in any::<char>(),
    ) {
        let p = one_of(&set);
        prop_assert_eq!(p.test(c), set.contains(&c));
    }

    #[test]
    fn prop_lit_matches_only_its_target(target in any::<char>(), c in any::<char>()) {
        prop_assert_eq!(lit(target).test(c), c == target);
    }

    #[test]
    fn prop_byte_and_scalar_representations_agree(b in any::<u8>()) {
        let c = char::from(b);
        prop_assert_eq!(is_alpha().test(b), is_alpha().test(c));
        prop_assert_eq!(is_num().test(b), is_num().test(c));
        prop_assert_eq!(is_alnum().test(b), is_alnum().test(c));
        prop_assert_eq!(is_hex().test(b), is_hex().test(c));
        prop_assert_eq!(is_oct().test(b), is_oct().test(c));
        prop_assert_eq!(is_bin().test(b), is_bin().test(c));
        prop_assert_eq!(is_printable().test(b), is_printable().test(c));
        prop_assert_eq!(is_space().test(b), is_space().test(c));
    }

    #[test]
    fn prop_de_morgan_over_classes(c in any::<char>()) {
        let lhs = is_alpha().or(is_num()).negate();
        let rhs = is_alpha().negate().and(is_num().negate());
        prop_assert_eq!(lhs.test(c), rhs.test(c));
    }
}
