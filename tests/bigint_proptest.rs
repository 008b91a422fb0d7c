use std::cmp::Ordering;

use autobahn_bigint::bigint::{
    Bigint, Sign, add, barrett_pre_compute, barrett_reduce, binary_long_divide,
    karatsuba_multiply, schoolbook_multiply, sub, word_long_divide,
};
use proptest::prelude::*;

fn bigint_from_words(sign_negative: bool, words: Vec<u32>) -> Bigint {
    let sign = if sign_negative {
        Sign::Negative
    } else {
        Sign::Positive
    };
    Bigint::from_hex_words(sign, words)
}

// Test-only constructor: `from_parts` is crate-private, so build values
// through the public hex parser instead, formatting the words ourselves.
trait FromHexWords {
    fn from_hex_words(sign: Sign, words: Vec<u32>) -> Bigint;
}
impl FromHexWords for Bigint {
    fn from_hex_words(sign: Sign, words: Vec<u32>) -> Bigint {
        let mut hex = String::new();
        for (i, w) in words.iter().enumerate().rev() {
            if i == words.len() - 1 {
                hex.push_str(&format!("{w:x}"));
            } else {
                hex.push_str(&format!("{w:08x}"));
            }
        }
        if hex.is_empty() {
            hex.push('0');
        }
        Bigint::parse_hex(&hex, sign)
    }
}

fn arb_words(max_words: usize) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 1..=max_words)
}

proptest! {
    #[test]
    fn add_then_sub_is_identity(xw in arb_words(4), yw in arb_words(4)) {
        let x = bigint_from_words(false, xw);
        let y = bigint_from_words(false, yw);
        prop_assert_eq!(sub(&add(&x, &y), &y), x);
    }

    #[test]
    fn add_is_commutative(xw in arb_words(4), yw in arb_words(4)) {
        let x = bigint_from_words(false, xw);
        let y = bigint_from_words(false, yw);
        prop_assert_eq!(add(&x, &y), add(&y, &x));
    }

    #[test]
    fn add_is_associative(xw in arb_words(3), yw in arb_words(3), zw in arb_words(3)) {
        let x = bigint_from_words(false, xw);
        let y = bigint_from_words(false, yw);
        let z = bigint_from_words(false, zw);
        prop_assert_eq!(add(&add(&x, &y), &z), add(&x, &add(&y, &z)));
    }

    #[test]
    fn mul_is_commutative(xw in arb_words(3), yw in arb_words(3)) {
        let x = bigint_from_words(false, xw);
        let y = bigint_from_words(false, yw);
        prop_assert_eq!(karatsuba_multiply(&x, &y), karatsuba_multiply(&y, &x));
    }

    #[test]
    fn mul_distributes_over_add(xw in arb_words(3), yw in arb_words(3), zw in arb_words(3)) {
        let x = bigint_from_words(false, xw);
        let y = bigint_from_words(false, yw);
        let z = bigint_from_words(false, zw);
        let lhs = karatsuba_multiply(&x, &add(&y, &z));
        let rhs = add(&karatsuba_multiply(&x, &y), &karatsuba_multiply(&x, &z));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn karatsuba_equals_schoolbook(xw in arb_words(6), yw in arb_words(6)) {
        let x = bigint_from_words(false, xw);
        let y = bigint_from_words(false, yw);
        prop_assert_eq!(karatsuba_multiply(&x, &y), schoolbook_multiply(&x, &y));
    }

    #[test]
    fn division_identity_holds(xw in arb_words(4), yw in arb_words(3)) {
        let x = bigint_from_words(false, xw);
        let mut y = bigint_from_words(false, yw);
        if y.is_zero() {
            y = Bigint::one();
        }
        let dr = word_long_divide(&x, &y).unwrap();
        prop_assert_eq!(add(&karatsuba_multiply(&dr.quotient, &y), &dr.remainder), x);
        prop_assert!(dr.remainder.compare_abs(&y) == Ordering::Less);
    }

    #[test]
    fn binary_and_word_long_division_agree(xw in arb_words(3), yw in arb_words(2)) {
        let x = bigint_from_words(false, xw);
        let mut y = bigint_from_words(false, yw);
        if y.is_zero() {
            y = Bigint::one();
        }
        prop_assert_eq!(
            binary_long_divide(&x, &y).unwrap(),
            word_long_divide(&x, &y).unwrap()
        );
    }

    #[test]
    fn barrett_reduce_matches_modulus(xw in arb_words(2), nw in arb_words(1)) {
        let x = bigint_from_words(false, xw);
        let mut modulus = bigint_from_words(false, nw);
        if modulus.is_zero() {
            modulus = Bigint::one();
        }
        let reciprocal = barrett_pre_compute(&modulus).unwrap();
        let expected = word_long_divide(&x, &modulus).unwrap().remainder;
        prop_assert_eq!(barrett_reduce(&x, &modulus, &reciprocal), expected);
    }
}
