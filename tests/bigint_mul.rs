use autobahn_bigint::bigint::{
    Bigint, KARATSUBA_THRESHOLD, Sign, karatsuba_multiply, schoolbook_multiply, square,
    word_multiply, word_multiply_split,
};

fn hex(s: &str) -> Bigint {
    Bigint::parse_hex(s, Sign::Positive)
}

#[test]
fn word_multiply_matches_reference_split() {
    for (x, y) in [
        (0xFFFF_FFFFu32, 0xFFFF_FFFFu32),
        (0, 0xFFFF_FFFF),
        (1, 0xDEAD_BEEF),
        (0x1234_5678, 0x8765_4321),
    ] {
        assert_eq!(word_multiply(x, y), word_multiply_split(x, y));
    }
}

#[test]
fn single_word_overflow_product() {
    let result = karatsuba_multiply(&hex("FFFFFFFF"), &hex("FFFFFFFF"));
    assert_eq!(result, hex("FFFFFFFE00000001"));
}

#[test]
fn karatsuba_matches_schoolbook_above_and_below_threshold() {
    let cases = [
        ("1234567890ABCDEF0", "0FEDCBA987654321"),
        ("12345678", "9ABCDEF0"),
        ("00", "FFFFFFFFFFFFFFFF"),
        ("01", "DEADBEEF"),
        (
            "1234567890ABCDEF1234567890ABCDEF1234567890ABCDEF",
            "FEDCBA0987654321FEDCBA0987654321",
        ),
    ];
    for (x, y) in cases {
        let x = hex(x);
        let y = hex(y);
        assert_eq!(karatsuba_multiply(&x, &y), schoolbook_multiply(&x, &y));
    }
}

#[test]
fn karatsuba_base_case_boundary() {
    // Exercise operands exactly at and one below the base-case threshold.
    let x = hex("FFFFFFFF");
    let y = hex("FFFFFFFF");
    assert!(x.digit_num() <= KARATSUBA_THRESHOLD);
    assert_eq!(karatsuba_multiply(&x, &y), schoolbook_multiply(&x, &y));
}

#[test]
fn mul_by_zero_and_one() {
    let x = hex("123456789ABCDEF0");
    assert!(karatsuba_multiply(&Bigint::zero(), &x).is_zero());
    assert_eq!(karatsuba_multiply(&Bigint::one(), &x), x);
}

#[test]
fn mul_is_commutative() {
    let x = hex("FEEDFACE");
    let y = hex("CAFEBABEDEADBEEF");
    assert_eq!(karatsuba_multiply(&x, &y), karatsuba_multiply(&y, &x));
}

#[test]
fn square_matches_self_multiply() {
    let x = hex("9ABCDEF0123456789ABCDEF0");
    assert_eq!(square(&x), karatsuba_multiply(&x, &x));
}

#[test]
fn mul_sign_rules() {
    let pos = hex("10");
    let neg = hex("03").negated();
    assert_eq!(karatsuba_multiply(&pos, &neg).sign(), Sign::Negative);
    assert_eq!(karatsuba_multiply(&neg, &neg).sign(), Sign::Positive);
}
