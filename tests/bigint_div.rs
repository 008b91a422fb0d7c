use autobahn_bigint::bigint::{
    BigintError, Sign, binary_long_divide, naive_divide, word_long_divide,
};
use autobahn_bigint::bigint::Bigint;

fn hex(s: &str) -> Bigint {
    Bigint::parse_hex(s, Sign::Positive)
}

#[test]
fn textbook_division_example() {
    let dr = word_long_divide(&hex("3FFFFFFFF"), &hex("3")).unwrap();
    assert_eq!(dr.quotient, hex("155555555"));
    assert_eq!(dr.remainder, hex("0"));
}

#[test]
fn dividend_smaller_than_divisor() {
    let dr = word_long_divide(&hex("05"), &hex("0A")).unwrap();
    assert_eq!(dr.quotient, Bigint::zero());
    assert_eq!(dr.remainder, hex("05"));
}

#[test]
fn divisor_of_one_is_identity() {
    let x = hex("DEADBEEF12345678");
    let dr = word_long_divide(&x, &Bigint::one()).unwrap();
    assert_eq!(dr.quotient, x);
    assert!(dr.remainder.is_zero());
}

#[test]
fn division_by_zero_errors() {
    let err = word_long_divide(&hex("01"), &Bigint::zero()).unwrap_err();
    assert_eq!(err, BigintError::DivisionByZero);
}

#[test]
fn negative_operand_rejected() {
    let err = word_long_divide(&hex("10").negated(), &hex("03")).unwrap_err();
    assert_eq!(err, BigintError::NegativeOperand("dividend and divisor must be non-negative"));
}

#[test]
fn division_identity_holds_on_multiword_operands() {
    let x = hex("123456789ABCDEF0123456789ABCDEF0");
    let y = hex("FEDCBA0987654321");
    let dr = word_long_divide(&x, &y).unwrap();
    let reconstructed = &(&dr.quotient * &y) + &dr.remainder;
    assert_eq!(reconstructed, x);
    assert!(dr.remainder.compare_abs(&y) == std::cmp::Ordering::Less);
}

#[test]
fn binary_and_word_long_division_agree() {
    let cases = [
        ("123456789ABCDEF0", "654321"),
        ("FFFFFFFFFFFFFFFF", "2"),
        ("1", "FFFFFFFF"),
        ("100000000", "FFFFFFFF"),
    ];
    for (x, y) in cases {
        let x = hex(x);
        let y = hex(y);
        assert_eq!(
            binary_long_divide(&x, &y).unwrap(),
            word_long_divide(&x, &y).unwrap()
        );
    }
}

#[test]
fn naive_division_agrees_on_small_operands() {
    let x = hex("64");
    let y = hex("07");
    assert_eq!(
        naive_divide(&x, &y).unwrap(),
        word_long_divide(&x, &y).unwrap()
    );
}
