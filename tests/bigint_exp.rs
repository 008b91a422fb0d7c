use autobahn_bigint::bigint::{
    Bigint, BigintError, Sign, exp_l2r, exp_mod_l2r, exp_mod_montgomery, exp_montgomery,
    word_long_divide,
};

fn hex(s: &str) -> Bigint {
    Bigint::parse_hex(s, Sign::Positive)
}

#[test]
fn l2r_and_montgomery_agree() {
    let cases = [
        ("02", "0A"),
        ("03", "00"),
        ("FEDCBA98", "11"),
        ("01", "FFFFFFFFFFFFFFFF"),
    ];
    for (base, exponent) in cases {
        let base = hex(base);
        let exponent = hex(exponent);
        assert_eq!(
            exp_l2r(&base, &exponent).unwrap(),
            exp_montgomery(&base, &exponent).unwrap()
        );
    }
}

#[test]
fn exponent_zero_is_one() {
    let result = exp_l2r(&hex("DEADBEEF"), &Bigint::zero()).unwrap();
    assert!(result.is_one());
}

#[test]
fn exponent_one_is_identity() {
    let base = hex("DEADBEEF12345678");
    assert_eq!(exp_l2r(&base, &Bigint::one()).unwrap(), base);
}

#[test]
fn mod_exponent_identity_against_unreduced_power() {
    let base = hex("07");
    let exponent = hex("0D");
    let modulus = hex("65");

    let unreduced = exp_l2r(&base, &exponent).unwrap();
    let expected = word_long_divide(&unreduced, &modulus).unwrap().remainder;

    assert_eq!(
        exp_mod_l2r(&base, &exponent, &modulus).unwrap(),
        expected
    );
    assert_eq!(
        exp_mod_montgomery(&base, &exponent, &modulus).unwrap(),
        expected
    );
}

#[test]
fn negative_base_or_exponent_rejected() {
    let neg = hex("05").negated();
    let pos = hex("05");
    assert_eq!(
        exp_l2r(&neg, &pos).unwrap_err(),
        BigintError::NegativeOperand("base must be non-negative")
    );
    assert_eq!(
        exp_l2r(&pos, &neg).unwrap_err(),
        BigintError::NegativeOperand("exponent must be non-negative")
    );
}
