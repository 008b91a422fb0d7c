use autobahn_bigint::bigint::{Bigint, Sign};

#[test]
fn round_trips_multiword_value() {
    let s = "123456789abcdef0fedcba9876543210";
    let x = Bigint::parse_hex(s, Sign::Positive);
    assert_eq!(x.to_hex(), format!("0x{s}"));
}

#[test]
fn negative_sign_prefixes_output() {
    let x = Bigint::parse_hex("ff", Sign::Negative);
    assert_eq!(x.to_hex(), "-0xff");
}

#[test]
fn zero_parses_and_formats_canonically() {
    let x = Bigint::parse_hex("00000000", Sign::Negative);
    assert_eq!(x.sign(), Sign::Positive);
    assert_eq!(x.to_hex(), "0x0");
}

#[test]
fn invalid_characters_are_treated_as_zero() {
    let with_junk = Bigint::parse_hex("1g2h3i", Sign::Positive);
    let clean = Bigint::parse_hex("102030", Sign::Positive);
    assert_eq!(with_junk, clean);
}

#[test]
fn empty_string_is_zero() {
    assert!(Bigint::parse_hex("", Sign::Positive).is_zero());
}

#[test]
fn top_word_is_unpadded_but_lower_words_are_zero_padded() {
    let x = Bigint::parse_hex("1000000001", Sign::Positive);
    assert_eq!(x.to_hex(), "0x1000000001");
}
