//! Exponentiation (`SPEC_FULL.md` §4.6): plain left-to-right exponentiation,
//! the Montgomery-ladder schedule, and both reduced modulo a Barrett-backed
//! modulus.

use super::core::Bigint;
use super::error::BigintError;
use super::mul::{karatsuba_multiply, square};
use super::reduce::{barrett_pre_compute, barrett_reduce};

fn check_non_negative(base: &Bigint, exponent: &Bigint) -> Result<(), BigintError> {
    if base.sign().is_negative() {
        return Err(BigintError::NegativeOperand("base must be non-negative"));
    }
    if exponent.sign().is_negative() {
        return Err(BigintError::NegativeOperand(
            "exponent must be non-negative",
        ));
    }
    Ok(())
}

/// `base ^ exponent`, left-to-right: `R <- 1`; for each bit of `exponent`,
/// most-significant first, `R <- R*R`, then `R <- R*base` if the bit is set.
pub fn exp_l2r(base: &Bigint, exponent: &Bigint) -> Result<Bigint, BigintError> {
    check_non_negative(base, exponent)?;

    let mut r = Bigint::one();
    for j in (0..exponent.bit_length()).rev() {
        r = square(&r);
        if exponent.get_bit(j) == 1 {
            r = karatsuba_multiply(&r, base);
        }
    }
    Ok(r)
}

/// `base ^ exponent` via a Montgomery ladder: both the accumulator `L` and
/// the running value `Rv` are updated on every bit, so the sequence of
/// squarings and multiplications taken is independent of the exponent's
/// bits (`SPEC_FULL.md` §4.6).
pub fn exp_montgomery(base: &Bigint, exponent: &Bigint) -> Result<Bigint, BigintError> {
    check_non_negative(base, exponent)?;

    let mut l = Bigint::one();
    let mut rv = base.clone();

    for j in (0..exponent.bit_length()).rev() {
        if exponent.get_bit(j) == 1 {
            l = karatsuba_multiply(&l, &rv);
            rv = square(&rv);
        } else {
            rv = karatsuba_multiply(&rv, &l);
            l = square(&l);
        }
    }
    Ok(l)
}

/// `base ^ exponent mod modulus`, left-to-right, reducing after every
/// squaring and every multiplication.
pub fn exp_mod_l2r(
    base: &Bigint,
    exponent: &Bigint,
    modulus: &Bigint,
) -> Result<Bigint, BigintError> {
    check_non_negative(base, exponent)?;

    let reciprocal = barrett_pre_compute(modulus)?;
    let reduced_base = barrett_reduce(base, modulus, &reciprocal);

    let mut r = Bigint::one();
    for j in (0..exponent.bit_length()).rev() {
        r = barrett_reduce(&square(&r), modulus, &reciprocal);
        if exponent.get_bit(j) == 1 {
            r = barrett_reduce(&karatsuba_multiply(&r, &reduced_base), modulus, &reciprocal);
        }
    }
    Ok(r)
}

/// `base ^ exponent mod modulus` via the Montgomery ladder, reducing after
/// every squaring and every multiplication so the two branches stay
/// identically shaped regardless of the exponent's bits.
pub fn exp_mod_montgomery(
    base: &Bigint,
    exponent: &Bigint,
    modulus: &Bigint,
) -> Result<Bigint, BigintError> {
    check_non_negative(base, exponent)?;

    let reciprocal = barrett_pre_compute(modulus)?;
    let mut l = Bigint::one();
    let mut rv = barrett_reduce(base, modulus, &reciprocal);

    for j in (0..exponent.bit_length()).rev() {
        if exponent.get_bit(j) == 1 {
            l = barrett_reduce(&karatsuba_multiply(&l, &rv), modulus, &reciprocal);
            rv = barrett_reduce(&square(&rv), modulus, &reciprocal);
        } else {
            rv = barrett_reduce(&karatsuba_multiply(&rv, &l), modulus, &reciprocal);
            l = barrett_reduce(&square(&l), modulus, &reciprocal);
        }
    }
    Ok(l)
}
