//! Barrett reduction (`SPEC_FULL.md` §4.5).
//!
//! Reduction composes multiplication and division, per the control-flow
//! rule in `SPEC_FULL.md` §2: it has no algorithm of its own beyond
//! wiring those two together around a pre-computed reciprocal.

use std::cmp::Ordering;

use super::addsub::sub;
use super::core::Bigint;
use super::div::binary_long_divide;
use super::error::BigintError;
use super::mul::karatsuba_multiply;

/// `T = floor(RADIX^(2n) / N)` where `n = digit_num(N)`.
///
/// Requires `N` to be a positive, refined modulus; anything else is an
/// invalid-modulus precondition violation (`SPEC_FULL.md` §4.5, §7).
pub fn barrett_pre_compute(modulus: &Bigint) -> Result<Bigint, BigintError> {
    if modulus.is_zero() || modulus.sign().is_negative() {
        return Err(BigintError::InvalidModulus);
    }

    let n = modulus.digit_num();
    let dividend = Bigint::one().expand_words(2 * n);
    let dr = binary_long_divide(&dividend, modulus)?;
    Ok(dr.quotient)
}

/// `A mod N`, given `0 <= A < RADIX^(2n)` and the pre-computed reciprocal
/// `T` from [`barrett_pre_compute`].
pub fn barrett_reduce(a: &Bigint, modulus: &Bigint, reciprocal: &Bigint) -> Bigint {
    debug_assert!(!modulus.is_zero(), "barrett_reduce requires N > 0");

    let n = modulus.digit_num();
    let shifted = a.compress_words(n.saturating_sub(1));
    let q_hat = karatsuba_multiply(&shifted, reciprocal).compress_words(n + 1);

    let mut r = sub(a, &karatsuba_multiply(&q_hat, modulus));
    while r.compare_abs(modulus) != Ordering::Less {
        r = sub(&r, modulus);
    }

    r
}
