//! Division (`SPEC_FULL.md` §4.4): special-case filter, binary long
//! division, the two-word sub-divider, the normalized DIVCC/DIVC steps,
//! multi-word long division, and the naive reference divider.

use std::cmp::Ordering;
use std::ops::Div;

use tracing::error;

use super::addsub::{add, sub};
use super::core::Bigint;
use super::error::BigintError;
use super::mul::schoolbook_multiply;
use super::sign::Sign;
use super::word::{WORD_BITS, WORD_MSB, Word};

/// Outcome of the `X = Y*Q + R` division relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivRem {
    pub quotient: Bigint,
    pub remainder: Bigint,
}

/// Precondition/special-case filter shared by every division entry point.
///
/// Returns `Ok(Some(result))` if the inputs hit an error or special case
/// and no further division work is needed; `Ok(None)` if real division
/// work remains; `Err` is never actually produced here (kept as `Result`
/// only so callers compose uniformly with the rest of the fallible
/// surface) — precondition failures are reported as `Ok(Some(Err(..)))`-
/// shaped zero results per `SPEC_FULL.md` §7, not as an early `Err` return,
/// since the filter's whole job is to decide *what* result to hand back.
fn special_case(dividend: &Bigint, divisor: &Bigint) -> Option<Result<DivRem, BigintError>> {
    if divisor.is_zero() {
        return Some(Err(BigintError::DivisionByZero));
    }
    if divisor.sign().is_negative() || dividend.sign().is_negative() {
        return Some(Err(BigintError::NegativeOperand(
            "dividend and divisor must be non-negative",
        )));
    }
    if dividend.compare_abs(divisor) == Ordering::Less {
        return Some(Ok(DivRem {
            quotient: Bigint::zero(),
            remainder: dividend.clone(),
        }));
    }
    if divisor.is_one() {
        return Some(Ok(DivRem {
            quotient: dividend.clone(),
            remainder: Bigint::zero(),
        }));
    }
    None
}

/// `B = AQ + R (0 <= R < B)` via bit-at-a-time binary long division.
/// Used directly by exponentiation's Barrett pre-compute step and kept as
/// the slow reference implementation [`word_long_divide`] is checked
/// against (`SPEC_FULL.md` §8 "division equivalence").
pub fn binary_long_divide(dividend: &Bigint, divisor: &Bigint) -> Result<DivRem, BigintError> {
    if let Some(result) = special_case(dividend, divisor) {
        return result;
    }

    let mut remainder = Bigint::zero();
    let mut quotient = Bigint::zero();

    let bit_len = dividend.bit_length();
    for j in (0..bit_len).rev() {
        remainder = remainder.expand_one_bit();
        if dividend.get_bit(j) == 1 {
            remainder = add(&remainder, &Bigint::one());
        }

        if remainder.compare_abs(divisor) != Ordering::Less {
            remainder = sub(&remainder, divisor);
            quotient = add(&quotient, &power_of_two(j));
        }
    }

    Ok(DivRem {
        quotient,
        remainder,
    })
}

fn power_of_two(bit: usize) -> Bigint {
    let mut bi = Bigint::one();
    for _ in 0..bit {
        bi = bi.expand_one_bit();
    }
    bi
}

/// Divides the 2-word value `a_hi*RADIX + a_lo` by a normalized
/// `b in [RADIX/2, RADIX)`, given `a_hi < b`. Returns the single-word
/// quotient; the bounds guarantee the running remainder always fits in
/// one word (`SPEC_FULL.md` §4.4).
pub fn two_word_divide(a_hi: Word, a_lo: Word, b: Word) -> Word {
    debug_assert!(b >= WORD_MSB, "two_word_divide requires a normalized divisor");
    debug_assert!(a_hi < b, "two_word_divide requires a_hi < b");

    let mut q: Word = 0;
    let mut r: Word = a_hi;

    for j in (0..WORD_BITS).rev() {
        let bit = (a_lo >> j) & 1;
        if r & WORD_MSB != 0 {
            // r's top bit is set: 2*r would overflow a Word, so fold the
            // subtraction of b into the doubling instead of doing it
            // afterwards.
            q |= 1 << j;
            r = r.wrapping_shl(1).wrapping_add(bit).wrapping_sub(b);
        } else {
            r = (r << 1) | bit;
            if r >= b {
                q |= 1 << j;
                r -= b;
            }
        }
    }

    q
}

/// The normalized core division step: requires `Y`'s top word `>= RADIX/2`
/// and `n in {m, m+1}` where `n = digit_num(X)`, `m = digit_num(Y)`, and
/// `X < Y*RADIX`. Returns a single-word quotient and its remainder.
pub fn divcc(x: &Bigint, y: &Bigint) -> (Word, Bigint) {
    let n = x.digit_num();
    let m = y.digit_num();
    debug_assert!(n == m || n == m + 1, "divcc requires n in {{m, m+1}}");
    debug_assert!(
        y.digits()[m - 1] >= WORD_MSB,
        "divcc requires a normalized divisor"
    );

    let mut q: Word = if n == m {
        x.digits()[m - 1] / y.digits()[m - 1]
    } else if x.digits()[m] == y.digits()[m - 1] {
        Word::MAX
    } else {
        two_word_divide(x.digits()[m], x.digits()[m - 1], y.digits()[m - 1])
    };

    let q_bigint = |q: Word| Bigint::from_parts(Sign::Positive, vec![q]);
    let mut remainder = sub(x, &schoolbook_multiply(y, &q_bigint(q)));

    // At most two corrections: the quotient estimate can overshoot by one
    // or (rarely) two when n = m+1.
    while remainder.sign().is_negative() {
        q -= 1;
        remainder = add(&remainder, y);
    }

    if let Err(e) = remainder.check_invariant() {
        error!(error = %e, "divcc produced an unrefined remainder");
    }

    (q, remainder)
}

/// One word of quotient, normalizing the divisor's top word into
/// `[RADIX/2, RADIX)` first and un-normalizing the remainder afterward.
pub fn divc(x: &Bigint, y: &Bigint) -> (Word, Bigint) {
    if x.compare_abs(y) == Ordering::Less {
        return (0, x.clone());
    }

    let m = y.digit_num();
    let mut k = 0u32;
    let mut top = y.digits()[m - 1];
    while top < WORD_MSB {
        top <<= 1;
        k += 1;
    }

    let mut x_prime = x.clone();
    let mut y_prime = y.clone();
    for _ in 0..k {
        x_prime = x_prime.expand_one_bit();
        y_prime = y_prime.expand_one_bit();
    }

    let (q, r_prime) = divcc(&x_prime, &y_prime);

    let mut r = r_prime;
    for _ in 0..k {
        r = r.compress_one_bit();
    }

    (q, r)
}

/// Top-level multi-word long division: `X = Y*Q + R`.
///
/// For each digit of `X`, most-significant first, folds it onto the
/// running remainder and peels off one word of quotient via [`divc`].
pub fn word_long_divide(dividend: &Bigint, divisor: &Bigint) -> Result<DivRem, BigintError> {
    if let Some(result) = special_case(dividend, divisor) {
        return result;
    }

    let n = dividend.digit_num();
    let mut remainder = Bigint::zero();
    let mut quotient = Bigint::zero();

    for i in (0..n).rev() {
        let digit_i = Bigint::from_parts(Sign::Positive, vec![dividend.digits()[i]]);
        let dividend_i = add(&remainder.expand_words(1), &digit_i);
        let (q_i, r) = divc(&dividend_i, divisor);
        remainder = r;
        quotient = add(
            &quotient.expand_words(1),
            &Bigint::from_parts(Sign::Positive, vec![q_i]),
        );
    }

    Ok(DivRem {
        quotient,
        remainder,
    })
}

/// Reference-only repeated-subtraction divider. Not used by any higher
/// layer (exponentiation, Barrett reduction) — kept so property tests can
/// cross-check [`word_long_divide`] on small operands
/// (`SPEC_FULL.md` §4.4 "naive_divide").
pub fn naive_divide(dividend: &Bigint, divisor: &Bigint) -> Result<DivRem, BigintError> {
    if let Some(result) = special_case(dividend, divisor) {
        return result;
    }

    let mut quotient = Bigint::zero();
    let mut remainder = dividend.clone();
    let one = Bigint::one();

    while remainder.compare_abs(divisor) != Ordering::Less {
        quotient = add(&quotient, &one);
        remainder = sub(&remainder, divisor);
    }

    Ok(DivRem {
        quotient,
        remainder,
    })
}

impl Div for &Bigint {
    type Output = Result<Bigint, BigintError>;
    fn div(self, rhs: &Bigint) -> Result<Bigint, BigintError> {
        word_long_divide(self, rhs).map(|dr| dr.quotient)
    }
}
