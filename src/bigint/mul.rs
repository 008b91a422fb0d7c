//! Multiplication and squaring (`SPEC_FULL.md` §4.3).

use std::ops::Mul;

use super::addsub::{add, sub};
use super::core::Bigint;
use super::sign::Sign;
use super::word::{DWord, KARATSUBA_THRESHOLD, Word};

/// Single-word `2W`-bit product: `(high, low) = x * y`.
///
/// `DWord` natively holds the full product, so the widening multiply below
/// is the implementation; the half-split schoolbook algorithm from
/// `SPEC_FULL.md` §4.3 is mathematically equivalent for any `Word` width
/// that lacks a native double-width type, and is kept as
/// [`word_multiply_split`] purely as a cross-checked reference (exercised
/// by `tests/bigint_mul.rs`).
pub fn word_multiply(x: Word, y: Word) -> (Word, Word) {
    let product = x as DWord * y as DWord;
    ((product >> Word::BITS) as Word, product as Word)
}

/// Reference implementation of [`word_multiply`] using the half-width
/// split described in `SPEC_FULL.md` §4.3, kept to demonstrate (and test)
/// that the two give identical results.
pub fn word_multiply_split(x: Word, y: Word) -> (Word, Word) {
    let half = Word::BITS / 2;
    let mask = (1 as Word).wrapping_shl(half).wrapping_sub(1);

    let x_hi = x >> half;
    let x_lo = x & mask;
    let y_hi = y >> half;
    let y_lo = y & mask;

    let m0 = x_hi.wrapping_mul(y_lo);
    let m1 = x_lo.wrapping_mul(y_hi);
    let m2 = x_lo.wrapping_mul(y_lo);
    let m3 = x_hi.wrapping_mul(y_hi);

    let mid = m0.wrapping_add(m1);
    let mid_overflow = mid < m0;

    let low = m2.wrapping_add(mid.wrapping_shl(half));
    let low_overflow = low < m2;

    let high = m3
        .wrapping_add(mid >> half)
        .wrapping_add((mid_overflow as Word) << half)
        .wrapping_add(low_overflow as Word);

    (high, low)
}

/// `O(n*m)` schoolbook multiply: accumulates `word_multiply(x_i, y_j)`
/// expanded by `i+j` words into a `digit_num(x) + digit_num(y)`-wide
/// result.
pub fn schoolbook_multiply(x: &Bigint, y: &Bigint) -> Bigint {
    if x.is_zero() || y.is_zero() {
        return Bigint::zero();
    }

    let n = x.digit_num();
    let m = y.digit_num();
    let mut digits = vec![0 as Word; n + m];

    for (i, &xi) in x.digits().iter().enumerate() {
        if xi == 0 {
            continue;
        }
        let mut carry: Word = 0;
        for (j, &yj) in y.digits().iter().enumerate() {
            let (hi, lo) = word_multiply(xi, yj);
            let (sum1, c1) = super::addsub::word_add_with_carry(digits[i + j], lo, 0);
            let (sum2, c2) = super::addsub::word_add_with_carry(sum1, carry, 0);
            digits[i + j] = sum2;
            carry = hi + c1 + c2;
        }
        // Propagate the remaining carry through any higher digits.
        let mut k = i + m;
        while carry != 0 {
            let (sum, c) = super::addsub::word_add_with_carry(digits[k], carry, 0);
            digits[k] = sum;
            carry = c;
            k += 1;
        }
    }

    let mut out = Bigint::from_parts(Sign::Positive, digits);
    out.force_sign_for_product(Sign::of_product(x.sign(), y.sign()));
    out
}

/// Karatsuba multiplication with a schoolbook base case.
///
/// Splits at `k = ceil(max(n, m) / 2)` — never `min(n, m)`, which breaks
/// for unequal-width operands (`SPEC_FULL.md` §9 REDESIGN FLAG). Both
/// operands are zero-padded to `2k` digits on local copies before
/// splitting, so neither input is mutated. The result's sign is computed
/// once, from the original top-level inputs, never re-derived by XORing a
/// recursive child's sign (the bug flagged in `SPEC_FULL.md` §9).
pub fn karatsuba_multiply(x: &Bigint, y: &Bigint) -> Bigint {
    if x.is_zero() || y.is_zero() {
        return Bigint::zero();
    }

    let sign = Sign::of_product(x.sign(), y.sign());
    let mut magnitude = karatsuba_magnitude(x, y);
    magnitude.force_sign_for_product(sign);
    magnitude
}

/// Recursive magnitude-only Karatsuba (operands always treated as
/// positive); the public sign is attached once by the caller.
fn karatsuba_magnitude(x: &Bigint, y: &Bigint) -> Bigint {
    let n = x.digit_num();
    let m = y.digit_num();
    let smaller = n.min(m);

    if smaller <= KARATSUBA_THRESHOLD {
        return schoolbook_magnitude(x, y);
    }

    let k = n.max(m).div_ceil(2);

    let x_padded = x.padded_to(2 * k);
    let y_padded = y.padded_to(2 * k);

    let x_lo = x_padded.copy_part(0, k);
    let x_hi = x_padded.copy_part(k, 2 * k);
    let y_lo = y_padded.copy_part(0, k);
    let y_hi = y_padded.copy_part(k, 2 * k);

    let h = karatsuba_magnitude(&x_hi, &y_hi);
    let l = karatsuba_magnitude(&x_lo, &y_lo);

    // (x_hi - x_lo) * (y_lo - y_hi); either factor may be negative, so
    // this goes through signed sub/mul, not the magnitude-only recursion.
    let dx = sub(&x_hi, &x_lo);
    let dy = sub(&y_lo, &y_hi);
    let cross = karatsuba_signed(&dx, &dy);

    let m_term = add(&add(&cross, &h), &l);

    add(&add(&h.expand_words(2 * k), &m_term.expand_words(k)), &l)
}

/// Signed Karatsuba used only for the cross term, where either operand
/// may be negative; dispatches to the magnitude recursion and reattaches
/// the product sign.
fn karatsuba_signed(x: &Bigint, y: &Bigint) -> Bigint {
    if x.is_zero() || y.is_zero() {
        return Bigint::zero();
    }
    let sign = Sign::of_product(x.sign(), y.sign());
    let mut magnitude = karatsuba_magnitude(x, y);
    magnitude.force_sign_for_product(sign);
    magnitude
}

fn schoolbook_magnitude(x: &Bigint, y: &Bigint) -> Bigint {
    // schoolbook_multiply already treats sign correctly, but here both
    // inputs are guaranteed positive (Karatsuba splits are always
    // positive), so it is equivalent to call it directly.
    schoolbook_multiply(x, y)
}

/// Squares `x`. Shares the schoolbook/Karatsuba skeleton but computes
/// diagonal terms once and off-diagonal cross terms summed-then-doubled,
/// avoiding the redundant `x_i * x_j` and `x_j * x_i` both being computed
/// by a general `x * x` call.
pub fn square(x: &Bigint) -> Bigint {
    if x.is_zero() {
        return Bigint::zero();
    }

    let n = x.digit_num();
    let mut digits = vec![0 as Word; 2 * n];

    // Off-diagonal terms, each counted once, then doubled via the shift
    // below; accumulate with carry propagation exactly like the
    // schoolbook accumulation loop.
    for i in 0..n {
        let mut carry: Word = 0;
        for j in (i + 1)..n {
            let (hi, lo) = word_multiply(x.digits()[i], x.digits()[j]);
            let (sum1, c1) = super::addsub::word_add_with_carry(digits[i + j], lo, 0);
            let (sum2, c2) = super::addsub::word_add_with_carry(sum1, carry, 0);
            digits[i + j] = sum2;
            carry = hi + c1 + c2;
        }
        let mut k = i + n;
        while carry != 0 {
            let (sum, c) = super::addsub::word_add_with_carry(digits[k], carry, 0);
            digits[k] = sum;
            carry = c;
            k += 1;
        }
    }

    let off_diagonal = Bigint::from_parts(Sign::Positive, digits).expand_one_bit();

    // Diagonal terms x_i^2, added once (not doubled).
    let mut diag_digits = vec![0 as Word; 2 * n];
    for i in 0..n {
        let (hi, lo) = word_multiply(x.digits()[i], x.digits()[i]);
        let (sum, c) = super::addsub::word_add_with_carry(diag_digits[2 * i], lo, 0);
        diag_digits[2 * i] = sum;
        let mut carry = hi + c;
        let mut k = 2 * i + 1;
        while carry != 0 {
            let (sum, c) = super::addsub::word_add_with_carry(diag_digits[k], carry, 0);
            diag_digits[k] = sum;
            carry = c;
            k += 1;
        }
    }
    let diagonal = Bigint::from_parts(Sign::Positive, diag_digits);

    add(&off_diagonal, &diagonal)
}

impl Bigint {
    /// Sets the sign to `sign` unless the magnitude is zero. Named
    /// distinctly from `set_sign_if_nonzero` to make multiplication call
    /// sites read as "this is a product's sign", not an arbitrary mutation.
    pub(super) fn force_sign_for_product(&mut self, sign: Sign) {
        self.set_sign_if_nonzero(sign);
    }
}

impl Mul for &Bigint {
    type Output = Bigint;
    fn mul(self, rhs: &Bigint) -> Bigint {
        karatsuba_multiply(self, rhs)
    }
}

impl Mul for Bigint {
    type Output = Bigint;
    fn mul(self, rhs: Bigint) -> Bigint {
        karatsuba_multiply(&self, &rhs)
    }
}
