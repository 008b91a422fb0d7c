//! Addition and subtraction (`SPEC_FULL.md` §4.2).

use std::ops::{Add, Neg, Sub};

use super::core::Bigint;
use super::sign::Sign;
use super::word::Word;

/// `(sum, carry_out) = x + y + c_in`, all arithmetic mod `RADIX`.
pub fn word_add_with_carry(x: Word, y: Word, c_in: Word) -> (Word, Word) {
    let mut r = x.wrapping_add(y);
    let mut c_out = (r < x) as Word;
    r = r.wrapping_add(c_in);
    c_out += (r < c_in) as Word;
    (r, c_out)
}

/// `(diff, borrow_out) = x - y - b_in`, all arithmetic mod `RADIX`.
pub fn word_sub_with_borrow(x: Word, y: Word, b_in: Word) -> (Word, Word) {
    let mut r = x.wrapping_sub(y);
    let mut b_out = (x < y) as Word;
    b_out += (r < b_in) as Word;
    r = r.wrapping_sub(b_in);
    (r, b_out)
}

/// Adds magnitudes word-by-word, ignoring sign. `y` is virtually
/// zero-padded to `x`'s width if shorter; the result gets one extra slot
/// for a possible final carry, then is refined. The caller is responsible
/// for ordering `x`/`y` by magnitude beforehand if that matters to it —
/// this function itself works for either order since the shorter operand
/// is simply padded with zero digits.
pub fn unsigned_add(x: &Bigint, y: &Bigint) -> Bigint {
    let n = x.digit_num().max(y.digit_num());
    let mut digits = vec![0 as Word; n + 1];
    let mut carry: Word = 0;

    for i in 0..n {
        let xi = x.digits().get(i).copied().unwrap_or(0);
        let yi = y.digits().get(i).copied().unwrap_or(0);
        let (sum, c) = word_add_with_carry(xi, yi, carry);
        digits[i] = sum;
        carry = c;
    }
    digits[n] = carry;

    Bigint::from_parts(Sign::Positive, digits)
}

/// Subtracts magnitudes word-by-word, ignoring sign. Requires
/// `|x| >= |y|`; the result has `x.digit_num()` digits before refining.
pub fn unsigned_sub(x: &Bigint, y: &Bigint) -> Bigint {
    debug_assert!(x.compare_abs(y) != std::cmp::Ordering::Less);

    let n = x.digit_num();
    let mut digits = vec![0 as Word; n];
    let mut borrow: Word = 0;

    for i in 0..n {
        let xi = x.digits()[i];
        let yi = y.digits().get(i).copied().unwrap_or(0);
        let (diff, b) = word_sub_with_borrow(xi, yi, borrow);
        digits[i] = diff;
        borrow = b;
    }

    Bigint::from_parts(Sign::Positive, digits)
}

/// Signed addition, dispatching to `sub` when the signs differ.
pub fn add(x: &Bigint, y: &Bigint) -> Bigint {
    match (x.sign(), y.sign()) {
        (Sign::Positive, Sign::Negative) => sub(x, &y.clone().negated()),
        (Sign::Negative, Sign::Positive) => sub(y, &x.clone().negated()),
        (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
            let common = x.sign();
            let mut result = if x.compare_abs(y) != std::cmp::Ordering::Less {
                unsigned_add(x, y)
            } else {
                unsigned_add(y, x)
            };
            result.set_sign_if_nonzero(common);
            result
        }
    }
}

/// Signed subtraction, dispatching to `add` when the signs differ.
pub fn sub(x: &Bigint, y: &Bigint) -> Bigint {
    if x == y {
        return Bigint::zero();
    }

    match (x.sign(), y.sign()) {
        (Sign::Positive, Sign::Negative) => {
            let mut result = add(x, &y.clone().negated());
            result.set_sign_if_nonzero(Sign::Positive);
            result
        }
        (Sign::Negative, Sign::Positive) => {
            let mut result = add(&x.clone().negated(), y);
            result.set_sign_if_nonzero(Sign::Negative);
            result
        }
        (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
            // The wrapper always orders operands by magnitude before
            // calling the unsigned primitive (SPEC_FULL.md §9 — the
            // source only propagates borrow correctly when the minuend is
            // at least as large as the subtrahend).
            let common = x.sign();
            if x.compare_abs(y) != std::cmp::Ordering::Less {
                let mut result = unsigned_sub(x, y);
                result.set_sign_if_nonzero(common);
                result
            } else {
                let mut result = unsigned_sub(y, x);
                result.set_sign_if_nonzero(common.flip());
                result
            }
        }
    }
}

impl Bigint {
    /// Flips the sign in place, leaving the magnitude untouched. Zero
    /// stays positive.
    pub fn negated(mut self) -> Self {
        if !self.is_zero() {
            let flipped = self.sign().flip();
            self.set_sign_raw(flipped);
        }
        self
    }

    /// Sets the sign unless the value is zero, in which case zero's sign
    /// stays positive regardless of what was requested.
    pub(super) fn set_sign_if_nonzero(&mut self, sign: Sign) {
        if self.is_zero() {
            return;
        }
        self.set_sign_raw(sign);
    }
}

impl Add for &Bigint {
    type Output = Bigint;
    fn add(self, rhs: &Bigint) -> Bigint {
        add(self, rhs)
    }
}

impl Sub for &Bigint {
    type Output = Bigint;
    fn sub(self, rhs: &Bigint) -> Bigint {
        sub(self, rhs)
    }
}

impl Add for Bigint {
    type Output = Bigint;
    fn add(self, rhs: Bigint) -> Bigint {
        add(&self, &rhs)
    }
}

impl Sub for Bigint {
    type Output = Bigint;
    fn sub(self, rhs: Bigint) -> Bigint {
        sub(&self, &rhs)
    }
}

impl Neg for Bigint {
    type Output = Bigint;
    fn neg(self) -> Bigint {
        self.negated()
    }
}
