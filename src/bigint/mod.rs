//! Arbitrary-precision signed integer arithmetic for cryptographic
//! workloads: addition, subtraction, schoolbook and Karatsuba
//! multiplication, word-recursive long division, Barrett reduction, and
//! both left-to-right and Montgomery-ladder exponentiation
//! (`SPEC_FULL.md`).

mod addsub;
mod core;
mod div;
mod error;
mod exp;
mod hex;
mod mul;
mod reduce;
mod rng;
mod sign;
mod word;

pub use addsub::{add, sub, unsigned_add, unsigned_sub, word_add_with_carry, word_sub_with_borrow};
pub use core::Bigint;
pub use div::{DivRem, binary_long_divide, divc, divcc, naive_divide, two_word_divide, word_long_divide};
pub use error::BigintError;
pub use exp::{exp_l2r, exp_mod_l2r, exp_mod_montgomery, exp_montgomery};
pub use mul::{karatsuba_multiply, schoolbook_multiply, square, word_multiply, word_multiply_split};
pub use reduce::{barrett_pre_compute, barrett_reduce};
pub use rng::{CountingSource, RandomSource};
pub use sign::Sign;
pub use word::{DWord, KARATSUBA_THRESHOLD, RADIX, WORD_BITS, WORD_MSB, Word};
