//! Error taxonomy for the arithmetic kernel (`SPEC_FULL.md` §7).

use thiserror::Error;

/// Failure surface for fallible `Bigint` operations.
///
/// Allocation failure is deliberately absent: a `Vec<Word>` allocation
/// failure aborts the process the same way any other Rust allocation
/// failure does, rather than being modeled as a recoverable variant here
/// (see `DESIGN.md`, Open Question 2).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BigintError {
    /// Division or reduction with a zero divisor/modulus.
    #[error("divisor must be non-zero")]
    DivisionByZero,

    /// Division, reduction, or exponentiation given a negative operand
    /// where the operation requires non-negative input.
    #[error("operand must be non-negative: {0}")]
    NegativeOperand(&'static str),

    /// A modulus passed to Barrett pre-computation/reduction was zero or
    /// otherwise not a valid modulus (e.g. not refined).
    #[error("invalid modulus")]
    InvalidModulus,

    /// A normalization step produced a result that violates the `refine`
    /// invariant (top digit zero with `digit_num > 1`). `refine` is always
    /// called before returning, so this should be unreachable through any
    /// public code path; it exists so an embedding caller gets a `Result`
    /// instead of a panic if it ever is.
    #[error("internal invariant violation: {0}")]
    Invariant(&'static str),
}
