//! Arbitrary-precision arithmetic for cryptographic workloads
//!
//! This crate provides a sign-magnitude big integer type and the word-level
//! kernel it is built from: addition/subtraction with explicit
//! carry/borrow, schoolbook and Karatsuba multiplication, word-recursive
//! long division (the DIVCC/DIVC steps and their normalized two-word
//! sub-divider), Barrett reduction, and both left-to-right and
//! Montgomery-ladder exponentiation — reduced or unreduced.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are explicit in their semantics and suitable for
//! security-critical code such as RSA modular exponentiation.
//!
//! # Module overview
//!
//! - `bigint`
//!   The arithmetic kernel: the `Bigint` type and every operation built on
//!   top of it. This is the crate's entire public surface.
//!
//! - `cli`
//!   The `autobahn-cli` binary's argument parsing and test-vector harness,
//!   kept in the library so it can be exercised from integration tests.
//!
//! - `os`
//!   Low-level, non-cryptographic, platform-specific entropy access used by
//!   `rng`. Environment-facing helpers only; no cryptographic logic lives
//!   here.
//!
//! - `rng`
//!   Cryptographically secure pseudorandom number generation built from
//!   internal primitives. These generators rely on the `os` module for
//!   initial entropy while providing deterministic and auditable
//!   randomness expansion. `bigint` consumes this through the
//!   `RandomSource` trait rather than depending on it directly.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and supporting utilities
//!
//! This crate is not intended to replace full-featured, externally audited
//! bignum libraries, but to serve as a small, controlled foundation for
//! RSA-style modular arithmetic.

mod os;

pub mod bigint;
pub mod cli;
pub mod rng;
