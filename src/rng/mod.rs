//! Random number generation module
//!
//! This module provides cryptographically secure randomness facilities
//! used by `bigint`'s `RandomSource` implementation.
//!
//! It is built around a ChaCha20-based deterministic random bit generator
//! (DRBG) and exposes a high-level CSPRNG interface suitable for
//! security-critical use cases such as random prime candidates and nonces.

pub(crate) mod chacha20drbg;
mod csprng;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the primary entry point for generating secure randomness
/// within this crate.
pub use csprng::Csprng;
