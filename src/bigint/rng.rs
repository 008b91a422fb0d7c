//! Injectable random byte source (`SPEC_FULL.md` §6, §9 Open Question 3).
//!
//! The arithmetic kernel never reaches for randomness itself; callers hand
//! it a `&mut dyn RandomSource` when they want a random [`Bigint`] (e.g. for
//! RSA prime candidates). This crate's existing ChaCha20 DRBG (`crate::rng`)
//! is reused unmodified as the default production source.

use crate::rng::Csprng;

/// A source of cryptographically-strong (or, for tests, reproducible)
/// random bytes.
///
/// Mirrors the `fill(buffer, count)` contract of `SPEC_FULL.md` §6: the
/// buffer length *is* the count, so there is nothing more to parametrize.
pub trait RandomSource {
    fn fill_bytes(&mut self, out: &mut [u8]);
}

impl RandomSource for Csprng {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        Csprng::fill_bytes(self, out)
    }
}

/// Deterministic, non-cryptographic source for reproducible test vectors.
///
/// Produces bytes from a simple linear-congruential stream rather than any
/// cryptographic primitive — suitable only for tests that need the same
/// "random" `Bigint` across runs, never for key material.
pub struct CountingSource {
    state: u64,
}

impl CountingSource {
    pub fn new(seed: u64) -> Self {
        CountingSource { state: seed | 1 }
    }
}

impl RandomSource for CountingSource {
    fn fill_bytes(&mut self, out: &mut [u8]) {
        for byte in out.iter_mut() {
            // A minimal-standard LCG; period and distribution are
            // irrelevant here, only reproducibility.
            self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
            *byte = (self.state >> 56) as u8;
        }
    }
}
