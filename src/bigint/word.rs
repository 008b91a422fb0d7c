//! Word-width configuration for the arbitrary-precision arithmetic kernel.
//!
//! The word width is a compile-time, crate-wide constant: every `Bigint`
//! shares the same radix. This is deliberate (see `SPEC_FULL.md` §6,
//! "word-width selection") — the kernel is not generic over word width at
//! runtime.

/// Unsigned base unit of a [`Bigint`](super::Bigint)'s digit buffer.
///
/// Changing this requires also changing [`DWord`] to the next width up and
/// rebuilding; there is no runtime switch.
pub type Word = u32;

/// Double-width type wide enough to hold the full product of two [`Word`]s
/// or a [`Word`] plus a carry/borrow without truncation.
pub type DWord = u64;

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

/// `B = 2^WORD_BITS`, represented in the next-wider type since `B` itself
/// overflows `Word`.
pub const RADIX: DWord = 1 << WORD_BITS;

/// Top bit of a [`Word`], i.e. `0x8000_0000` for `Word = u32`. Derived from
/// the word type rather than hard-coded (`SPEC_FULL.md` §9).
pub const WORD_MSB: Word = 1 << (WORD_BITS - 1);

/// Below this digit count, Karatsuba falls back to the schoolbook
/// multiplier; recursing further would lose to the schoolbook's lower
/// constant factor.
pub const KARATSUBA_THRESHOLD: usize = 2;

/// Number of hex characters needed to print one [`Word`] in full
/// (`2 * WORD_BITS / 8`, per `SPEC_FULL.md` §6 hex-output contract).
pub const WORD_HEX_DIGITS: usize = (WORD_BITS / 4) as usize;
