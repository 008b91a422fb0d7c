//! Hex string parsing/formatting (`SPEC_FULL.md` §6).

use tracing::warn;

use super::core::Bigint;
use super::sign::Sign;
use super::word::{WORD_BITS, WORD_HEX_DIGITS, Word};

impl Bigint {
    /// Parses `s` as big-endian hex (case-insensitive, no `0x` prefix, no
    /// sign character, no embedded whitespace) into a refined bigint of
    /// the given sign.
    ///
    /// Any character outside `[0-9a-fA-F]` is treated as the nibble `0`
    /// rather than rejected — this is the documented, warning-worthy
    /// behaviour carried over from the original parser (`SPEC_FULL.md` §9);
    /// a single `tracing::warn!` is emitted per call if any such character
    /// was seen, not once per character.
    pub fn parse_hex(s: &str, sign: Sign) -> Bigint {
        let chars: Vec<char> = s.chars().collect();
        let len = chars.len();
        if len == 0 {
            return Bigint::zero();
        }

        let hex_digits_per_word = WORD_HEX_DIGITS;
        let digit_num = len.div_ceil(hex_digits_per_word);
        let mut digits = vec![0 as Word; digit_num];
        let mut saw_invalid = false;

        // Walk the string from the least-significant character, four bits
        // at a time, mirroring the original right-justified parse.
        let mut remaining = len;
        for digit in digits.iter_mut() {
            let mut value: Word = 0;
            for shift in (0..WORD_BITS).step_by(4) {
                if remaining == 0 {
                    break;
                }
                remaining -= 1;
                let c = chars[remaining];
                let nibble = match c.to_digit(16) {
                    Some(v) => v as Word,
                    None => {
                        saw_invalid = true;
                        0
                    }
                };
                value += nibble << shift;
            }
            *digit = value;
        }

        if saw_invalid {
            warn!("hex parse: non-hex character treated as zero");
        }

        Bigint::from_parts(sign, digits)
    }

    /// Formats as `[-]0x<hex>`, big-endian, the top word unpadded and each
    /// remaining word padded to `WORD_HEX_DIGITS` characters.
    pub fn to_hex(&self) -> String {
        let digits = self.digits();
        let mut out = String::new();

        if self.sign().is_negative() {
            out.push('-');
        }
        out.push_str("0x");

        out.push_str(&format!("{:x}", digits[digits.len() - 1]));
        for &d in digits[..digits.len() - 1].iter().rev() {
            out.push_str(&format!("{:0width$x}", d, width = WORD_HEX_DIGITS));
        }

        out
    }
}
