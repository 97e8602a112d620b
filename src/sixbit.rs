//! Six-bit ASCII text encoding for AIS messages
//!
//! Names, callsigns, destinations and safety-related texts travel as
//! sequences of 6-bit codes drawn from the 64-symbol AIS character table.

use crate::bits::BitField;
use crate::error::{EncodeError, Result};

/// The AIS six-bit character table
///
/// A character's zero-based position is its 6-bit code. `@` (code 0) doubles
/// as the filler symbol for unused trailing positions. `-` appears twice in
/// the table; lookups resolve to the first occurrence, code 31.
pub const CHARSET: &str = "@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^- !\"#$%&'()*+,-./0123456789:;<=>?";

/// Six-bit text encoder
pub struct SixBitEncoder;

impl SixBitEncoder {
    /// Look up the 6-bit code of a single character
    ///
    /// Input is upper-cased first; characters outside the table are a
    /// reportable error rather than an arbitrary bit pattern.
    pub fn code(c: char) -> Result<u64> {
        let upper = c.to_ascii_uppercase();
        match CHARSET.find(upper) {
            // CHARSET is pure ASCII, so the byte index is the symbol index
            Some(index) => Ok(index as u64),
            None => Err(EncodeError::unmappable_character(format!(
                "Character {:?} is not in the six-bit alphabet",
                c
            ))),
        }
    }

    /// Encode text as concatenated 6-bit codes
    ///
    /// Upper-cases the input and truncates it to `max_chars` characters.
    /// The result is `6 * min(chars, max_chars)` bits long.
    pub fn encode(text: &str, max_chars: usize) -> Result<String> {
        let mut bits = String::with_capacity(6 * max_chars);
        for c in text.chars().take(max_chars) {
            bits.push_str(&BitField::unsigned(Self::code(c)?, 6)?);
        }
        Ok(bits)
    }

    /// Encode text into a fixed-width field
    ///
    /// Like [`encode`](Self::encode), then right-padded with zero bits up to
    /// `total_bits` (120 for 20-character names, 42 for 7-character
    /// callsigns).
    pub fn encode_field(text: &str, max_chars: usize, total_bits: usize) -> Result<String> {
        let mut bits = Self::encode(text, max_chars)?;
        while bits.len() < total_bits {
            bits.push('0');
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_size() {
        assert_eq!(CHARSET.chars().count(), 64);
    }

    #[test]
    fn test_code_lookup() -> Result<()> {
        assert_eq!(SixBitEncoder::code('@')?, 0);
        assert_eq!(SixBitEncoder::code('A')?, 1);
        assert_eq!(SixBitEncoder::code('Z')?, 26);
        assert_eq!(SixBitEncoder::code(' ')?, 32);
        assert_eq!(SixBitEncoder::code('0')?, 48);
        assert_eq!(SixBitEncoder::code('?')?, 63);
        // Lower case maps through upper case
        assert_eq!(SixBitEncoder::code('a')?, 1);
        // '-' occurs twice in the table, first occurrence wins
        assert_eq!(SixBitEncoder::code('-')?, 31);
        Ok(())
    }

    #[test]
    fn test_unmappable_character() {
        assert!(SixBitEncoder::code('~').is_err());
        assert!(SixBitEncoder::code('ä').is_err());
        assert!(SixBitEncoder::encode("BÅT", 20).is_err());
    }

    #[test]
    fn test_encode_truncates() -> Result<()> {
        let bits = SixBitEncoder::encode("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 20)?;
        assert_eq!(bits.len(), 120);
        Ok(())
    }

    #[test]
    fn test_encode_field_padding() -> Result<()> {
        // Full 20-character name: 120 bits of content, no padding
        let bits = SixBitEncoder::encode_field("01234567890123456789", 20, 120)?;
        assert_eq!(bits.len(), 120);
        assert_eq!(&bits[0..6], "110000"); // '0' = 48

        // 1-character name: 6 content bits then 114 zero bits
        let bits = SixBitEncoder::encode_field("A", 20, 120)?;
        assert_eq!(bits.len(), 120);
        assert_eq!(&bits[0..6], "000001");
        assert!(bits[6..].chars().all(|b| b == '0'));
        Ok(())
    }
}
