//! Strongly-typed SDRAM addresses.

use std::fmt;

/// Size of one SDRAM word in bytes.
pub const WORD_BYTES: u32 = 4;

/// A byte address in SDRAM.
///
/// Regions and buffer positions are tracked as word offsets internally;
/// this type exists for reporting positions in the address space the
/// embedding platform uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SdramAddress(pub u32);

impl SdramAddress {
    /// Whether the address falls on a word boundary.
    pub fn is_word_aligned(self) -> bool {
        self.0 % WORD_BYTES == 0
    }

    /// Address `words` words past this one, or `None` on overflow.
    pub fn offset_words(self, words: usize) -> Option<Self> {
        let words = u32::try_from(words).ok()?;
        let bytes = words.checked_mul(WORD_BYTES)?;
        self.0.checked_add(bytes).map(Self)
    }
}

impl fmt::Display for SdramAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_words_advances_by_word_size() {
        let a = SdramAddress(0x2000);
        assert_eq!(a.offset_words(2), Some(SdramAddress(0x2008)));
    }

    #[test]
    fn offset_words_overflow_is_none() {
        assert_eq!(SdramAddress(u32::MAX - 3).offset_words(1), None);
    }

    #[test]
    fn alignment() {
        assert!(SdramAddress(0x1000).is_word_aligned());
        assert!(!SdramAddress(0x1002).is_word_aligned());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(SdramAddress(0x2000).to_string(), "0x00002000");
    }
}
