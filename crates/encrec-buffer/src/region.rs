//! Pre-allocated SDRAM regions.
//!
//! A [`Region`] is a contiguous block of 32-bit words at a fixed SDRAM
//! address. It is allocated to full size up front and never grows; the
//! recording buffer writes into it and the host reads it back after the
//! run.

use encrec_core::{RecordingError, SdramAddress, Value};

/// A contiguous, word-addressed block of SDRAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// SDRAM address of word 0.
    address: SdramAddress,
    /// Backing storage, allocated to full size at creation.
    words: Vec<u32>,
}

impl Region {
    /// Allocate `len_words` zeroed words at `address`.
    ///
    /// Returns `Err(RecordingError::MisalignedAddress)` if `address` is
    /// not word aligned.
    pub fn new(address: SdramAddress, len_words: usize) -> Result<Self, RecordingError> {
        Self::from_words(address, vec![0; len_words])
    }

    /// Wrap existing words (e.g. a region image read back from a board).
    pub fn from_words(address: SdramAddress, words: Vec<u32>) -> Result<Self, RecordingError> {
        if !address.is_word_aligned() {
            return Err(RecordingError::MisalignedAddress { address });
        }
        Ok(Self { address, words })
    }

    /// A zero-length region at address 0.
    ///
    /// Backs buffers whose initialisation failed; nothing is ever written
    /// to it.
    pub fn empty() -> Self {
        Self {
            address: SdramAddress(0),
            words: Vec::new(),
        }
    }

    /// SDRAM address of the first word.
    pub fn address(&self) -> SdramAddress {
        self.address
    }

    /// SDRAM address of the word at `offset`, or `None` if it would
    /// overflow the 32-bit address space.
    pub fn address_of(&self, offset: usize) -> Option<SdramAddress> {
        self.address.offset_words(offset)
    }

    /// Total size in words.
    pub fn len_words(&self) -> usize {
        self.words.len()
    }

    /// Whether the region has no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Size of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u32>()
    }

    /// Read the word at `offset`.
    pub fn word(&self, offset: usize) -> Option<u32> {
        self.words.get(offset).copied()
    }

    /// Overwrite the word at `offset`. Returns `false` if out of range.
    pub fn set_word(&mut self, offset: usize, value: u32) -> bool {
        match self.words.get_mut(offset) {
            Some(w) => {
                *w = value;
                true
            }
            None => false,
        }
    }

    /// All words in the region.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Get a shared slice at the given word offset and length.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the region.
    pub fn slice(&self, offset: usize, len: usize) -> &[u32] {
        &self.words[offset..offset + len]
    }

    /// Decode `len` words starting at `offset` as fixed-point values.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the region.
    pub fn values(&self, offset: usize, len: usize) -> impl Iterator<Item = Value> + '_ {
        self.slice(offset, len).iter().map(|&w| Value::from_bits(w))
    }

    /// Copy `values` into the region starting at `offset`.
    ///
    /// Callers check capacity first; this is the raw block copy.
    #[inline]
    pub(crate) fn copy_values(&mut self, offset: usize, values: &[Value]) {
        let dst = &mut self.words[offset..offset + values.len()];
        for (slot, v) in dst.iter_mut().zip(values) {
            *slot = v.to_bits();
        }
    }

    /// Consume the region and return its words.
    pub fn into_words(self) -> Vec<u32> {
        self.words
    }
}
