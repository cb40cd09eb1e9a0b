//! Typed view of a recording region's header.
//!
//! The region convention is a single enable-flag word followed directly by
//! the data area. [`RegionDescriptor::parse`] reads that convention once
//! so the buffer never does address arithmetic on the raw layout.

use encrec_core::RecordingError;

use crate::region::Region;

/// Word offset of the enable flag.
pub const FLAG_WORD: usize = 0;

/// Word offset of the first data element.
pub const DATA_OFFSET: usize = FLAG_WORD + 1;

/// Parsed header of a recording region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionDescriptor {
    /// Whether the flag word requests recording.
    pub enabled: bool,
    /// Word offset of the first data element; always [`DATA_OFFSET`].
    pub data_offset: usize,
    /// Number of data elements available after the flag word.
    pub data_capacity: usize,
}

impl RegionDescriptor {
    /// Parse the header of `region`.
    ///
    /// Any non-zero flag word enables recording. Fails with
    /// `RegionTooSmall` if the region has no room for the flag.
    pub fn parse(region: &Region) -> Result<Self, RecordingError> {
        let flag = region
            .word(FLAG_WORD)
            .ok_or(RecordingError::RegionTooSmall {
                words: region.len_words(),
            })?;
        Ok(Self {
            enabled: flag != 0,
            data_offset: DATA_OFFSET,
            data_capacity: region.len_words() - DATA_OFFSET,
        })
    }
}
