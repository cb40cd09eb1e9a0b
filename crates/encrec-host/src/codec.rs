//! Byte-level transfer of region images.
//!
//! A region image on the wire is its words in order, each a little-endian
//! `u32`. There is no header: the SDRAM address and length travel out of
//! band, exactly as they do when reading a block of board memory.

use std::io::{self, Read, Write};

use encrec_buffer::Region;
use encrec_core::{SdramAddress, WORD_BYTES};

use crate::error::HostError;

/// Upper bound on words reserved before any are read. Larger images grow
/// as words arrive, so a bogus length fails as `Truncated` rather than
/// allocating up front.
const PREALLOC_WORDS: usize = 1 << 16;

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), HostError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, HostError> {
    let mut buf = [0u8; WORD_BYTES as usize];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Write every word of `region` to `w`.
pub fn encode_region(w: &mut dyn Write, region: &Region) -> Result<(), HostError> {
    for &word in region.words() {
        write_u32_le(w, word)?;
    }
    Ok(())
}

/// Read `n_words` words from `r` into a region at `address`.
///
/// Fails with `Truncated` if the stream ends early, reporting how many
/// whole words were read.
pub fn decode_region(
    r: &mut dyn Read,
    address: SdramAddress,
    n_words: usize,
) -> Result<Region, HostError> {
    let mut words = Vec::with_capacity(n_words.min(PREALLOC_WORDS));
    for read_words in 0..n_words {
        match read_u32_le(r) {
            Ok(word) => words.push(word),
            Err(HostError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(HostError::Truncated {
                    expected_words: n_words,
                    read_words,
                });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(Region::from_words(address, words)?)
}
