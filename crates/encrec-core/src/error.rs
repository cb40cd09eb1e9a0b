//! Error types for recording regions and buffers.

use thiserror::Error;

use crate::id::SdramAddress;

/// Errors raised while preparing or writing a recording region.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordingError {
    /// No region was supplied to initialise from.
    #[error("no recording region supplied")]
    NullRegion,
    /// The region cannot hold even the enable flag word.
    #[error("recording region too small: {words} words, need at least 1")]
    RegionTooSmall {
        /// Number of words in the region.
        words: usize,
    },
    /// A region base address that is not word aligned.
    #[error("recording region address {address} is not word aligned")]
    MisalignedAddress {
        /// The offending address.
        address: SdramAddress,
    },
    /// A write would run past the end of the region.
    #[error("recording capacity exceeded: requested {requested} elements, {remaining} remaining")]
    CapacityExceeded {
        /// Number of elements the write needed.
        requested: usize,
        /// Number of elements left between the cursor and the region end.
        remaining: usize,
    },
    /// A vector whose length differs from the configured dimensionality.
    #[error("encoder dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Configured number of dimensions.
        expected: usize,
        /// Length of the vector supplied.
        actual: usize,
    },
}
