//! Error types for host-side region handling.

use std::io;
use std::ops::Range;

use encrec_core::RecordingError;
use thiserror::Error;

/// Errors raised while transferring or decoding recording regions.
#[derive(Debug, Error)]
pub enum HostError {
    /// An I/O error occurred while reading or writing a region image.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The byte stream ended before the expected number of words.
    #[error("truncated region image: expected {expected_words} words, read {read_words}")]
    Truncated {
        /// Number of words requested.
        expected_words: usize,
        /// Number of whole words actually read.
        read_words: usize,
    },
    /// A region or buffer level error.
    #[error(transparent)]
    Recording(#[from] RecordingError),
    /// A neuron slice that falls outside the ensemble or is empty.
    #[error("neuron slice {start}..{end} is invalid for {n_neurons} neurons")]
    InvalidSlice {
        /// Slice start (inclusive).
        start: usize,
        /// Slice end (exclusive).
        end: usize,
        /// Number of neurons in the ensemble.
        n_neurons: usize,
    },
    /// A neuron slice that overlaps one already supplied.
    #[error("neuron slice {start}..{end} overlaps {other_start}..{other_end}")]
    OverlappingSlice {
        /// Slice start (inclusive).
        start: usize,
        /// Slice end (exclusive).
        end: usize,
        /// Start of the slice it overlaps.
        other_start: usize,
        /// End of the slice it overlaps.
        other_end: usize,
    },
    /// Assembly finished before every neuron had data.
    #[error("neuron slices cover {covered} of {n_neurons} neurons")]
    IncompleteCoverage {
        /// Number of neurons covered by the supplied slices.
        covered: usize,
        /// Number of neurons in the ensemble.
        n_neurons: usize,
    },
    /// A trace whose shape does not match what was expected.
    #[error("trace shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Expected `(n_steps, n_neurons, n_dims)`.
        expected: (usize, usize, usize),
        /// Actual `(n_steps, n_neurons, n_dims)`.
        actual: (usize, usize, usize),
    },
    /// A trace or region shape whose element count does not fit in
    /// `usize` or in the 32-bit SDRAM address space.
    #[error("shape {shape:?} is too large to address")]
    ShapeTooLarge {
        /// Requested `(n_steps, n_neurons, n_dims)`.
        shape: (usize, usize, usize),
    },
    /// A probe whose parameters cannot be applied.
    #[error("invalid probe: {detail}")]
    InvalidProbe {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl HostError {
    pub(crate) fn invalid_slice(slice: &Range<usize>, n_neurons: usize) -> Self {
        Self::InvalidSlice {
            start: slice.start,
            end: slice.end,
            n_neurons,
        }
    }
}
