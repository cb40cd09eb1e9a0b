//! Host-side handling of learnt-encoder recording regions.
//!
//! The on-chip [`RecordingBuffer`](encrec_buffer::RecordingBuffer) only
//! appends words. Everything around it happens on the host:
//!
//! - [`EncoderRecordingRegion`] sizes the region and builds its initial
//!   image (enable flag + zeroed data area)
//! - [`codec`] moves region images to and from byte streams
//! - [`EncoderRecordingRegion::read_back`] decodes recorded words into an
//!   [`EncoderTrace`] of shape `[n_steps][n_neurons][n_dims]`
//! - [`TraceAssembler`] stitches per-core neuron slices into one
//!   ensemble-wide trace, and [`EncoderProbe`] / [`ProbeData`] apply probe
//!   sampling and accumulate across runs
//!
//! # Data order
//!
//! ```text
//! step 0: neuron 0 [d0 d1 ..] neuron 1 [d0 d1 ..] ..
//! step 1: neuron 0 [d0 d1 ..] ..
//! ```
//!
//! The ensemble records each neuron's encoder once per step, so the data
//! area is time-major, then neuron, then dimension.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod probe;
pub mod region;
pub mod trace;

pub use codec::{decode_region, encode_region};
pub use error::HostError;
pub use probe::{EncoderProbe, ProbeData, TraceAssembler};
pub use region::EncoderRecordingRegion;
pub use trace::EncoderTrace;
