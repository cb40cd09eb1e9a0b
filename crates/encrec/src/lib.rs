//! Encrec: learnt-encoder recording for neuromorphic ensemble simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the encrec sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use encrec::prelude::*;
//!
//! // Host: reserve 2 steps for a core with 1 neuron and 2 dimensions.
//! let layout = EncoderRecordingRegion::new(2, 2);
//! let image = layout.build_image(SdramAddress(0x6000_0000), 1).unwrap();
//!
//! // Core: record once per neuron per step.
//! let mut buffer = RecordingBuffer::initialise(Some(image), &RecordingConfig::new()).unwrap();
//! for step in 0..2 {
//!     let encoder = Value::vector_from_f32(&[step as f32, 0.5]);
//!     buffer.record(&encoder).unwrap();
//! }
//!
//! // Host: read the region back after the run.
//! let trace = layout.read_back(&buffer.into_region(), 1, 2).unwrap();
//! assert_eq!(trace.row(1, 0), &[1.0, 0.5]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `encrec-core` | `Value`, addresses, `RecordingError` |
//! | [`buffer`] | `encrec-buffer` | `Region`, `RegionDescriptor`, `RecordingBuffer` |
//! | [`host`] | `encrec-host` | Region sizing, transfer codec, read-back, probes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`encrec-core`).
pub use encrec_core as types;

/// SDRAM regions and the recording buffer (`encrec-buffer`).
///
/// [`buffer::RecordingBuffer`] is the per-step recorder used on the
/// simulation's hot path.
pub use encrec_buffer as buffer;

/// Host-side region handling (`encrec-host`).
///
/// Size regions with [`host::EncoderRecordingRegion`], move them with
/// [`host::codec`], and turn recordings into probe data with
/// [`host::TraceAssembler`] and [`host::EncoderProbe`].
pub use encrec_host as host;

/// Common imports for typical encrec usage.
pub mod prelude {
    // Core types
    pub use encrec_core::{EncoderVector, RecordingError, SdramAddress, Value};

    // Buffer
    pub use encrec_buffer::{RecordingBuffer, RecordingConfig, Region, RegionDescriptor};

    // Host
    pub use encrec_host::{
        EncoderProbe, EncoderRecordingRegion, EncoderTrace, HostError, ProbeData, TraceAssembler,
    };
}
