//! Append-only learnt-encoder recording over a pre-allocated SDRAM region.
//!
//! The ensemble simulation loop calls [`RecordingBuffer::record`] once per
//! neuron per timestep. When recording is disabled for the run the call is
//! a single branch; when enabled it copies the vector into the region and
//! advances a cursor.
//!
//! # Region layout
//!
//! ```text
//! word 0      enable flag (non-zero = record)
//! word 1..    S16.15 values in append order
//! ```
//!
//! # Architecture
//!
//! ```text
//! RecordingBuffer (enable flag + base/cursor offsets)
//! └── Region (SDRAM address + owned Vec<u32> words)
//!     └── RegionDescriptor (typed view of the flag word, parsed once)
//! ```
//!
//! Positions are word offsets into the owned region rather than raw
//! addresses; [`SdramAddress`](encrec_core::SdramAddress) values are
//! derived for reporting only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod descriptor;
pub mod region;

pub use buffer::RecordingBuffer;
pub use config::RecordingConfig;
pub use descriptor::{RegionDescriptor, DATA_OFFSET, FLAG_WORD};
pub use region::Region;
