//! Core types for learnt-encoder recording.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the types shared by the on-chip recording buffer and the host-side
//! region tooling: the S16.15 fixed-point [`Value`], SDRAM addresses,
//! and the [`RecordingError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod value;

pub use error::RecordingError;
pub use id::{SdramAddress, WORD_BYTES};
pub use value::{EncoderVector, Value};
