//! Test fixtures for learnt-encoder recording.
//!
//! Provides prepared SDRAM regions and a seeded source of encoder
//! vectors, so tests across the workspace build identical scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{enabled_region, region_with_flag, EncoderSource};
