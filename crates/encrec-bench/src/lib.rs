//! Benchmark profiles for learnt-encoder recording.
//!
//! - [`ensemble_profile`]: a core-sized recording region (enabled or not)
//!   plus the layout used to read it back

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use encrec_buffer::{RecordingBuffer, RecordingConfig};
use encrec_core::SdramAddress;
use encrec_host::EncoderRecordingRegion;

/// Neurons per core in the reference profile.
pub const PROFILE_NEURONS: usize = 100;

/// Encoder dimensions in the reference profile.
pub const PROFILE_DIMS: usize = 16;

/// Steps reserved in the reference profile.
pub const PROFILE_STEPS: usize = 1000;

/// Build a buffer sized for [`PROFILE_STEPS`] steps of
/// [`PROFILE_NEURONS`] x [`PROFILE_DIMS`] encoders.
///
/// With `record = false` the region carries only a cleared flag word.
pub fn ensemble_profile(record: bool) -> (EncoderRecordingRegion, RecordingBuffer) {
    let layout = if record {
        EncoderRecordingRegion::new(PROFILE_STEPS, PROFILE_DIMS)
    } else {
        EncoderRecordingRegion::disabled(PROFILE_DIMS)
    };
    let image = layout
        .build_image(SdramAddress(0x6000_0000), PROFILE_NEURONS)
        .unwrap();
    let buffer = RecordingBuffer::initialise(Some(image), &RecordingConfig::new()).unwrap();
    (layout, buffer)
}
