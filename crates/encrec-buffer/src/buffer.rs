//! The learnt-encoder recording buffer.
//!
//! [`RecordingBuffer`] owns a [`Region`] for the duration of a run and
//! appends one vector per `record` call. The enable flag is read once at
//! initialisation and never changes afterwards: a disabled buffer stays
//! disabled until it is rebuilt from a fresh region.

use encrec_core::{RecordingError, SdramAddress, Value};
use tracing::{debug, info, warn};

use crate::config::RecordingConfig;
use crate::descriptor::RegionDescriptor;
use crate::region::Region;

/// Append-only recorder over a pre-allocated SDRAM region.
///
/// `base` and `cursor` are word offsets into the region. `cursor` starts
/// at `base`, advances by the vector length on every enabled `record`,
/// and returns to `base` on `reset`.
///
/// # Examples
///
/// ```
/// use encrec_buffer::{RecordingBuffer, RecordingConfig, Region};
/// use encrec_core::{SdramAddress, Value};
///
/// let mut region = Region::new(SdramAddress(0x1ffc), 5).unwrap();
/// region.set_word(0, 1); // enable recording
///
/// let mut buffer = RecordingBuffer::initialise(Some(region), &RecordingConfig::new()).unwrap();
/// assert_eq!(buffer.data_base_address(), Some(SdramAddress(0x2000)));
///
/// buffer.record(&[Value::from_f32(1.0), Value::from_f32(2.0)]).unwrap();
/// assert_eq!(buffer.cursor_address(), Some(SdramAddress(0x2008)));
/// assert_eq!(buffer.recorded_len(), 2);
/// ```
#[derive(Debug)]
pub struct RecordingBuffer {
    enabled: bool,
    region: Region,
    /// Offset of the first data word. Fixed after initialisation.
    base: usize,
    /// Offset of the next data word to write.
    cursor: usize,
    expected_dims: Option<usize>,
}

impl RecordingBuffer {
    /// Build a buffer from a recording region.
    ///
    /// `None` stands for a missing region descriptor and fails with
    /// `NullRegion`; a region too small to hold the flag word fails with
    /// `RegionTooSmall`. Neither failure writes to the region. On success
    /// the data area is left untouched (not zeroed).
    pub fn initialise(
        region: Option<Region>,
        config: &RecordingConfig,
    ) -> Result<Self, RecordingError> {
        let region = region.ok_or(RecordingError::NullRegion)?;
        let descriptor = RegionDescriptor::parse(&region)?;
        let base = descriptor.data_offset;

        info!(
            address = %region.address(),
            enabled = descriptor.enabled,
            capacity = descriptor.data_capacity,
            "encoder recording initialised"
        );

        Ok(Self {
            enabled: descriptor.enabled,
            region,
            base,
            cursor: base,
            expected_dims: config.expected_dims,
        })
    }

    /// Like [`initialise`](Self::initialise), but a failure yields a
    /// disabled buffer instead of an error.
    ///
    /// This is how the ensemble treats a bad descriptor: the run carries
    /// on without recording.
    pub fn initialise_or_disabled(region: Option<Region>, config: &RecordingConfig) -> Self {
        match Self::initialise(region, config) {
            Ok(buffer) => buffer,
            Err(e) => {
                warn!(error = %e, "encoder recording disabled for this run");
                Self::disabled()
            }
        }
    }

    /// A buffer that never records, backed by an empty region.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            region: Region::empty(),
            base: 0,
            cursor: 0,
            expected_dims: None,
        }
    }

    /// Move the cursor back to the start of the data area.
    ///
    /// Idempotent. Does not change the enable flag or the data base.
    /// Previously recorded words stay in the region until overwritten.
    pub fn reset(&mut self) {
        debug!(
            discarded = self.cursor - self.base,
            "encoder recording cursor reset"
        );
        self.cursor = self.base;
    }

    /// Append `vector` at the cursor and advance past it.
    ///
    /// When recording is disabled this returns `Ok(())` immediately
    /// without touching the region or the cursor.
    ///
    /// When enabled the write is all-or-nothing. If the vector does not
    /// fit in the remaining space, nothing is written, the cursor stays
    /// put and `CapacityExceeded` is returned instead of running into
    /// adjacent SDRAM. Callers that size the region for
    /// `n_steps * n_neurons * n_dims` elements never see this error.
    ///
    /// If [`RecordingConfig::expected_dims`] is set, vectors of any other
    /// length are rejected with `DimensionMismatch`.
    #[inline]
    pub fn record(&mut self, vector: &[Value]) -> Result<(), RecordingError> {
        if !self.enabled {
            return Ok(());
        }
        self.append(vector)
    }

    fn append(&mut self, vector: &[Value]) -> Result<(), RecordingError> {
        if let Some(expected) = self.expected_dims {
            if vector.len() != expected {
                return Err(RecordingError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                });
            }
        }

        let remaining = self.remaining();
        if vector.len() > remaining {
            return Err(RecordingError::CapacityExceeded {
                requested: vector.len(),
                remaining,
            });
        }

        self.region.copy_values(self.cursor, vector);
        self.cursor += vector.len();
        Ok(())
    }

    /// Whether `record` writes to the region.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Cursor position in elements from the start of the data area.
    pub fn cursor(&self) -> usize {
        self.cursor - self.base
    }

    /// Number of elements recorded since initialisation or the last reset.
    pub fn recorded_len(&self) -> usize {
        self.cursor()
    }

    /// Elements left between the cursor and the end of the region.
    pub fn remaining(&self) -> usize {
        self.region.len_words().saturating_sub(self.cursor)
    }

    /// SDRAM address of the first data element.
    ///
    /// `None` for a buffer built by [`disabled`](Self::disabled).
    pub fn data_base_address(&self) -> Option<SdramAddress> {
        if self.region.is_empty() {
            return None;
        }
        self.region.address_of(self.base)
    }

    /// SDRAM address the next element would be written to.
    pub fn cursor_address(&self) -> Option<SdramAddress> {
        if self.region.is_empty() {
            return None;
        }
        self.region.address_of(self.cursor)
    }

    /// Values recorded since initialisation or the last reset.
    pub fn recorded(&self) -> impl Iterator<Item = Value> + '_ {
        self.region.values(self.base, self.cursor - self.base)
    }

    /// The backing region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Finish the run and hand the region back for read-back.
    pub fn into_region(self) -> Region {
        self.region
    }
}

impl Default for RecordingBuffer {
    fn default() -> Self {
        Self::disabled()
    }
}
