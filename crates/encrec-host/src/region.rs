//! Host description of an encoder recording region.

use encrec_buffer::{Region, DATA_OFFSET, FLAG_WORD};
use encrec_core::{RecordingError, SdramAddress, Value, WORD_BYTES};
use tracing::{debug, info};

use crate::error::HostError;
use crate::trace::{element_count, EncoderTrace};

/// Sizing and layout of one ensemble's learnt-encoder recording region.
///
/// The same description is used for every core (neuron slice) of the
/// ensemble; only the neuron count differs per core.
///
/// # Examples
///
/// ```
/// use encrec_host::EncoderRecordingRegion;
///
/// let region = EncoderRecordingRegion::new(100, 2);
/// // Flag word plus 100 steps x 10 neurons x 2 dimensions.
/// assert_eq!(region.size_words(10), Some(1 + 2000));
/// assert_eq!(region.sizeof(10), Some(4 * 2001));
///
/// // Not recording: only the flag word is allocated.
/// assert_eq!(EncoderRecordingRegion::disabled(2).sizeof(10), Some(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderRecordingRegion {
    /// Number of steps to reserve space for. Zero disables recording.
    pub n_steps: usize,
    /// Number of learnt encoder dimensions per neuron.
    pub n_dims: usize,
}

impl EncoderRecordingRegion {
    /// Reserve space for `n_steps` steps of `n_dims`-wide encoders.
    pub fn new(n_steps: usize, n_dims: usize) -> Self {
        Self { n_steps, n_dims }
    }

    /// A region that only carries a cleared enable flag.
    pub fn disabled(n_dims: usize) -> Self {
        Self::new(0, n_dims)
    }

    /// Whether the region image asks the core to record.
    pub fn is_enabled(&self) -> bool {
        self.n_steps > 0
    }

    /// Number of data words for a core simulating `n_neurons` neurons,
    /// or `None` if the count overflows `usize`.
    pub fn data_words(&self, n_neurons: usize) -> Option<usize> {
        element_count(self.n_steps, n_neurons, self.n_dims)
    }

    /// Total region size in words, including the flag word.
    pub fn size_words(&self, n_neurons: usize) -> Option<usize> {
        self.data_words(n_neurons)?.checked_add(DATA_OFFSET)
    }

    /// Total region size in bytes.
    pub fn sizeof(&self, n_neurons: usize) -> Option<usize> {
        self.size_words(n_neurons)?.checked_mul(WORD_BYTES as usize)
    }

    /// Build the initial image of the region at `address`.
    ///
    /// The flag word is 1 when recording and 0 otherwise; the data area
    /// is zeroed. Fails with `ShapeTooLarge` if the region would run past
    /// the end of the 32-bit SDRAM address space.
    pub fn build_image(&self, address: SdramAddress, n_neurons: usize) -> Result<Region, HostError> {
        let too_large = || HostError::ShapeTooLarge {
            shape: (self.n_steps, n_neurons, self.n_dims),
        };
        let words = self.size_words(n_neurons).ok_or_else(too_large)?;
        address.offset_words(words).ok_or_else(too_large)?;

        let mut region = Region::new(address, words)?;
        region.set_word(FLAG_WORD, u32::from(self.is_enabled()));
        info!(
            %address,
            n_neurons,
            n_steps = self.n_steps,
            n_dims = self.n_dims,
            bytes = region.memory_bytes(),
            "built encoder recording region"
        );
        Ok(region)
    }

    /// Decode the first `n_steps` recorded steps of a core's region.
    ///
    /// `n_steps` may be smaller than the reserved step count when the run
    /// was shorter. Fails with `CapacityExceeded` if the region is too
    /// small for the requested shape, or `ShapeTooLarge` if the shape's
    /// element count overflows.
    pub fn read_back(
        &self,
        region: &Region,
        n_neurons: usize,
        n_steps: usize,
    ) -> Result<EncoderTrace, HostError> {
        let shape = (n_steps, n_neurons, self.n_dims);
        let needed = element_count(n_steps, n_neurons, self.n_dims)
            .ok_or(HostError::ShapeTooLarge { shape })?;
        let available = region.len_words().saturating_sub(DATA_OFFSET);
        if needed > available {
            return Err(RecordingError::CapacityExceeded {
                requested: needed,
                remaining: available,
            }
            .into());
        }

        let data: Vec<f32> = region
            .values(DATA_OFFSET, needed)
            .map(Value::to_f32)
            .collect();
        debug!(n_steps, n_neurons, n_dims = self.n_dims, "read back encoder recording");
        Ok(EncoderTrace::from_parts(n_steps, n_neurons, self.n_dims, data))
    }
}
