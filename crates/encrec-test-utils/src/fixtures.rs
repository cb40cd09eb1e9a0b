//! Reusable regions and encoder streams.

use encrec_buffer::{Region, DATA_OFFSET, FLAG_WORD};
use encrec_core::{EncoderVector, SdramAddress, Value};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// A recording region whose data area starts at `data_base` and holds
/// `data_words` elements. The flag word sits one word below `data_base`.
///
/// # Panics
///
/// Panics if `data_base` is not word aligned or is below 4.
pub fn region_with_flag(flag: u32, data_base: u32, data_words: usize) -> Region {
    let address = SdramAddress(data_base - 4 * DATA_OFFSET as u32);
    let mut region = Region::new(address, DATA_OFFSET + data_words).expect("aligned fixture address");
    region.set_word(FLAG_WORD, flag);
    region
}

/// An enabled region with its data area at `data_base`.
pub fn enabled_region(data_base: u32, data_words: usize) -> Region {
    region_with_flag(1, data_base, data_words)
}

/// Deterministic stream of learnt encoder vectors.
///
/// Elements are uniform over roughly `[-2.0, 2.0)` and already quantised
/// to S16.15, so round trips through `f32` are exact.
pub struct EncoderSource {
    rng: ChaCha8Rng,
    n_dims: usize,
}

impl EncoderSource {
    pub fn new(seed: u64, n_dims: usize) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            n_dims,
        }
    }

    pub fn n_dims(&self) -> usize {
        self.n_dims
    }

    /// Next encoder vector.
    pub fn next_vector(&mut self) -> EncoderVector {
        let mut v: EncoderVector = SmallVec::with_capacity(self.n_dims);
        for _ in 0..self.n_dims {
            // 17 significant bits: [-2.0, 2.0) in S16.15.
            let raw = (self.rng.next_u32() >> 15) as i32 - (1 << 16);
            v.push(Value(raw));
        }
        v
    }

    /// `n_steps * n_neurons` vectors in recording order (step-major).
    pub fn run(&mut self, n_steps: usize, n_neurons: usize) -> Vec<EncoderVector> {
        (0..n_steps * n_neurons).map(|_| self.next_vector()).collect()
    }
}
