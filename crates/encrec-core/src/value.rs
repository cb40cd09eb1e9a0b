//! The S16.15 fixed-point scalar stored in recording regions.
//!
//! Every element written to SDRAM is one 32-bit word holding a signed
//! fixed-point number with 15 fractional bits. The host converts to and
//! from `f32` at the region boundary; the on-chip side only ever copies
//! raw words.

use smallvec::SmallVec;
use std::fmt;

/// A signed S16.15 fixed-point value (one SDRAM word).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Value(pub i32);

/// A single learnt encoder vector.
///
/// Uses `SmallVec<[Value; 8]>` so low-dimensional ensembles (the common
/// case) never touch the heap when building per-neuron rows.
pub type EncoderVector = SmallVec<[Value; 8]>;

impl Value {
    /// Number of fractional bits.
    pub const FRACTIONAL_BITS: u32 = 15;

    /// Fixed-point zero.
    pub const ZERO: Self = Self(0);

    /// Fixed-point one (`1 << 15`).
    pub const ONE: Self = Self(1 << Self::FRACTIONAL_BITS);

    /// Largest representable value (just under 65536.0).
    pub const MAX: Self = Self(i32::MAX);

    /// Smallest representable value (-65536.0).
    pub const MIN: Self = Self(i32::MIN);

    const SCALE: f64 = (1u32 << Self::FRACTIONAL_BITS) as f64;

    /// Convert from `f32`, rounding to nearest and saturating at the
    /// representable range. NaN maps to zero.
    pub fn from_f32(x: f32) -> Self {
        if x.is_nan() {
            return Self::ZERO;
        }
        let scaled = (f64::from(x) * Self::SCALE).round();
        if scaled >= f64::from(i32::MAX) {
            Self::MAX
        } else if scaled <= f64::from(i32::MIN) {
            Self::MIN
        } else {
            Self(scaled as i32)
        }
    }

    /// Convert to `f32`.
    pub fn to_f32(self) -> f32 {
        (f64::from(self.0) / Self::SCALE) as f32
    }

    /// Raw two's-complement word as stored in SDRAM.
    #[inline]
    pub fn to_bits(self) -> u32 {
        self.0 as u32
    }

    /// Reinterpret a raw SDRAM word.
    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        Self(bits as i32)
    }

    /// Convert a float slice into an [`EncoderVector`].
    pub fn vector_from_f32(values: &[f32]) -> EncoderVector {
        values.iter().map(|&x| Self::from_f32(x)).collect()
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::from_f32(x)
    }
}

impl From<Value> for f32 {
    fn from(v: Value) -> Self {
        v.to_f32()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}
