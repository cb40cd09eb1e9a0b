//! Assembling and sampling learnt-encoder probes.
//!
//! An ensemble is split across cores by neuron slice. Each core records
//! its own slice; [`TraceAssembler`] stitches the per-core traces back
//! into one ensemble-wide array. An [`EncoderProbe`] then selects the
//! steps and neurons the user asked for, and [`ProbeData`] stacks the
//! result across consecutive runs.

use std::ops::Range;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::HostError;
use crate::trace::EncoderTrace;

/// Combines per-core traces into an ensemble-wide trace.
///
/// Slices are kept in the order they were inserted, keyed by their first
/// neuron.
///
/// # Examples
///
/// ```
/// use encrec_host::{EncoderTrace, TraceAssembler};
///
/// let left = EncoderTrace::from_vec(1, 1, 1, vec![1.0]).unwrap();
/// let right = EncoderTrace::from_vec(1, 2, 1, vec![2.0, 3.0]).unwrap();
///
/// let mut asm = TraceAssembler::new(1, 3, 1).unwrap();
/// asm.insert(1..3, &right).unwrap();
/// asm.insert(0..1, &left).unwrap();
/// let full = asm.finish().unwrap();
/// assert_eq!(full.step(0), &[1.0, 2.0, 3.0]);
/// ```
pub struct TraceAssembler {
    trace: EncoderTrace,
    slices: IndexMap<usize, Range<usize>>,
}

impl TraceAssembler {
    /// Start assembling an `n_steps x n_neurons x n_dims` trace.
    ///
    /// Fails with `ShapeTooLarge` if the element count overflows.
    pub fn new(n_steps: usize, n_neurons: usize, n_dims: usize) -> Result<Self, HostError> {
        let trace = EncoderTrace::zeros(n_steps, n_neurons, n_dims).ok_or(HostError::ShapeTooLarge {
            shape: (n_steps, n_neurons, n_dims),
        })?;
        Ok(Self {
            trace,
            slices: IndexMap::new(),
        })
    }

    /// Copy `part` into the neurons covered by `slice`.
    ///
    /// `part` must have the assembler's step and dimension counts and
    /// exactly `slice.len()` neurons. Empty, out-of-range and overlapping
    /// slices are rejected.
    pub fn insert(&mut self, slice: Range<usize>, part: &EncoderTrace) -> Result<(), HostError> {
        let (n_steps, n_neurons, n_dims) = self.trace.shape();
        if slice.is_empty() || slice.end > n_neurons {
            return Err(HostError::invalid_slice(&slice, n_neurons));
        }
        if let Some(other) = self
            .slices
            .values()
            .find(|o| slice.start < o.end && o.start < slice.end)
        {
            return Err(HostError::OverlappingSlice {
                start: slice.start,
                end: slice.end,
                other_start: other.start,
                other_end: other.end,
            });
        }
        let expected = (n_steps, slice.len(), n_dims);
        if part.shape() != expected {
            return Err(HostError::ShapeMismatch {
                expected,
                actual: part.shape(),
            });
        }

        for step in 0..n_steps {
            for (local, neuron) in slice.clone().enumerate() {
                self.trace
                    .row_mut(step, neuron)
                    .copy_from_slice(part.row(step, local));
            }
        }
        debug!(start = slice.start, end = slice.end, "assembled neuron slice");
        self.slices.insert(slice.start, slice);
        Ok(())
    }

    /// Neuron slices inserted so far, in insertion order.
    pub fn slices(&self) -> impl Iterator<Item = &Range<usize>> {
        self.slices.values()
    }

    /// Number of neurons covered by the inserted slices.
    pub fn covered(&self) -> usize {
        self.slices.values().map(|s| s.len()).sum()
    }

    /// Finish assembly. Every neuron must be covered by some slice.
    pub fn finish(self) -> Result<EncoderTrace, HostError> {
        let covered = self.covered();
        let n_neurons = self.trace.n_neurons();
        if covered != n_neurons {
            return Err(HostError::IncompleteCoverage { covered, n_neurons });
        }
        Ok(self.trace)
    }
}

/// Which steps and neurons of an ensemble trace a probe keeps.
///
/// Steps are taken every `sample_every` from step 0. Neurons are taken
/// from `neurons`, every `neuron_stride`-th one starting at
/// `neurons.start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderProbe {
    sample_every: usize,
    neurons: Range<usize>,
    neuron_stride: usize,
}

impl EncoderProbe {
    /// Keep every `sample_every`-th step (starting at step 0) of the
    /// neurons in `neurons`.
    pub fn new(sample_every: usize, neurons: Range<usize>) -> Result<Self, HostError> {
        if sample_every == 0 {
            return Err(HostError::InvalidProbe {
                detail: "sample_every must be at least 1".into(),
            });
        }
        if neurons.start > neurons.end {
            return Err(HostError::InvalidProbe {
                detail: format!("neuron range {}..{} is reversed", neurons.start, neurons.end),
            });
        }
        Ok(Self {
            sample_every,
            neurons,
            neuron_stride: 1,
        })
    }

    /// A probe over every step of `n_neurons` neurons.
    pub fn all(n_neurons: usize) -> Self {
        Self {
            sample_every: 1,
            neurons: 0..n_neurons,
            neuron_stride: 1,
        }
    }

    /// Keep only every `stride`-th neuron of the range.
    pub fn with_neuron_stride(mut self, stride: usize) -> Result<Self, HostError> {
        if stride == 0 {
            return Err(HostError::InvalidProbe {
                detail: "neuron stride must be at least 1".into(),
            });
        }
        self.neuron_stride = stride;
        Ok(self)
    }

    /// Step stride.
    pub fn sample_every(&self) -> usize {
        self.sample_every
    }

    /// Probed neuron range.
    pub fn neurons(&self) -> Range<usize> {
        self.neurons.clone()
    }

    /// Neuron stride within [`neurons`](Self::neurons).
    pub fn neuron_stride(&self) -> usize {
        self.neuron_stride
    }

    /// The neuron indices this probe keeps, in order.
    pub fn selected_neurons(&self) -> impl Iterator<Item = usize> {
        self.neurons.clone().step_by(self.neuron_stride)
    }

    /// Extract the probed part of `trace`.
    pub fn apply(&self, trace: &EncoderTrace) -> Result<EncoderTrace, HostError> {
        if self.neurons.end > trace.n_neurons() {
            return Err(HostError::invalid_slice(&self.neurons, trace.n_neurons()));
        }
        let steps: Vec<usize> = (0..trace.n_steps()).step_by(self.sample_every).collect();
        let neurons: Vec<usize> = self.selected_neurons().collect();
        let mut data = Vec::with_capacity(steps.len() * neurons.len() * trace.n_dims());
        for &step in &steps {
            for &neuron in &neurons {
                data.extend_from_slice(trace.row(step, neuron));
            }
        }
        Ok(EncoderTrace::from_parts(
            steps.len(),
            neurons.len(),
            trace.n_dims(),
            data,
        ))
    }
}

/// Probe output accumulated over consecutive runs.
///
/// Each run's probed trace is stacked after the previous ones along the
/// time axis.
#[derive(Clone, Debug, Default)]
pub struct ProbeData {
    trace: Option<EncoderTrace>,
    runs: usize,
}

impl ProbeData {
    /// No data yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one run's probed trace.
    ///
    /// Fails with `ShapeMismatch` if the neuron or dimension count differs
    /// from earlier runs.
    pub fn push_run(&mut self, run: EncoderTrace) -> Result<(), HostError> {
        match &mut self.trace {
            None => self.trace = Some(run),
            Some(existing) => {
                if (existing.n_neurons(), existing.n_dims()) != (run.n_neurons(), run.n_dims()) {
                    return Err(HostError::ShapeMismatch {
                        expected: (run.n_steps(), existing.n_neurons(), existing.n_dims()),
                        actual: run.shape(),
                    });
                }
                existing.append_steps(&run);
            }
        }
        self.runs += 1;
        Ok(())
    }

    /// Number of runs pushed.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// All data so far, or `None` before the first run.
    pub fn trace(&self) -> Option<&EncoderTrace> {
        self.trace.as_ref()
    }
}
