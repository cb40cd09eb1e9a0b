//! Decoded learnt-encoder recordings.

/// A dense `[n_steps][n_neurons][n_dims]` array of recorded encoders.
#[derive(Clone, Debug, PartialEq)]
pub struct EncoderTrace {
    n_steps: usize,
    n_neurons: usize,
    n_dims: usize,
    data: Vec<f32>,
}

impl EncoderTrace {
    /// A zero-filled trace of the given shape, or `None` if the element
    /// count overflows `usize`.
    pub fn zeros(n_steps: usize, n_neurons: usize, n_dims: usize) -> Option<Self> {
        let len = element_count(n_steps, n_neurons, n_dims)?;
        Some(Self {
            n_steps,
            n_neurons,
            n_dims,
            data: vec![0.0; len],
        })
    }

    /// Wrap time-major data. Returns `None` if `data.len()` does not
    /// equal `n_steps * n_neurons * n_dims` (or that product overflows).
    pub fn from_vec(n_steps: usize, n_neurons: usize, n_dims: usize, data: Vec<f32>) -> Option<Self> {
        if element_count(n_steps, n_neurons, n_dims) != Some(data.len()) {
            return None;
        }
        Some(Self {
            n_steps,
            n_neurons,
            n_dims,
            data,
        })
    }

    /// Caller guarantees `data.len() == n_steps * n_neurons * n_dims`.
    pub(crate) fn from_parts(n_steps: usize, n_neurons: usize, n_dims: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), n_steps * n_neurons * n_dims);
        Self {
            n_steps,
            n_neurons,
            n_dims,
            data,
        }
    }

    /// `(n_steps, n_neurons, n_dims)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_steps, self.n_neurons, self.n_dims)
    }

    /// Number of recorded steps.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Number of neurons per step.
    pub fn n_neurons(&self) -> usize {
        self.n_neurons
    }

    /// Number of encoder dimensions per neuron.
    pub fn n_dims(&self) -> usize {
        self.n_dims
    }

    /// Whether the trace holds no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A single element, or `None` if any index is out of range.
    pub fn get(&self, step: usize, neuron: usize, dim: usize) -> Option<f32> {
        if step >= self.n_steps || neuron >= self.n_neurons || dim >= self.n_dims {
            return None;
        }
        Some(self.data[self.index(step, neuron) + dim])
    }

    /// All neurons' encoders for one step.
    ///
    /// # Panics
    ///
    /// Panics if `step >= n_steps`.
    pub fn step(&self, step: usize) -> &[f32] {
        let stride = self.n_neurons * self.n_dims;
        &self.data[step * stride..(step + 1) * stride]
    }

    /// One neuron's encoder at one step.
    ///
    /// # Panics
    ///
    /// Panics if `step` or `neuron` is out of range.
    pub fn row(&self, step: usize, neuron: usize) -> &[f32] {
        assert!(neuron < self.n_neurons, "neuron {neuron} out of range");
        let start = self.index(step, neuron);
        &self.data[start..start + self.n_dims]
    }

    /// One neuron's encoder over every step, time-major.
    pub fn neuron_series(&self, neuron: usize) -> Vec<f32> {
        (0..self.n_steps)
            .flat_map(|s| self.row(s, neuron).iter().copied())
            .collect()
    }

    /// The underlying time-major storage.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn row_mut(&mut self, step: usize, neuron: usize) -> &mut [f32] {
        let start = self.index(step, neuron);
        &mut self.data[start..start + self.n_dims]
    }

    /// Append `other`'s steps after this trace's last step.
    pub(crate) fn append_steps(&mut self, other: &EncoderTrace) {
        self.data.extend_from_slice(&other.data);
        self.n_steps += other.n_steps;
    }

    fn index(&self, step: usize, neuron: usize) -> usize {
        (step * self.n_neurons + neuron) * self.n_dims
    }
}

/// `n_steps * n_neurons * n_dims`, or `None` on overflow.
pub(crate) fn element_count(n_steps: usize, n_neurons: usize, n_dims: usize) -> Option<usize> {
    n_steps.checked_mul(n_neurons)?.checked_mul(n_dims)
}
