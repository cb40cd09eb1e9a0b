//! Recording buffer configuration.

/// Configuration for a [`RecordingBuffer`](crate::RecordingBuffer).
///
/// The enable flag and region size come from the region itself; this
/// struct only carries checks the embedding system opts into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingConfig {
    /// Number of elements every recorded vector must have.
    ///
    /// Default: `None` (no check). When set, `record` rejects vectors of
    /// any other length before touching the region.
    pub expected_dims: Option<usize>,
}

impl RecordingConfig {
    /// Configuration with no optional checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require every recorded vector to have exactly `dims` elements.
    pub fn with_expected_dims(mut self, dims: usize) -> Self {
        self.expected_dims = Some(dims);
        self
    }
}
