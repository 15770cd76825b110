//! Error type shared by every blur entry point.

/// Errors raised before any filtering work starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BlurError {
    /// The channel buffer does not hold exactly `width * height` pixels.
    #[error("channel length ({len}) does not match the image size ({width}x{height})")]
    DimensionMismatch {
        /// Length of the buffer that was passed in.
        len: usize,
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The radius is outside the domain of a table-driven variant.
    #[error("radius {radius} is not supported by this filter (max {max})")]
    UnsupportedRadius {
        /// Requested radius.
        radius: usize,
        /// Largest radius the variant accepts.
        max: usize,
    },

    /// No algorithm is registered under this name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Interleaved images must have 1, 3 or 4 channels.
    #[error("unsupported channel count: {0}")]
    ChannelCount(usize),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BlurError>;

#[cfg(feature = "python")]
impl From<BlurError> for pyo3::PyErr {
    fn from(err: BlurError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
