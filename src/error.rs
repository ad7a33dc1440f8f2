use thiserror::Error;

/// Errors reported by the image-level entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Width or height is not a multiple of the 4×4 block size.
    #[error("Invalid dimensions: {width}x{height} (both must be divisible by 4)")]
    InvalidDimensions {
        /// Width of the rejected image.
        width: usize,
        /// Height of the rejected image.
        height: usize,
    },

    /// The caller-provided output buffer cannot hold the compressed image.
    #[error("Output buffer too small: needed {needed}, got {actual}")]
    OutputTooSmall {
        /// The required buffer size in bytes.
        needed: usize,
        /// The actual buffer size in bytes.
        actual: usize,
    },

    /// The compressed data is shorter than the image dimensions require.
    #[error("Compressed input too small: needed {needed}, got {actual}")]
    InputTooSmall {
        /// The required input size in bytes.
        needed: usize,
        /// The actual input size in bytes.
        actual: usize,
    },
}
