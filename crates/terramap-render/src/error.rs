//! Render error types.

/// Errors from building pixel buffers or exporting them.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Pixel data length does not match `width * height`.
    #[error("pixel buffer expects {expected} pixels, got {actual}")]
    BufferSizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },

    /// Failed to create or write the output file.
    #[error("failed to write image: {0}")]
    Io(#[source] std::io::Error),

    /// PNG encoder rejected the image.
    #[error("failed to encode png: {0}")]
    Encode(#[source] png::EncodingError),
}
