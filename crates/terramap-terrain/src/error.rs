//! Terrain source error types.

/// Errors raised while building a terrain source from parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// fBm needs at least one octave.
    #[error("noise octaves must be at least 1")]
    ZeroOctaves,

    /// Lacunarity must be finite and positive.
    #[error("invalid lacunarity {0}: must be finite and positive")]
    InvalidLacunarity(f64),

    /// Persistence must be finite and positive.
    #[error("invalid persistence {0}: must be finite and positive")]
    InvalidPersistence(f64),

    /// Viewport zoom must be finite and positive.
    #[error("invalid zoom {0}: must be finite and positive")]
    InvalidZoom(f64),

    /// Viewport has no pixels.
    #[error("viewport must be at least 1x1, got {width}x{height}")]
    EmptyViewport {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Height field data does not match its dimensions.
    #[error("height field expects {expected} samples, got {actual}")]
    HeightFieldSize {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },
}
