//! Region error types.

/// Errors that can occur while editing a region's vertex ring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegionError {
    /// The insertion position lies past the end of the vertex list.
    #[error("vertex index {index} out of bounds for region with {len} vertices")]
    IndexOutOfBounds {
        /// Requested insertion position.
        index: usize,
        /// Number of vertices at the time of the call.
        len: usize,
    },
}
