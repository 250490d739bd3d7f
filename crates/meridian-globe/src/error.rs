//! Caller-facing error types for globe queries.

/// Errors returned when a globe operation is called with invalid arguments.
///
/// Broken internal topology (a ring that never closes, an unresolvable base
/// vertex) is not represented here; those conditions panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlobeError {
    /// The tile index is not part of the current globe.
    #[error("tile {tile} out of range (globe has {len} tiles)")]
    TileOutOfRange {
        /// Requested tile index.
        tile: usize,
        /// Number of tiles on the globe.
        len: usize,
    },

    /// The vertex record index is not part of the current globe.
    #[error("vertex {vertex} out of range (globe has {len} vertices)")]
    VertexOutOfRange {
        /// Requested vertex record index.
        vertex: usize,
        /// Number of vertex records on the globe.
        len: usize,
    },

    /// Two tiles were expected to share an edge but do not.
    #[error("tiles {a} and {b} are not neighbors")]
    NotNeighbors {
        /// First tile.
        a: usize,
        /// Second tile.
        b: usize,
    },

    /// A path step was not one of the three tile edges.
    #[error("invalid path direction {0}, expected 0, 1 or 2")]
    InvalidDirection(u8),

    /// A path has more steps than the walker accepts.
    #[error("path of {len} steps exceeds the maximum of {max}")]
    PathTooLong {
        /// Requested number of steps.
        len: usize,
        /// Maximum number of steps.
        max: usize,
    },
}
