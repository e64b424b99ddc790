//! Error types for icosphere generation and persistence.

use thiserror::Error;

/// Errors that can occur during icosphere generation or emission.
#[derive(Debug, Error)]
pub enum IcosphereError {
    /// Generation would exceed the configured face limit.
    ///
    /// Rejected at the boundary, before any generation work begins; no
    /// partial mesh is ever produced.
    #[error("generation would exceed maximum mesh size ({projected} faces, max {max})")]
    MeshTooLarge {
        /// Projected face count for the requested subdivision count.
        projected: usize,
        /// Maximum allowed face count.
        max: usize,
    },

    /// The mesh was emitted before normals were computed for its current
    /// vertex list.
    #[error("mesh has {vertices} vertices but {normals} normals; compute normals before emitting")]
    NormalsNotComputed {
        /// Vertex count.
        vertices: usize,
        /// Normal count.
        normals: usize,
    },
}

/// Result type for generation operations.
pub type IcosphereResult<T> = std::result::Result<T, IcosphereError>;

/// Errors that can occur while persisting or loading a sphere mesh.
#[derive(Debug, Error)]
pub enum MeshIoError {
    /// The stream does not start with the expected magic bytes.
    #[error("not a sphere mesh stream: bad magic {got:?}")]
    BadMagic {
        /// The bytes actually read.
        got: [u8; 4],
    },

    /// The stream uses a format version this build cannot read.
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u32),

    /// Header counts disagree with the payload.
    #[error("count mismatch: header says {expected} {what}, stream holds {got}")]
    CountMismatch {
        /// What was being counted.
        what: &'static str,
        /// Count declared in the header.
        expected: usize,
        /// Count actually present.
        got: usize,
    },

    /// A face index points past the vertex list.
    #[error("face index {index} out of range for {vertices} vertices")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of vertices in the stream.
        vertices: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for persistence operations.
pub type MeshIoResult<T> = std::result::Result<T, MeshIoError>;
