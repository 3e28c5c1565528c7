use thiserror::Error;

/// Errors originating from mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("invalid vertex density: {0} (must be >= 1)")]
    InvalidVertexDensity(u32),

    #[error("invalid tile count: {0} (must be >= 1)")]
    InvalidTileCount(u32),
}
