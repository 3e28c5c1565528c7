pub mod binding;
pub mod error;
pub mod grid;
pub mod tier;
pub mod tile;

// Re-export primary types for convenience.
pub use binding::{seed_uniforms, FrameUniforms, ScalarUniform};
pub use error::MeshError;
pub use grid::{build_tile_grid, build_tile_grid_with, MeshGenerator, TileGrid};
pub use tier::{ResolutionTier, TILES_PER_SIDE};
pub use tile::{LatticeSpec, MeshTile, Vertex, EDGE_EPSILON};

/// Convenience result type for the mesh crate.
pub type Result<T> = std::result::Result<T, MeshError>;
