use serde::{Deserialize, Serialize};

/// Tiles per grid side for the fixed-resolution tiers.
pub const TILES_PER_SIDE: u32 = 4;

/// Discrete mesh quality level.
///
/// Low/Med/High trade vertex density against generation cost. Infinite
/// collapses the grid to a single minimal quad: at that tier the shader
/// evaluates the fractal per pixel, so mesh density contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionTier {
    Low,
    Med,
    High,
    Infinite,
}

impl ResolutionTier {
    /// Lattice cells per tile side at this tier.
    pub fn vertices_per_tile_side(self) -> u32 {
        match self {
            Self::Low => 100,
            Self::Med => 175,
            Self::High => 250,
            Self::Infinite => 1,
        }
    }

    /// Grid dimension: tiles per side at this tier.
    pub fn tiles_per_side(self) -> u32 {
        match self {
            Self::Infinite => 1,
            _ => TILES_PER_SIDE,
        }
    }
}

impl Default for ResolutionTier {
    /// Default quality on capable hosts.
    fn default() -> Self {
        Self::Med
    }
}
