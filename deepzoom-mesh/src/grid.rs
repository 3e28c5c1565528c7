use std::time::Instant;

use tracing::{debug, info};

use crate::tier::ResolutionTier;
use crate::tile::{build_tile, LatticeSpec, MeshTile};

/// All mesh tiles for one resolution tier.
///
/// Tiles are stored row-major from the top-left of the domain and exactly
/// partition `[-1,1]×[-1,1]`. The grid is only ever built whole; it is
/// never partially mutated.
#[derive(Debug, Clone)]
pub struct TileGrid {
    pub tier: ResolutionTier,
    pub spec: LatticeSpec,
    pub tiles: Vec<MeshTile>,
}

impl TileGrid {
    /// The tile at grid position `(col, row)`.
    pub fn tile(&self, col: u32, row: u32) -> &MeshTile {
        &self.tiles[(row * self.spec.tiles_per_side + col) as usize]
    }

    /// Total vertex count across all tiles.
    pub fn total_vertices(&self) -> usize {
        self.tiles.iter().map(|t| t.vertices.len()).sum()
    }

    /// Total triangle-index count across all tiles.
    pub fn total_indices(&self) -> usize {
        self.tiles.iter().map(|t| t.indices.len()).sum()
    }
}

/// Build the full tile grid for a resolution tier.
pub fn build_tile_grid(tier: ResolutionTier) -> TileGrid {
    build_tile_grid_with(tier, LatticeSpec::for_tier(tier))
}

/// Build a grid with an explicit lattice spec.
///
/// Hosts that want a non-standard density (previews, thumbnails) validate
/// their spec through [`LatticeSpec::new`] and pass it here; the tier is
/// carried along only as a label for the consumer.
pub fn build_tile_grid_with(tier: ResolutionTier, spec: LatticeSpec) -> TileGrid {
    let start = Instant::now();
    let per_side = spec.tiles_per_side;
    debug!(
        ?tier,
        tiles_per_side = per_side,
        vertices_per_side = spec.vertices_per_side,
        "Building tile grid"
    );

    let mut tiles = Vec::with_capacity((per_side * per_side) as usize);
    for row in 0..per_side {
        for col in 0..per_side {
            tiles.push(build_tile(&spec, col, row));
        }
    }

    let grid = TileGrid { tier, spec, tiles };
    info!(
        ?tier,
        tile_count = grid.tiles.len(),
        total_vertices = grid.total_vertices(),
        elapsed_ms = start.elapsed().as_millis(),
        "Tile grid built"
    );
    grid
}

/// Owns the current tile grid and replaces it wholesale on tier change.
///
/// There is no partial update path: the previous grid is dropped in its
/// entirety when a new one is built, so consumers never observe a mix of
/// densities. All calls run on the host's single update thread; a
/// multi-threaded host must serialize [`regenerate`](Self::regenerate)
/// against grid readers.
#[derive(Debug)]
pub struct MeshGenerator {
    grid: TileGrid,
}

impl MeshGenerator {
    pub fn new(tier: ResolutionTier) -> Self {
        Self {
            grid: build_tile_grid(tier),
        }
    }

    /// The current grid.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// The tier the current grid was built for.
    pub fn tier(&self) -> ResolutionTier {
        self.grid.tier
    }

    /// Rebuild the grid for `tier`, discarding the previous one.
    ///
    /// The host calls this on resolution change; calling it with the
    /// current tier is valid and produces a geometrically identical grid.
    pub fn regenerate(&mut self, tier: ResolutionTier) {
        self.grid = build_tile_grid(tier);
    }
}

impl Default for MeshGenerator {
    fn default() -> Self {
        Self::new(ResolutionTier::default())
    }
}
