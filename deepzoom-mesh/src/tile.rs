use crate::error::MeshError;
use crate::tier::ResolutionTier;

/// The fixed logical domain covered by the full tile grid.
pub const DOMAIN_LEFT: f32 = -1.0;
pub const DOMAIN_RIGHT: f32 = 1.0;
pub const DOMAIN_BOTTOM: f32 = -1.0;
pub const DOMAIN_TOP: f32 = 1.0;

/// Loop-bound tolerance for lattice generation.
///
/// Vertex positions are accumulated in `f32`; without the tolerance,
/// rounding could drop the final edge vertex of a tile and open a seam
/// between neighbours.
pub const EDGE_EPSILON: f32 = 1e-4;

/// Vertex and tile density for one grid build.
///
/// The built-in tier table always produces a valid spec; [`new`](Self::new)
/// is the validated seam for hosts supplying custom densities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeSpec {
    /// Lattice cells per tile side.
    pub vertices_per_side: u32,

    /// Tiles per grid side.
    pub tiles_per_side: u32,
}

impl LatticeSpec {
    pub fn new(vertices_per_side: u32, tiles_per_side: u32) -> crate::Result<Self> {
        if vertices_per_side < 1 {
            return Err(MeshError::InvalidVertexDensity(vertices_per_side));
        }
        if tiles_per_side < 1 {
            return Err(MeshError::InvalidTileCount(tiles_per_side));
        }
        Ok(Self {
            vertices_per_side,
            tiles_per_side,
        })
    }

    /// The density/count pair for a resolution tier.
    pub fn for_tier(tier: ResolutionTier) -> Self {
        Self {
            vertices_per_side: tier.vertices_per_tile_side(),
            tiles_per_side: tier.tiles_per_side(),
        }
    }

    /// Vertices in one tile's lattice: `(vertices_per_side + 1)²`.
    pub fn vertices_per_tile(&self) -> usize {
        let side = self.vertices_per_side as usize + 1;
        side * side
    }

    /// Triangle indices in one tile: two triangles per lattice cell.
    pub fn indices_per_tile(&self) -> usize {
        let cells = self.vertices_per_side as usize;
        cells * cells * 6
    }

    /// Vertex spacing along x, uniform across the whole grid.
    #[inline]
    pub fn increment_x(&self) -> f32 {
        (DOMAIN_RIGHT - DOMAIN_LEFT) / self.tiles_per_side as f32 / self.vertices_per_side as f32
    }

    /// Vertex spacing along y, uniform across the whole grid.
    #[inline]
    pub fn increment_y(&self) -> f32 {
        (DOMAIN_TOP - DOMAIN_BOTTOM) / self.tiles_per_side as f32 / self.vertices_per_side as f32
    }
}

/// One lattice vertex.
///
/// The grid is a flat sheet in the plane; depth displacement, when the
/// host renders in exploration mode, happens entirely in the shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

/// A rectangular sub-region of the logical domain with its own lattice.
#[derive(Debug, Clone)]
pub struct MeshTile {
    /// Horizontal grid position, 0 at the left edge.
    pub col: u32,
    /// Vertical grid position, 0 at the top edge.
    pub row: u32,
    /// Left edge of this tile's sub-rectangle.
    pub left: f32,
    /// Top edge of this tile's sub-rectangle.
    pub top: f32,
    /// Lattice positions, row-major from the top-left corner.
    pub vertices: Vec<Vertex>,
    /// Triangle list, two triangles per lattice cell, fixed winding.
    pub indices: Vec<u32>,
}

impl MeshTile {
    /// Vertices per lattice side (`vertices_per_side + 1`).
    pub fn lattice_side(&self) -> usize {
        // The lattice is square; the side length is recoverable from the count.
        (self.vertices.len() as f64).sqrt().round() as usize
    }
}

/// Build the lattice and triangulation for the tile at `(col, row)`.
pub(crate) fn build_tile(spec: &LatticeSpec, col: u32, row: u32) -> MeshTile {
    let vps = spec.vertices_per_side;
    let increment_x = spec.increment_x();
    let increment_y = spec.increment_y();

    // Sub-rectangle edges, computed from the grid position rather than
    // carried over from the neighbouring tile so error does not compound
    // across tiles.
    let left = DOMAIN_LEFT + increment_x * vps as f32 * col as f32;
    let right = DOMAIN_LEFT + increment_x * vps as f32 * (col + 1) as f32;
    let top = DOMAIN_TOP - increment_y * vps as f32 * row as f32;
    let bottom = DOMAIN_TOP - increment_y * vps as f32 * (row + 1) as f32;

    let mut vertices = Vec::with_capacity(spec.vertices_per_tile());
    let mut y = top;
    while y > bottom - EDGE_EPSILON {
        let mut x = left;
        while x < right + EDGE_EPSILON {
            vertices.push(Vertex { x, y });
            x += increment_x;
        }
        y -= increment_y;
    }

    // Two triangles per cell, row-major indexing, constant winding.
    let stride = vps + 1;
    let mut indices = Vec::with_capacity(spec.indices_per_tile());
    for j in 0..vps {
        for i in 0..vps {
            indices.push(stride * j + i);
            indices.push(stride * j + i + 1);
            indices.push(stride * (j + 1) + i + 1);
            indices.push(stride * (j + 1) + i + 1);
            indices.push(stride * (j + 1) + i);
            indices.push(stride * j + i);
        }
    }

    MeshTile {
        col,
        row,
        left,
        top,
        vertices,
        indices,
    }
}
