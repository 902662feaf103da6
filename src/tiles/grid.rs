//! Tile coordinates and grid dimensions for a deep-zoom asset.

/// Edge length of one square deep-zoom tile, in pixels.
pub const TILE_SIZE: u32 = 256;

/// Addresses one 256x256-pixel cell within an asset's tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoordinate {
    /// Grid column (0-based).
    pub x: u32,
    /// Grid row (0-based).
    pub y: u32,
}

impl TileCoordinate {
    /// Returns the pixel offset of this tile's top-left corner on the canvas.
    #[must_use]
    pub fn pixel_offset(self) -> (u32, u32) {
        (self.x * TILE_SIZE, self.y * TILE_SIZE)
    }
}

/// Tile grid dimensions, fully determined by the asset's pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    columns: u32,
    rows: u32,
}

impl TileGrid {
    /// Computes the grid for an asset of the given pixel dimensions:
    /// `columns = ceil(width / 256)`, `rows = ceil(height / 256)`.
    #[must_use]
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        Self {
            columns: width.div_ceil(TILE_SIZE),
            rows: height.div_ceil(TILE_SIZE),
        }
    }

    /// Number of grid columns.
    #[must_use]
    pub fn columns(self) -> u32 {
        self.columns
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(self) -> u32 {
        self.rows
    }

    /// Iterates the coordinates of one grid row, left to right.
    pub fn row(self, y: u32) -> impl Iterator<Item = TileCoordinate> {
        (0..self.columns).map(move |x| TileCoordinate { x, y })
    }
}
