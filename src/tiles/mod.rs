//! Tile grid math and row-bounded concurrent tile fetching.

mod fetcher;
mod grid;

pub use fetcher::{TileFetcher, TileResult};
pub use grid::{TILE_SIZE, TileCoordinate, TileGrid};
