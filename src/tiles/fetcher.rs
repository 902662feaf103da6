//! Concurrent tile retrieval with a per-row join barrier.
//!
//! All tiles of one grid row are requested together; the fetcher suspends
//! until the whole row has completed before the caller moves to the next
//! row. This bounds peak concurrency to one row's width and keeps memory
//! bounded. A failed or undecodable tile degrades to an absent
//! [`TileResult`] and never aborts the row or the asset.

use futures_util::future::join_all;
use image::DynamicImage;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::Config;

use super::grid::{TileCoordinate, TileGrid};

/// One fetched tile: its grid coordinate and the decoded pixel block,
/// or `None` when the fetch or decode failed.
#[derive(Debug)]
pub struct TileResult {
    /// Grid coordinate this tile belongs to.
    pub coordinate: TileCoordinate,
    /// Decoded pixel block; `None` leaves the canvas region blank.
    pub block: Option<DynamicImage>,
}

impl TileResult {
    /// Whether the tile was fetched and decoded successfully.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.block.is_some()
    }
}

/// A single tile failure. Absorbed at the fetcher boundary; only logged.
#[derive(Debug, Error)]
enum TileError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("undecodable tile body: {0}")]
    Decode(#[from] image::ImageError),
}

/// Retrieves the tiles of an asset row by row.
#[derive(Debug, Clone)]
pub struct TileFetcher<'cfg> {
    http: Client,
    config: &'cfg Config,
}

impl<'cfg> TileFetcher<'cfg> {
    /// Creates a tile fetcher over a shared HTTP client and configuration.
    #[must_use]
    pub fn new(http: Client, config: &'cfg Config) -> Self {
        Self { http, config }
    }

    /// Deterministic tile URL for a tile-set identifier and coordinate.
    #[must_use]
    pub fn tile_url(&self, tile_set_id: &str, coordinate: TileCoordinate) -> String {
        format!(
            "{}/{}_files/{}/{}_{}.jpg",
            self.config.tile_base_url,
            tile_set_id,
            self.config.zoom_level,
            coordinate.x,
            coordinate.y
        )
    }

    /// Fetches all tiles of one grid row concurrently and waits for the
    /// whole row to complete.
    ///
    /// Results come back in column order regardless of completion order.
    /// Failed tiles are returned as absent results, never as errors.
    #[instrument(skip(self, grid), fields(tile_set = tile_set_id, row = y))]
    pub async fn fetch_row(&self, tile_set_id: &str, grid: TileGrid, y: u32) -> Vec<TileResult> {
        let requests = grid.row(y).map(|coordinate| self.fetch_tile(tile_set_id, coordinate));
        join_all(requests).await
    }

    async fn fetch_tile(&self, tile_set_id: &str, coordinate: TileCoordinate) -> TileResult {
        let block = match self.try_fetch_tile(tile_set_id, coordinate).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!(
                    x = coordinate.x,
                    y = coordinate.y,
                    error = %e,
                    "tile unavailable, leaving region blank"
                );
                None
            }
        };
        TileResult { coordinate, block }
    }

    async fn try_fetch_tile(
        &self,
        tile_set_id: &str,
        coordinate: TileCoordinate,
    ) -> Result<DynamicImage, TileError> {
        let url = self.tile_url(tile_set_id, coordinate);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TileError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let image = image::load_from_memory(&bytes)?;
        debug!(%url, bytes = bytes.len(), "tile fetched");
        Ok(image)
    }
}
