//! Immutable run configuration.
//!
//! All process-wide settings (API key, page size, zoom level, base URLs) live
//! in a single [`Config`] value constructed once at startup and passed by
//! reference into the catalog client and tile fetcher. Nothing here is
//! global or mutable after construction.

use std::path::PathBuf;

/// Default number of catalog items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Default deep-zoom level requested for tiles.
///
/// The native maximum is usually between 12 and 13, but the tile server
/// still serves the deepest available tiles when the requested level
/// exceeds it.
pub const DEFAULT_ZOOM_LEVEL: u32 = 20;

/// Production catalog endpoint.
const DEFAULT_CATALOG_BASE_URL: &str = "https://webservices.picturae.com/mediabank";

/// Production deep-zoom tile endpoint.
const DEFAULT_TILE_BASE_URL: &str = "https://images.memorix.nl/rit/deepzoom";

/// Immutable configuration for a download run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Mediabank API key sent with every catalog request.
    pub api_key: String,
    /// Optional digitized-publication search filter.
    pub search_filter: Option<String>,
    /// Catalog page size (items per request).
    pub page_size: u32,
    /// Deep-zoom level used in tile URLs.
    pub zoom_level: u32,
    /// Directory that receives one subdirectory per downloaded book.
    pub downloads_root: PathBuf,
    /// Catalog base URL (overridable for tests).
    pub catalog_base_url: String,
    /// Tile base URL (overridable for tests).
    pub tile_base_url: String,
}

impl Config {
    /// Creates a configuration with production endpoints and default
    /// page size and zoom level.
    #[must_use]
    pub fn new(api_key: impl Into<String>, downloads_root: impl Into<PathBuf>) -> Self {
        Self {
            api_key: api_key.into(),
            search_filter: None,
            page_size: DEFAULT_PAGE_SIZE,
            zoom_level: DEFAULT_ZOOM_LEVEL,
            downloads_root: downloads_root.into(),
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            tile_base_url: DEFAULT_TILE_BASE_URL.to_string(),
        }
    }

    /// Sets the digitized-publication search filter.
    #[must_use]
    pub fn with_search_filter(mut self, filter: impl Into<String>) -> Self {
        self.search_filter = Some(filter.into());
        self
    }

    /// Sets the catalog page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the deep-zoom level used in tile URLs.
    #[must_use]
    pub fn with_zoom_level(mut self, zoom_level: u32) -> Self {
        self.zoom_level = zoom_level;
        self
    }

    /// Overrides the catalog base URL (for testing with wiremock).
    #[must_use]
    pub fn with_catalog_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.catalog_base_url = base_url.into();
        self
    }

    /// Overrides the tile base URL (for testing with wiremock).
    #[must_use]
    pub fn with_tile_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.tile_base_url = base_url.into();
        self
    }
}
