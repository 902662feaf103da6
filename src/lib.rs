//! Mediabank Book Downloader Library
//!
//! This library enumerates a paginated Picturae-style mediabank catalog of
//! digitized books and reconstructs each book page from its deep-zoom tile
//! pyramid, compositing 256x256 tiles into one full-resolution JPEG per page.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`catalog`] - Paginated catalog client and lazy item enumeration
//! - [`tiles`] - Tile grid math and row-bounded concurrent tile fetching
//! - [`compose`] - Canvas compositing of fetched tiles
//! - [`output`] - Title sanitization and zero-padded page persistence
//! - [`orchestrator`] - Per-item skip/download decisions and the run loop
//! - [`progress`] - Progress reporting seam for terminal UIs
//!
//! A book whose output directory already exists is treated as fully
//! downloaded and skipped without any network or filesystem work.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod compose;
pub mod config;
pub mod http;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod tiles;

// Re-export commonly used types
pub use catalog::{
    Asset, CatalogClient, CatalogEnumerator, CatalogPage, MediaItem, RetrievalError,
};
pub use compose::Compositor;
pub use config::{Config, DEFAULT_PAGE_SIZE, DEFAULT_ZOOM_LEVEL};
pub use orchestrator::{DownloadOrchestrator, ItemError, ItemOutcome, RunError, RunStats, run};
pub use output::{PageWriter, WriteError, sanitize_title};
pub use progress::{NoopProgress, ProgressSink, SkipReason};
pub use tiles::{TILE_SIZE, TileCoordinate, TileFetcher, TileGrid, TileResult};
