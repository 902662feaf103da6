//! Per-item download orchestration and the top-level run loop.
//!
//! For each media item the orchestrator decides skip-vs-download, creates
//! the output directory, and drives every asset in order through tile
//! fetching, compositing, and page writing. Items are processed strictly
//! one at a time; the output filesystem is never written concurrently.

use std::path::PathBuf;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::catalog::{CatalogClient, CatalogEnumerator, MediaItem, RetrievalError};
use crate::compose::Compositor;
use crate::config::Config;
use crate::http::build_http_client;
use crate::output::{PageWriter, WriteError, sanitize_title};
use crate::progress::{ProgressSink, SkipReason};
use crate::tiles::{TILE_SIZE, TileFetcher, TileGrid};

/// Errors that abort one media item. The run continues with the next item.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The item's output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A composited page could not be encoded or written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// What happened to one media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// All pages were downloaded and written.
    Downloaded {
        /// Number of pages written.
        pages: usize,
    },
    /// The item has no assets; nothing was created.
    SkippedUnavailable,
    /// The output directory already exists; treated as fully downloaded.
    SkippedExisting,
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The shared HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// A catalog page fetch failed; enumeration cannot continue.
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Counters for a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    downloaded: usize,
    pages_written: usize,
    skipped_existing: usize,
    unavailable: usize,
    failed: usize,
}

impl RunStats {
    /// Items fully downloaded during this run.
    #[must_use]
    pub fn downloaded(&self) -> usize {
        self.downloaded
    }

    /// Total page files written across all downloaded items.
    #[must_use]
    pub fn pages_written(&self) -> usize {
        self.pages_written
    }

    /// Items skipped because their output directory already existed.
    #[must_use]
    pub fn skipped_existing(&self) -> usize {
        self.skipped_existing
    }

    /// Items with no assets.
    #[must_use]
    pub fn unavailable(&self) -> usize {
        self.unavailable
    }

    /// Items abandoned after an [`ItemError`].
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Downloaded { pages } => {
                self.downloaded += 1;
                self.pages_written += pages;
            }
            ItemOutcome::SkippedExisting => self.skipped_existing += 1,
            ItemOutcome::SkippedUnavailable => self.unavailable += 1,
        }
    }
}

/// Percentage of the page height covered once row `y` has completed.
///
/// Taken at the row's start offset on purpose: the readout stays below
/// 100% until the page finishes. Changing this to `(y + 1)` would alter
/// the reported sequence, not just its presentation.
fn row_percent(y: u32, height: u32) -> u32 {
    if height == 0 {
        return 100;
    }
    let percent = u64::from(y) * u64::from(TILE_SIZE) * 100 / u64::from(height);
    u32::try_from(percent).unwrap_or(100).min(100)
}

/// Drives one media item at a time through the download pipeline.
#[derive(Debug)]
pub struct DownloadOrchestrator<'cfg> {
    config: &'cfg Config,
    fetcher: TileFetcher<'cfg>,
}

impl<'cfg> DownloadOrchestrator<'cfg> {
    /// Creates an orchestrator over a shared HTTP client and configuration.
    #[must_use]
    pub fn new(http: Client, config: &'cfg Config) -> Self {
        Self {
            config,
            fetcher: TileFetcher::new(http, config),
        }
    }

    /// Downloads one media item, or skips it.
    ///
    /// An item with no assets is reported unavailable and skipped with no
    /// filesystem effects. An item whose sanitized output directory already
    /// exists is treated as fully downloaded and skipped with zero network
    /// and filesystem work. Otherwise the directory is created and every
    /// asset is processed strictly in order.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] when the directory cannot be created or a page
    /// cannot be written; the caller decides whether to continue with the
    /// next item.
    #[instrument(skip(self, item, progress), fields(title = %item.title))]
    pub async fn download_item(
        &self,
        item: &MediaItem,
        progress: &dyn ProgressSink,
    ) -> Result<ItemOutcome, ItemError> {
        if item.asset.is_empty() {
            debug!("item has no assets");
            progress.item_skipped(&item.title, SkipReason::Unavailable);
            return Ok(ItemOutcome::SkippedUnavailable);
        }

        let dir = self.config.downloads_root.join(sanitize_title(&item.title));
        let already_downloaded = tokio::fs::metadata(&dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if already_downloaded {
            debug!(dir = %dir.display(), "output directory exists");
            progress.item_skipped(&item.title, SkipReason::AlreadyDownloaded);
            return Ok(ItemOutcome::SkippedExisting);
        }

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| ItemError::CreateDir {
                path: dir.clone(),
                source,
            })?;

        let page_count = item.asset.len();
        progress.item_started(&item.title, page_count);
        let writer = PageWriter::new(&dir, page_count);

        for (ix, asset) in item.asset.iter().enumerate() {
            progress.page_started(ix + 1, page_count);

            let grid = TileGrid::for_dimensions(asset.width, asset.height);
            let mut compositor = Compositor::new(asset.width, asset.height);
            for y in 0..grid.rows() {
                let row = self.fetcher.fetch_row(&asset.uuid, grid, y).await;
                compositor.draw_row(&row);
                progress.row_completed(row_percent(y, asset.height));
            }

            writer.write_page(&compositor.finish(), ix + 1).await?;
        }

        progress.item_finished(&item.title);
        Ok(ItemOutcome::Downloaded { pages: page_count })
    }
}

/// Enumerates the whole catalog and downloads every item in order.
///
/// Only a catalog retrieval failure aborts the run. An [`ItemError`]
/// abandons the affected item, logs a warning, and the run continues with
/// the next item.
///
/// # Errors
///
/// Returns [`RunError`] when the HTTP client cannot be built or a catalog
/// page fetch fails.
pub async fn run(config: &Config, progress: &dyn ProgressSink) -> Result<RunStats, RunError> {
    let http = build_http_client()?;
    let client = CatalogClient::new(http.clone(), config);
    let mut enumerator = CatalogEnumerator::new(client);
    let orchestrator = DownloadOrchestrator::new(http, config);

    let mut stats = RunStats::default();
    while let Some(item) = enumerator.next_item().await? {
        match orchestrator.download_item(&item, progress).await {
            Ok(outcome) => stats.record(outcome),
            Err(e) => {
                warn!(title = %item.title, error = %e, "abandoning item, continuing with next");
                stats.failed += 1;
            }
        }
    }

    info!(
        downloaded = stats.downloaded,
        pages = stats.pages_written,
        skipped = stats.skipped_existing,
        unavailable = stats.unavailable,
        failed = stats.failed,
        "run complete"
    );
    Ok(stats)
}
