//! Progress reporting seam.
//!
//! The library reports per-item and per-row progress through the
//! [`ProgressSink`] trait; the terminal implementation lives with the
//! binary so core paths never touch a UI crate.

/// Why a media item was skipped without downloading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The item has no assets.
    Unavailable,
    /// The item's output directory already exists.
    AlreadyDownloaded,
}

/// Receives progress events from the download pipeline.
///
/// All methods have empty default bodies so implementations only override
/// what they display.
pub trait ProgressSink: Send + Sync {
    /// A media item's download has begun.
    fn item_started(&self, _title: &str, _page_count: usize) {}

    /// A media item was skipped without any network or filesystem work.
    fn item_skipped(&self, _title: &str, _reason: SkipReason) {}

    /// A page (asset) within the current item has begun.
    fn page_started(&self, _index: usize, _page_count: usize) {}

    /// A tile row of the current page completed; `percent` is the share of
    /// the page's height covered so far.
    fn row_completed(&self, _percent: u32) {}

    /// A media item's download finished.
    fn item_finished(&self, _title: &str) {}
}

/// A sink that discards all progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {}
