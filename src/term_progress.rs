//! Terminal progress display backed by indicatif.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};
use mediabank_dl::{ProgressSink, SkipReason};

/// Longest title shown in progress messages before truncation.
const TITLE_DISPLAY_LEN: usize = 40;

#[derive(Debug, Default)]
struct ItemState {
    title: String,
    page: usize,
    page_count: usize,
}

/// Spinner that shows the current book, page, and row percentage.
#[derive(Debug)]
pub struct TerminalProgress {
    bar: ProgressBar,
    state: Mutex<ItemState>,
}

impl TerminalProgress {
    /// Creates the spinner with a steady tick.
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        Self {
            bar,
            state: Mutex::new(ItemState::default()),
        }
    }

    /// Clears the spinner at the end of a run.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ItemState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for TerminalProgress {
    fn item_started(&self, title: &str, page_count: usize) {
        let mut state = self.lock_state();
        state.title = truncate_title(title);
        state.page = 0;
        state.page_count = page_count;
        self.bar
            .set_message(format!("Downloading {}...", state.title));
    }

    fn item_skipped(&self, title: &str, reason: SkipReason) {
        let label = match reason {
            SkipReason::Unavailable => "[Unavailable]",
            SkipReason::AlreadyDownloaded => "[Already Downloaded]",
        };
        self.bar
            .println(format!("{:<55}{label}", truncate_title(title)));
    }

    fn page_started(&self, index: usize, page_count: usize) {
        let mut state = self.lock_state();
        state.page = index;
        state.page_count = page_count;
        self.bar.set_message(format!(
            "{}  Page: {index} / {page_count}",
            state.title
        ));
    }

    fn row_completed(&self, percent: u32) {
        let state = self.lock_state();
        self.bar.set_message(format!(
            "{}  Page: {} / {}  [{percent}%]",
            state.title, state.page, state.page_count
        ));
    }

    fn item_finished(&self, title: &str) {
        self.bar
            .println(format!("{:<55}[Done]", truncate_title(title)));
    }
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() <= TITLE_DISPLAY_LEN {
        return title.to_string();
    }
    let truncated: String = title.chars().take(TITLE_DISPLAY_LEN).collect();
    format!("{truncated}…")
}
