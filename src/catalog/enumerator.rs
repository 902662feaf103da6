//! Lazy, forward-only enumeration of catalog items across pages.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use super::client::CatalogClient;
use super::error::RetrievalError;
use super::model::MediaItem;

/// Drives [`CatalogClient`] across successive pages, yielding media items
/// in the catalog's native order.
///
/// The sequence is finite, forward-only, and non-restartable. Enumeration
/// stops when a page returns fewer items than the configured page size or
/// when the reported current page equals the reported total page count,
/// whichever comes first. A failed page fetch aborts the enumeration; the
/// error is surfaced once and subsequent calls yield no further items.
#[derive(Debug)]
pub struct CatalogEnumerator<'cfg> {
    client: CatalogClient<'cfg>,
    next_page: u32,
    buffer: VecDeque<MediaItem>,
    finished: bool,
}

impl<'cfg> CatalogEnumerator<'cfg> {
    /// Creates an enumerator starting at page 1.
    #[must_use]
    pub fn new(client: CatalogClient<'cfg>) -> Self {
        Self {
            client,
            next_page: 1,
            buffer: VecDeque::new(),
            finished: false,
        }
    }

    /// Yields the next media item, fetching the next catalog page on demand.
    ///
    /// Returns `Ok(None)` once the catalog is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError`] when a page fetch fails; this is fatal to
    /// the whole run and no buffered items from the failed fetch are yielded.
    #[instrument(skip(self), fields(page = self.next_page))]
    pub async fn next_item(&mut self) -> Result<Option<MediaItem>, RetrievalError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.finished {
                return Ok(None);
            }

            let page = match self.client.fetch_page(self.next_page).await {
                Ok(page) => page,
                Err(e) => {
                    // Non-restartable: a fetch failure ends the sequence.
                    self.finished = true;
                    return Err(e);
                }
            };

            let page_size = self.client.config().page_size;
            let item_count = u32::try_from(page.media.len()).unwrap_or(u32::MAX);
            if item_count < page_size || page.pagination.page == page.pagination.pages {
                debug!(
                    items = item_count,
                    page = page.pagination.page,
                    pages = page.pagination.pages,
                    "last catalog page reached"
                );
                self.finished = true;
            }
            self.next_page += 1;
            self.buffer.extend(page.media);
        }
    }
}
