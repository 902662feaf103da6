//! Catalog access: one paginated client call plus lazy item enumeration.
//!
//! [`CatalogClient`] issues a single page request and decodes it;
//! [`CatalogEnumerator`] drives the client across successive pages and
//! decides termination. A failed page fetch is fatal to the whole run.

mod client;
mod enumerator;
mod error;
mod model;

pub use client::CatalogClient;
pub use enumerator::CatalogEnumerator;
pub use error::RetrievalError;
pub use model::{Asset, CatalogPage, MediaItem, Pagination};
