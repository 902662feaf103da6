//! Output persistence: sanitized directory names and page files.

mod sanitize;
mod writer;

pub use sanitize::sanitize_title;
pub use writer::{PageWriter, WriteError};
