//! Page persistence: JPEG encoding and zero-padded sequential filenames.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while persisting a composited page.
#[derive(Debug, Error)]
pub enum WriteError {
    /// JPEG encoding of the canvas failed.
    #[error("failed to encode page {index}: {source}")]
    Encode {
        /// 1-based page index.
        index: usize,
        /// The underlying encode error.
        #[source]
        source: image::ImageError,
    },

    /// File system error writing the encoded page.
    #[error("IO error writing {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Writes composited canvases as sequentially-numbered JPEG files for one
/// media item.
///
/// Filenames are the 1-based page index zero-padded to the digit width of
/// the item's page count: page 3 of 12 becomes `03.jpg`, page 3 of 125
/// becomes `003.jpg`.
#[derive(Debug)]
pub struct PageWriter {
    dir: PathBuf,
    page_count: usize,
}

impl PageWriter {
    /// Creates a writer for an item with `page_count` pages under `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, page_count: usize) -> Self {
        Self {
            dir: dir.into(),
            page_count,
        }
    }

    /// Filename for the 1-based page `index`.
    #[must_use]
    pub fn file_name(&self, index: usize) -> String {
        let width = self.page_count.to_string().len();
        format!("{index:0width$}.jpg")
    }

    /// Encodes the canvas as JPEG and writes it under the item directory.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError`] when encoding or the file write fails.
    pub async fn write_page(&self, canvas: &RgbImage, index: usize) -> Result<PathBuf, WriteError> {
        let mut encoded = Vec::new();
        canvas
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Jpeg)
            .map_err(|source| WriteError::Encode { index, source })?;

        let path = self.dir.join(self.file_name(index));
        tokio::fs::write(&path, &encoded)
            .await
            .map_err(|source| WriteError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), bytes = encoded.len(), "page written");
        Ok(path)
    }

    /// The directory pages are written into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_file_name_padded_to_two_digits() {
        let writer = PageWriter::new(".", 12);
        assert_eq!(writer.file_name(1), "01.jpg");
        assert_eq!(writer.file_name(3), "03.jpg");
        assert_eq!(writer.file_name(12), "12.jpg");
    }

    #[test]
    fn test_file_name_padded_to_three_digits() {
        let writer = PageWriter::new(".", 125);
        assert_eq!(writer.file_name(1), "001.jpg");
        assert_eq!(writer.file_name(125), "125.jpg");
    }

    #[test]
    fn test_file_name_single_page_no_padding() {
        let writer = PageWriter::new(".", 9);
        assert_eq!(writer.file_name(9), "9.jpg");
    }

    #[tokio::test]
    async fn test_write_page_produces_decodable_jpeg() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path(), 12);
        let canvas = RgbImage::from_pixel(300, 260, Rgb([120, 130, 140]));

        let path = writer.write_page(&canvas, 3).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "03.jpg");

        let read_back = image::open(&path).unwrap();
        assert_eq!(read_back.width(), 300);
        assert_eq!(read_back.height(), 260);
    }

    #[test]
    fn test_write_page_from_blocking_context() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path(), 3);
        let canvas = RgbImage::from_pixel(20, 20, Rgb([10, 20, 30]));

        let path = tokio_test::block_on(writer.write_page(&canvas, 2)).unwrap();
        assert_eq!(path.file_name().unwrap(), "2.jpg");
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn test_write_page_missing_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let writer = PageWriter::new(temp.path().join("does-not-exist"), 1);
        let canvas = RgbImage::new(10, 10);

        let err = writer.write_page(&canvas, 1).await.unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
    }
}
