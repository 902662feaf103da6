//! Canvas compositing of fetched tiles.
//!
//! A [`Compositor`] owns one RGB canvas sized exactly to the asset's pixel
//! dimensions. Present tiles are drawn at `(x * 256, y * 256)`; absent
//! tiles leave their region at the default (black) fill. Tiles never
//! overlap, so the final pixel content is independent of draw order.

use image::{RgbImage, imageops};

use crate::tiles::TileResult;

/// Assembles successfully retrieved tiles into one full-resolution canvas.
#[derive(Debug)]
pub struct Compositor {
    canvas: RgbImage,
}

impl Compositor {
    /// Allocates a blank canvas of exactly `width` x `height` pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbImage::new(width, height),
        }
    }

    /// Draws one tile at its pixel offset. Absent tiles are a no-op.
    ///
    /// Edge tiles larger than the remaining canvas region are clipped.
    pub fn draw(&mut self, tile: &TileResult) {
        if let Some(block) = &tile.block {
            let (px, py) = tile.coordinate.pixel_offset();
            imageops::replace(&mut self.canvas, &block.to_rgb8(), i64::from(px), i64::from(py));
        }
    }

    /// Draws every tile of a fetched row.
    pub fn draw_row(&mut self, tiles: &[TileResult]) {
        for tile in tiles {
            self.draw(tile);
        }
    }

    /// Finalizes the canvas. Call only after all rows have been drawn.
    #[must_use]
    pub fn finish(self) -> RgbImage {
        self.canvas
    }
}
