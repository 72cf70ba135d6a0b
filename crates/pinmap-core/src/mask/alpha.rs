use ndarray::{s, Array2};

use crate::consts::{MASK_CLEAR, MASK_OPAQUE};
use crate::geometry::{ImagePoint, ImageRect};

/// Per-pixel visibility: 255 keeps a pixel, 0 erases it.
///
/// Shape is `(height, width)`, row-major like the raster it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaMask {
    pub data: Array2<u8>,
}

impl AlphaMask {
    /// Fully opaque mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: Array2::from_elem((height as usize, width as usize), MASK_OPAQUE),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_visible(&self, x: usize, y: usize) -> bool {
        self.data[[y, x]] == MASK_OPAQUE
    }

    pub fn cleared_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == MASK_CLEAR).count()
    }

    /// Clear a filled disk centered at `center`. Returns the flat indices
    /// (`row * width + col`) of pixels that were visible before.
    pub fn stamp_disk(&mut self, center: ImagePoint, radius: u32) -> Vec<usize> {
        let (h, w) = self.data.dim();
        let r = radius as i64;
        let cx = center.x as i64;
        let cy = center.y as i64;
        let mut cleared = Vec::new();

        let row_lo = (cy - r).max(0);
        let row_hi = (cy + r).min(h as i64 - 1);
        let col_lo = (cx - r).max(0);
        let col_hi = (cx + r).min(w as i64 - 1);

        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                let dx = col - cx;
                let dy = row - cy;
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let cell = &mut self.data[[row as usize, col as usize]];
                if *cell == MASK_OPAQUE {
                    *cell = MASK_CLEAR;
                    cleared.push(row as usize * w + col as usize);
                }
            }
        }
        cleared
    }

    /// Clear every pixel flagged in `selection` (same shape as the mask).
    /// Returns the flat indices that changed.
    pub fn clear_selected(&mut self, selection: &Array2<bool>) -> Vec<usize> {
        let w = self.width();
        let mut cleared = Vec::new();
        for ((row, col), cell) in self.data.indexed_iter_mut() {
            if selection[[row, col]] && *cell == MASK_OPAQUE {
                *cell = MASK_CLEAR;
                cleared.push(row * w + col);
            }
        }
        cleared
    }

    /// Make the given flat indices visible again.
    pub fn restore(&mut self, indices: &[usize]) {
        let w = self.width();
        for &idx in indices {
            self.data[[idx / w, idx % w]] = MASK_OPAQUE;
        }
    }

    /// Cut the mask down to `rect` (already validated against its size).
    pub fn cropped(&self, rect: &ImageRect) -> AlphaMask {
        let view = self.data.slice(s![
            rect.y1 as usize..rect.y2 as usize,
            rect.x1 as usize..rect.x2 as usize
        ]);
        AlphaMask {
            data: view.to_owned(),
        }
    }
}
