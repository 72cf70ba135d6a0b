use image::{Rgb, RgbImage};
use ndarray::Array2;

use crate::consts::{CHECKER_GRAY, MASK_OPAQUE};

use super::AlphaMask;

/// Checkerboard of `size`-pixel squares, 255 where `(row/size + col/size)` is even.
pub fn checker_pattern(width: u32, height: u32, size: u32) -> Array2<u8> {
    let size = size.max(1) as usize;
    Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        if (row / size + col / size) % 2 == 0 {
            255
        } else {
            0
        }
    })
}

/// Display copy of `image`: erased pixels show a white/light-gray checkerboard.
pub fn preview(image: &RgbImage, mask: &AlphaMask, checker_size: u32) -> RgbImage {
    let (w, h) = image.dimensions();
    let pattern = checker_pattern(w, h, checker_size);

    RgbImage::from_fn(w, h, |col, row| {
        let (r, c) = (row as usize, col as usize);
        if mask.data[[r, c]] == MASK_OPAQUE {
            *image.get_pixel(col, row)
        } else if pattern[[r, c]] == 0 {
            Rgb([CHECKER_GRAY; 3])
        } else {
            Rgb([255; 3])
        }
    })
}
