use image::{DynamicImage, Rgba, RgbaImage};

use crate::consts::GRID_LINE_COLOR;
use crate::error::{PinmapError, Result};

/// Copy of `image` with a `divisions` x `divisions` reference grid drawn on it.
///
/// Lines sit at every multiple of `width / divisions` (and the same for
/// height), starting at 0, so coordinates can be read off before scaling.
pub fn grid_overlay(image: &DynamicImage, divisions: u32) -> Result<RgbaImage> {
    if divisions == 0 {
        return Err(PinmapError::InvalidGrid(divisions));
    }

    let mut out = image.to_rgba8();
    let (w, h) = out.dimensions();
    let step_x = (w / divisions).max(1);
    let step_y = (h / divisions).max(1);
    let line = Rgba(GRID_LINE_COLOR);

    for (x, y, px) in out.enumerate_pixels_mut() {
        if x % step_x == 0 || y % step_y == 0 {
            *px = line;
        }
    }
    Ok(out)
}
