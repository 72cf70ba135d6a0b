use image::RgbImage;
use ndarray::{Array2, Axis};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Flag every pixel whose channels are all within `tolerance` of `sample`.
///
/// This is a global match, not a flood fill: disconnected regions of the same
/// color are selected too.
pub fn similar_color_selection(image: &RgbImage, sample: [u8; 3], tolerance: u8) -> Array2<bool> {
    let (w, h) = image.dimensions();
    let (w, h) = (w as usize, h as usize);

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        similar_color_parallel(image, sample, tolerance, h, w)
    } else {
        similar_color_sequential(image, sample, tolerance, h, w)
    }
}

fn within_tolerance(px: &[u8], sample: [u8; 3], tolerance: u8) -> bool {
    px.iter()
        .zip(sample.iter())
        .all(|(&a, &b)| a.abs_diff(b) <= tolerance)
}

/// Row-parallel selection using Rayon.
fn similar_color_parallel(
    image: &RgbImage,
    sample: [u8; 3],
    tolerance: u8,
    h: usize,
    w: usize,
) -> Array2<bool> {
    let mut selection = Array2::from_elem((h, w), false);
    selection
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut out)| {
            for col in 0..w {
                let px = image.get_pixel(col as u32, row as u32);
                out[col] = within_tolerance(&px.0, sample, tolerance);
            }
        });
    selection
}

fn similar_color_sequential(
    image: &RgbImage,
    sample: [u8; 3],
    tolerance: u8,
    h: usize,
    w: usize,
) -> Array2<bool> {
    let mut selection = Array2::from_elem((h, w), false);
    for row in 0..h {
        for col in 0..w {
            let px = image.get_pixel(col as u32, row as u32);
            selection[[row, col]] = within_tolerance(&px.0, sample, tolerance);
        }
    }
    selection
}
