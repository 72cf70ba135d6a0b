use image::{GrayImage, Luma};

use crate::consts::OTSU_HISTOGRAM_BINS;

/// Otsu's thresholding: find the gray level that maximizes between-class variance.
///
/// Pixels strictly above the returned level belong to the foreground class.
pub fn otsu_threshold(image: &GrayImage) -> u8 {
    let bins = OTSU_HISTOGRAM_BINS;
    let mut histogram = vec![0u64; bins];

    for px in image.pixels() {
        histogram[px[0] as usize] += 1;
    }

    let total = (image.width() as u64 * image.height() as u64) as f64;
    let mut sum_all: f64 = 0.0;
    for (i, &count) in histogram.iter().enumerate() {
        sum_all += i as f64 * count as f64;
    }

    let mut weight_bg: f64 = 0.0;
    let mut sum_bg: f64 = 0.0;
    let mut best_variance = 0.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    best_bin as u8
}

/// Binarize in place: above `threshold` becomes 255, everything else 0.
pub fn binarize(image: &mut GrayImage, threshold: u8) {
    for px in image.pixels_mut() {
        *px = if px[0] > threshold { Luma([255]) } else { Luma([0]) };
    }
}
