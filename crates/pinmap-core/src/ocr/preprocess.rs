use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};

use crate::geometry::ImageRect;

use super::threshold::{binarize, otsu_threshold};

/// Cut `rect` out of `image` and turn it into a clean black/white bitmap.
///
/// Steps: clip to the image, grayscale, upscale by `upscale`, Otsu binarize.
/// Returns `None` if the clipped region is empty.
pub fn prepare_region(image: &RgbImage, rect: &ImageRect, upscale: u32) -> Option<GrayImage> {
    let clipped = rect.clipped(image.width(), image.height())?;

    let region = imageops::crop_imm(
        image,
        clipped.x1 as u32,
        clipped.y1 as u32,
        clipped.width(),
        clipped.height(),
    )
    .to_image();
    let gray = imageops::grayscale(&region);

    let factor = upscale.max(1);
    let mut scaled = imageops::resize(
        &gray,
        gray.width() * factor,
        gray.height() * factor,
        FilterType::Triangle,
    );

    let t = otsu_threshold(&scaled);
    binarize(&mut scaled, t);
    Some(scaled)
}

/// Keep only characters from `charset`; fall back to `placeholder` if none survive.
pub fn sanitize_label(raw: &str, charset: &str, placeholder: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| charset.contains(*c)).collect();
    if cleaned.is_empty() {
        placeholder.to_string()
    } else {
        cleaned
    }
}
