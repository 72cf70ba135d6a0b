use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbImage, RgbaImage};
use ndarray::Array2;

use crate::error::{PinmapError, Result};

/// Decode any supported raster into 8-bit RGB.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return Err(PinmapError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    Ok(rgb)
}

/// Decode keeping the source channel layout (alpha included).
pub fn load_unchanged(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Combine an RGB raster with a visibility mask into RGBA.
///
/// The mask value becomes the alpha channel verbatim.
pub fn compose_rgba(image: &RgbImage, mask: &Array2<u8>) -> RgbaImage {
    let (w, h) = image.dimensions();
    let mut out = RgbaImage::new(w, h);
    for (col, row, px) in image.enumerate_pixels() {
        let alpha = mask[[row as usize, col as usize]];
        out.put_pixel(col, row, Rgba([px[0], px[1], px[2], alpha]));
    }
    out
}

/// Save an RGB raster with `mask` as its alpha channel, as PNG.
pub fn save_rgba_png(image: &RgbImage, mask: &Array2<u8>, path: &Path) -> Result<()> {
    let rgba = compose_rgba(image, mask);
    rgba.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a decoded image, choosing format from the file extension.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") | None => image.save_with_format(path, ImageFormat::Png)?,
        _ => image.save(path)?,
    }
    Ok(())
}
