pub mod preprocess;
pub mod tesseract;
pub mod threshold;

use image::{GrayImage, ImageFormat, RgbImage};
use tracing::{debug, warn};

use crate::config::OcrConfig;
use crate::error::Result;
use crate::geometry::ImageRect;

pub use preprocess::{prepare_region, sanitize_label};
pub use tesseract::TesseractCli;

/// Turns a binarized bitmap into a single line of text.
pub trait TextRecognizer {
    /// Recognize one line, restricted to the characters in `charset`.
    fn recognize_text(&self, bitmap: &GrayImage, charset: &str) -> Result<String>;
}

/// Read a label from `rect`.
///
/// Returns the cleaned text, or `None` if the region is empty or recognition
/// failed. On failure the preprocessed bitmap is written to
/// `config.debug_path` and the error is logged.
pub fn read_label(
    recognizer: &dyn TextRecognizer,
    image: &RgbImage,
    rect: &ImageRect,
    config: &OcrConfig,
) -> Option<String> {
    let Some(bitmap) = prepare_region(image, rect, config.upscale) else {
        debug!(?rect, "OCR region is empty");
        return None;
    };

    match recognizer.recognize_text(&bitmap, &config.whitelist) {
        Ok(raw) => Some(sanitize_label(&raw, &config.whitelist, &config.placeholder)),
        Err(e) => {
            warn!("Label recognition failed: {e}");
            match bitmap.save_with_format(&config.debug_path, ImageFormat::Png) {
                Ok(()) => warn!("Region saved to {}", config.debug_path.display()),
                Err(save_err) => warn!("Could not save debug region: {save_err}"),
            }
            None
        }
    }
}
