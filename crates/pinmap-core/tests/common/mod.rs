#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;

use image::{GrayImage, Rgb, RgbImage};
use pinmap_core::error::{PinmapError, Result};
use pinmap_core::ocr::TextRecognizer;

/// `width`x`height` image: white for `x < split`, black from `split` on.
pub fn half_split_image(width: u32, height: u32, split: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < split {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

/// Two-color checkerboard with `cell`-pixel squares; `a` at the origin.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: [u8; 3], b: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgb(a)
        } else {
            Rgb(b)
        }
    })
}

/// Write a tiny PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([10, 20, 30]))
        .save(path)
        .expect("write png");
}

/// Recognizer that returns a canned answer and remembers the charset it saw.
pub struct StubRecognizer {
    pub answer: std::result::Result<String, String>,
    pub seen: RefCell<Vec<(u32, u32, String)>>,
}

impl StubRecognizer {
    pub fn ok(text: &str) -> Self {
        Self {
            answer: Ok(text.to_string()),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl TextRecognizer for StubRecognizer {
    fn recognize_text(&self, bitmap: &GrayImage, charset: &str) -> Result<String> {
        self.seen
            .borrow_mut()
            .push((bitmap.width(), bitmap.height(), charset.to_string()));
        self.answer
            .clone()
            .map_err(PinmapError::Recognition)
    }
}
