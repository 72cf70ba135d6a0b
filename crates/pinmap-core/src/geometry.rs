use serde::{Deserialize, Serialize};

use crate::error::{PinmapError, Result};

/// Integer pixel position in original image space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImagePoint {
    pub x: i32,
    pub y: i32,
}

impl ImagePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True if the point addresses a pixel of a `width`x`height` image.
    pub fn is_inside(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as i64) < width as i64 && (self.y as i64) < height as i64
    }
}

/// Floating point position in screen (viewport) space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in image coordinates with `x1 <= x2` and `y1 <= y2`.
///
/// Both corners are part of the rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl ImageRect {
    /// Build a rectangle from two drag corners in any order.
    pub fn from_corners(a: ImagePoint, b: ImagePoint) -> Self {
        Self {
            x1: a.x.min(b.x),
            y1: a.y.min(b.y),
            x2: a.x.max(b.x),
            y2: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> u32 {
        (self.x2 - self.x1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y2 - self.y1) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }

    pub fn origin(&self) -> ImagePoint {
        ImagePoint::new(self.x1, self.y1)
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, p: ImagePoint) -> bool {
        self.x1 <= p.x && p.x <= self.x2 && self.y1 <= p.y && p.y <= self.y2
    }

    /// True if `other` lies entirely within `self`, edges included.
    pub fn contains_rect(&self, other: &ImageRect) -> bool {
        self.contains_point(other.origin()) && self.contains_point(ImagePoint::new(other.x2, other.y2))
    }

    /// Clip to `[0, width] x [0, height]`. Returns `None` if nothing remains.
    pub fn clipped(&self, width: u32, height: u32) -> Option<ImageRect> {
        let w = width as i32;
        let h = height as i32;
        let r = ImageRect {
            x1: self.x1.clamp(0, w),
            y1: self.y1.clamp(0, h),
            x2: self.x2.clamp(0, w),
            y2: self.y2.clamp(0, h),
        };
        if r.is_empty() {
            None
        } else {
            Some(r)
        }
    }

    /// Validate the rectangle as a crop region of a `src_w`x`src_h` image.
    pub fn validated(&self, src_w: u32, src_h: u32) -> Result<ImageRect> {
        if self.is_empty() {
            return Err(PinmapError::InvalidCrop(
                "Crop width and height must be > 0".into(),
            ));
        }

        if self.x1 < 0 || self.y1 < 0 || self.x2 > src_w as i32 || self.y2 > src_h as i32 {
            return Err(PinmapError::InvalidCrop(format!(
                "Crop region ({},{} {}x{}) exceeds source dimensions ({src_w}x{src_h})",
                self.x1,
                self.y1,
                self.width(),
                self.height()
            )));
        }

        Ok(*self)
    }
}
