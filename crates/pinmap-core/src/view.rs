use tracing::debug;

use crate::consts::DEFAULT_ZOOM_STEP;
use crate::geometry::{ImagePoint, ScreenPoint};

/// Width and height of a surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Portion of the scaled image copied into the viewport.
///
/// `src_*` is measured in scaled-image pixels, `dst_*` in viewport pixels.
/// Both spans have the same length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlitRegion {
    pub src_x: f64,
    pub src_y: f64,
    pub dst_x: f64,
    pub dst_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Zoom factor plus translation mapping image space onto the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom_step: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::with_step(DEFAULT_ZOOM_STEP)
    }
}

impl ViewTransform {
    pub fn with_step(zoom_step: f64) -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            zoom_step,
        }
    }

    /// Back to identity: zoom 1, no offset.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Map a viewport position to continuous image coordinates.
    pub fn screen_to_image_f(&self, p: ScreenPoint) -> (f64, f64) {
        (
            (p.x - self.offset_x) / self.zoom,
            (p.y - self.offset_y) / self.zoom,
        )
    }

    /// Map a viewport position to the image pixel under it (truncating toward zero).
    pub fn screen_to_image(&self, p: ScreenPoint) -> ImagePoint {
        let (x, y) = self.screen_to_image_f(p);
        ImagePoint::new(x as i32, y as i32)
    }

    pub fn image_to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint::new(x * self.zoom + self.offset_x, y * self.zoom + self.offset_y)
    }

    pub fn scaled_size(&self, image: Extent) -> Extent {
        Extent::new(image.width * self.zoom, image.height * self.zoom)
    }

    /// Zoom one step anchored at `cursor`, then clamp.
    ///
    /// The image point under the cursor before the zoom stays under it afterwards
    /// unless the clamp has to pull the image back into view.
    pub fn zoom_at(
        &mut self,
        cursor: ScreenPoint,
        direction: ZoomDirection,
        image: Extent,
        viewport: Extent,
    ) {
        let old_zoom = self.zoom;
        let new_zoom = match direction {
            ZoomDirection::In => old_zoom * self.zoom_step,
            ZoomDirection::Out => old_zoom / self.zoom_step,
        };

        let (ix, iy) = self.screen_to_image_f(cursor);
        self.zoom = new_zoom;
        self.offset_x = cursor.x - ix * new_zoom;
        self.offset_y = cursor.y - iy * new_zoom;
        self.clamp(image, viewport);

        debug!(zoom = self.zoom, "Zoom {:?}", direction);
    }

    /// Translate by a screen-space delta, then clamp.
    pub fn pan(&mut self, dx: f64, dy: f64, image: Extent, viewport: Extent) {
        self.offset_x += dx;
        self.offset_y += dy;
        self.clamp(image, viewport);
    }

    /// Keep the scaled image from leaving slack on either side of the viewport.
    pub fn clamp(&mut self, image: Extent, viewport: Extent) {
        let scaled = self.scaled_size(image);
        self.offset_x = clamp_axis(self.offset_x, viewport.width, scaled.width);
        self.offset_y = clamp_axis(self.offset_y, viewport.height, scaled.height);
    }

    /// Compute which part of the scaled image lands where in the viewport.
    ///
    /// Returns `None` when the transform cannot produce a non-empty, in-range
    /// copy; callers reset the view in that case.
    pub fn visible_region(&self, image: Extent, viewport: Extent) -> Option<BlitRegion> {
        let scaled = self.scaled_size(image);
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return None;
        }

        let dst_x1 = self.offset_x.max(0.0);
        let dst_x2 = viewport.width.min(self.offset_x + scaled.width);
        let dst_y1 = self.offset_y.max(0.0);
        let dst_y2 = viewport.height.min(self.offset_y + scaled.height);

        let width = dst_x2 - dst_x1;
        let height = dst_y2 - dst_y1;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let src_x = (-self.offset_x).max(0.0);
        let src_y = (-self.offset_y).max(0.0);
        if src_x + width > scaled.width + 1e-6 || src_y + height > scaled.height + 1e-6 {
            return None;
        }

        Some(BlitRegion {
            src_x,
            src_y,
            dst_x: dst_x1,
            dst_y: dst_y1,
            width,
            height,
        })
    }
}

/// `min(max(offset, viewport - scaled), 0)`.
///
/// When the scaled image is smaller than the viewport this pins it to the
/// top-left edge.
pub fn clamp_axis(offset: f64, viewport: f64, scaled: f64) -> f64 {
    offset.max(viewport - scaled).min(0.0)
}
