use std::path::Path;

use image::{imageops, RgbImage, RgbaImage};
use tracing::{debug, info};

use crate::config::EraserConfig;
use crate::error::{PinmapError, Result};
use crate::geometry::{ImagePoint, ImageRect};
use crate::history::History;
use crate::io::{compose_rgba, save_rgba_png};

use super::alpha::AlphaMask;
use super::checker::preview;
use super::similar::similar_color_selection;

/// One undoable background-removal action.
///
/// Erase actions keep only the pixels they cleared; undo makes them visible
/// again. Crops keep the full pre-crop raster and mask.
#[derive(Clone, Debug, PartialEq)]
pub enum EraseAction {
    Stroke { cleared: Vec<usize> },
    SimilarColor { cleared: Vec<usize> },
    Crop { image: RgbImage, mask: AlphaMask },
}

/// Background removal over one raster.
pub struct EraserSession {
    image: RgbImage,
    mask: AlphaMask,
    history: History<EraseAction>,
    config: EraserConfig,
    stroke_active: bool,
    revision: u64,
    saved_revision: u64,
}

impl EraserSession {
    pub fn new(image: RgbImage, config: EraserConfig) -> Self {
        let (w, h) = image.dimensions();
        Self {
            image,
            mask: AlphaMask::new(w, h),
            history: History::new(),
            config,
            stroke_active: false,
            revision: 0,
            saved_revision: 0,
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn mask(&self) -> &AlphaMask {
        &self.mask
    }

    pub fn history(&self) -> &History<EraseAction> {
        &self.history
    }

    pub fn config(&self) -> &EraserConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EraserConfig) {
        self.config = config;
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Start a manual erase stroke at `point`.
    pub fn begin_stroke(&mut self, point: ImagePoint) {
        self.history.push(EraseAction::Stroke {
            cleared: Vec::new(),
        });
        self.stroke_active = true;
        self.revision += 1;
        self.stroke_to(point);
    }

    /// Stamp the brush at `point` as part of the current stroke.
    pub fn stroke_to(&mut self, point: ImagePoint) {
        if !self.stroke_active {
            return;
        }
        let newly = self.mask.stamp_disk(point, self.config.brush_radius);
        if let Some(EraseAction::Stroke { cleared }) = self.history.last_mut() {
            cleared.extend(newly);
        }
    }

    pub fn end_stroke(&mut self) {
        if self.stroke_active {
            if let Some(EraseAction::Stroke { cleared }) = self.history.last() {
                debug!(pixels = cleared.len(), "Stroke finished");
            }
        }
        self.stroke_active = false;
    }

    /// Erase every pixel within the configured tolerance of the color at `point`.
    ///
    /// Returns the number of pixels that became transparent.
    pub fn erase_similar(&mut self, point: ImagePoint) -> Result<usize> {
        let (w, h) = self.image.dimensions();
        if !point.is_inside(w, h) {
            return Err(PinmapError::OutOfBounds {
                x: point.x as i64,
                y: point.y as i64,
            });
        }

        let sample = self.image.get_pixel(point.x as u32, point.y as u32).0;
        let selection = similar_color_selection(&self.image, sample, self.config.tolerance);
        let cleared = self.mask.clear_selected(&selection);
        let count = cleared.len();
        info!(
            "Removed {count} pixels similar to {:?} (tolerance {})",
            sample, self.config.tolerance
        );
        self.history.push(EraseAction::SimilarColor { cleared });
        self.revision += 1;
        Ok(count)
    }

    /// Crop raster and mask together to `rect`, clipped to the image.
    pub fn crop(&mut self, rect: ImageRect) -> Result<()> {
        let (w, h) = self.image.dimensions();
        let rect = rect
            .clipped(w, h)
            .ok_or_else(|| PinmapError::InvalidCrop("Crop region does not overlap the image".into()))?
            .validated(w, h)?;

        let cropped_image =
            imageops::crop_imm(&self.image, rect.x1 as u32, rect.y1 as u32, rect.width(), rect.height())
                .to_image();
        let cropped_mask = self.mask.cropped(&rect);

        let image = std::mem::replace(&mut self.image, cropped_image);
        let mask = std::mem::replace(&mut self.mask, cropped_mask);
        self.history.push(EraseAction::Crop { image, mask });
        self.revision += 1;
        info!("Cropped to {}x{}", rect.width(), rect.height());
        Ok(())
    }

    /// Reverse the most recent action.
    pub fn undo(&mut self) -> bool {
        self.stroke_active = false;
        match self.history.pop() {
            Some(EraseAction::Stroke { cleared }) | Some(EraseAction::SimilarColor { cleared }) => {
                self.mask.restore(&cleared);
                self.revision += 1;
                debug!("Undid erase");
                true
            }
            Some(EraseAction::Crop { image, mask }) => {
                self.image = image;
                self.mask = mask;
                self.revision += 1;
                debug!("Undid crop");
                true
            }
            None => false,
        }
    }

    /// Display copy with erased pixels shown as a checkerboard.
    pub fn preview(&self) -> RgbImage {
        preview(&self.image, &self.mask, self.config.checker_size)
    }

    pub fn to_rgba(&self) -> RgbaImage {
        compose_rgba(&self.image, &self.mask.data)
    }

    /// True if the raster or mask changed since the last save.
    pub fn has_unsaved_changes(&self) -> bool {
        self.revision != self.saved_revision
    }

    pub fn save(&mut self, path: &Path) -> Result<()> {
        save_rgba_png(&self.image, &self.mask.data, path)?;
        self.saved_revision = self.revision;
        info!("Image saved to {}", path.display());
        Ok(())
    }
}
