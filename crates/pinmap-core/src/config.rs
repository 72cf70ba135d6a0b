use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BRUSH_RADIUS, DEFAULT_CHECKER_SIZE, DEFAULT_COLOR_TOLERANCE, DEFAULT_OUTPUT_DIR,
    DEFAULT_PX_PER_MM, DEFAULT_TESSERACT, DEFAULT_ZOOM_STEP, OCR_DEBUG_PATH, OCR_PLACEHOLDER,
    OCR_UPSCALE, OCR_WHITELIST,
};
use crate::error::{PinmapError, Result};

/// Top-level settings shared by the CLI and the editors.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PinmapConfig {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub eraser: EraserConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub scaling: ScalingConfig,
}

impl PinmapConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the editors and scaler cannot work with.
    pub fn validate(&self) -> Result<()> {
        let step = self.view.zoom_step;
        if !step.is_finite() || step <= 1.0 {
            return Err(PinmapError::InvalidConfig(format!(
                "view.zoom_step must be greater than 1.0, got {step}"
            )));
        }
        let ppm = self.scaling.px_per_mm;
        if !ppm.is_finite() || ppm <= 0.0 {
            return Err(PinmapError::InvalidConfig(format!(
                "scaling.px_per_mm must be positive, got {ppm}"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Multiplicative change per wheel notch.
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EraserConfig {
    /// Per-channel tolerance for similar-color erase.
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,
    /// Radius of the manual erase brush, in image pixels.
    #[serde(default = "default_brush_radius")]
    pub brush_radius: u32,
    /// Checkerboard square size for the transparency preview.
    #[serde(default = "default_checker_size")]
    pub checker_size: u32,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_COLOR_TOLERANCE,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            checker_size: DEFAULT_CHECKER_SIZE,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OcrConfig {
    #[serde(default = "default_whitelist")]
    pub whitelist: String,
    /// Label text substituted when recognition returns nothing usable.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_upscale")]
    pub upscale: u32,
    /// Where the preprocessed region is dumped when recognition fails.
    #[serde(default = "default_debug_path")]
    pub debug_path: PathBuf,
    /// tesseract executable name or path.
    #[serde(default = "default_tesseract")]
    pub tesseract: PathBuf,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            whitelist: default_whitelist(),
            placeholder: default_placeholder(),
            upscale: OCR_UPSCALE,
            debug_path: default_debug_path(),
            tesseract: default_tesseract(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Target resolution for catalog-driven scaling.
    #[serde(default = "default_px_per_mm")]
    pub px_per_mm: f64,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Optional TOML file extending the built-in component catalog.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            px_per_mm: DEFAULT_PX_PER_MM,
            output_dir: default_output_dir(),
            catalog: None,
        }
    }
}

fn default_zoom_step() -> f64 {
    DEFAULT_ZOOM_STEP
}
fn default_tolerance() -> u8 {
    DEFAULT_COLOR_TOLERANCE
}
fn default_brush_radius() -> u32 {
    DEFAULT_BRUSH_RADIUS
}
fn default_checker_size() -> u32 {
    DEFAULT_CHECKER_SIZE
}
fn default_whitelist() -> String {
    OCR_WHITELIST.to_string()
}
fn default_placeholder() -> String {
    OCR_PLACEHOLDER.to_string()
}
fn default_upscale() -> u32 {
    OCR_UPSCALE
}
fn default_debug_path() -> PathBuf {
    PathBuf::from(OCR_DEBUG_PATH)
}
fn default_tesseract() -> PathBuf {
    PathBuf::from(DEFAULT_TESSERACT)
}
fn default_px_per_mm() -> f64 {
    DEFAULT_PX_PER_MM
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
