use std::path::PathBuf;
use std::process::Command;

use image::{GrayImage, ImageFormat};
use tracing::debug;

use crate::error::{PinmapError, Result};

use super::TextRecognizer;

/// Runs the `tesseract` executable in single-line mode.
#[derive(Clone, Debug)]
pub struct TesseractCli {
    pub binary: PathBuf,
}

impl TesseractCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl TextRecognizer for TesseractCli {
    fn recognize_text(&self, bitmap: &GrayImage, charset: &str) -> Result<String> {
        let scratch = tempfile::Builder::new()
            .prefix("pinmap-ocr-")
            .suffix(".png")
            .tempfile()?;
        bitmap.save_with_format(scratch.path(), ImageFormat::Png)?;

        let output = Command::new(&self.binary)
            .arg(scratch.path())
            .arg("stdout")
            .args(["--psm", "7"])
            .arg("-c")
            .arg(format!("tessedit_char_whitelist={charset}"))
            .output()
            .map_err(|e| {
                PinmapError::Recognition(format!(
                    "failed to run {}: {e}",
                    self.binary.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PinmapError::Recognition(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(%text, "tesseract output");
        Ok(text)
    }
}
