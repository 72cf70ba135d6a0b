use std::path::{Path, PathBuf};

use image::RgbImage;
use pinmap_core::annotation::PinSession;
use pinmap_core::config::EraserConfig;
use pinmap_core::interaction::{EraserInput, PinMapperInput};
use pinmap_core::io::load_rgb;
use pinmap_core::mask::EraserSession;
use pinmap_core::view::Extent;

/// Which tool the viewport drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorKind {
    #[default]
    PinMapper,
    Eraser,
}

impl std::fmt::Display for EditorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PinMapper => write!(f, "Pin Mapper"),
            Self::Eraser => write!(f, "Background Eraser"),
        }
    }
}

/// One opened image with a session per editor.
///
/// The pin mapper always works on the image as loaded; the eraser owns its
/// own copy since it can crop.
pub struct Document {
    pub path: PathBuf,
    pub image: RgbImage,
    pub pins: PinSession,
    pub pin_input: PinMapperInput,
    pub eraser: EraserSession,
    pub eraser_input: EraserInput,
    /// Where the pins were last loaded from or saved to.
    pub pins_path: Option<PathBuf>,
}

impl Document {
    pub fn open(path: &Path, eraser_config: EraserConfig) -> pinmap_core::error::Result<Self> {
        let image = load_rgb(path)?;
        let (w, h) = image.dimensions();
        Ok(Self {
            path: path.to_path_buf(),
            pins: PinSession::new(w, h),
            pin_input: PinMapperInput::default(),
            eraser: EraserSession::new(image.clone(), eraser_config),
            eraser_input: EraserInput::default(),
            pins_path: None,
            image,
        })
    }

    /// Size of the raster the given editor displays.
    pub fn extent(&self, editor: EditorKind) -> Extent {
        let (w, h) = match editor {
            EditorKind::PinMapper => self.image.dimensions(),
            EditorKind::Eraser => self.eraser.dimensions(),
        };
        Extent::from_pixels(w, h)
    }

    /// Target for the automatic save on exit: the last pins file, else
    /// `<stem>.json` next to the image.
    pub fn exit_pins_path(&self) -> PathBuf {
        self.pins_path
            .clone()
            .unwrap_or_else(|| self.path.with_extension("json"))
    }

    pub fn file_stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
