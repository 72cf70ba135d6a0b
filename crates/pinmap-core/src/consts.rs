/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Multiplicative zoom change for one wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Per-channel tolerance for similar-color erase.
pub const DEFAULT_COLOR_TOLERANCE: u8 = 30;

/// Radius (pixels) of the disk stamped by a manual erase stroke.
pub const DEFAULT_BRUSH_RADIUS: u32 = 10;

/// Edge length (pixels) of one checkerboard square in the eraser preview.
pub const DEFAULT_CHECKER_SIZE: u32 = 10;

/// Gray level of the dark checkerboard squares.
pub const CHECKER_GRAY: u8 = 192;

/// Mask value for a visible pixel.
pub const MASK_OPAQUE: u8 = 255;

/// Mask value for an erased pixel.
pub const MASK_CLEAR: u8 = 0;

/// Characters the label recognizer may return.
pub const OCR_WHITELIST: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_/";

/// Label text used when recognition succeeds but yields nothing usable.
pub const OCR_PLACEHOLDER: &str = "UNKNOWN";

/// Upscale factor applied to a label region before binarization.
pub const OCR_UPSCALE: u32 = 2;

/// Where a label region is dumped when recognition fails.
pub const OCR_DEBUG_PATH: &str = "ocr_debug.png";

/// Default tesseract executable.
pub const DEFAULT_TESSERACT: &str = "tesseract";

/// Number of histogram bins for Otsu's thresholding.
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// Output resolution used when converting catalog millimetres to pixels.
pub const DEFAULT_PX_PER_MM: f64 = 10.0;

/// Folder that receives scaled artwork.
pub const DEFAULT_OUTPUT_DIR: &str = "dev-boards";

/// Prefix used for package paths in generated indexes.
pub const PACKAGES_DIR: &str = "./packages";

/// Radius of the dot drawn for each pin marker.
pub const PIN_MARKER_RADIUS: f32 = 3.0;

/// Opaque red used for the reference grid preview.
pub const GRID_LINE_COLOR: [u8; 4] = [255, 0, 0, 255];
