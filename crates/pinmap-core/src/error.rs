use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinmapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    #[error("Grid needs at least one division, got {0}")]
    InvalidGrid(u32),

    #[error("Invalid scale ratio: {0}")]
    InvalidScale(f64),

    #[error("Point ({x}, {y}) is outside the image")]
    OutOfBounds { x: i64, y: i64 },

    #[error("Text recognition failed: {0}")]
    Recognition(String),

    #[error("Unknown component: {0}")]
    UnknownComponent(String),
}

pub type Result<T> = std::result::Result<T, PinmapError>;
