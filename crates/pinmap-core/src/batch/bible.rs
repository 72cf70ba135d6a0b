use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::PACKAGES_DIR;
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorBible {
    pub components: Vec<BibleEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BibleEntry {
    pub id: String,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub rotation: i32,
    pub image: BibleImage,
    #[serde(rename = "pin-map")]
    pub pin_map: PinMapRef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BibleImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinMapRef {
    pub src: String,
}

/// Index every `<name>.png` in `folder` that has a `<name>.json` next to it.
///
/// PNGs without JSON, or whose size cannot be read, are skipped with a warning.
pub fn generate_sensor_bible(folder: &Path) -> Result<SensorBible> {
    let mut names: Vec<String> = std::fs::read_dir(folder)?
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();

    let mut components = Vec::new();
    for filename in &names {
        let Some(base) = filename.strip_suffix(".png") else {
            continue;
        };

        if !folder.join(format!("{base}.json")).exists() {
            warn!("Skipping {base}: missing JSON file");
            continue;
        }

        let (width, height) = match image::image_dimensions(folder.join(filename)) {
            Ok(dims) => dims,
            Err(e) => {
                warn!("Skipping {base}: image could not be loaded ({e})");
                continue;
            }
        };

        components.push(BibleEntry {
            id: base.to_string(),
            name: base.to_string(),
            x: 0,
            y: 0,
            rotation: 0,
            image: BibleImage {
                src: format!("{PACKAGES_DIR}/Modules/{base}.png"),
                width,
                height,
            },
            pin_map: PinMapRef {
                src: format!("{PACKAGES_DIR}/Modules/{base}.json"),
            },
        });
    }

    Ok(SensorBible { components })
}
