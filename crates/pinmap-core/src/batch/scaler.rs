use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;
use serde_json::Value;
use tracing::{info, warn};

use crate::catalog::{scale_ratio, Catalog};
use crate::error::{PinmapError, Result};
use crate::io::{load_unchanged, read_json, save_image, write_json};

/// Output size for ratio `r`: each side rounded to the nearest pixel, at least 1.
pub fn scaled_size(width: u32, height: u32, r: f64) -> (u32, u32) {
    let w = (width as f64 * r).round().max(1.0) as u32;
    let h = (height as f64 * r).round().max(1.0) as u32;
    (w, h)
}

fn check_ratio(r: f64) -> Result<()> {
    if r.is_finite() && r > 0.0 {
        Ok(())
    } else {
        Err(PinmapError::InvalidScale(r))
    }
}

/// Resize with linear interpolation, keeping the channel layout.
pub fn scale_image(image: &DynamicImage, r: f64) -> Result<DynamicImage> {
    check_ratio(r)?;
    let (w, h) = scaled_size(image.width(), image.height(), r);
    Ok(image.resize_exact(w, h, FilterType::Triangle))
}

/// Multiply one coordinate by `r`, truncating toward zero.
fn scale_number(v: &mut Value, r: f64) -> bool {
    match v.as_f64() {
        Some(n) => {
            *v = Value::from((n * r) as i64);
            true
        }
        None => false,
    }
}

/// Scale every stored pin coordinate pair in place.
///
/// Handles both `digital-pins.reloc[].points` and `pins[].x/y`. Everything
/// else in the document is left untouched. Returns the number of pairs scaled.
///
/// Coordinates truncate toward zero, so scaling by `r` and back by `1/r`
/// stays within one pixel only for `r >= 1`. A downscale first loses up to
/// `1/r` pixels.
pub fn scale_coordinates(doc: &mut Value, r: f64) -> usize {
    let mut pairs = 0;

    if let Some(reloc) = doc
        .get_mut("digital-pins")
        .and_then(|dp| dp.get_mut("reloc"))
        .and_then(Value::as_array_mut)
    {
        for pin in reloc {
            if let Some(points) = pin.get_mut("points").and_then(Value::as_array_mut) {
                if points.len() >= 2 {
                    let sx = scale_number(&mut points[0], r);
                    let sy = scale_number(&mut points[1], r);
                    if sx && sy {
                        pairs += 1;
                    }
                }
            }
        }
    }

    if let Some(pins) = doc.get_mut("pins").and_then(Value::as_array_mut) {
        for pin in pins {
            let sx = pin.get_mut("x").is_some_and(|v| scale_number(v, r));
            let sy = pin.get_mut("y").is_some_and(|v| scale_number(v, r));
            if sx && sy {
                pairs += 1;
            }
        }
    }

    pairs
}

/// Outcome of scaling one image + JSON pair.
#[derive(Clone, Debug)]
pub struct ScaleReport {
    pub ratio: f64,
    pub original_size: (u32, u32),
    pub scaled_size: (u32, u32),
    pub pairs_scaled: usize,
    pub image_path: PathBuf,
    pub json_path: PathBuf,
}

/// Scale `image_path` and the coordinates in `json_path` by `r` and write both.
pub fn scale_pair(
    image_path: &Path,
    json_path: &Path,
    r: f64,
    output_image: &Path,
    output_json: &Path,
) -> Result<ScaleReport> {
    check_ratio(r)?;
    let image = load_unchanged(image_path)?;
    let mut doc: Value = read_json(json_path)?;

    let scaled = scale_image(&image, r)?;
    let pairs_scaled = scale_coordinates(&mut doc, r);

    save_image(&scaled, output_image)?;
    write_json(output_json, &doc)?;
    info!(
        "Saved: {}, {}",
        output_image.display(),
        output_json.display()
    );

    Ok(ScaleReport {
        ratio: r,
        original_size: (image.width(), image.height()),
        scaled_size: (scaled.width(), scaled.height()),
        pairs_scaled,
        image_path: output_image.to_path_buf(),
        json_path: output_json.to_path_buf(),
    })
}

/// What happened to one device during catalog-driven scaling.
#[derive(Clone, Debug)]
pub enum DeviceOutcome {
    Scaled(ScaleReport),
    Skipped { device: String, reason: String },
}

/// Scale `<folder>/<device>.png` and `.json` so the image's long side matches
/// the catalog size at `px_per_mm`, writing the results into `output_dir`.
///
/// Devices missing from the catalog or with an unreadable image are skipped.
pub fn process_device(
    device: &str,
    folder: &Path,
    catalog: &Catalog,
    px_per_mm: f64,
    output_dir: &Path,
) -> Result<DeviceOutcome> {
    let image_path = folder.join(format!("{device}.png"));
    let json_path = folder.join(format!("{device}.json"));

    let Ok((w, h)) = image::image_dimensions(&image_path) else {
        warn!("Skipping {device} (image not found)");
        return Ok(DeviceOutcome::Skipped {
            device: device.to_string(),
            reason: "image not found".into(),
        });
    };

    let Some(dims) = catalog.get(device) else {
        warn!("Skipping {device} (no dimension data)");
        return Ok(DeviceOutcome::Skipped {
            device: device.to_string(),
            reason: "no dimension data".into(),
        });
    };

    let ratio = scale_ratio(dims, w, h, px_per_mm)?;
    info!(
        "{device}: scaling by {ratio:.2}x to match {} mm",
        dims.long_side()
    );

    std::fs::create_dir_all(output_dir)?;
    let report = scale_pair(
        &image_path,
        &json_path,
        ratio,
        &output_dir.join(format!("{device}.png")),
        &output_dir.join(format!("{device}.json")),
    )?;
    Ok(DeviceOutcome::Scaled(report))
}
