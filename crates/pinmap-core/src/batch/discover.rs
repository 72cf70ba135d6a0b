use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Result;

/// Names `<name>` for which both `<name>.json` and `<name>.png` exist in `folder`.
///
/// Sorted by name.
pub fn discover_devices(folder: &Path) -> Result<Vec<String>> {
    let mut json = BTreeSet::new();
    let mut png = BTreeSet::new();

    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                json.insert(stem.to_string());
            }
            Some("png") => {
                png.insert(stem.to_string());
            }
            _ => {}
        }
    }

    Ok(json.intersection(&png).cloned().collect())
}
