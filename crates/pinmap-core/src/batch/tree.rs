use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::PACKAGES_DIR;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// Node of the package index served to the component browser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeEntry>,
}

/// Walk `root` and index every `.json` that has a sibling `.png`.
///
/// Directories without any indexed descendant are dropped.
pub fn build_component_tree(root: &Path) -> Result<Vec<TreeEntry>> {
    walk(root, &[])
}

fn walk(dir: &Path, rel: &[String]) -> Result<Vec<TreeEntry>> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();

    let mut entries = Vec::new();
    for item in &names {
        let full = dir.join(item);
        if full.is_dir() {
            let mut child_rel = rel.to_vec();
            child_rel.push(item.clone());
            let children = walk(&full, &child_rel)?;
            if !children.is_empty() {
                entries.push(TreeEntry {
                    name: item.clone(),
                    path: format!("{PACKAGES_DIR}/{}", child_rel.join("/")).to_lowercase(),
                    kind: EntryKind::Directory,
                    children,
                });
            }
        } else if let Some(base) = item.strip_suffix(".json") {
            if names.iter().any(|n| *n == format!("{base}.png")) {
                entries.push(TreeEntry {
                    name: item.clone(),
                    path: package_path(rel, item),
                    kind: EntryKind::File,
                    children: Vec::new(),
                });
            }
        }
    }
    Ok(entries)
}

/// Package path of a device file at relative folder `rel`.
pub fn package_path(rel: &[String], file: &str) -> String {
    match rel {
        [top, family, ..] if top.eq_ignore_ascii_case("microcontrollers") => {
            format!("{PACKAGES_DIR}/Microcontrollers/{family}/{file}")
        }
        _ => format!("{PACKAGES_DIR}/Modules/{file}"),
    }
}
