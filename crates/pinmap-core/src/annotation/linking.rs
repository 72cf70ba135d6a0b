use thiserror::Error;

use crate::geometry::ImageRect;

use super::types::{Label, Link, Pin};

/// A link rectangle that did not select exactly one pin and one label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("selection must contain exactly one unlinked pin and one label (found {pins} pins, {labels} labels)")]
pub struct LinkRejection {
    pub pins: usize,
    pub labels: usize,
}

/// Pick the pin and label a link rectangle refers to.
///
/// Candidates are unlinked pins whose point lies in `rect` and labels whose
/// whole bounding box lies in `rect`, bounds inclusive. Returns indices into
/// `pins` and `labels` when there is exactly one of each.
pub fn resolve_link(
    pins: &[Pin],
    labels: &[Label],
    links: &[Link],
    rect: &ImageRect,
) -> Result<(usize, usize), LinkRejection> {
    let pin_hits: Vec<usize> = pins
        .iter()
        .enumerate()
        .filter(|(_, pin)| !links.iter().any(|l| l.pin_number == pin.pin_number))
        .filter(|(_, pin)| rect.contains_point(pin.point()))
        .map(|(i, _)| i)
        .collect();

    let label_hits: Vec<usize> = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| rect.contains_rect(&label.bbox))
        .map(|(i, _)| i)
        .collect();

    match (pin_hits.as_slice(), label_hits.as_slice()) {
        ([pin], [label]) => Ok((*pin, *label)),
        _ => Err(LinkRejection {
            pins: pin_hits.len(),
            labels: label_hits.len(),
        }),
    }
}
