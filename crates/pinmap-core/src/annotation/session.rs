use std::path::Path;

use image::RgbImage;
use tracing::{debug, info};

use crate::config::OcrConfig;
use crate::geometry::{ImagePoint, ImageRect};
use crate::history::History;
use crate::io::{write_json, DeviceMeta, DeviceRecord, DigitalPins, PinsDocument, RelocPin};
use crate::ocr::{read_label, TextRecognizer};

use super::linking::{resolve_link, LinkRejection};
use super::types::{Label, Link, Pin};

/// One undoable pin-mapper action, carrying what it added.
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationAction {
    Pin(Pin),
    Label(Label),
    Link(Link),
    /// Crop rectangle replaced; holds the one that was active before.
    Crop { previous: Option<ImageRect> },
}

/// Why a pin click was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinRejection {
    OutsideImage,
    OutsideCrop,
}

/// Annotation state of one pin-mapping session over a single image.
#[derive(Clone, Debug)]
pub struct PinSession {
    width: u32,
    height: u32,
    pins: Vec<Pin>,
    labels: Vec<Label>,
    links: Vec<Link>,
    crop: Option<ImageRect>,
    history: History<AnnotationAction>,
    next_pin: u32,
    next_label: u32,
    revision: u64,
    saved_revision: u64,
}

impl PinSession {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pins: Vec::new(),
            labels: Vec::new(),
            links: Vec::new(),
            crop: None,
            history: History::new(),
            next_pin: 0,
            next_label: 0,
            revision: 0,
            saved_revision: 0,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn crop(&self) -> Option<ImageRect> {
        self.crop
    }

    pub fn history(&self) -> &History<AnnotationAction> {
        &self.history
    }

    pub fn next_pin_number(&self) -> u32 {
        self.next_pin
    }

    pub fn is_linked(&self, pin_number: u32) -> bool {
        self.links.iter().any(|l| l.pin_number == pin_number)
    }

    /// Place the next numbered pin at `point`.
    ///
    /// The point must address a pixel of the image and, once a crop is set,
    /// lie inside the crop rectangle.
    pub fn place_pin(&mut self, point: ImagePoint) -> Result<&Pin, PinRejection> {
        if !point.is_inside(self.width, self.height) {
            return Err(PinRejection::OutsideImage);
        }
        if let Some(crop) = self.crop {
            if !crop.contains_point(point) {
                debug!(?point, "Pin outside crop ignored");
                return Err(PinRejection::OutsideCrop);
            }
        }

        let pin = Pin {
            pin_number: self.next_pin,
            x: point.x,
            y: point.y,
        };
        info!("Added pin {} at ({}, {})", pin.pin_number, pin.x, pin.y);
        self.next_pin += 1;
        self.history.push(AnnotationAction::Pin(pin.clone()));
        self.pins.push(pin);
        self.revision += 1;
        Ok(&self.pins[self.pins.len() - 1])
    }

    /// Record a label with already-recognized text.
    pub fn add_label(&mut self, text: String, bbox: ImageRect) -> &Label {
        let label = Label {
            label_id: self.next_label,
            text,
            bbox,
        };
        info!("Added label {} '{}'", label.label_id, label.text);
        self.next_label += 1;
        self.history.push(AnnotationAction::Label(label.clone()));
        self.labels.push(label);
        self.revision += 1;
        &self.labels[self.labels.len() - 1]
    }

    /// Run recognition over `rect` and add the result as a label.
    ///
    /// Recognition failures are not errors: nothing is added and `None` is returned.
    pub fn recognize_label(
        &mut self,
        image: &RgbImage,
        rect: ImageRect,
        recognizer: &dyn TextRecognizer,
        config: &OcrConfig,
    ) -> Option<&Label> {
        let bbox = rect.clipped(self.width, self.height)?;
        let text = read_label(recognizer, image, &bbox, config)?;
        Some(self.add_label(text, bbox))
    }

    /// Link the single unlinked pin and single label inside `rect`.
    ///
    /// Any other selection is rejected and leaves the session untouched.
    pub fn process_linking_rectangle(&mut self, rect: ImageRect) -> Result<&Link, LinkRejection> {
        let (pin_idx, label_idx) = resolve_link(&self.pins, &self.labels, &self.links, &rect)?;
        let link = Link::new(&self.pins[pin_idx], &self.labels[label_idx]);
        info!("Linked pin {} to '{}'", link.pin_number, link.text);
        self.history.push(AnnotationAction::Link(link.clone()));
        self.links.push(link);
        self.revision += 1;
        Ok(&self.links[self.links.len() - 1])
    }

    /// Restrict pin placement to `rect` (clipped to the image).
    pub fn set_crop(&mut self, rect: ImageRect) -> Option<ImageRect> {
        let clipped = rect.clipped(self.width, self.height)?;
        self.history.push(AnnotationAction::Crop {
            previous: self.crop,
        });
        self.crop = Some(clipped);
        self.revision += 1;
        debug!(?clipped, "Crop set");
        Some(clipped)
    }

    /// Reverse the most recent action. Returns it, or `None` if the log is empty.
    pub fn undo(&mut self) -> Option<AnnotationAction> {
        let action = self.history.pop()?;
        match &action {
            AnnotationAction::Pin(pin) => {
                self.pins.pop();
                self.next_pin = pin.pin_number;
            }
            AnnotationAction::Label(label) => {
                self.labels.pop();
                self.next_label = label.label_id;
            }
            AnnotationAction::Link(_) => {
                self.links.pop();
            }
            AnnotationAction::Crop { previous } => {
                self.crop = *previous;
            }
        }
        self.revision += 1;
        debug!(?action, "Undid action");
        Some(action)
    }

    /// Replace all pins with a previously saved set. Clears the undo log.
    pub fn load_pins(&mut self, doc: PinsDocument) {
        self.next_pin = doc.pins.iter().map(|p| p.pin_number + 1).max().unwrap_or(0);
        self.pins = doc.pins;
        self.links.clear();
        self.history.clear();
        self.mark_saved();
    }

    /// True if anything changed since the last save or load.
    pub fn has_unsaved_changes(&self) -> bool {
        self.revision != self.saved_revision
    }

    /// Pins are written on exit only when there are some and they changed.
    pub fn should_save_on_exit(&self) -> bool {
        self.has_unsaved_changes() && !self.pins.is_empty()
    }

    pub fn mark_saved(&mut self) {
        self.saved_revision = self.revision;
    }

    /// Write the simple pin document to `path` and mark the session saved.
    pub fn save_pins(&mut self, path: &Path) -> crate::error::Result<()> {
        write_json(path, &self.pins_document())?;
        self.mark_saved();
        info!("Pin locations saved to {}", path.display());
        Ok(())
    }

    pub fn pins_document(&self) -> PinsDocument {
        PinsDocument {
            pins: self.pins.clone(),
        }
    }

    /// Build the device record from the links, in link order.
    ///
    /// `reloc` points are relative to the crop origin when a crop is set.
    pub fn device_record(&self, meta: DeviceMeta) -> DeviceRecord {
        let origin = self.crop.map(|c| c.origin()).unwrap_or(ImagePoint::new(0, 0));
        let reloc = self
            .links
            .iter()
            .map(|link| RelocPin {
                id: link.text.clone(),
                points: [
                    (link.x - origin.x) as i64,
                    (link.y - origin.y) as i64,
                ],
            })
            .collect();

        DeviceRecord {
            name: meta.name,
            kind: meta.kind,
            digital_pins: DigitalPins {
                id: self.links.iter().map(|l| l.text.clone()).collect(),
                reloc,
            },
            specs: meta.specs,
        }
    }
}
