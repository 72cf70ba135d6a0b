use serde::{Deserialize, Serialize};

use crate::geometry::{ImagePoint, ImageRect};

/// A marked pin location in original image space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub pin_number: u32,
    pub x: i32,
    pub y: i32,
}

impl Pin {
    pub fn point(&self) -> ImagePoint {
        ImagePoint::new(self.x, self.y)
    }
}

/// Text read from a user-selected region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub label_id: u32,
    pub text: String,
    pub bbox: ImageRect,
}

/// One pin associated with one label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub pin_number: u32,
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub bbox: ImageRect,
}

impl Link {
    pub fn new(pin: &Pin, label: &Label) -> Self {
        Self {
            pin_number: pin.pin_number,
            x: pin.x,
            y: pin.y,
            text: label.text.clone(),
            bbox: label.bbox,
        }
    }

    pub fn point(&self) -> ImagePoint {
        ImagePoint::new(self.x, self.y)
    }
}
