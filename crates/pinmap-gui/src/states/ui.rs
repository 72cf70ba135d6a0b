use pinmap_core::io::{DeviceMeta, DeviceSpecs};

use super::document::EditorKind;

/// Fields of the "Save Device" dialog.
#[derive(Default)]
pub struct DeviceForm {
    pub open: bool,
    pub name: String,
    pub kind: String,
    pub processor: String,
    pub clock_speed: String,
    pub voltage: String,
}

impl DeviceForm {
    pub fn to_meta(&self) -> DeviceMeta {
        DeviceMeta {
            name: self.name.trim().to_string(),
            kind: self.kind.trim().to_string(),
            specs: DeviceSpecs {
                processor: self.processor.trim().to_string(),
                clock_speed: self.clock_speed.trim().to_string(),
                voltage: self.voltage.trim().to_string(),
            },
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub editor: EditorKind,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Image texture no longer matches the active raster.
    pub texture_dirty: bool,

    pub device_form: DeviceForm,
    pub show_about: bool,

    /// Close was requested with unsaved eraser work.
    pub confirm_close: bool,
    /// User chose to quit anyway.
    pub allow_close: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
