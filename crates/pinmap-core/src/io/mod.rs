pub mod document;
pub mod image_io;

pub use document::{
    read_json, to_json_pretty, write_json, DeviceMeta, DeviceRecord, DeviceSpecs, DigitalPins,
    PinsDocument, RelocPin,
};
pub use image_io::{compose_rgba, load_rgb, load_unchanged, save_image, save_rgba_png};
