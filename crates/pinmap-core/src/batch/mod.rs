pub mod bible;
pub mod discover;
pub mod grid;
pub mod scaler;
pub mod tree;

pub use bible::{generate_sensor_bible, SensorBible};
pub use discover::discover_devices;
pub use grid::grid_overlay;
pub use scaler::{
    process_device, scale_coordinates, scale_image, scale_pair, scaled_size, DeviceOutcome,
    ScaleReport,
};
pub use tree::{build_component_tree, EntryKind, TreeEntry};
