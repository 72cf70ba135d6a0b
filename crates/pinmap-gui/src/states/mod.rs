mod document;
mod ui;
mod viewport;

pub use document::{Document, EditorKind};
pub use ui::{DeviceForm, UIState};
pub use viewport::ViewportState;
