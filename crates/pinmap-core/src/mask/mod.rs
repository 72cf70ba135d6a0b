pub mod alpha;
pub mod checker;
pub mod eraser;
pub mod similar;

pub use alpha::AlphaMask;
pub use checker::{checker_pattern, preview};
pub use eraser::{EraseAction, EraserSession};
pub use similar::similar_color_selection;
