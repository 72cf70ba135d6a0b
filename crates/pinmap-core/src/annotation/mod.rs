pub mod linking;
pub mod session;
pub mod types;

pub use linking::{resolve_link, LinkRejection};
pub use session::{AnnotationAction, PinRejection, PinSession};
pub use types::{Label, Link, Pin};
