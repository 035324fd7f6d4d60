pub mod resize;
pub mod scroll;

pub use resize::wire_resize;
pub use scroll::{apply_scroll, attach_object, wire_scroll};
