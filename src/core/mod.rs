pub mod animator;
pub mod camera;
pub mod constants;
pub mod model;
pub mod portfolio;
pub mod rotation;
pub mod sink;
pub mod viewport;
pub mod visibility;

pub use animator::*;
pub use camera::*;
pub use constants::*;
pub use portfolio::*;
pub use rotation::*;
pub use sink::*;
pub use viewport::*;
pub use visibility::*;

// Shaders bundled as string constants
pub static MODEL_WGSL: &str = include_str!("../../shaders/model.wgsl");
