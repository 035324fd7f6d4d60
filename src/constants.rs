/// Page wiring and presentation constants for the web front-end.
///
/// Element hooks and URLs mirror `www/index.html`; render tuning keeps magic
/// numbers out of the GPU code.
// Model asset, relative to the page
pub const MODEL_URL: &str = "scene.gltf";

// DOM hooks
pub const RENDER_CONTAINER_ID: &str = "container3D";
pub const PORTFOLIO_CONTAINER_SELECTOR: &str = ".portfolio-container";
pub const CANVAS_ID: &str = "scene-canvas";

// Portfolio card markup
pub const ITEM_CLASS: &str = "portfolio-item";
pub const MEDIA_WRAPPER_CLASS: &str = "media-wrapper";
pub const LINK_TARGET: &str = "_blank";
// Fade applied when a card flips between hidden and revealed
pub const ITEM_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

// Render targets
// Antialiasing samples per pixel for the scene pass (WebGPU allows 1 or 4)
pub const MSAA_SAMPLE_COUNT: u32 = 4;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
// Fully transparent so the page background shows through the canvas
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;
