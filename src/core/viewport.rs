use super::constants::{OBJECT_BASE_SCALE, OBJECT_SCALE_REFERENCE_WIDTH};

/// Browser viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Camera aspect ratio. A collapsed viewport falls back to square so the
    /// projection matrix stays finite.
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Object scale for this viewport width: full size from the reference
    /// width upwards, proportionally smaller below it.
    pub fn object_scale(&self) -> f32 {
        object_scale_for_width(self.width)
    }
}

#[inline]
pub fn object_scale_for_width(width: f32) -> f32 {
    (width / OBJECT_SCALE_REFERENCE_WIDTH).clamp(0.0, 1.0) * OBJECT_BASE_SCALE
}
