use super::constants::{
    OBJECT_BASE_SCALE, OBJECT_POSITION, ROTATION_ACCUMULATOR_STEP, ROTATION_FAST_END,
    ROTATION_FAST_RATE, ROTATION_FASTEST_RATE, ROTATION_FORMULA_END, ROTATION_SLOW_END,
    ROTATION_SLOW_RATE,
};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::PI;

/// Y rotation (radians) for the scroll-driven part of the page.
///
/// Three linear segments with increasing angular velocity; each segment
/// starts where the previous one ended. Fractions past the formula range are
/// evaluated on the last segment's line, callers switch to accumulation there.
pub fn formula_rotation(fraction: f32) -> f32 {
    let f = fraction.max(0.0);
    let slow_total = ROTATION_SLOW_END * ROTATION_SLOW_RATE * PI;
    let fast_total = (ROTATION_FAST_END - ROTATION_SLOW_END) * ROTATION_FAST_RATE * PI;
    if f <= ROTATION_SLOW_END {
        f * ROTATION_SLOW_RATE * PI
    } else if f <= ROTATION_FAST_END {
        slow_total + (f - ROTATION_SLOW_END) * ROTATION_FAST_RATE * PI
    } else {
        slow_total + fast_total + (f - ROTATION_FAST_END) * ROTATION_FASTEST_RATE * PI
    }
}

/// Where the object's Y rotation comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationMode {
    /// Pure function of the scroll fraction it was last evaluated at.
    Formula(f32),
    /// Running value advanced by a fixed step per scroll event.
    Accumulating(f32),
}

impl Default for RotationMode {
    fn default() -> Self {
        RotationMode::Formula(0.0)
    }
}

impl RotationMode {
    pub fn value(&self) -> f32 {
        match *self {
            RotationMode::Formula(fraction) => formula_rotation(fraction),
            RotationMode::Accumulating(value) => value,
        }
    }

    /// Advance for one scroll event. Above the formula range the last value
    /// (whichever mode produced it) seeds the accumulator; at or below it the
    /// formula takes over again.
    pub fn advance(self, fraction: f32) -> RotationMode {
        if fraction > ROTATION_FORMULA_END {
            RotationMode::Accumulating(self.value() + ROTATION_ACCUMULATOR_STEP)
        } else {
            RotationMode::Formula(fraction)
        }
    }

    pub fn is_accumulating(&self) -> bool {
        matches!(self, RotationMode::Accumulating(_))
    }
}

/// Transform of the loaded model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub rotation: RotationMode,
    pub scale: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            rotation: RotationMode::default(),
            scale: OBJECT_BASE_SCALE,
        }
    }
}

impl ObjectTransform {
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation.value()
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y()),
            Vec3::from_array(OBJECT_POSITION),
        )
    }
}
