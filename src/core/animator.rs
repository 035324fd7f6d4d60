use super::camera::CameraPose;
use super::constants::{
    CAMERA_LOOK_AT, CAMERA_Y_AMPLITUDE, CAMERA_Y_FREQUENCY, MAX_ZOOM, MIN_ZOOM, ZOOM_HOLD_END,
    ZOOM_IN_END, ZOOM_OUT_END,
};
use super::rotation::ObjectTransform;
use super::sink::SceneSink;
use super::viewport::Viewport;
use super::visibility::{items_visibility, ItemGeometry, ItemVisibility};
use glam::Vec3;
use std::f32::consts::PI;

/// Raw scroll metrics read from the window and document.
#[derive(Clone, Copy, Debug)]
pub struct ScrollState {
    pub scroll_y: f32,
    pub viewport_height: f32,
    pub document_height: f32,
}

impl ScrollState {
    /// Normalized scroll position in [0, 1]. Pages that cannot scroll and
    /// overscroll (rubber-banding) both stay inside the range.
    pub fn fraction(&self) -> f32 {
        let max_scroll = self.document_height - self.viewport_height;
        if max_scroll <= 0.0 {
            return 0.0;
        }
        clamp_fraction(self.scroll_y / max_scroll)
    }
}

#[inline]
pub fn clamp_fraction(fraction: f32) -> f32 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Camera distance for a scroll fraction: zoom in over the first segment,
/// hold close, zoom back out, hold far.
pub fn zoom_for_fraction(fraction: f32) -> f32 {
    let f = clamp_fraction(fraction);
    if f <= ZOOM_IN_END {
        lerp(MAX_ZOOM, MIN_ZOOM, f / ZOOM_IN_END)
    } else if f <= ZOOM_HOLD_END {
        MIN_ZOOM
    } else if f <= ZOOM_OUT_END {
        lerp(
            MIN_ZOOM,
            MAX_ZOOM,
            (f - ZOOM_HOLD_END) / (ZOOM_OUT_END - ZOOM_HOLD_END),
        )
    } else {
        MAX_ZOOM
    }
}

#[inline]
pub fn camera_y_for_fraction(fraction: f32) -> f32 {
    CAMERA_Y_AMPLITUDE * (clamp_fraction(fraction) * PI * CAMERA_Y_FREQUENCY).sin()
}

pub fn camera_pose_for_fraction(fraction: f32) -> CameraPose {
    CameraPose {
        position: Vec3::new(
            0.0,
            camera_y_for_fraction(fraction),
            zoom_for_fraction(fraction),
        ),
        look_at: Vec3::from_array(CAMERA_LOOK_AT),
    }
}

/// Everything the page renders from, owned by the event handlers.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub camera: CameraPose,
    pub aspect: f32,
    pub viewport: Viewport,
    /// `None` until the model has loaded (and forever if loading failed).
    pub object: Option<ObjectTransform>,
}

/// Side effects of one scroll event.
#[derive(Clone, Debug)]
pub struct ScrollUpdate {
    pub fraction: f32,
    pub camera: CameraPose,
    pub object: Option<ObjectTransform>,
    pub items: Vec<(&'static str, ItemVisibility)>,
}

/// Side effects of one resize event.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeUpdate {
    pub viewport: Viewport,
    pub aspect: f32,
    pub object: Option<ObjectTransform>,
}

impl SceneState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            camera: CameraPose::initial(),
            aspect: viewport.aspect(),
            viewport,
            object: None,
        }
    }

    /// Attach the freshly loaded object, sized for the current viewport.
    pub fn with_object(self) -> Self {
        let scale = self.viewport.object_scale();
        Self {
            object: Some(ObjectTransform::with_scale(scale)),
            ..self
        }
    }

    pub fn on_scroll(self, scroll: &ScrollState, items: &[ItemGeometry]) -> (Self, ScrollUpdate) {
        let fraction = scroll.fraction();
        let camera = camera_pose_for_fraction(fraction);
        let object = self.object.map(|o| ObjectTransform {
            rotation: o.rotation.advance(fraction),
            ..o
        });
        let update = ScrollUpdate {
            fraction,
            camera,
            object,
            items: items_visibility(items, scroll.viewport_height),
        };
        (
            Self {
                camera,
                object,
                ..self
            },
            update,
        )
    }

    pub fn on_resize(self, viewport: Viewport) -> (Self, ResizeUpdate) {
        let aspect = viewport.aspect();
        let object = self.object.map(|o| ObjectTransform {
            scale: viewport.object_scale(),
            ..o
        });
        let update = ResizeUpdate {
            viewport,
            aspect,
            object,
        };
        (
            Self {
                aspect,
                viewport,
                object,
                ..self
            },
            update,
        )
    }
}

impl ScrollUpdate {
    pub fn publish(&self, sink: &mut impl SceneSink) {
        sink.set_camera_pose(&self.camera);
        if let Some(object) = &self.object {
            sink.set_object_transform(object);
        }
        for (id, visibility) in &self.items {
            sink.set_item_visibility(id, *visibility);
        }
    }
}

impl ResizeUpdate {
    pub fn publish(&self, sink: &mut impl SceneSink) {
        sink.set_viewport(self.viewport, self.aspect);
        if let Some(object) = &self.object {
            sink.set_object_transform(object);
        }
    }
}
