use super::camera::CameraPose;
use super::rotation::ObjectTransform;
use super::viewport::Viewport;
use super::visibility::ItemVisibility;

/// Receiver for the side effects produced by scroll and resize updates.
///
/// The web front-end implements this over the DOM and the GPU state; tests
/// implement it with a recorder.
pub trait SceneSink {
    fn set_camera_pose(&mut self, pose: &CameraPose);
    fn set_object_transform(&mut self, transform: &ObjectTransform);
    fn set_item_visibility(&mut self, id: &str, visibility: ItemVisibility);
    fn set_viewport(&mut self, viewport: Viewport, aspect: f32);
}
