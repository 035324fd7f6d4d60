// Host-side tests for the scroll and resize mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene {
    pub mod animator {
        include!("../src/core/animator.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod rotation {
        include!("../src/core/rotation.rs");
    }
    pub mod sink {
        include!("../src/core/sink.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
    pub mod visibility {
        include!("../src/core/visibility.rs");
    }
}

use crate::scene::animator::*;
use crate::scene::camera::*;
use crate::scene::constants::*;
use crate::scene::rotation::*;
use crate::scene::sink::SceneSink;
use crate::scene::viewport::*;
use crate::scene::visibility::*;
use std::f32::consts::PI;

const EPS: f32 = 1e-4;

fn scroll_at(fraction: f32) -> ScrollState {
    // 2000px of scrollable distance
    ScrollState {
        scroll_y: fraction * 2000.0,
        viewport_height: 800.0,
        document_height: 2800.0,
    }
}

#[derive(Default)]
struct RecordingSink {
    poses: Vec<CameraPose>,
    transforms: Vec<ObjectTransform>,
    items: Vec<(String, ItemVisibility)>,
    viewports: Vec<(Viewport, f32)>,
}

impl SceneSink for RecordingSink {
    fn set_camera_pose(&mut self, pose: &CameraPose) {
        self.poses.push(*pose);
    }
    fn set_object_transform(&mut self, transform: &ObjectTransform) {
        self.transforms.push(*transform);
    }
    fn set_item_visibility(&mut self, id: &str, visibility: ItemVisibility) {
        self.items.push((id.to_string(), visibility));
    }
    fn set_viewport(&mut self, viewport: Viewport, aspect: f32) {
        self.viewports.push((viewport, aspect));
    }
}

#[test]
fn fraction_from_scroll_metrics() {
    let s = ScrollState {
        scroll_y: 700.0,
        viewport_height: 800.0,
        document_height: 2800.0,
    };
    assert!((s.fraction() - 0.35).abs() < EPS);
}

#[test]
fn fraction_is_zero_when_page_cannot_scroll() {
    let s = ScrollState {
        scroll_y: 0.0,
        viewport_height: 900.0,
        document_height: 900.0,
    };
    assert_eq!(s.fraction(), 0.0);
    let shorter = ScrollState {
        document_height: 400.0,
        ..s
    };
    assert_eq!(shorter.fraction(), 0.0);
}

#[test]
fn fraction_is_clamped_on_overscroll() {
    let mut s = scroll_at(0.0);
    s.scroll_y = -120.0;
    assert_eq!(s.fraction(), 0.0);
    s.scroll_y = 2300.0;
    assert_eq!(s.fraction(), 1.0);
    assert_eq!(clamp_fraction(f32::NAN), 0.0);
}

#[test]
fn zoom_hits_segment_endpoints() {
    assert!((zoom_for_fraction(0.0) - MAX_ZOOM).abs() < EPS);
    assert!((zoom_for_fraction(ZOOM_IN_END) - MIN_ZOOM).abs() < EPS);
    assert!((zoom_for_fraction(0.35) - MIN_ZOOM).abs() < EPS);
    assert!((zoom_for_fraction(ZOOM_HOLD_END) - MIN_ZOOM).abs() < EPS);
    assert!((zoom_for_fraction(ZOOM_OUT_END) - MAX_ZOOM).abs() < EPS);
    assert!((zoom_for_fraction(1.0) - MAX_ZOOM).abs() < EPS);
    assert!((zoom_for_fraction(0.1) - 4.0).abs() < EPS);
    assert!((zoom_for_fraction(0.6) - 4.0).abs() < EPS);
}

#[test]
fn zoom_is_continuous_and_bounded() {
    let mut prev = zoom_for_fraction(0.0);
    for i in 1..=1000 {
        let z = zoom_for_fraction(i as f32 / 1000.0);
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&z), "zoom {z} out of range");
        assert!((z - prev).abs() < 0.05, "zoom jumps at step {i}");
        prev = z;
    }
}

#[test]
fn zoom_is_monotonic_within_ramps() {
    let mut prev = zoom_for_fraction(0.0);
    for i in 1..=200 {
        let z = zoom_for_fraction(i as f32 / 1000.0);
        assert!(z <= prev + EPS);
        prev = z;
    }
    let mut prev = zoom_for_fraction(0.5);
    for i in 501..=700 {
        let z = zoom_for_fraction(i as f32 / 1000.0);
        assert!(z >= prev - EPS);
        prev = z;
    }
}

#[test]
fn camera_oscillates_vertically() {
    let pose = camera_pose_for_fraction(0.35);
    assert!((pose.position.y - 2.0 * (1.75 * PI).sin()).abs() < EPS);
    assert!((pose.position.z - 1.0).abs() < EPS);
    assert_eq!(pose.position.x, 0.0);
    assert_eq!(pose.look_at.to_array(), CAMERA_LOOK_AT);

    let end = camera_pose_for_fraction(0.9);
    assert!((end.position.y - 2.0).abs() < 1e-3);
    assert!((end.position.z - MAX_ZOOM).abs() < EPS);

    for i in 0..=100 {
        let y = camera_y_for_fraction(i as f32 / 100.0);
        assert!(y.abs() <= CAMERA_Y_AMPLITUDE + EPS);
    }
}

#[test]
fn formula_rotation_is_continuous_at_segment_joins() {
    for join in [ROTATION_SLOW_END, ROTATION_FAST_END, ROTATION_FORMULA_END] {
        let below = formula_rotation(join - 1e-4);
        let above = formula_rotation(join + 1e-4);
        assert!((above - below).abs() < 0.01, "discontinuity at {join}");
    }
    assert!((formula_rotation(ROTATION_SLOW_END) - 0.2 * PI).abs() < EPS);
    assert!((formula_rotation(ROTATION_FAST_END) - 1.4 * PI).abs() < EPS);
    assert!((formula_rotation(ROTATION_FORMULA_END) - 3.8 * PI).abs() < 1e-3);
    assert!((formula_rotation(0.35) - 0.8 * PI).abs() < EPS);
}

#[test]
fn formula_rotation_is_nondecreasing() {
    let mut prev = formula_rotation(0.0);
    for i in 1..=800 {
        let r = formula_rotation(i as f32 / 1000.0);
        assert!(r >= prev);
        prev = r;
    }
}

#[test]
fn rotation_accumulates_past_formula_range() {
    let start = RotationMode::Formula(ROTATION_FORMULA_END);
    let first = start.advance(0.9);
    assert!(first.is_accumulating());
    assert!((first.value() - (formula_rotation(0.8) + ROTATION_ACCUMULATOR_STEP)).abs() < 1e-3);

    // Same fraction, more events: keeps turning
    let second = first.advance(0.9);
    assert!((second.value() - first.value() - ROTATION_ACCUMULATOR_STEP).abs() < EPS);
}

#[test]
fn rotation_returns_to_formula_on_scroll_back() {
    let spun = RotationMode::Formula(0.8).advance(0.95).advance(1.0);
    let back = spun.advance(0.5);
    assert_eq!(back, RotationMode::Formula(0.5));
    assert!((back.value() - 1.4 * PI).abs() < EPS);
}

#[test]
fn rotation_at_threshold_stays_on_formula() {
    let r = RotationMode::default().advance(ROTATION_FORMULA_END);
    assert!(!r.is_accumulating());
}

#[test]
fn item_reveals_strictly_above_threshold() {
    let g = |top| ItemGeometry {
        id: "item1",
        top,
        height: 400.0,
    };
    // threshold = 800 - 400 / 4 = 700
    assert_eq!(item_visibility(&g(699.0), 800.0), ItemVisibility::VISIBLE);
    assert_eq!(item_visibility(&g(700.0), 800.0), ItemVisibility::HIDDEN);
    assert_eq!(item_visibility(&g(701.0), 800.0), ItemVisibility::HIDDEN);
    assert_eq!(item_visibility(&g(-500.0), 800.0), ItemVisibility::VISIBLE);
}

#[test]
fn item_visibility_css_values() {
    assert_eq!(ItemVisibility::VISIBLE.css_opacity(), "1");
    assert_eq!(ItemVisibility::VISIBLE.css_transform(), "translateY(0)");
    assert_eq!(ItemVisibility::HIDDEN.css_opacity(), "0");
    assert_eq!(ItemVisibility::HIDDEN.css_transform(), "translateY(50px)");
    assert!(!ItemVisibility::HIDDEN.is_visible());
}

#[test]
fn object_scale_follows_width() {
    assert!((object_scale_for_width(400.0) - 0.75).abs() < EPS);
    assert!((object_scale_for_width(800.0) - OBJECT_BASE_SCALE).abs() < EPS);
    assert!((object_scale_for_width(1920.0) - OBJECT_BASE_SCALE).abs() < EPS);
    assert_eq!(object_scale_for_width(0.0), 0.0);
}

#[test]
fn aspect_falls_back_for_collapsed_viewport() {
    assert!((Viewport::new(1600.0, 800.0).aspect() - 2.0).abs() < EPS);
    assert_eq!(Viewport::new(0.0, 800.0).aspect(), 1.0);
    assert_eq!(Viewport::new(1600.0, 0.0).aspect(), 1.0);
}

#[test]
fn scroll_without_object_moves_only_camera_and_cards() {
    let items = [
        ItemGeometry {
            id: "item1",
            top: 100.0,
            height: 300.0,
        },
        ItemGeometry {
            id: "item2",
            top: 1200.0,
            height: 300.0,
        },
    ];
    let state = SceneState::new(Viewport::new(1280.0, 800.0));
    let (state, update) = state.on_scroll(&scroll_at(0.35), &items);
    assert!(state.object.is_none());
    assert!(update.object.is_none());
    assert_eq!(state.camera, update.camera);

    let mut sink = RecordingSink::default();
    update.publish(&mut sink);
    assert_eq!(sink.poses.len(), 1);
    assert!(sink.transforms.is_empty());
    assert_eq!(
        sink.items,
        vec![
            ("item1".to_string(), ItemVisibility::VISIBLE),
            ("item2".to_string(), ItemVisibility::HIDDEN),
        ]
    );
}

#[test]
fn scroll_with_object_rotates_it() {
    let state = SceneState::new(Viewport::new(1280.0, 800.0)).with_object();
    let object = state.object.expect("object attached");
    assert_eq!(object.rotation_y(), 0.0);
    assert!((object.scale - OBJECT_BASE_SCALE).abs() < EPS);

    let (state, update) = state.on_scroll(&scroll_at(0.35), &[]);
    let rotated = update.object.expect("object in update");
    assert!((rotated.rotation_y() - 0.8 * PI).abs() < EPS);
    assert_eq!(state.object, Some(rotated));

    let mut sink = RecordingSink::default();
    update.publish(&mut sink);
    assert_eq!(sink.transforms, vec![rotated]);
}

#[test]
fn repeated_scroll_events_past_threshold_keep_spinning() {
    let mut state = SceneState::new(Viewport::new(1280.0, 800.0)).with_object();
    let mut values = Vec::new();
    for _ in 0..3 {
        let (next, update) = state.on_scroll(&scroll_at(0.9), &[]);
        values.push(update.object.map(|o| o.rotation_y()).unwrap_or_default());
        state = next;
    }
    assert!((values[1] - values[0] - ROTATION_ACCUMULATOR_STEP).abs() < EPS);
    assert!((values[2] - values[1] - ROTATION_ACCUMULATOR_STEP).abs() < EPS);
}

#[test]
fn resize_updates_aspect_and_scale() {
    let state = SceneState::new(Viewport::new(1280.0, 800.0)).with_object();
    let (state, update) = state.on_resize(Viewport::new(400.0, 800.0));
    assert!((update.aspect - 0.5).abs() < EPS);
    assert!((state.aspect - 0.5).abs() < EPS);
    let object = update.object.expect("object in update");
    assert!((object.scale - 0.75).abs() < EPS);

    let mut sink = RecordingSink::default();
    update.publish(&mut sink);
    assert_eq!(sink.viewports, vec![(Viewport::new(400.0, 800.0), 0.5)]);
    assert_eq!(sink.transforms.len(), 1);
}

#[test]
fn resize_is_idempotent() {
    let vp = Viewport::new(1024.0, 768.0);
    let state = SceneState::new(Viewport::new(1280.0, 800.0)).with_object();
    let (state, first) = state.on_resize(vp);
    let (_, second) = state.on_resize(vp);
    assert_eq!(first, second);
}

#[test]
fn resize_keeps_rotation() {
    let state = SceneState::new(Viewport::new(1280.0, 800.0)).with_object();
    let (state, _) = state.on_scroll(&scroll_at(0.4), &[]);
    let before = state.object.map(|o| o.rotation);
    let (state, _) = state.on_resize(Viewport::new(600.0, 900.0));
    assert_eq!(state.object.map(|o| o.rotation), before);
}

#[test]
fn camera_matrices_are_finite() {
    let cam = Camera::from_pose(&camera_pose_for_fraction(0.35), 16.0 / 9.0);
    assert!((cam.fovy_radians - 50f32.to_radians()).abs() < EPS);
    let vp = cam.view_projection();
    assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));

    // The look-at point projects to the centre of the screen
    let clip = vp * cam.target.extend(1.0);
    assert!((clip.x / clip.w).abs() < EPS);
    assert!((clip.y / clip.w).abs() < EPS);
}

#[test]
fn object_sits_below_origin() {
    let m = ObjectTransform::default().model_matrix();
    let origin = m.transform_point3(glam::Vec3::ZERO);
    assert_eq!(origin.to_array(), OBJECT_POSITION);
}

#[test]
fn scroll_update_reports_fraction_and_mode() {
    let state = SceneState::new(Viewport::new(1280.0, 800.0)).with_object();
    let (state, update) = state.on_scroll(&scroll_at(0.5), &[]);
    assert!((update.fraction - 0.5).abs() < EPS);
    assert!(!update.object.is_some_and(|o| o.rotation.is_accumulating()));
    let (_, update) = state.on_scroll(&scroll_at(0.85), &[]);
    assert!((update.fraction - 0.85).abs() < EPS);
    assert!(update.object.is_some_and(|o| o.rotation.is_accumulating()));
}
