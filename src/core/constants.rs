// Shared scroll-mapping and scene tuning constants.

// Zoom (camera distance along +Z)
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 7.0;

// Scroll fraction thresholds shared by the zoom and rotation segments
pub const ZOOM_IN_END: f32 = 0.2; // end of the 7 -> 1 ramp
pub const ZOOM_HOLD_END: f32 = 0.5; // end of the close-up hold
pub const ZOOM_OUT_END: f32 = 0.7; // end of the 1 -> 7 ramp
pub const ROTATION_SLOW_END: f32 = 0.2;
pub const ROTATION_FAST_END: f32 = 0.5;
pub const ROTATION_FORMULA_END: f32 = 0.8; // above this, rotation accumulates

// Angular rates per segment, in multiples of PI per unit of scroll fraction
pub const ROTATION_SLOW_RATE: f32 = 1.0;
pub const ROTATION_FAST_RATE: f32 = 4.0;
pub const ROTATION_FASTEST_RATE: f32 = 8.0;

// Radians added per scroll event once past ROTATION_FORMULA_END
pub const ROTATION_ACCUMULATOR_STEP: f32 = 0.05;

// Vertical camera oscillation
pub const CAMERA_Y_AMPLITUDE: f32 = 2.0;
pub const CAMERA_Y_FREQUENCY: f32 = 5.0; // half-periods over the full page
pub const CAMERA_LOOK_AT: [f32; 3] = [0.0, 0.5, 0.0];

// Perspective camera
pub const CAMERA_FOVY_DEGREES: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Loaded object placement
pub const OBJECT_POSITION: [f32; 3] = [0.0, -1.5, 0.0];
pub const OBJECT_BASE_SCALE: f32 = 1.5;
pub const OBJECT_SCALE_REFERENCE_WIDTH: f32 = 800.0; // narrower viewports shrink the object

// Portfolio card reveal
pub const ITEM_REVEAL_HEIGHT_DIVISOR: f32 = 4.0; // reveal once a quarter of the card is on screen
pub const ITEM_HIDDEN_OFFSET_PX: f32 = 50.0;

// Lighting (white lights)
pub const AMBIENT_INTENSITY: f32 = 1.5;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: [f32; 3] = [0.0, 10.0, 10.0];
