use glam::Vec3;

// Shared layout/interaction tuning constants used by both web and native frontends.

// Scene layout
pub const PANEL_COUNT: usize = 24;
pub const CIRCLE_RADIUS: f32 = 6.2; // ring radius for the fold and circle layouts
pub const LINE_SPACING: f32 = 1.5; // distance between neighbours in the line layout
pub const FOLD_GROUP_TILT: f32 = std::f32::consts::PI * 0.15; // group pitch while folded
pub const ZOOMED_Y: f32 = 9.0; // group lift at full scroll
pub const ZOOMED_Z: f32 = 6.5; // group push towards the viewer at full scroll

// Panel geometry (width, thickness, depth)
pub const PANEL_SIZE: [f32; 3] = [1.0, 0.08, 1.3];

// Hand-placed fly-in coordinates, one per panel
pub const GRID_POSITIONS: [[f32; 3]; PANEL_COUNT] = [
    [-18.0, 0.0, 4.0],
    [-16.0, 0.0, -2.0],
    [-14.0, 0.0, 6.0],
    [-12.0, 0.0, -5.0],
    [-10.0, 0.0, 3.0],
    [-8.0, 0.0, -1.0],
    [-6.0, 0.0, 7.0],
    [-4.0, 0.0, -6.0],
    [-2.0, 0.0, 2.0],
    [0.0, 0.0, 0.0],
    [2.0, 0.0, -3.0],
    [4.0, 0.0, 5.0],
    [-9.0, 0.0, -3.0],
    [-3.0, 0.0, 8.0],
    [3.0, 0.0, -6.0],
    [9.0, 0.0, 4.0],
    [6.0, 0.0, -7.0],
    [8.0, 0.0, 1.0],
    [10.0, 0.0, -4.0],
    [12.0, 0.0, 6.0],
    [14.0, 0.0, -8.0],
    [16.0, 0.0, 3.0],
    [18.0, 0.0, -2.0],
    [-15.0, 0.0, 2.0],
];

// Choreography timing (seconds)
pub const INTRO_DELAY_SEC: f32 = 0.5;
pub const FADE_DURATION_SEC: f32 = 0.8;
pub const FADE_STAGGER_SEC: f32 = 0.05;
pub const LINE_DURATION_SEC: f32 = 1.0;
pub const LINE_STAGGER_SEC: f32 = 0.03;
pub const FOLD_DURATION_SEC: f32 = 1.2;
pub const FOLD_STAGGER_SEC: f32 = 0.02;
pub const EXPAND_DURATION_SEC: f32 = 1.5;
pub const EXPAND_ROTATION_DURATION_SEC: f32 = 1.2;
pub const EXPAND_STAGGER_SEC: f32 = 0.03;
pub const EXPAND_OVERLAP_SEC: f32 = 0.2; // expand starts this long before the fold label ends

// Pointer reactivity
pub const POINTER_MAX_DISTANCE: f32 = 5.0; // world units at which proximity reaches 0
pub const POINTER_MAX_ROLL: f32 = std::f32::consts::PI;
pub const POINTER_MAX_LIFT: f32 = 2.5;
pub const POINTER_SMOOTHING: f32 = 0.12; // per-frame low-pass factor
pub const POINTER_MAX_TILT: f32 = 0.075; // tilt group pitch/yaw per unit of pointer offset

// Scroll mapping
pub const SCROLL_PERTURBATION_DECAY: f32 = 0.85; // roll/lift multiplier per scroll event

// Click dispatch
pub const CENTER_DEAD_ZONE: f32 = 0.3; // |ndc| below this counts as a center click
pub const AUTO_SCROLL_DURATION_SEC: f32 = 2.0;

// Smooth scrolling
pub const SMOOTH_SCROLL_DURATION_SEC: f32 = 1.2;
pub const WHEEL_MULTIPLIER: f32 = 1.0;

// Camera: straight-down view, so screen-up is world -Z
pub const CAMERA_EYE: [f32; 3] = [0.0, 12.0, 0.0];
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_POSITION: [f32; 3] = [10.0, 10.0, 10.0];

// Texture array layer size shared by every panel image
pub const TEXTURE_LAYER_WIDTH: u32 = 400;
pub const TEXTURE_LAYER_HEIGHT: u32 = 520;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}
