// Browser-side tuning that has no meaning for the native frontend.

/// Element id of the WebGPU canvas.
pub const CANVAS_ID: &str = "app-canvas";

/// URL prefix the panel images are fetched from.
pub const ASSET_BASE_URL: &str = "assets";

// Canvas backing store is capped at 2x its CSS size.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

/// Pixels per wheel "line" when `deltaMode` is DOM_DELTA_LINE.
pub const WHEEL_LINE_HEIGHT_PX: f32 = 100.0 / 6.0;

// Upper bound on a single frame step (backgrounded tabs resume with huge gaps).
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

/// Transparent so the page background shows behind the panels.
pub const CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
