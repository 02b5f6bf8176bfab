use glam::Vec2;

/// DOM `WheelEvent.deltaMode` values.
pub const DELTA_PIXEL: u32 = 0;
pub const DELTA_LINE: u32 = 1;
pub const DELTA_PAGE: u32 = 2;

/// Maps a position in CSS pixels relative to the canvas to normalized device
/// coordinates: x right and y up, both in [-1, 1].
#[inline]
pub fn ndc_from_css(x_css: f32, y_css: f32, width_css: f32, height_css: f32) -> Vec2 {
    if width_css <= 0.0 || height_css <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (x_css / width_css) * 2.0 - 1.0,
        -(y_css / height_css) * 2.0 + 1.0,
    )
}

/// Converts a wheel delta to pixels.
#[inline]
pub fn wheel_delta_px(delta: f32, delta_mode: u32, line_height: f32, page_height: f32) -> f32 {
    match delta_mode {
        DELTA_LINE => delta * line_height,
        DELTA_PAGE => delta * page_height,
        _ => delta,
    }
}

/// Backing-store size for a canvas laid out at `css_w` x `css_h`.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, device_pixel_ratio: f64, max_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max_ratio)
    } else {
        1.0
    };
    let w = (css_w * dpr) as u32;
    let h = (css_h * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Scrollable distance of a document, never negative.
#[inline]
pub fn scroll_limit(scroll_height: f64, viewport_height: f64) -> f32 {
    (scroll_height - viewport_height).max(0.0) as f32
}
