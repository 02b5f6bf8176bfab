use super::InputWiring;
use crate::constants::WHEEL_LINE_HEIGHT_PX;
use crate::{dom, input};
use web_sys as web;

pub fn wire_scroll_handlers(w: InputWiring) {
    wire_wheel(&w);
    wire_native_scroll(&w);
}

/// Resize and page teardown.
pub fn wire_lifecycle_handlers(w: InputWiring, fallback_limit: impl Fn(f32) -> f32 + 'static) {
    let resize = w.clone();
    dom::add_window_listener("resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&resize.canvas);
        let (width, height) = (resize.canvas.width(), resize.canvas.height());
        let limit = match dom::document_scroll_limit() {
            l if l > 0.0 => l,
            _ => fallback_limit(dom::viewport_height()),
        };
        resize.with_coordinator(|c| c.resize(width, height, limit));
        log::debug!("[resize] {}x{} scroll limit {:.0}", width, height, limit);
    });

    let unload = w;
    dom::add_window_listener("beforeunload", move |_: web::Event| {
        unload.with_coordinator(|c| c.teardown());
        log::info!("[lifecycle] teardown");
    });
}

// The controller owns wheel motion; the browser's own smooth scrolling is
// suppressed and the animated offset is written back every frame.
fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    dom::add_active_window_listener("wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta = input::wheel_delta_px(
            ev.delta_y() as f32,
            ev.delta_mode(),
            WHEEL_LINE_HEIGHT_PX,
            dom::viewport_height(),
        );
        w.with_coordinator(|c| c.on_wheel(delta));
    });
}

// Scrollbar drags and keyboard scrolling bypass the wheel path.
fn wire_native_scroll(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("scroll", move |_: web::Event| {
        let offset = dom::scroll_y();
        w.with_coordinator(|c| c.on_native_scroll(offset));
    });
}
