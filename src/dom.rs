use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::input;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Registers `handler` for `event` on the window and leaks the closure; the
/// listeners live as long as the page.
pub fn add_window_listener<E>(event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

/// Like [`add_window_listener`] but non-passive, so the handler may call
/// `preventDefault`.
pub fn add_active_window_listener<E>(event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("[dom] addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(
            rect.width(),
            rect.height(),
            w.device_pixel_ratio(),
            MAX_DEVICE_PIXEL_RATIO,
        );
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

/// Pointer position in NDC relative to the canvas rectangle.
#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    input::ndc_from_css(x_css, y_css, rect.width() as f32, rect.height() as f32)
}

/// Document scroll range: `scrollHeight - innerHeight`.
pub fn document_scroll_limit() -> f32 {
    let Some(window) = web::window() else {
        return 0.0;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport);
    input::scroll_limit(scroll_height, viewport)
}

pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

pub fn set_scroll_y(offset: f32) {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, offset as f64);
    }
}
