use super::InputWiring;
use crate::dom;
use carousel_core::dispatcher::ClickOutcome;
use web_sys as web;

pub fn wire_pointer_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_click(&w);
}

// Tracked on the window: the canvas sits behind the page content.
fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("mousemove", move |ev: web::MouseEvent| {
        let ndc = dom::pointer_ndc(&ev, &w.canvas);
        w.with_coordinator(|c| c.on_pointer_move(ndc));
    });
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("click", move |ev: web::MouseEvent| {
        let ndc = dom::pointer_ndc(&ev, &w.canvas);
        match w.with_coordinator(|c| c.on_click(ndc)) {
            Some(ClickOutcome::AutoScroll { target }) => {
                log::info!(
                    "[click] ndc=({:.2},{:.2}) auto-scroll to {:.0}",
                    ndc.x,
                    ndc.y,
                    target
                );
            }
            Some(ClickOutcome::Ignored(reason)) => {
                log::debug!("[click] ignored: {:?}", reason);
            }
            None => {}
        }
    });
}
