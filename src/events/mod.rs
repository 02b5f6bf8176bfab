pub mod pointer;
pub mod scroll;

use carousel_core::Coordinator;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use pointer::wire_pointer_handlers;
pub use scroll::{wire_lifecycle_handlers, wire_scroll_handlers};

/// Handles shared by every DOM listener.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub coordinator: Rc<RefCell<Coordinator>>,
}

impl InputWiring {
    /// Runs `f` unless the coordinator is already borrowed (re-entrant event
    /// dispatch from inside a frame).
    pub fn with_coordinator<R>(&self, f: impl FnOnce(&mut Coordinator) -> R) -> Option<R> {
        match self.coordinator.try_borrow_mut() {
            Ok(mut c) => Some(f(&mut c)),
            Err(_) => {
                log::debug!("[events] coordinator busy; event dropped");
                None
            }
        }
    }
}
