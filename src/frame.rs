use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::render::GpuState;
use carousel_core::Coordinator;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub coordinator: Rc<RefCell<Coordinator>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState,
    pub last_instant: Instant,
    // Offset last written to window.scrollY.
    pub written_offset: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let Ok(mut coordinator) = self.coordinator.try_borrow_mut() else {
            return;
        };
        let report = coordinator.tick(dt_sec);
        if let Some(scroll) = report.scroll {
            if scroll.canceled_auto_scroll {
                log::info!("[scroll] user reversal canceled auto-scroll");
            }
        }

        let scroll = coordinator.smooth_scroll();
        if scroll.is_scrolling() || (scroll.offset() - self.written_offset).abs() >= 0.5 {
            self.written_offset = scroll.offset();
            dom::set_scroll_y(self.written_offset);
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        let uniforms = coordinator.uniforms();
        let instances = coordinator.instances();
        drop(coordinator);

        match self.gpu.render(&uniforms, &instances) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
