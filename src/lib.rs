#![cfg(target_arch = "wasm32")]
use carousel_core::{Coordinator, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn scroll_limit(config: &SceneConfig) -> f32 {
    match dom::document_scroll_limit() {
        l if l > 0.0 => l,
        _ => config.virtual_scroll_limit(dom::viewport_height()),
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let config = SceneConfig::default().with_asset_base(constants::ASSET_BASE_URL);
    let textures = assets::load_panel_textures(&config).await?;

    let (width, height) = (canvas.width(), canvas.height());
    let coordinator = Coordinator::new(
        &config,
        textures.len(),
        width as f32 / height.max(1) as f32,
        scroll_limit(&config),
    )?;
    let coordinator = Rc::new(RefCell::new(coordinator));

    let gpu = render::GpuState::new(&canvas, &textures, constants::CLEAR_RGBA).await?;
    drop(textures);

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        coordinator: coordinator.clone(),
    };
    events::wire_pointer_handlers(wiring.clone());
    events::wire_scroll_handlers(wiring.clone());
    let resize_config = config.clone();
    events::wire_lifecycle_handlers(wiring, move |viewport| {
        resize_config.virtual_scroll_limit(viewport)
    });

    // Adopt a scroll position the browser restored on reload.
    let restored = {
        let mut c = coordinator.borrow_mut();
        c.on_native_scroll(dom::scroll_y());
        c.start();
        c.smooth_scroll().offset()
    };
    log::info!("[scroll] starting at offset {:.0}", restored);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        coordinator,
        canvas,
        gpu,
        last_instant: Instant::now(),
        written_offset: restored,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
