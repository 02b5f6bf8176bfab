use carousel_core::assets::{load_texture_set, TextureSet};
use carousel_core::SceneConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: String) -> Result<Vec<u8>, String> {
    let window = web::window().ok_or("no window")?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{:?}", e))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| format!("not a Response: {:?}", e))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let buffer = JsFuture::from(resp.array_buffer().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Fetches every panel image; any failed request or decode aborts startup.
pub async fn load_panel_textures(config: &SceneConfig) -> carousel_core::Result<TextureSet> {
    let uris = config.texture_uris();
    log::info!("[assets] fetching {} images from {}", uris.len(), config.asset_base);
    load_texture_set(&uris, config.layer_size, fetch_bytes).await
}
