//! All-or-nothing loading of the panel images.
//!
//! Fetching is left to the frontend (HTTP on the web, the filesystem
//! natively); this module joins the fetches, decodes every image to RGBA8 at
//! a common layer size and fails on the first error.

use crate::error::{ensure_count, Result, SceneError};
use futures::future::try_join_all;
use std::fmt::Display;
use std::future::Future;

#[derive(Clone, Debug)]
pub struct PanelImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// One decoded image per panel, all the same size.
#[derive(Clone, Debug)]
pub struct TextureSet {
    pub width: u32,
    pub height: u32,
    pub layers: Vec<PanelImage>,
}

impl TextureSet {
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

pub fn decode_panel_image(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> std::result::Result<PanelImage, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded
        .resize_exact(width, height, image::imageops::FilterType::Triangle)
        .to_rgba8();
    Ok(PanelImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Fetches and decodes every uri concurrently; the first failure aborts the
/// whole set.
pub async fn load_texture_set<F, Fut, E>(
    uris: &[String],
    layer_size: (u32, u32),
    fetch: F,
) -> Result<TextureSet>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = std::result::Result<Vec<u8>, E>>,
    E: Display,
{
    let (width, height) = layer_size;
    let loads = uris.iter().enumerate().map(|(index, uri)| {
        let pending = fetch(uri.clone());
        let uri = uri.clone();
        async move {
            let bytes = pending
                .await
                .map_err(|e| SceneError::load(index, uri.as_str(), e))?;
            decode_panel_image(&bytes, width, height)
                .map_err(|e| SceneError::load(index, uri.as_str(), e))
        }
    });
    let layers = try_join_all(loads).await?;
    ensure_count("decoded textures", uris.len(), layers.len())?;
    log::info!(
        "[assets] loaded {} textures at {}x{}",
        layers.len(),
        width,
        height
    );
    Ok(TextureSet {
        width,
        height,
        layers,
    })
}
