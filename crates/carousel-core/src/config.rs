use crate::constants::{INTRO_DELAY_SEC, PANEL_COUNT, TEXTURE_LAYER_HEIGHT, TEXTURE_LAYER_WIDTH};

/// Runtime knobs a frontend may override; everything else is a constant.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Directory or URL prefix holding `img1.<ext>` .. `imgN.<ext>`.
    pub asset_base: String,
    pub asset_extension: String,
    pub panel_count: usize,
    pub intro_delay_sec: f32,
    /// Every image is resized to this size to share one texture array.
    pub layer_size: (u32, u32),
    /// Scrollable height in viewport heights when no document provides one.
    pub scroll_pages: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_base: String::new(),
            asset_extension: "jpg".to_string(),
            panel_count: PANEL_COUNT,
            intro_delay_sec: INTRO_DELAY_SEC,
            layer_size: (TEXTURE_LAYER_WIDTH, TEXTURE_LAYER_HEIGHT),
            scroll_pages: 3.0,
        }
    }
}

impl SceneConfig {
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into();
        self
    }

    pub fn texture_uris(&self) -> Vec<String> {
        let base = self.asset_base.trim_end_matches('/');
        (0..self.panel_count)
            .map(|i| format!("{}/img{}.{}", base, i + 1, self.asset_extension))
            .collect()
    }

    /// Largest scroll offset for a viewport of `viewport_height` pixels.
    pub fn virtual_scroll_limit(&self, viewport_height: f32) -> f32 {
        ((self.scroll_pages - 1.0) * viewport_height).max(0.0)
    }
}
