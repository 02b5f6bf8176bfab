pub mod assets;
pub mod choreography;
pub mod config;
pub mod constants;
pub mod context;
pub mod coordinator;
pub mod dispatcher;
pub mod easing;
pub mod error;
pub mod layout;
pub mod mesh;
pub mod pointer;
#[cfg(feature = "gpu")]
pub mod render;
pub mod scene;
pub mod scroll;
pub mod smooth_scroll;
pub mod state;
pub mod timeline;

pub static SCENE_WGSL: &str = include_str!("../shaders/panels.wgsl");

pub use config::SceneConfig;
pub use constants::*;
pub use coordinator::{Coordinator, FrameReport};
pub use error::{Result, SceneError};
pub use state::*;
