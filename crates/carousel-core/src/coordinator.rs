//! Frame-level owner of the scene.
//!
//! Frontends forward input events and call [`Coordinator::tick`] once per
//! rendered frame. Within a tick the sequencer runs first, then the
//! smooth-scroll step (feeding the scroll mapper), then pointer smoothing.

use crate::choreography::Sequencer;
use crate::config::SceneConfig;
use crate::constants::{
    AMBIENT_INTENSITY, CIRCLE_RADIUS, DIRECTIONAL_INTENSITY, DIRECTIONAL_POSITION,
    GRID_POSITIONS, LINE_SPACING,
};
use crate::context::AnimationContext;
use crate::dispatcher::{ClickOutcome, InteractionDispatcher};
use crate::error::Result;
use crate::layout::LayoutStore;
use crate::mesh::{InstanceRaw, SceneUniforms};
use crate::pointer::PointerEngine;
use crate::scene::Scene;
use crate::scroll::{ScrollMapper, ScrollReport};
use crate::smooth_scroll::SmoothScroll;
use crate::state::Camera;
use glam::{Vec2, Vec3};

/// What happened during one tick, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub scroll: Option<ScrollReport>,
    pub auto_scroll_finished: bool,
    pub pointer_applied: bool,
}

pub struct Coordinator {
    store: LayoutStore,
    scene: Scene,
    camera: Camera,
    ctx: AnimationContext,
    sequencer: Sequencer,
    pointer: PointerEngine,
    mapper: ScrollMapper,
    scroll: SmoothScroll,
    dispatcher: InteractionDispatcher,
}

impl Coordinator {
    /// Validates the panel/texture/layout counts and stages the intro.
    pub fn new(
        config: &SceneConfig,
        texture_count: usize,
        aspect: f32,
        scroll_limit: f32,
    ) -> Result<Self> {
        let store = LayoutStore::new(
            config.panel_count,
            &GRID_POSITIONS,
            CIRCLE_RADIUS,
            LINE_SPACING,
        )?;
        let scene = Scene::new(&store, texture_count)?;
        let sequencer = Sequencer::new(&store, config.intro_delay_sec);
        Ok(Self {
            store,
            scene,
            camera: Camera::overhead(aspect),
            ctx: AnimationContext::default(),
            sequencer,
            pointer: PointerEngine::default(),
            mapper: ScrollMapper::default(),
            scroll: SmoothScroll::new(scroll_limit),
            dispatcher: InteractionDispatcher::default(),
        })
    }

    /// Starts the intro; idempotent.
    pub fn start(&mut self) -> bool {
        self.sequencer.run()
    }

    pub fn tick(&mut self, dt_sec: f32) -> FrameReport {
        let mut report = FrameReport::default();
        self.sequencer.tick(dt_sec, &mut self.scene, &mut self.ctx);

        let step = self.scroll.advance(dt_sec);
        if let Some(event) = step.event {
            report.scroll = Some(self.mapper.on_scroll(event, &mut self.scene, &mut self.ctx));
        }
        if step.scroll_to_completed && self.ctx.is_auto_scrolling() {
            self.ctx.end_auto_scroll();
            report.auto_scroll_finished = true;
            log::info!("[scroll] auto-scroll complete at {:.1}", self.scroll.offset());
        }

        report.pointer_applied = self.pointer.update(&self.camera, &mut self.scene, &self.ctx);
        report
    }

    pub fn on_pointer_move(&mut self, ndc: Vec2) {
        self.pointer.set_pointer(ndc);
    }

    pub fn on_click(&mut self, ndc: Vec2) -> ClickOutcome {
        self.dispatcher.on_click(
            ndc,
            &self.camera,
            &self.scene,
            &mut self.ctx,
            &mut self.scroll,
        )
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        self.scroll.on_wheel(delta_y);
    }

    /// Picks up an offset scrolled outside the controller (scrollbar drag).
    pub fn on_native_scroll(&mut self, offset: f32) -> Option<ScrollReport> {
        let event = self.scroll.sync_native(offset)?;
        Some(self.mapper.on_scroll(event, &mut self.scene, &mut self.ctx))
    }

    pub fn resize(&mut self, width: u32, height: u32, scroll_limit: f32) {
        self.camera.set_aspect(width, height);
        self.scroll.set_limit(scroll_limit);
    }

    /// Releases the scroll controller; the scene stays renderable.
    pub fn teardown(&mut self) {
        self.scroll.destroy();
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn layouts(&self) -> &LayoutStore {
        &self.store
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn context(&self) -> &AnimationContext {
        &self.ctx
    }

    pub fn smooth_scroll(&self) -> &SmoothScroll {
        &self.scroll
    }

    pub fn instances(&self) -> Vec<InstanceRaw> {
        self.scene.instances(&self.camera)
    }

    pub fn uniforms(&self) -> SceneUniforms {
        let dir = Vec3::from(DIRECTIONAL_POSITION).normalize();
        SceneUniforms {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
            light_dir: [dir.x, dir.y, dir.z, 0.0],
            light_params: [AMBIENT_INTENSITY, DIRECTIONAL_INTENSITY, 0.0, 0.0],
        }
    }
}
