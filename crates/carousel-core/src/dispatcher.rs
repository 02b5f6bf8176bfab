use crate::constants::{AUTO_SCROLL_DURATION_SEC, CENTER_DEAD_ZONE};
use crate::context::AnimationContext;
use crate::easing::Easing;
use crate::scene::Scene;
use crate::smooth_scroll::{ScrollToOptions, SmoothScroll};
use crate::state::Camera;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The intro is still playing.
    NotReady,
    /// A commanded scroll is already running.
    AutoScrolling,
    /// Neither a panel nor the center of the view was clicked.
    Missed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    AutoScroll { target: f32 },
    Ignored(IgnoreReason),
}

#[inline]
pub fn in_center_dead_zone(ndc: Vec2) -> bool {
    ndc.x.abs() < CENTER_DEAD_ZONE && ndc.y.abs() < CENTER_DEAD_ZONE
}

/// Turns clicks into a single guarded scroll to the end of the page.
#[derive(Clone, Debug)]
pub struct InteractionDispatcher {
    scroll_options: ScrollToOptions,
}

impl Default for InteractionDispatcher {
    fn default() -> Self {
        Self {
            scroll_options: ScrollToOptions {
                duration: AUTO_SCROLL_DURATION_SEC,
                easing: Easing::QuadInOut,
            },
        }
    }
}

impl InteractionDispatcher {
    pub fn on_click(
        &self,
        ndc: Vec2,
        camera: &Camera,
        scene: &Scene,
        ctx: &mut AnimationContext,
        scroll: &mut SmoothScroll,
    ) -> ClickOutcome {
        if !ctx.animation_finished() {
            return ClickOutcome::Ignored(IgnoreReason::NotReady);
        }
        if ctx.is_auto_scrolling() {
            return ClickOutcome::Ignored(IgnoreReason::AutoScrolling);
        }
        let hit = scene.pick(&camera.ray_from_ndc(ndc));
        if hit.is_none() && !in_center_dead_zone(ndc) {
            return ClickOutcome::Ignored(IgnoreReason::Missed);
        }
        if !ctx.begin_auto_scroll() {
            return ClickOutcome::Ignored(IgnoreReason::AutoScrolling);
        }
        let target = scroll.limit();
        scroll.scroll_to(target, self.scroll_options);
        match hit {
            Some((i, _)) => log::info!("[click] panel {} → auto-scroll to {:.1}", i, target),
            None => log::info!("[click] center → auto-scroll to {:.1}", target),
        }
        ClickOutcome::AutoScroll { target }
    }
}
