//! Scroll offset → zoomed overhead view.

use crate::constants::{SCROLL_PERTURBATION_DECAY, ZOOMED_Y, ZOOMED_Z};
use crate::context::AnimationContext;
use crate::easing::cubic_in_out;
use crate::scene::Scene;
use glam::Vec3;
use std::f32::consts::PI;

/// Scroll offset together with the largest reachable offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub offset: f32,
    pub limit: f32,
}

/// Normalized progress; a page that cannot scroll reports 0.
#[inline]
pub fn scroll_progress(offset: f32, limit: f32) -> f32 {
    if limit <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / limit).clamp(0.0, 1.0)
}

#[inline]
pub fn scroll_ease(progress: f32) -> f32 {
    cubic_in_out(progress.clamp(0.0, 1.0))
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollReport {
    /// The user scrolled back up while an auto-scroll was running.
    pub canceled_auto_scroll: bool,
    /// Eased progress, when the group transform was rewritten.
    pub ease: Option<f32>,
}

#[derive(Clone, Debug)]
pub struct ScrollMapper {
    zoomed_offset: Vec3,
}

impl Default for ScrollMapper {
    fn default() -> Self {
        Self {
            zoomed_offset: Vec3::new(0.0, ZOOMED_Y, ZOOMED_Z),
        }
    }
}

impl ScrollMapper {
    pub fn on_scroll(
        &self,
        event: ScrollEvent,
        scene: &mut Scene,
        ctx: &mut AnimationContext,
    ) -> ScrollReport {
        let mut report = ScrollReport::default();
        if event.offset < ctx.last_scroll_position() && ctx.is_auto_scrolling() {
            ctx.end_auto_scroll();
            report.canceled_auto_scroll = true;
            log::info!("[scroll] auto-scroll canceled by user at {:.1}", event.offset);
        }
        ctx.record_scroll(event.offset);

        if !ctx.animation_finished() {
            return report;
        }

        let ease = scroll_ease(scroll_progress(event.offset, event.limit));
        scene.cube_group.rotation.y = PI + PI * ease;
        scene.cube_group.position = self.zoomed_offset * ease;
        ctx.set_damping(1.0 - ease);

        for panel in &mut scene.panels {
            panel.transform.rotation.z *= SCROLL_PERTURBATION_DECAY;
            panel.transform.position.y *= SCROLL_PERTURBATION_DECAY;
        }
        report.ease = Some(ease);
        report
    }
}
