use crate::constants::{
    POINTER_MAX_DISTANCE, POINTER_MAX_LIFT, POINTER_MAX_ROLL, POINTER_MAX_TILT, POINTER_SMOOTHING,
};
use crate::context::AnimationContext;
use crate::scene::Scene;
use crate::state::Camera;
use glam::Vec2;

/// `1` on the pointer ray, falling linearly to `0` at `max_distance`.
#[inline]
pub fn proximity(distance: f32, max_distance: f32) -> f32 {
    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}

/// First-order low-pass step of `value` towards `target`.
#[inline]
pub fn smooth(value: f32, target: f32, factor: f32) -> f32 {
    value + (target - value) * factor
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTargets {
    pub roll: f32,
    pub lift: f32,
}

#[inline]
pub fn pointer_targets(proximity: f32, damping: f32) -> PointerTargets {
    PointerTargets {
        roll: proximity * POINTER_MAX_ROLL * damping,
        lift: proximity * POINTER_MAX_LIFT * damping,
    }
}

/// Proximity-driven roll and lift layered on top of the resting ring, plus a
/// slight whole-scene tilt following the pointer.
#[derive(Clone, Debug, Default)]
pub struct PointerEngine {
    ndc: Vec2,
}

impl PointerEngine {
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.ndc = ndc;
    }

    /// One frame of smoothing. Does nothing until the intro has finished;
    /// returns whether anything was written.
    pub fn update(&self, camera: &Camera, scene: &mut Scene, ctx: &AnimationContext) -> bool {
        if !ctx.animation_finished() {
            return false;
        }
        let damping = ctx.damping();
        let ray = camera.ray_from_ndc(self.ndc);

        for i in 0..scene.panels.len() {
            let world = scene.panel_world_position(i);
            let near = proximity(ray.distance_to_point(world), POINTER_MAX_DISTANCE);
            let target = pointer_targets(near, damping);
            let t = &mut scene.panels[i].transform;
            t.rotation.z = smooth(t.rotation.z, target.roll, POINTER_SMOOTHING);
            t.position.y = smooth(t.position.y, target.lift, POINTER_SMOOTHING);
        }

        let max_tilt = -POINTER_MAX_TILT * damping;
        let tilt = &mut scene.tilt_group.rotation;
        tilt.x = smooth(tilt.x, self.ndc.y * max_tilt, POINTER_SMOOTHING);
        tilt.y = smooth(tilt.y, self.ndc.x * -max_tilt, POINTER_SMOOTHING);
        true
    }
}
