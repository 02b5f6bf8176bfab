// Pointer proximity: falloff, damping and the pre-intro gate.

use carousel_core::context::AnimationContext;
use carousel_core::layout::LayoutStore;
use carousel_core::pointer::{pointer_targets, proximity, smooth, PointerEngine};
use carousel_core::scene::Scene;
use carousel_core::{Camera, PANEL_COUNT, POINTER_MAX_DISTANCE, POINTER_MAX_LIFT};
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

fn resting_scene() -> (Scene, LayoutStore) {
    let store = LayoutStore::default();
    let mut scene = Scene::new(&store, PANEL_COUNT).unwrap();
    for (i, panel) in scene.panels.iter_mut().enumerate() {
        panel.opacity = 1.0;
        panel.transform.position = store.circle(i);
        panel.transform.rotation = Vec3::new(0.0, store.circle_yaw(i), 0.0);
    }
    scene.cube_group.rotation.y = PI;
    (scene, store)
}

fn finished_ctx() -> AnimationContext {
    let mut ctx = AnimationContext::default();
    ctx.mark_finished();
    ctx
}

#[test]
fn proximity_is_one_on_the_ray_and_zero_beyond_max() {
    assert_eq!(proximity(0.0, POINTER_MAX_DISTANCE), 1.0);
    assert!((proximity(2.5, POINTER_MAX_DISTANCE) - 0.5).abs() < 1e-6);
    assert_eq!(proximity(POINTER_MAX_DISTANCE, POINTER_MAX_DISTANCE), 0.0);
    assert_eq!(proximity(10.0, POINTER_MAX_DISTANCE), 0.0);
    assert_eq!(proximity(50.0, POINTER_MAX_DISTANCE), 0.0);
}

#[test]
fn zero_damping_targets_are_zero() {
    let t = pointer_targets(1.0, 0.0);
    assert_eq!(t.roll, 0.0);
    assert_eq!(t.lift, 0.0);
    let full = pointer_targets(1.0, 1.0);
    assert!((full.roll - PI).abs() < 1e-6);
    assert!((full.lift - POINTER_MAX_LIFT).abs() < 1e-6);
}

#[test]
fn smoothing_converges_without_overshoot() {
    let mut v = 0.0;
    for _ in 0..200 {
        let next = smooth(v, 1.0, 0.12);
        assert!(next >= v && next <= 1.0);
        v = next;
    }
    assert!((v - 1.0).abs() < 1e-4);
}

#[test]
fn nothing_is_written_before_the_intro_finishes() {
    let (mut scene, _) = resting_scene();
    let before = scene.clone();
    let camera = Camera::overhead(1.0);
    let mut engine = PointerEngine::default();
    engine.set_pointer(Vec2::new(0.5, 0.0));
    assert!(!engine.update(&camera, &mut scene, &AnimationContext::default()));
    for (a, b) in scene.panels.iter().zip(&before.panels) {
        assert_eq!(a.transform, b.transform);
    }
    assert_eq!(scene.tilt_group, before.tilt_group);
}

#[test]
fn zero_damping_is_a_fixed_point_of_the_resting_ring() {
    let (mut scene, _) = resting_scene();
    let before = scene.clone();
    let camera = Camera::overhead(1.0);
    let mut ctx = finished_ctx();
    ctx.set_damping(0.0);
    let mut engine = PointerEngine::default();
    for ndc in [Vec2::ZERO, Vec2::new(0.7, -0.2), Vec2::new(-1.0, 1.0)] {
        engine.set_pointer(ndc);
        for _ in 0..30 {
            assert!(engine.update(&camera, &mut scene, &ctx));
        }
    }
    for (a, b) in scene.panels.iter().zip(&before.panels) {
        assert_eq!(a.transform.rotation.z, 0.0);
        assert_eq!(a.transform.position.y, 0.0);
        assert_eq!(a.transform.rotation.y, b.transform.rotation.y);
    }
    assert_eq!(scene.tilt_group.rotation, Vec3::ZERO);
}

#[test]
fn pointer_over_a_panel_lifts_it_and_leaves_far_ones() {
    let (mut scene, _) = resting_scene();
    let camera = Camera::overhead(1.0);
    let ctx = finished_ctx();
    let world = scene.panel_world_position(0);
    let ndc = camera.view_proj().project_point3(world).truncate();
    let mut engine = PointerEngine::default();
    engine.set_pointer(ndc);
    for _ in 0..120 {
        engine.update(&camera, &mut scene, &ctx);
    }
    // Panel 0 ends up opposite panel 12 on the ring.
    assert!(scene.panels[0].transform.position.y > 1.5);
    assert!(scene.panels[0].transform.rotation.z > 2.0);
    assert!(scene.panels[12].transform.position.y.abs() < 1e-3);
    assert!(scene.tilt_group.rotation.length() > 0.0);
}
