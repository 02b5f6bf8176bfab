// Scroll mapping: progress, ease curve, zoom pose and reversal handling.

use carousel_core::context::AnimationContext;
use carousel_core::layout::LayoutStore;
use carousel_core::scene::Scene;
use carousel_core::scroll::{scroll_ease, scroll_progress, ScrollEvent, ScrollMapper};
use carousel_core::{PANEL_COUNT, ZOOMED_Y, ZOOMED_Z};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

fn finished() -> (Scene, AnimationContext) {
    let scene = Scene::new(&LayoutStore::default(), PANEL_COUNT).unwrap();
    let mut ctx = AnimationContext::default();
    ctx.mark_finished();
    (scene, ctx)
}

#[test]
fn progress_is_clamped_and_safe_on_empty_pages() {
    assert_eq!(scroll_progress(0.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(500.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(1500.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-20.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, 0.0), 0.0);
    assert_eq!(scroll_progress(f32::NAN, 1000.0), 0.0);
}

#[test]
fn ease_hits_endpoints_and_midpoint() {
    assert_eq!(scroll_ease(0.0), 0.0);
    assert_eq!(scroll_ease(1.0), 1.0);
    assert!((scroll_ease(0.5) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_ease(-1.0), 0.0);
    assert_eq!(scroll_ease(2.0), 1.0);
}

#[test]
fn ease_is_monotonic_and_continuous() {
    let steps = 1000;
    let mut prev = scroll_ease(0.0);
    for i in 1..=steps {
        let v = scroll_ease(i as f32 / steps as f32);
        assert!(v >= prev, "not monotonic at step {i}");
        assert!(v - prev < 0.01, "jump at step {i}");
        prev = v;
    }
    let below = scroll_ease(0.5 - 1e-4);
    let above = scroll_ease(0.5 + 1e-4);
    assert!((above - below).abs() < 1e-3);
}

#[test]
fn full_scroll_reaches_the_zoomed_pose() {
    let (mut scene, mut ctx) = finished();
    let mapper = ScrollMapper::default();
    let report = mapper.on_scroll(
        ScrollEvent {
            offset: 2000.0,
            limit: 2000.0,
        },
        &mut scene,
        &mut ctx,
    );
    assert_eq!(report.ease, Some(1.0));
    assert!((scene.cube_group.rotation.y - TAU).abs() < 1e-5);
    assert!(scene
        .cube_group
        .position
        .abs_diff_eq(Vec3::new(0.0, ZOOMED_Y, ZOOMED_Z), 1e-5));
    assert_eq!(ctx.damping(), 0.0);
    assert_eq!(ctx.last_scroll_position(), 2000.0);

    mapper.on_scroll(
        ScrollEvent {
            offset: 0.0,
            limit: 2000.0,
        },
        &mut scene,
        &mut ctx,
    );
    assert!((scene.cube_group.rotation.y - PI).abs() < 1e-6);
    assert_eq!(scene.cube_group.position, Vec3::ZERO);
    assert_eq!(ctx.damping(), 1.0);
}

#[test]
fn scroll_events_decay_pointer_perturbations() {
    let (mut scene, mut ctx) = finished();
    scene.panels[3].transform.rotation.z = 1.0;
    scene.panels[3].transform.position.y = 2.0;
    ScrollMapper::default().on_scroll(
        ScrollEvent {
            offset: 10.0,
            limit: 1000.0,
        },
        &mut scene,
        &mut ctx,
    );
    assert!((scene.panels[3].transform.rotation.z - 0.85).abs() < 1e-6);
    assert!((scene.panels[3].transform.position.y - 1.7).abs() < 1e-6);
}

#[test]
fn scroll_before_intro_only_records_offset() {
    let mut scene = Scene::new(&LayoutStore::default(), PANEL_COUNT).unwrap();
    let mut ctx = AnimationContext::default();
    let report = ScrollMapper::default().on_scroll(
        ScrollEvent {
            offset: 400.0,
            limit: 1000.0,
        },
        &mut scene,
        &mut ctx,
    );
    assert_eq!(report.ease, None);
    assert_eq!(scene.cube_group.rotation, Vec3::ZERO);
    assert_eq!(ctx.damping(), 1.0);
    assert_eq!(ctx.last_scroll_position(), 400.0);
}

#[test]
fn scrolling_up_cancels_auto_scroll() {
    let (mut scene, mut ctx) = finished();
    let mapper = ScrollMapper::default();
    let ev = |offset| ScrollEvent {
        offset,
        limit: 1000.0,
    };
    assert!(ctx.begin_auto_scroll());
    let down = mapper.on_scroll(ev(300.0), &mut scene, &mut ctx);
    assert!(!down.canceled_auto_scroll);
    assert!(ctx.is_auto_scrolling());

    let up = mapper.on_scroll(ev(250.0), &mut scene, &mut ctx);
    assert!(up.canceled_auto_scroll);
    assert!(!ctx.is_auto_scrolling());

    let again = mapper.on_scroll(ev(200.0), &mut scene, &mut ctx);
    assert!(!again.canceled_auto_scroll);
}
