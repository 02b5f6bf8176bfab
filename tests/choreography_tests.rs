// Intro timeline: phase timings, final pose and the single completion flip.

use carousel_core::choreography::{
    build_choreography, Sequencer, SequencerState, EXPAND_LABEL, FOLD_LABEL,
};
use carousel_core::context::AnimationContext;
use carousel_core::easing::Easing;
use carousel_core::layout::{Layout, LayoutStore};
use carousel_core::scene::Scene;
use carousel_core::timeline::{Anchor, Animatable, AxisTarget, Property, Timeline};
use carousel_core::{FOLD_GROUP_TILT, INTRO_DELAY_SEC, PANEL_COUNT};
use glam::Vec3;
use std::f32::consts::PI;

const DT: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn run_to_end(seq: &mut Sequencer, scene: &mut Scene, ctx: &mut AnimationContext) -> usize {
    let mut frames = 0;
    while !seq.is_complete() && frames < 10_000 {
        seq.tick(DT, scene, ctx);
        frames += 1;
    }
    frames
}

#[test]
fn phase_boundaries_match_the_choreography() {
    let tl = build_choreography(&LayoutStore::default());
    let fold = tl.label(FOLD_LABEL).expect("fold label");
    let expand = tl.label(EXPAND_LABEL).expect("expand label");
    assert!(approx(fold, 3.64), "fold at {fold}");
    assert!(approx(expand, 5.30), "expand at {expand}");
    assert!(approx(tl.duration(), 7.29), "duration {}", tl.duration());
    // fade + line + fold positions + tilt + fold rotations + expand (positions, group, yaw)
    assert_eq!(tl.tweens().len(), PANEL_COUNT * 6 + 2);
}

#[test]
fn intro_ends_in_forward_facing_ring() {
    let store = LayoutStore::default();
    let mut scene = Scene::new(&store, PANEL_COUNT).unwrap();
    let mut ctx = AnimationContext::default();
    let mut seq = Sequencer::new(&store, INTRO_DELAY_SEC);
    assert!(seq.run());
    run_to_end(&mut seq, &mut scene, &mut ctx);

    assert!(ctx.animation_finished());
    let g = scene.cube_group.rotation;
    assert!(approx(g.x, 0.0) && approx(g.y, PI) && approx(g.z, 0.0), "group {g:?}");
    for (i, panel) in scene.panels.iter().enumerate() {
        assert!(approx(panel.opacity, 1.0));
        assert!(panel
            .transform
            .position
            .abs_diff_eq(store.target(Layout::Circle, i), 1e-3));
        let r = panel.transform.rotation;
        assert!(approx(r.x, 0.0) && approx(r.z, 0.0));
        assert!(approx(r.y, store.circle_yaw(i)), "panel {i} yaw {}", r.y);
    }
}

#[test]
fn line_then_fold_poses_hold_between_phases() {
    let store = LayoutStore::default();
    let mut scene = Scene::new(&store, PANEL_COUNT).unwrap();
    let mut tl = build_choreography(&store);

    tl.seek(3.64, &mut scene);
    for (i, panel) in scene.panels.iter().enumerate() {
        let line = store.target(Layout::Line, i);
        assert!(
            panel.transform.position.abs_diff_eq(line, 1e-3),
            "panel {i} at {:?}, line {line:?}",
            panel.transform.position
        );
    }

    // Last fold tween to settle here is panel 10; the expand starts at 5.10.
    tl.seek(5.09, &mut scene);
    let g = scene.cube_group.rotation;
    assert!(approx(g.x, FOLD_GROUP_TILT), "group x {}", g.x);
    assert!(approx(g.y, 0.0) && approx(g.z, 0.0), "group {g:?}");
    for i in 0..=10 {
        let panel = &scene.panels[i];
        let side = store.target(Layout::Fold, i);
        assert!(
            panel.transform.position.abs_diff_eq(side, 1e-3),
            "panel {i} at {:?}, fold {side:?}",
            panel.transform.position
        );
        assert!(panel.transform.rotation.abs_diff_eq(Vec3::ZERO, 1e-3));
    }
}

#[test]
fn finished_flag_flips_exactly_once() {
    let store = LayoutStore::default();
    let mut scene = Scene::new(&store, PANEL_COUNT).unwrap();
    let mut ctx = AnimationContext::default();
    let mut seq = Sequencer::new(&store, INTRO_DELAY_SEC);
    seq.run();

    let mut flips = 0;
    let mut was = ctx.animation_finished();
    for _ in 0..1_000 {
        seq.tick(DT, &mut scene, &mut ctx);
        if ctx.animation_finished() != was {
            flips += 1;
            was = ctx.animation_finished();
        }
    }
    assert_eq!(flips, 1);
    assert_eq!(seq.state(), SequencerState::Complete);
    assert!(!ctx.mark_finished());
}

#[test]
fn nothing_moves_before_the_delay_or_without_run() {
    let store = LayoutStore::default();
    let mut scene = Scene::new(&store, PANEL_COUNT).unwrap();
    let mut ctx = AnimationContext::default();
    let mut seq = Sequencer::new(&store, INTRO_DELAY_SEC);

    seq.tick(1.0, &mut scene, &mut ctx);
    assert_eq!(seq.state(), SequencerState::Idle);
    assert_eq!(scene.panels[0].opacity, 0.0);

    seq.run();
    seq.tick(INTRO_DELAY_SEC * 0.5, &mut scene, &mut ctx);
    assert_eq!(scene.panels[0].opacity, 0.0);
    assert_eq!(scene.panels[0].transform.position, store.target(Layout::Grid, 0));
}

#[test]
fn run_is_idempotent() {
    let store = LayoutStore::default();
    let mut scene = Scene::new(&store, PANEL_COUNT).unwrap();
    let mut ctx = AnimationContext::default();
    let mut seq = Sequencer::new(&store, 0.0);
    assert!(seq.run());
    seq.tick(1.0, &mut scene, &mut ctx);
    assert!(!seq.run());
    assert!(matches!(seq.state(), SequencerState::Running { elapsed } if approx(elapsed, 1.0)));

    let frames = run_to_end(&mut seq, &mut scene, &mut ctx);
    assert!(frames > 0);
    assert!(!seq.run());
    assert!(seq.is_complete());
}

#[derive(Default)]
struct Recorder {
    value: Vec3,
    group: Vec3,
}

impl Animatable for Recorder {
    fn read(&self, property: Property) -> Vec3 {
        match property {
            Property::GroupRotation => self.group,
            _ => self.value,
        }
    }

    fn write(&mut self, property: Property, value: Vec3) {
        match property {
            Property::GroupRotation => self.group = value,
            _ => self.value = value,
        }
    }
}

#[test]
fn tween_captures_its_start_value_when_first_reached() {
    let mut tl = Timeline::new();
    tl.to(
        Anchor::At(1.0),
        Property::Position(0),
        AxisTarget::all(Vec3::splat(10.0)),
        1.0,
        Easing::Linear,
    );
    let mut recorder = Recorder::default();
    tl.seek(0.5, &mut recorder);
    assert_eq!(recorder.value, Vec3::ZERO);

    recorder.value = Vec3::splat(2.0);
    tl.seek(1.5, &mut recorder);
    assert!(recorder.value.abs_diff_eq(Vec3::splat(6.0), 1e-5));
    tl.seek(3.0, &mut recorder);
    assert_eq!(recorder.value, Vec3::splat(10.0));
    assert!(tl.is_complete());
}

#[test]
fn masked_axes_are_left_alone() {
    let mut tl = Timeline::new();
    tl.to(
        Anchor::At(0.0),
        Property::GroupRotation,
        AxisTarget {
            y: Some(PI),
            ..AxisTarget::default()
        },
        1.0,
        Easing::CubicInOut,
    );
    let mut recorder = Recorder {
        group: Vec3::new(0.3, 0.0, -0.2),
        ..Recorder::default()
    };
    tl.seek(1.0, &mut recorder);
    assert_eq!(recorder.group, Vec3::new(0.3, PI, -0.2));
}

#[test]
fn after_previous_and_labels_chain_groups() {
    let mut tl = Timeline::new();
    tl.to_staggered(
        Anchor::At(0.0),
        (0..3).map(|i| (Property::Opacity(i), AxisTarget::scalar(1.0))),
        1.0,
        0.5,
        Easing::Linear,
    );
    tl.add_label("next");
    tl.to(
        Anchor::AfterPrevious,
        Property::Position(0),
        AxisTarget::all(Vec3::ONE),
        1.0,
        Easing::Linear,
    );
    tl.to(
        Anchor::Label("next", -0.5),
        Property::Position(1),
        AxisTarget::all(Vec3::ONE),
        1.0,
        Easing::Linear,
    );
    assert_eq!(tl.label("next"), Some(2.0));
    let starts: Vec<f32> = tl.tweens().iter().map(|t| t.start).collect();
    assert_eq!(starts, vec![0.0, 0.5, 1.0, 2.0, 1.5]);
    assert_eq!(tl.duration(), 3.0);
}
