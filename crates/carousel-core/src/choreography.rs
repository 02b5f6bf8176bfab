//! The one-shot intro: grid fade-in, collapse to a line, fold to a side
//! profile, then expand into the forward-facing ring.

use crate::constants::*;
use crate::context::AnimationContext;
use crate::easing::Easing;
use crate::layout::{Layout, LayoutStore};
use crate::scene::Scene;
use crate::timeline::{Anchor, Animatable, AxisTarget, Property, Timeline};
use glam::Vec3;
use std::f32::consts::PI;

pub const FOLD_LABEL: &str = "foldToSide";
pub const EXPAND_LABEL: &str = "expandToFront";

const EASE: Easing = Easing::CubicInOut;

impl Animatable for Scene {
    fn read(&self, property: Property) -> Vec3 {
        match property {
            Property::Opacity(i) => Vec3::new(self.panels[i].opacity, 0.0, 0.0),
            Property::Position(i) => self.panels[i].transform.position,
            Property::Rotation(i) => self.panels[i].transform.rotation,
            Property::GroupRotation => self.cube_group.rotation,
        }
    }

    fn write(&mut self, property: Property, value: Vec3) {
        match property {
            Property::Opacity(i) => self.panels[i].opacity = value.x,
            Property::Position(i) => self.panels[i].transform.position = value,
            Property::Rotation(i) => self.panels[i].transform.rotation = value,
            Property::GroupRotation => self.cube_group.rotation = value,
        }
    }
}

/// Builds the intro timeline for every panel in `store`.
pub fn build_choreography(store: &LayoutStore) -> Timeline {
    let n = store.len();
    let mut tl = Timeline::new();

    for i in 0..n {
        tl.to(
            Anchor::At(i as f32 * FADE_STAGGER_SEC),
            Property::Opacity(i),
            AxisTarget::scalar(1.0),
            FADE_DURATION_SEC,
            EASE,
        );
    }

    tl.to_staggered(
        Anchor::AfterPrevious,
        (0..n).map(|i| {
            let line = store.target(Layout::Line, i);
            (Property::Position(i), AxisTarget::all(line))
        }),
        LINE_DURATION_SEC,
        LINE_STAGGER_SEC,
        EASE,
    );

    tl.add_label(FOLD_LABEL);
    let fold = Anchor::Label(FOLD_LABEL, 0.0);
    tl.to_staggered(
        fold,
        (0..n).map(|i| {
            let side = store.target(Layout::Fold, i);
            (Property::Position(i), AxisTarget::all(side))
        }),
        FOLD_DURATION_SEC,
        FOLD_STAGGER_SEC,
        EASE,
    );
    tl.to(
        fold,
        Property::GroupRotation,
        AxisTarget {
            x: Some(FOLD_GROUP_TILT),
            ..AxisTarget::default()
        },
        FOLD_DURATION_SEC,
        EASE,
    );
    tl.to_staggered(
        fold,
        (0..n).map(|i| (Property::Rotation(i), AxisTarget::all(Vec3::ZERO))),
        FOLD_DURATION_SEC,
        FOLD_STAGGER_SEC,
        EASE,
    );

    tl.add_label(EXPAND_LABEL);
    let expand = Anchor::Label(EXPAND_LABEL, -EXPAND_OVERLAP_SEC);
    tl.to_staggered(
        expand,
        (0..n).map(|i| {
            let ring = store.target(Layout::Circle, i);
            (Property::Position(i), AxisTarget::all(ring))
        }),
        EXPAND_DURATION_SEC,
        EXPAND_STAGGER_SEC,
        EASE,
    );
    tl.to(
        expand,
        Property::GroupRotation,
        AxisTarget {
            x: Some(0.0),
            y: Some(PI),
            z: None,
        },
        EXPAND_DURATION_SEC,
        EASE,
    );
    tl.to_staggered(
        expand,
        (0..n).map(|i| {
            let yaw = AxisTarget {
                y: Some(store.circle_yaw(i)),
                ..AxisTarget::default()
            };
            (Property::Rotation(i), yaw)
        }),
        EXPAND_ROTATION_DURATION_SEC,
        EXPAND_STAGGER_SEC,
        EASE,
    );

    tl
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SequencerState {
    Idle,
    Running { elapsed: f32 },
    Complete,
}

/// Owns the scene's transforms until the intro has played out.
pub struct Sequencer {
    timeline: Timeline,
    delay: f32,
    state: SequencerState,
}

impl Sequencer {
    pub fn new(store: &LayoutStore, delay: f32) -> Self {
        Self {
            timeline: build_choreography(store),
            delay: delay.max(0.0),
            state: SequencerState::Idle,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SequencerState::Complete
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Leading delay plus the timeline length.
    pub fn total_duration(&self) -> f32 {
        self.delay + self.timeline.duration()
    }

    /// Starts the intro. Later calls are no-ops; returns whether this call started it.
    pub fn run(&mut self) -> bool {
        if self.state != SequencerState::Idle {
            log::debug!("[sequencer] run ignored in state {:?}", self.state);
            return false;
        }
        log::info!(
            "[sequencer] start: {} tweens over {:.2}s",
            self.timeline.tweens().len(),
            self.total_duration()
        );
        self.state = SequencerState::Running { elapsed: 0.0 };
        true
    }

    pub fn tick(&mut self, dt_sec: f32, scene: &mut Scene, ctx: &mut AnimationContext) {
        let SequencerState::Running { elapsed } = self.state else {
            return;
        };
        let elapsed = elapsed + dt_sec.max(0.0);
        if elapsed >= self.delay {
            self.timeline.seek(elapsed - self.delay, scene);
        }
        if elapsed >= self.total_duration() && self.timeline.is_complete() {
            self.state = SequencerState::Complete;
            if ctx.mark_finished() {
                log::info!("[sequencer] complete after {:.2}s", elapsed);
            }
        } else {
            self.state = SequencerState::Running { elapsed };
        }
    }
}
