//! Timeline: an ordered list of tweens advanced by absolute time.
//!
//! Tweens are anchored either at an absolute time, at the end of the most
//! recently added tween group (`AfterPrevious`), or relative to a label.
//! Labels are placed at the timeline's current end.
//!
//! # Invariants
//!
//! 1. A tween captures its start value the first time the playhead reaches it.
//! 2. A tween the playhead has passed writes its final value exactly once and
//!    never touches its property again.
//! 3. Tweens are applied in insertion order, so later tweens win on overlap.
//! 4. Only the axes named in a tween's target are written.

use crate::easing::Easing;
use glam::Vec3;
use smallvec::SmallVec;

/// Animatable channel of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    /// Panel opacity, carried in the `x` component.
    Opacity(usize),
    Position(usize),
    Rotation(usize),
    GroupRotation,
}

/// Anything the timeline can read from and write to.
pub trait Animatable {
    fn read(&self, property: Property) -> Vec3;
    fn write(&mut self, property: Property, value: Vec3);
}

/// Per-axis destination; `None` leaves that axis alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisTarget {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl AxisTarget {
    pub fn all(v: Vec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }

    pub fn scalar(v: f32) -> Self {
        Self {
            x: Some(v),
            ..Self::default()
        }
    }

    fn blend(&self, current: Vec3, from: Vec3, t: f32) -> Vec3 {
        let lerp = |a: f32, b: Option<f32>, keep: f32| b.map_or(keep, |b| a + (b - a) * t);
        Vec3::new(
            lerp(from.x, self.x, current.x),
            lerp(from.y, self.y, current.y),
            lerp(from.z, self.z, current.z),
        )
    }
}

/// Where a newly added tween group starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    At(f32),
    AfterPrevious,
    Label(&'static str, f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TweenState {
    Pending,
    Active { from: Vec3 },
    Done,
}

#[derive(Clone, Debug)]
pub struct Tween {
    pub property: Property,
    pub to: AxisTarget,
    pub start: f32,
    pub duration: f32,
    pub easing: Easing,
    state: TweenState,
}

impl Tween {
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    pub fn is_done(&self) -> bool {
        self.state == TweenState::Done
    }
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
    labels: SmallVec<[(&'static str, f32); 4]>,
    last_end: f32,
    duration: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total length: the latest end of any tween.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn label(&self, name: &str) -> Option<f32> {
        self.labels
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, t)| *t)
    }

    /// Places `name` at the current end of the timeline.
    pub fn add_label(&mut self, name: &'static str) -> &mut Self {
        self.labels.push((name, self.duration));
        self
    }

    fn resolve(&self, anchor: Anchor) -> f32 {
        let start = match anchor {
            Anchor::At(t) => t,
            Anchor::AfterPrevious => self.last_end,
            Anchor::Label(name, offset) => match self.label(name) {
                Some(t) => t + offset,
                None => {
                    log::warn!("[timeline] unknown label {name}; anchoring at end");
                    self.duration + offset
                }
            },
        };
        start.max(0.0)
    }

    /// Adds one tween.
    pub fn to(
        &mut self,
        anchor: Anchor,
        property: Property,
        to: AxisTarget,
        duration: f32,
        easing: Easing,
    ) -> &mut Self {
        self.to_staggered(anchor, [(property, to)], duration, 0.0, easing)
    }

    /// Adds one tween per target, the `i`-th starting `i * stagger` after the anchor.
    pub fn to_staggered(
        &mut self,
        anchor: Anchor,
        targets: impl IntoIterator<Item = (Property, AxisTarget)>,
        duration: f32,
        stagger: f32,
        easing: Easing,
    ) -> &mut Self {
        let start = self.resolve(anchor);
        let mut group_end = start;
        for (i, (property, to)) in targets.into_iter().enumerate() {
            let tween = Tween {
                property,
                to,
                start: start + i as f32 * stagger,
                duration: duration.max(0.0),
                easing,
                state: TweenState::Pending,
            };
            group_end = group_end.max(tween.end());
            self.tweens.push(tween);
        }
        self.last_end = group_end;
        self.duration = self.duration.max(group_end);
        self
    }

    /// Renders every tween the playhead at `time` has reached.
    pub fn seek(&mut self, time: f32, target: &mut impl Animatable) {
        for tween in &mut self.tweens {
            if time < tween.start {
                continue;
            }
            let from = match tween.state {
                TweenState::Done => continue,
                TweenState::Active { from } => from,
                TweenState::Pending => {
                    let from = target.read(tween.property);
                    tween.state = TweenState::Active { from };
                    from
                }
            };
            let progress = if tween.duration <= 0.0 {
                1.0
            } else {
                ((time - tween.start) / tween.duration).clamp(0.0, 1.0)
            };
            let eased = if progress >= 1.0 {
                1.0
            } else {
                tween.easing.apply(progress)
            };
            let current = target.read(tween.property);
            target.write(tween.property, tween.to.blend(current, from, eased));
            if progress >= 1.0 {
                tween.state = TweenState::Done;
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.tweens.iter().all(Tween::is_done)
    }
}
