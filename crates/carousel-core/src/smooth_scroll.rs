//! Smooth-scroll controller.
//!
//! Wheel input moves a clamped target offset; the visible offset eases
//! towards it. Commanded scrolls (`scroll_to`) use their own duration and
//! easing and report completion from [`SmoothScroll::advance`]. A wheel
//! gesture during a commanded scroll replaces it, and that command then
//! never completes.

use crate::constants::{SMOOTH_SCROLL_DURATION_SEC, WHEEL_MULTIPLIER};
use crate::easing::Easing;
use crate::scroll::ScrollEvent;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollToOptions {
    pub duration: f32,
    pub easing: Easing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MotionSource {
    Wheel,
    Command,
}

#[derive(Clone, Copy, Debug)]
struct Motion {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    source: MotionSource,
}

/// Output of one frame step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollStep {
    /// Present when the visible offset changed this frame.
    pub event: Option<ScrollEvent>,
    /// A `scroll_to` reached its destination this frame.
    pub scroll_to_completed: bool,
}

#[derive(Clone, Debug)]
pub struct SmoothScroll {
    offset: f32,
    target: f32,
    limit: f32,
    motion: Option<Motion>,
    wheel_duration: f32,
    wheel_multiplier: f32,
    destroyed: bool,
}

impl SmoothScroll {
    pub fn new(limit: f32) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            limit: limit.max(0.0),
            motion: None,
            wheel_duration: SMOOTH_SCROLL_DURATION_SEC,
            wheel_multiplier: WHEEL_MULTIPLIER,
            destroyed: false,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    pub fn is_scrolling(&self) -> bool {
        self.motion.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Updates the scrollable extent (viewport or document resize).
    pub fn set_limit(&mut self, limit: f32) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.offset = self.offset.clamp(0.0, self.limit);
        if let Some(m) = &mut self.motion {
            m.to = m.to.clamp(0.0, self.limit);
        }
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        if self.destroyed || !delta_y.is_finite() {
            return;
        }
        self.target = (self.target + delta_y * self.wheel_multiplier).clamp(0.0, self.limit);
        self.start(self.target, self.wheel_duration, Easing::ExpoOut, MotionSource::Wheel);
    }

    pub fn scroll_to(&mut self, target: f32, options: ScrollToOptions) {
        if self.destroyed {
            return;
        }
        self.target = target.clamp(0.0, self.limit);
        log::debug!(
            "[scroll] scroll_to {:.1} over {:.2}s",
            self.target,
            options.duration
        );
        self.start(
            self.target,
            options.duration,
            options.easing,
            MotionSource::Command,
        );
    }

    fn start(&mut self, to: f32, duration: f32, easing: Easing, source: MotionSource) {
        self.motion = Some(Motion {
            from: self.offset,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
            source,
        });
    }

    /// Adopts an offset scrolled by other means (scrollbar, keyboard) while
    /// no motion is running.
    pub fn sync_native(&mut self, offset: f32) -> Option<ScrollEvent> {
        if self.destroyed || self.motion.is_some() {
            return None;
        }
        let offset = offset.clamp(0.0, self.limit);
        if (offset - self.offset).abs() < f32::EPSILON {
            return None;
        }
        self.offset = offset;
        self.target = offset;
        Some(self.event())
    }

    pub fn advance(&mut self, dt_sec: f32) -> ScrollStep {
        let mut step = ScrollStep::default();
        if self.destroyed {
            return step;
        }
        let Some(mut motion) = self.motion else {
            return step;
        };
        motion.elapsed += dt_sec.max(0.0);
        let progress = if motion.duration <= 0.0 {
            1.0
        } else {
            (motion.elapsed / motion.duration).min(1.0)
        };
        let next = if progress >= 1.0 {
            motion.to
        } else {
            motion.from + (motion.to - motion.from) * motion.easing.apply(progress)
        };
        if progress >= 1.0 {
            self.motion = None;
            step.scroll_to_completed = motion.source == MotionSource::Command;
        } else {
            self.motion = Some(motion);
        }
        if next != self.offset {
            self.offset = next;
            step.event = Some(self.event());
        }
        step
    }

    fn event(&self) -> ScrollEvent {
        ScrollEvent {
            offset: self.offset,
            limit: self.limit,
        }
    }

    /// Releases the controller; every later call is a no-op.
    pub fn destroy(&mut self) {
        if !self.destroyed {
            log::info!("[scroll] controller destroyed");
        }
        self.destroyed = true;
        self.motion = None;
    }
}
