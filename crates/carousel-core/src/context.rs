//! Shared animation flags.
//!
//! Each field has exactly one writer: the sequencer marks completion, the
//! scroll mapper owns the damping factor and the last scroll offset, the
//! dispatcher raises the auto-scroll flag which is lowered either by the
//! scroll mapper (user reversal) or by the coordinator (scroll completed).

#[derive(Clone, Debug)]
pub struct AnimationContext {
    animation_finished: bool,
    rotation_damping_factor: f32,
    is_auto_scrolling: bool,
    last_scroll_position: f32,
}

impl Default for AnimationContext {
    fn default() -> Self {
        Self {
            animation_finished: false,
            rotation_damping_factor: 1.0,
            is_auto_scrolling: false,
            last_scroll_position: 0.0,
        }
    }
}

impl AnimationContext {
    pub fn animation_finished(&self) -> bool {
        self.animation_finished
    }

    /// Returns `true` only for the call that flips the flag.
    pub fn mark_finished(&mut self) -> bool {
        let first = !self.animation_finished;
        self.animation_finished = true;
        first
    }

    pub fn damping(&self) -> f32 {
        self.rotation_damping_factor
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.rotation_damping_factor = damping.clamp(0.0, 1.0);
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.is_auto_scrolling
    }

    /// Returns `false` when an auto-scroll is already running.
    pub fn begin_auto_scroll(&mut self) -> bool {
        if self.is_auto_scrolling {
            return false;
        }
        self.is_auto_scrolling = true;
        true
    }

    pub fn end_auto_scroll(&mut self) {
        self.is_auto_scrolling = false;
    }

    pub fn last_scroll_position(&self) -> f32 {
        self.last_scroll_position
    }

    pub fn record_scroll(&mut self, offset: f32) {
        self.last_scroll_position = offset;
    }
}
