/// Easing curves used by the choreography, the scroll mapping and the
/// smooth-scroll controller. All map `t` in \[0, 1\] to \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic in/out, used for the commanded scroll to the end.
    QuadInOut,
    /// Cubic in/out; the choreography's `power2.inOut` and the scroll ease.
    CubicInOut,
    /// Exponential out, the wheel-driven smooth-scroll curve.
    ExpoOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicInOut => cubic_in_out(t),
            Easing::ExpoOut => (1.001 - 2.0_f32.powf(-10.0 * t)).min(1.0),
        }
    }
}

#[inline]
pub fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
