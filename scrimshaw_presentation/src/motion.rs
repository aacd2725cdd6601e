// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual state of a presentation and timed interpolation between two of them.

use core::time::Duration;

/// Easing curve applied to linear transition progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Decelerating cubic; used for entrances and rebounds.
    #[default]
    EaseOut,
    /// Accelerating cubic; used for exits.
    EaseIn,
    /// Symmetric cubic S-curve.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` to eased progress. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseIn => t * t * t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Animatable properties of a presentation.
///
/// A [`Strategy`](crate::Strategy) maps lifecycle positions (entry, rest,
/// exit, dragged) to values of this type; transitions interpolate between them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Visual {
    /// Appear progress of the scrim, `0.0` hidden to `1.0` shown.
    pub scrim_progress: f64,
    /// Vertical translation of the content, positive is down.
    pub offset_y: f64,
    /// Uniform scale of the content about its center.
    pub scale: f64,
    /// Content opacity.
    pub alpha: f64,
}

impl Visual {
    /// Fully shown, untransformed.
    pub const REST: Self = Self {
        scrim_progress: 1.0,
        offset_y: 0.0,
        scale: 1.0,
        alpha: 1.0,
    };

    /// Linear interpolation from `self` to `other` at `t`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            scrim_progress: mix(self.scrim_progress, other.scrim_progress),
            offset_y: mix(self.offset_y, other.offset_y),
            scale: mix(self.scale, other.scale),
            alpha: mix(self.alpha, other.alpha),
        }
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self::REST
    }
}

/// A timed interpolation between two [`Visual`]s, advanced by [`tick`](Self::tick).
///
/// ```
/// use core::time::Duration;
/// use scrimshaw_presentation::{Easing, Transition, Visual};
///
/// let from = Visual { offset_y: 100.0, ..Visual::REST };
/// let mut t = Transition::new(from, Visual::REST, Duration::from_millis(200), Easing::Linear);
///
/// t.tick(Duration::from_millis(100));
/// assert_eq!(t.value().offset_y, 50.0);
/// assert!(!t.is_finished());
///
/// t.tick(Duration::from_millis(150));
/// assert!(t.is_finished());
/// assert_eq!(t.value(), Visual::REST);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    from: Visual,
    to: Visual,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Transition {
    /// Starts a transition at elapsed zero.
    #[must_use]
    pub fn new(from: Visual, to: Visual, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Starting value.
    #[must_use]
    pub fn start(&self) -> Visual {
        self.from
    }

    /// Target value.
    #[must_use]
    pub fn target(&self) -> Visual {
        self.to
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Advances the clock by `dt` and returns the new value.
    pub fn tick(&mut self, dt: Duration) -> Visual {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }

    /// Linear progress in `[0, 1]`. A zero-length transition is complete.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        }
    }

    /// Current value. Exactly the target once finished.
    #[must_use]
    pub fn value(&self) -> Visual {
        if self.is_finished() {
            self.to
        } else {
            self.from.lerp(self.to, self.easing.apply(self.progress()))
        }
    }

    /// Whether the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseIn, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.apply(-3.0), 0.0, "{easing:?}");
        }
    }

    #[test]
    fn ease_out_leads_ease_in() {
        assert!(Easing::EaseOut.apply(0.3) > Easing::Linear.apply(0.3));
        assert!(Easing::EaseIn.apply(0.3) < Easing::Linear.apply(0.3));
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    }

    #[test]
    fn zero_duration_is_finished_immediately() {
        let hidden = Visual {
            alpha: 0.0,
            ..Visual::REST
        };
        let t = Transition::new(hidden, Visual::REST, Duration::ZERO, Easing::EaseOut);
        assert!(t.is_finished());
        assert_eq!(t.progress(), 1.0);
        assert_eq!(t.value(), Visual::REST);
    }

    #[test]
    fn tick_clamps_at_duration() {
        let from = Visual {
            offset_y: 300.0,
            ..Visual::REST
        };
        let mut t = Transition::new(from, Visual::REST, Duration::from_millis(300), Easing::EaseIn);
        t.tick(Duration::from_secs(5));
        assert_eq!(t.progress(), 1.0);
        assert_eq!(t.value().offset_y, 0.0);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Visual {
            scrim_progress: 0.0,
            offset_y: 200.0,
            scale: 0.0,
            alpha: 0.0,
        };
        let mid = a.lerp(Visual::REST, 0.5);
        assert_eq!(mid.scrim_progress, 0.5);
        assert_eq!(mid.offset_y, 100.0);
        assert_eq!(mid.scale, 0.5);
    }
}
