//! Eased movement of a carousel strip between positions.

use crate::carousel::{Easing, RenderState};
use std::time::Duration;

/// Tracks where a strip is drawn while it slides toward its target
#[derive(Debug, Clone, PartialEq)]
pub struct StripAnimator {
    from: f64,
    to: f64,
    started: Duration,
    duration: Duration,
    easing: Easing,
}

impl StripAnimator {
    /// A strip resting at `position` (in frame widths)
    pub fn at_rest(position: f64) -> Self {
        Self {
            from: position,
            to: position,
            started: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::EaseOut,
        }
    }

    /// Drawn position at time `now`
    pub fn position(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        !self.duration.is_zero() && now < self.started + self.duration
    }

    /// Moves the whole slide by `delta` frames, keeping its progress.
    ///
    /// Used when the carousel swaps between visually identical frames.
    pub fn shift(&mut self, delta: f64) {
        self.from += delta;
        self.to += delta;
    }

    /// Follows a new render state: slides when it carries a transition, jumps otherwise
    pub fn follow(&mut self, state: &RenderState, now: Duration) {
        let target = state.position();
        match state.transition {
            Some(transition) => {
                if (target - self.to).abs() > f64::EPSILON {
                    self.from = self.position(now);
                    self.to = target;
                    self.started = now;
                    self.duration = transition.duration;
                    self.easing = transition.easing;
                }
            }
            None => *self = Self::at_rest(target),
        }
    }
}
