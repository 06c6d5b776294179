// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::easing::Easing;
use crate::lerp::Lerp;

/// A timed interpolation between two values.
///
/// Times are milliseconds from any host-chosen monotonic origin. Sampling
/// before the start time yields the start value; sampling at or past
/// `start + duration` yields the end value exactly.
#[derive(Clone, Debug)]
pub struct Tween<V> {
    from: V,
    to: V,
    start: f64,
    duration: f64,
    easing: Easing,
}

impl<V: Lerp + Clone> Tween<V> {
    /// Creates a tween from `from` to `to`, starting at `start` and lasting
    /// `duration` milliseconds.
    #[must_use]
    pub fn new(from: V, to: V, start: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// The value this tween settles on.
    #[must_use]
    pub fn target(&self) -> &V {
        &self.to
    }

    /// Linear time fraction at `now`, clamped to `[0, 1]`.
    ///
    /// Zero or negative durations are treated as already complete.
    #[must_use]
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now`.
    #[must_use]
    pub fn sample(&self, now: f64) -> V {
        let fraction = self.progress(now);
        if fraction >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.easing.apply(fraction))
    }

    /// Returns `true` once `now` has reached the end of the tween.
    #[must_use]
    pub fn finished(&self, now: f64) -> bool {
        self.duration <= 0.0 || now >= self.start + self.duration
    }
}
