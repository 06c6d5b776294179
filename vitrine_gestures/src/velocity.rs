// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity estimation from recent drag samples.
//!
//! The tracker keeps the most recent [`MAX_SAMPLES`] position/time pairs of
//! one drag. At release, the exit velocity is the straight line through the
//! oldest and newest retained samples. This is deliberately coarse, so a brief
//! hesitation at the end of a fling still yields a usable direction.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Number of samples retained; older samples are evicted.
pub const MAX_SAMPLES: usize = 6;

/// One recorded drag position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Recorded position (conventionally the dragged layer's offset).
    pub pos: Point,
    /// Host-supplied timestamp in milliseconds.
    pub time_ms: f64,
}

/// Ring buffer of recent drag samples with a velocity estimate at release.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; MAX_SAMPLES]>,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any previous gesture and seeds the buffer with the drag's
    /// starting position.
    pub fn begin(&mut self, pos: Point, time_ms: f64) {
        self.samples.clear();
        self.samples.push(Sample { pos, time_ms });
    }

    /// Appends a sample, evicting the oldest once the cap is reached.
    pub fn push(&mut self, pos: Point, time_ms: f64) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push(Sample { pos, time_ms });
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Exit velocity in px/ms from the oldest and newest retained samples.
    ///
    /// Returns `None` when fewer than two samples were recorded or when the
    /// elapsed time between them is not positive; both are treated as a
    /// tap by callers, producing no glide.
    #[must_use]
    pub fn velocity(&self) -> Option<Vec2> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        if self.samples.len() < 2 {
            return None;
        }
        let dt = last.time_ms - first.time_ms;
        if dt <= 0.0 {
            return None;
        }
        Some((last.pos - first.pos) / dt)
    }

    /// Drops all samples.
    ///
    /// Called defensively on gesture cancellation so a stale buffer cannot
    /// corrupt the next gesture's estimate.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_samples_yields_no_velocity() {
        let mut tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(), None);

        tracker.begin(Point::new(10.0, 10.0), 0.0);
        assert_eq!(tracker.velocity(), None);
    }

    #[test]
    fn velocity_spans_oldest_to_newest() {
        let mut tracker = VelocityTracker::new();
        tracker.begin(Point::new(0.0, 0.0), 0.0);
        tracker.push(Point::new(10.0, -20.0), 50.0);
        tracker.push(Point::new(40.0, -80.0), 100.0);

        let v = tracker.velocity().unwrap();
        assert_eq!(v, Vec2::new(0.4, -0.8));
    }

    #[test]
    fn buffer_caps_at_six_and_evicts_oldest() {
        let mut tracker = VelocityTracker::new();
        tracker.begin(Point::new(0.0, 0.0), 0.0);
        for i in 1..=9 {
            tracker.push(Point::new(f64::from(i) * 10.0, 0.0), f64::from(i) * 10.0);
        }

        assert_eq!(tracker.len(), MAX_SAMPLES);
        // Oldest retained sample is now (40, 0) at t=40.
        let v = tracker.velocity().unwrap();
        assert_eq!(v, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn zero_elapsed_time_is_a_tap() {
        let mut tracker = VelocityTracker::new();
        tracker.begin(Point::new(5.0, 5.0), 100.0);
        tracker.push(Point::new(5.0, 5.0), 100.0);
        assert_eq!(tracker.velocity(), None);
    }

    #[test]
    fn begin_discards_the_previous_gesture() {
        let mut tracker = VelocityTracker::new();
        tracker.begin(Point::new(0.0, 0.0), 0.0);
        tracker.push(Point::new(100.0, 0.0), 10.0);

        tracker.begin(Point::new(500.0, 500.0), 1_000.0);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.velocity(), None);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut tracker = VelocityTracker::new();
        tracker.begin(Point::new(0.0, 0.0), 0.0);
        tracker.clear();
        assert!(tracker.is_empty());
    }
}
