// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch recognition.
//!
//! A pinch is recognized only while exactly two touch points are active;
//! callers enforce that rule and call [`PinchRecognizer::end`] as soon as a
//! third point appears or one of the two lifts. There is no recovery to a
//! single-finger drag mid-pinch.
//!
//! Scale is cumulative across separate gestures: ending a pinch commits the
//! current scale as the baseline the next pinch multiplies from, rather
//! than resetting to `1.0`.

use kurbo::Point;

#[derive(Clone, Copy, Debug)]
struct ActivePinch {
    start_distance: f64,
    scale: f64,
}

/// Turns two-finger distance changes into a clamped scale factor.
#[derive(Clone, Copy, Debug)]
pub struct PinchRecognizer {
    min_scale: f64,
    max_scale: f64,
    baseline: f64,
    active: Option<ActivePinch>,
}

impl PinchRecognizer {
    /// Creates a recognizer clamping to `[min_scale, max_scale]`, with a
    /// baseline of `1.0` (clamped into the range).
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        Self {
            min_scale,
            max_scale,
            baseline: 1.0_f64.clamp(min_scale, max_scale),
            active: None,
        }
    }

    /// The scale a new gesture will multiply from.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Replaces the baseline, clamped into the scale range.
    ///
    /// Used when the baseline is owned elsewhere; the grid pinch seeds it
    /// from the current zoom level at gesture start.
    pub fn set_baseline(&mut self, scale: f64) {
        self.baseline = scale.clamp(self.min_scale, self.max_scale);
    }

    /// Returns `true` while a two-finger gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current applied scale: the live gesture scale, or the baseline when
    /// no gesture is active.
    #[must_use]
    pub fn scale(&self) -> f64 {
        match self.active {
            Some(active) => active.scale,
            None => self.baseline,
        }
    }

    /// Starts a gesture from the two initial touch points.
    ///
    /// A gesture already in progress is restarted. Degenerate start
    /// distances are floored at one pixel so the ratio stays finite.
    pub fn begin(&mut self, p0: Point, p1: Point) {
        self.active = Some(ActivePinch {
            start_distance: (p1 - p0).hypot().max(1.0),
            scale: self.baseline,
        });
    }

    /// Updates the gesture with new touch positions, returning the clamped
    /// target scale, or `None` when no gesture is active.
    pub fn update(&mut self, p0: Point, p1: Point) -> Option<f64> {
        let active = self.active.as_mut()?;
        let ratio = (p1 - p0).hypot() / active.start_distance;
        active.scale = (self.baseline * ratio).clamp(self.min_scale, self.max_scale);
        Some(active.scale)
    }

    /// Ends the gesture, committing the final scale as the new baseline.
    ///
    /// Safe to call with no active gesture; the committed scale is
    /// returned either way.
    pub fn end(&mut self) -> f64 {
        if let Some(active) = self.active.take() {
            self.baseline = active.scale;
        }
        self.baseline
    }

    /// Handles an interrupted gesture (touch-cancel).
    ///
    /// Treated exactly like [`PinchRecognizer::end`] so interruption can
    /// never leave a stuck gesture behind.
    pub fn cancel(&mut self) {
        self.end();
    }
}
