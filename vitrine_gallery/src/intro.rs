// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The first-load intro choreography.
//!
//! On a fresh session the viewport fades in, the cells gather from the
//! viewport center to their grid positions on a staggered schedule, and
//! the toolbar controls fade in last. When the intro has already played
//! this session (the host passes a flag at construction), the whole
//! sequence collapses to a quick viewport fade with no cell motion.
//!
//! The sequence is a pure function of time; it holds no tweens and needs
//! no ticking. Once finished it returns resting values forever.

use kurbo::Point;
use vitrine_tween::Easing;

/// Viewport fade-in on a fresh session.
const VIEWPORT_FADE_MS: f64 = 600.0;
/// Viewport fade-in when the intro is skipped.
const VIEWPORT_FADE_SKIP_MS: f64 = 300.0;
/// Motion of one cell from the gather point to its grid position.
const CELL_MS: f64 = 600.0;
/// The window cell start times are staggered across.
const STAGGER_SPREAD_MS: f64 = 2_000.0;
/// Toolbar controls fade-in after the last cell lands.
const CONTROLS_MS: f64 = 500.0;

/// Starting scale of a gathering cell.
const CELL_FROM_SCALE: f64 = 0.8;

/// Per-cell presentation overrides while the intro is running.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellIntro {
    /// World-space origin, between the gather point and the grid position.
    pub origin: Point,
    /// Local cell scale, ramping `0.8 → 1.0`.
    pub scale: f64,
    /// Cell opacity, ramping `0.0 → 1.0`.
    pub opacity: f64,
}

/// Time-indexed intro schedule for one session.
#[derive(Clone, Copy, Debug)]
pub struct IntroSequence {
    start: f64,
    cell_count: usize,
    skip: bool,
}

impl IntroSequence {
    /// Creates a schedule starting at `start`.
    ///
    /// With `skip` set (the intro already played this session) cells snap
    /// into place and only the short viewport fade runs.
    #[must_use]
    pub fn new(start: f64, cell_count: usize, skip: bool) -> Self {
        Self {
            start,
            cell_count,
            skip,
        }
    }

    /// Viewport opacity at `now`.
    #[must_use]
    pub fn viewport_opacity(&self, now: f64) -> f64 {
        let duration = if self.skip {
            VIEWPORT_FADE_SKIP_MS
        } else {
            VIEWPORT_FADE_MS
        };
        Easing::CubicOut.apply((now - self.start) / duration)
    }

    /// Toolbar controls opacity at `now`.
    #[must_use]
    pub fn controls_opacity(&self, now: f64) -> f64 {
        let begin = self.start + self.controls_delay();
        Easing::CubicOut.apply((now - begin) / CONTROLS_MS)
    }

    /// Presentation overrides for cell `index`, or `None` once the cell
    /// has landed (or when the intro is skipped entirely).
    ///
    /// `base_origin` is the cell's grid position; `gather_origin` is where
    /// all cells emanate from, conventionally the viewport center mapped
    /// into world space.
    #[must_use]
    pub fn cell(
        &self,
        index: usize,
        base_origin: Point,
        gather_origin: Point,
        now: f64,
    ) -> Option<CellIntro> {
        if self.skip {
            return None;
        }
        let begin = self.start + self.cell_delay(index);
        if now >= begin + CELL_MS {
            return None;
        }
        let eased = Easing::SCurve.apply((now - begin) / CELL_MS);
        Some(CellIntro {
            origin: gather_origin.lerp(base_origin, eased),
            scale: CELL_FROM_SCALE + (1.0 - CELL_FROM_SCALE) * eased,
            opacity: eased,
        })
    }

    /// Returns `true` once every part of the sequence has landed.
    #[must_use]
    pub fn finished(&self, now: f64) -> bool {
        now >= self.start + self.controls_delay() + CONTROLS_MS
    }

    /// Start offset of cell `index`, spread evenly across the stagger
    /// window in grid order.
    fn cell_delay(&self, index: usize) -> f64 {
        if self.cell_count <= 1 {
            return 0.0;
        }
        index.min(self.cell_count - 1) as f64 / (self.cell_count - 1) as f64 * STAGGER_SPREAD_MS
    }

    fn controls_delay(&self) -> f64 {
        if self.skip {
            VIEWPORT_FADE_SKIP_MS
        } else {
            STAGGER_SPREAD_MS + CELL_MS
        }
    }
}
