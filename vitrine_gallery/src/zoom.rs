// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid zoom level: presets, tiered gaps, fit-to-viewport.
//!
//! A zoom change is a two-phase animation. If the target level lands in a
//! different gap tier, the gap animates first (cells slide apart or
//! together at the current scale), then the shared transform animates to
//! the new scale and a re-centered offset. A change within the same tier
//! skips straight to the transform phase.
//!
//! Pinch zoom bypasses the phases entirely: the live gesture drives the
//! scale directly frame by frame, and the gap tier is committed instantly
//! when the fingers lift.

use kurbo::{Size, Vec2};
use vitrine_bounds::centering_offset;
use vitrine_grid::{GridConfig, GridLayout};
use vitrine_tween::{Easing, Tween};

use crate::pan::PanController;
use crate::transform::ViewTransform;

/// Smallest zoom level reachable by preset or pinch.
pub const MIN_ZOOM: f64 = 0.3;
/// Largest zoom level reachable by preset or pinch.
pub const MAX_ZOOM: f64 = 2.0;
/// The toolbar's stepped zoom levels, ascending.
pub const ZOOM_PRESETS: [f64; 3] = [0.3, 0.6, 1.0];

/// Duration of each zoom phase (gap relayout, then transform).
pub const ZOOM_PHASE_MS: f64 = 1_000.0;

/// Vertical space reserved for the toolbar when fitting the grid.
const FIT_TOOLBAR: f64 = 80.0;
/// Breathing room kept on every side when fitting the grid.
const FIT_MARGIN: f64 = 40.0;

const GAP_EPSILON: f64 = 1e-6;
const LEVEL_EPSILON: f64 = 1e-6;

/// Gap for a zoom level: tight when zoomed in, wide when zoomed out.
///
/// Tiers relative to `base_gap`: `1x` at level `>= 1.0`, `2x` at
/// `>= 0.6`, `4x` below that. Wider gaps at low zoom keep the shrunken
/// cells visually separated.
#[must_use]
pub fn gap_for_zoom(level: f64, base_gap: f64) -> f64 {
    if level >= 1.0 {
        base_gap
    } else if level >= 0.6 {
        base_gap * 2.0
    } else {
        base_gap * 4.0
    }
}

/// Zoom level at which the whole grid fits the viewport.
///
/// Fitting assumes the tight gap tier, reserves toolbar height, insets by
/// a margin on every side, and clamps into the zoom range.
#[must_use]
pub fn fit_zoom(view: Size, config: GridConfig) -> f64 {
    let content = config.content_size(config.base_gap);
    if content.width <= 0.0 || content.height <= 0.0 {
        return 1.0;
    }
    let avail_w = (view.width - 2.0 * FIT_MARGIN).max(1.0);
    let avail_h = (view.height - FIT_TOOLBAR - 2.0 * FIT_MARGIN).max(1.0);
    (avail_w / content.width)
        .min(avail_h / content.height)
        .clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Owns the grid zoom level and its two-phase change animation.
#[derive(Clone, Debug)]
pub struct ZoomController {
    level: f64,
    target_level: f64,
    gap_tween: Option<Tween<f64>>,
    transform_tween: Option<Tween<ViewTransform>>,
}

impl ZoomController {
    /// Creates a controller at the given level, clamped into range.
    #[must_use]
    pub fn new(level: f64) -> Self {
        let level = level.clamp(MIN_ZOOM, MAX_ZOOM);
        Self {
            level,
            target_level: level,
            gap_tween: None,
            transform_tween: None,
        }
    }

    /// Current zoom level (mid-animation this is the interpolated value).
    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// The level the current (or last) change is heading to.
    #[must_use]
    pub fn target_level(&self) -> f64 {
        self.target_level
    }

    /// Returns `true` while either zoom phase is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.gap_tween.is_some() || self.transform_tween.is_some()
    }

    /// Starts an animated change to `target`, clamped into range.
    ///
    /// Returns `false` (and starts nothing) when the clamped target equals
    /// the current target level. An in-flight change is cancelled at its
    /// current interpolated state and the new change starts from there.
    pub fn begin_change(
        &mut self,
        target: f64,
        layout: &mut GridLayout,
        pan: &PanController,
        view: Size,
        now: f64,
    ) -> bool {
        let target = target.clamp(MIN_ZOOM, MAX_ZOOM);
        if (target - self.target_level).abs() < LEVEL_EPSILON && !self.is_animating() {
            return false;
        }
        self.freeze(layout, now);
        self.target_level = target;

        let target_gap = gap_for_zoom(target, layout.config().base_gap);
        if (target_gap - layout.gap()).abs() > GAP_EPSILON {
            self.gap_tween = Some(Tween::new(
                layout.gap(),
                target_gap,
                now,
                ZOOM_PHASE_MS,
                Easing::SCurve,
            ));
        } else {
            self.start_transform(layout, pan.offset(), view, now);
        }
        true
    }

    /// Drives the live scale during a grid pinch: instant, re-centered.
    pub fn apply_direct(
        &mut self,
        scale: f64,
        layout: &GridLayout,
        pan: &mut PanController,
        view: Size,
    ) {
        self.gap_tween = None;
        self.transform_tween = None;
        self.level = scale.clamp(MIN_ZOOM, MAX_ZOOM);
        self.target_level = self.level;
        pan.set_offset(centering_offset(view, layout.scaled_size(self.level)));
    }

    /// Commits the gap tier for the level a pinch settled on.
    ///
    /// The relayout is instant; there is no animation at the end of a
    /// pinch, the fingers already put the grid where it is.
    pub fn commit_pinch(&mut self, layout: &mut GridLayout, pan: &mut PanController, view: Size) {
        let gap = gap_for_zoom(self.level, layout.config().base_gap);
        if (gap - layout.gap()).abs() > GAP_EPSILON {
            layout.relayout(gap);
        }
        pan.set_offset(centering_offset(view, layout.scaled_size(self.level)));
    }

    /// Cancels any in-flight change at its current interpolated state.
    pub fn cancel(&mut self, layout: &mut GridLayout, now: f64) {
        self.freeze(layout, now);
        self.target_level = self.level;
    }

    /// Advances the active phase. Returns `true` when the whole change
    /// completed this tick, signalling the caller to rebuild pan bounds.
    pub fn tick(
        &mut self,
        layout: &mut GridLayout,
        pan: &mut PanController,
        view: Size,
        now: f64,
    ) -> bool {
        if let Some(tween) = &self.gap_tween {
            layout.relayout(tween.sample(now));
            if tween.finished(now) {
                self.gap_tween = None;
                self.start_transform(layout, pan.offset(), view, now);
            } else {
                return false;
            }
        }
        if let Some(tween) = &self.transform_tween {
            let state = tween.sample(now);
            self.level = state.scale;
            pan.set_offset(state.offset);
            if tween.finished(now) {
                self.transform_tween = None;
                return true;
            }
        }
        false
    }

    fn start_transform(&mut self, layout: &GridLayout, offset: Vec2, view: Size, now: f64) {
        let centered = centering_offset(view, layout.scaled_size(self.target_level));
        self.transform_tween = Some(Tween::new(
            ViewTransform::new(offset, self.level),
            ViewTransform::new(centered, self.target_level),
            now,
            ZOOM_PHASE_MS,
            Easing::SCurve,
        ));
    }

    /// Stops both tweens at their current sampled values.
    fn freeze(&mut self, layout: &mut GridLayout, now: f64) {
        if let Some(tween) = self.gap_tween.take() {
            layout.relayout(tween.sample(now));
        }
        if let Some(tween) = self.transform_tween.take() {
            self.level = tween.sample(now).scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use vitrine_bounds::{PanBounds, overscroll_allowance, pan_bounds};

    use super::*;

    fn config() -> GridConfig {
        GridConfig {
            item_size: 320.0,
            base_gap: 16.0,
            rows: 8,
            cols: 12,
        }
    }

    fn view() -> Size {
        Size::new(1440.0, 900.0)
    }

    fn bounds(layout: &GridLayout, level: f64) -> PanBounds {
        pan_bounds(
            view(),
            layout.scaled_size(level),
            layout.gap() * level,
            overscroll_allowance(view()),
        )
    }

    #[test]
    fn gap_tiers_widen_as_zoom_drops() {
        assert_eq!(gap_for_zoom(2.0, 16.0), 16.0);
        assert_eq!(gap_for_zoom(1.0, 16.0), 16.0);
        assert_eq!(gap_for_zoom(0.99, 16.0), 32.0);
        assert_eq!(gap_for_zoom(0.6, 16.0), 32.0);
        assert_eq!(gap_for_zoom(0.59, 16.0), 64.0);
        assert_eq!(gap_for_zoom(0.3, 16.0), 64.0);
    }

    #[test]
    fn fit_reserves_toolbar_and_margins() {
        let small = GridConfig {
            item_size: 320.0,
            base_gap: 16.0,
            rows: 3,
            cols: 4,
        };
        // Content at tight gap: 1328 x 992. Available: 1360 x 740.
        let zoom = fit_zoom(view(), small);
        assert!((zoom - 740.0 / 992.0).abs() < 1e-9);
    }

    #[test]
    fn fit_clamps_into_the_zoom_range() {
        let tiny = GridConfig {
            item_size: 10.0,
            base_gap: 2.0,
            rows: 1,
            cols: 1,
        };
        assert_eq!(fit_zoom(view(), tiny), MAX_ZOOM);
        assert_eq!(fit_zoom(view(), config()), MIN_ZOOM);
    }

    #[test]
    fn cross_tier_change_animates_gap_then_transform() {
        let mut layout = GridLayout::new(config(), 96, 32.0);
        let mut zoom = ZoomController::new(0.6);
        let mut pan = PanController::new(Vec2::new(-50.0, -50.0), bounds(&layout, 0.6));

        assert!(zoom.begin_change(1.0, &mut layout, &pan, view(), 0.0));
        assert!(zoom.is_animating());

        // Mid gap phase: gap is moving toward 16, scale untouched.
        assert!(!zoom.tick(&mut layout, &mut pan, view(), 500.0));
        assert!(layout.gap() < 32.0 && layout.gap() > 16.0);
        assert_eq!(zoom.level(), 0.6);

        // Gap phase ends at 1000, transform phase runs to 2000.
        assert!(!zoom.tick(&mut layout, &mut pan, view(), 1_000.0));
        assert_eq!(layout.gap(), 16.0);
        assert!(!zoom.tick(&mut layout, &mut pan, view(), 1_500.0));
        assert!(zoom.level() > 0.6 && zoom.level() < 1.0);

        assert!(zoom.tick(&mut layout, &mut pan, view(), 2_000.0));
        assert_eq!(zoom.level(), 1.0);
        assert!(!zoom.is_animating());
        let centered = centering_offset(view(), layout.scaled_size(1.0));
        assert_eq!(pan.offset(), centered);
    }

    #[test]
    fn same_tier_change_skips_the_gap_phase() {
        let mut layout = GridLayout::new(config(), 96, 16.0);
        let mut zoom = ZoomController::new(1.0);
        let mut pan = PanController::new(Vec2::ZERO, bounds(&layout, 1.0));

        assert!(zoom.begin_change(2.0, &mut layout, &pan, view(), 0.0));
        assert!(!zoom.tick(&mut layout, &mut pan, view(), 500.0));
        // Scale is already moving; the gap never budged.
        assert!(zoom.level() > 1.0);
        assert_eq!(layout.gap(), 16.0);
        assert!(zoom.tick(&mut layout, &mut pan, view(), 1_000.0));
        assert_eq!(zoom.level(), 2.0);
    }

    #[test]
    fn targets_clamp_and_repeats_are_rejected() {
        let mut layout = GridLayout::new(config(), 96, 16.0);
        let mut zoom = ZoomController::new(1.0);
        let mut pan = PanController::new(Vec2::ZERO, bounds(&layout, 1.0));

        assert!(zoom.begin_change(5.0, &mut layout, &pan, view(), 0.0));
        assert_eq!(zoom.target_level(), MAX_ZOOM);
        while !zoom.tick(&mut layout, &mut pan, view(), 1_000.0) {}

        // Already at the clamped maximum.
        assert!(!zoom.begin_change(2.0, &mut layout, &pan, view(), 2_000.0));
        assert!(!zoom.begin_change(9.0, &mut layout, &pan, view(), 2_000.0));
    }

    #[test]
    fn retarget_mid_change_starts_from_the_interpolated_level() {
        let mut layout = GridLayout::new(config(), 96, 16.0);
        let mut zoom = ZoomController::new(1.0);
        let mut pan = PanController::new(Vec2::ZERO, bounds(&layout, 1.0));

        zoom.begin_change(2.0, &mut layout, &pan, view(), 0.0);
        zoom.tick(&mut layout, &mut pan, view(), 500.0);
        let mid = zoom.level();
        assert!(mid > 1.0 && mid < 2.0);

        // Reverse toward a preset before the first change lands.
        assert!(zoom.begin_change(1.0, &mut layout, &pan, view(), 500.0));
        assert_eq!(zoom.level(), mid);
        while !zoom.tick(&mut layout, &mut pan, view(), 1_500.0) {}
        assert_eq!(zoom.level(), 1.0);
    }

    #[test]
    fn pinch_path_is_instant_and_centered() {
        let mut layout = GridLayout::new(config(), 96, 32.0);
        let mut zoom = ZoomController::new(0.6);
        let mut pan = PanController::new(Vec2::new(-300.0, -200.0), bounds(&layout, 0.6));

        zoom.apply_direct(1.4, &layout, &mut pan, view());
        assert_eq!(zoom.level(), 1.4);
        assert!(!zoom.is_animating());
        assert_eq!(
            pan.offset(),
            centering_offset(view(), layout.scaled_size(1.4))
        );

        // Lift: the 1.4 level belongs to the tight tier.
        zoom.commit_pinch(&mut layout, &mut pan, view());
        assert_eq!(layout.gap(), 16.0);
    }
}
