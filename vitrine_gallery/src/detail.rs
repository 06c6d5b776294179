// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid ↔ detail transition and the open detail view.
//!
//! Opening: capture the clicked cell's on-screen rectangle, optionally wait
//! for the grid to center it, then morph an overlay from that rectangle to
//! the detail region while the chrome (split line, nav arrows, caption)
//! fades in. Closing runs the morph in reverse. While the view is open the
//! grid underneath is frozen; sibling navigation crossfades the overlay
//! image in place, and a two-finger pinch scales the overlay between 1x
//! and 2.5x, cumulatively across gestures until the view closes.
//!
//! All timing is driven by host timestamps through [`DetailView::tick`],
//! which reports the two phase edges the gallery cares about.

use kurbo::{Point, Rect, Size};
use vitrine_gestures::pinch::PinchRecognizer;
use vitrine_tween::{Easing, Tween};

/// Smallest overlay scale a detail pinch can reach.
pub const DETAIL_MIN_SCALE: f64 = 1.0;
/// Largest overlay scale a detail pinch can reach.
pub const DETAIL_MAX_SCALE: f64 = 2.5;

/// Duration of the opening morph from cell to detail region.
pub const MORPH_OPEN_MS: f64 = 900.0;
/// Duration of the closing morph back to the cell.
pub const MORPH_CLOSE_MS: f64 = 800.0;
/// Chrome (split line) fade-in after the morph lands.
const CHROME_IN_MS: f64 = 800.0;
/// Chrome fade-out at close.
const CHROME_OUT_MS: f64 = 600.0;
/// Nav arrows fade-in after the morph lands.
const NAV_IN_MS: f64 = 400.0;
/// Nav arrows fade-out at close.
const NAV_OUT_MS: f64 = 300.0;
/// Caption fade on open and on every slide change.
const CAPTION_MS: f64 = 300.0;
/// Each half of the image crossfade when navigating siblings.
const IMAGE_FADE_MS: f64 = 250.0;

/// Lifecycle of the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailPhase {
    /// No detail view; the grid owns all input.
    Closed,
    /// Waiting for the grid to finish centering the clicked cell.
    Centering,
    /// Overlay morphing from the cell rectangle to the detail region.
    Morphing,
    /// Fully open; navigation and pinch are live.
    Open,
    /// Overlay morphing back to the cell rectangle.
    Closing,
}

/// Phase edge reported by [`DetailView::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailEvent {
    /// The opening morph landed; the view is now [`DetailPhase::Open`].
    Opened,
    /// The closing morph landed; the view is now [`DetailPhase::Closed`].
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ImageFade {
    Idle,
    Out { next: usize },
    In,
}

/// State machine for one detail-view session.
#[derive(Clone, Debug)]
pub struct DetailView {
    phase: DetailPhase,
    source_index: usize,
    current_index: usize,
    displayed_index: usize,
    overlay_rect: Rect,
    morph: Option<Tween<Rect>>,
    chrome_opacity: f64,
    chrome_tween: Option<Tween<f64>>,
    nav_opacity: f64,
    nav_tween: Option<Tween<f64>>,
    caption_opacity: f64,
    caption_tween: Option<Tween<f64>>,
    image_opacity: f64,
    image_tween: Option<Tween<f64>>,
    image_fade: ImageFade,
    pinch: PinchRecognizer,
    overlay_scale: f64,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    /// Creates a closed detail view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: DetailPhase::Closed,
            source_index: 0,
            current_index: 0,
            displayed_index: 0,
            overlay_rect: Rect::ZERO,
            morph: None,
            chrome_opacity: 0.0,
            chrome_tween: None,
            nav_opacity: 0.0,
            nav_tween: None,
            caption_opacity: 0.0,
            caption_tween: None,
            image_opacity: 1.0,
            image_tween: None,
            image_fade: ImageFade::Idle,
            pinch: PinchRecognizer::new(DETAIL_MIN_SCALE, DETAIL_MAX_SCALE),
            overlay_scale: 1.0,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// Returns `true` in any phase other than [`DetailPhase::Closed`].
    ///
    /// While active the grid rejects drags, zoom changes, and cell clicks.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != DetailPhase::Closed
    }

    /// Returns `true` only when fully open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == DetailPhase::Open
    }

    /// Index of the item the session opened from (the morph-back target).
    #[must_use]
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Index of the item the view currently points at.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Index of the image actually rendered (lags during a crossfade).
    #[must_use]
    pub fn displayed_index(&self) -> usize {
        self.displayed_index
    }

    /// Overlay rectangle in view space at the last tick.
    #[must_use]
    pub fn overlay_rect(&self) -> Rect {
        self.overlay_rect
    }

    /// Pinch scale applied on top of the overlay rectangle.
    #[must_use]
    pub fn overlay_scale(&self) -> f64 {
        self.overlay_scale
    }

    /// Opacity of the overlay image (dips during crossfades).
    #[must_use]
    pub fn image_opacity(&self) -> f64 {
        self.image_opacity
    }

    /// Opacity of the split-line chrome.
    #[must_use]
    pub fn chrome_opacity(&self) -> f64 {
        self.chrome_opacity
    }

    /// Opacity of the nav arrows.
    #[must_use]
    pub fn nav_opacity(&self) -> f64 {
        self.nav_opacity
    }

    /// Opacity of the caption panel.
    #[must_use]
    pub fn caption_opacity(&self) -> f64 {
        self.caption_opacity
    }

    /// The region the overlay morphs to: the left half of the viewport,
    /// inset by 8% of each viewport dimension.
    #[must_use]
    pub fn detail_target_rect(view: Size) -> Rect {
        Rect::new(
            view.width * 0.08,
            view.height * 0.08,
            view.width * 0.5,
            view.height * 0.92,
        )
    }

    /// Begins an opening session for the item at `index`.
    ///
    /// `source_rect` is the cell's current on-screen rectangle. When
    /// `needs_center` is set the morph waits in [`DetailPhase::Centering`]
    /// until the caller reports the pan has landed via
    /// [`DetailView::notify_centered`]; the source rectangle is re-captured
    /// then, after the grid moved.
    pub fn open(&mut self, index: usize, source_rect: Rect, view: Size, needs_center: bool, now: f64) {
        *self = Self::new();
        self.source_index = index;
        self.current_index = index;
        self.displayed_index = index;
        self.overlay_rect = source_rect;
        if needs_center {
            self.phase = DetailPhase::Centering;
        } else {
            self.start_open_morph(source_rect, view, now);
        }
    }

    /// Reports that the centering pan finished; starts the morph from the
    /// cell's post-centering rectangle. Ignored outside `Centering`.
    pub fn notify_centered(&mut self, source_rect: Rect, view: Size, now: f64) {
        if self.phase == DetailPhase::Centering {
            self.start_open_morph(source_rect, view, now);
        }
    }

    /// Steps to a sibling item, wrapping at both ends.
    ///
    /// The overlay image crossfades: the old image fades out, the index
    /// swaps, the new image fades in, and the caption re-fades. Ignored
    /// unless fully open or when there are no items.
    pub fn navigate(&mut self, delta: isize, item_count: usize, now: f64) {
        if self.phase != DetailPhase::Open || item_count == 0 {
            return;
        }
        let count = item_count as isize;
        let next = (self.current_index as isize + delta).rem_euclid(count) as usize;
        if next == self.current_index {
            return;
        }
        self.current_index = next;
        self.image_fade = ImageFade::Out { next };
        self.image_tween = Some(Tween::new(
            self.image_opacity,
            0.0,
            now,
            IMAGE_FADE_MS,
            Easing::CubicOut,
        ));
        self.caption_tween = Some(Tween::new(
            self.caption_opacity,
            0.0,
            now,
            CAPTION_MS,
            Easing::CubicOut,
        ));
    }

    /// Begins the closing morph back to `target_rect` (the source cell's
    /// current on-screen rectangle). Ignored unless fully open.
    pub fn close(&mut self, target_rect: Rect, now: f64) {
        if self.phase != DetailPhase::Open {
            return;
        }
        self.phase = DetailPhase::Closing;
        self.overlay_scale = 1.0;
        self.pinch.cancel();
        self.morph = Some(Tween::new(
            self.overlay_rect,
            target_rect,
            now,
            MORPH_CLOSE_MS,
            Easing::SCurve,
        ));
        self.chrome_tween = Some(Tween::new(
            self.chrome_opacity,
            0.0,
            now,
            CHROME_OUT_MS,
            Easing::CubicOut,
        ));
        self.nav_tween = Some(Tween::new(
            self.nav_opacity,
            0.0,
            now,
            NAV_OUT_MS,
            Easing::CubicOut,
        ));
        self.caption_tween = Some(Tween::new(
            self.caption_opacity,
            0.0,
            now,
            CAPTION_MS,
            Easing::CubicOut,
        ));
    }

    /// Drops the session immediately with no closing animation.
    ///
    /// Used when the item snapshot is replaced or the viewport resizes out
    /// from under an open view.
    pub fn force_close(&mut self) {
        *self = Self::new();
    }

    /// Starts a two-finger pinch on the open overlay.
    pub fn pinch_begin(&mut self, p0: Point, p1: Point) {
        if self.phase == DetailPhase::Open {
            self.pinch.begin(p0, p1);
        }
    }

    /// Updates a live pinch; the clamped scale applies immediately.
    pub fn pinch_update(&mut self, p0: Point, p1: Point) {
        if let Some(scale) = self.pinch.update(p0, p1) {
            self.overlay_scale = scale;
        }
    }

    /// Ends a pinch, committing the scale as the next gesture's baseline.
    pub fn pinch_end(&mut self) {
        self.overlay_scale = self.pinch.end();
    }

    /// Returns `true` while a detail pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    /// Advances all detail tweens, reporting phase edges.
    pub fn tick(&mut self, now: f64) -> Option<DetailEvent> {
        let mut event = None;

        if let Some(morph) = &self.morph {
            self.overlay_rect = morph.sample(now);
            if morph.finished(now) {
                self.morph = None;
                match self.phase {
                    DetailPhase::Morphing => {
                        self.phase = DetailPhase::Open;
                        self.caption_tween =
                            Some(Tween::new(0.0, 1.0, now, CAPTION_MS, Easing::CubicOut));
                        event = Some(DetailEvent::Opened);
                    }
                    DetailPhase::Closing => {
                        *self = Self::new();
                        return Some(DetailEvent::Closed);
                    }
                    _ => {}
                }
            }
        }

        Self::advance(&mut self.chrome_opacity, &mut self.chrome_tween, now);
        Self::advance(&mut self.nav_opacity, &mut self.nav_tween, now);
        Self::advance(&mut self.caption_opacity, &mut self.caption_tween, now);

        if let Some(tween) = &self.image_tween {
            self.image_opacity = tween.sample(now);
            if tween.finished(now) {
                self.image_tween = None;
                match self.image_fade {
                    ImageFade::Out { next } => {
                        // Swap at the dark point, then fade the new image in.
                        self.displayed_index = next;
                        self.image_fade = ImageFade::In;
                        self.image_tween =
                            Some(Tween::new(0.0, 1.0, now, IMAGE_FADE_MS, Easing::CubicOut));
                        self.caption_tween =
                            Some(Tween::new(0.0, 1.0, now, CAPTION_MS, Easing::CubicOut));
                    }
                    ImageFade::In | ImageFade::Idle => self.image_fade = ImageFade::Idle,
                }
            }
        }

        event
    }

    fn start_open_morph(&mut self, source_rect: Rect, view: Size, now: f64) {
        self.phase = DetailPhase::Morphing;
        self.overlay_rect = source_rect;
        self.morph = Some(Tween::new(
            source_rect,
            Self::detail_target_rect(view),
            now,
            MORPH_OPEN_MS,
            Easing::SCurve,
        ));
        // Chrome rises alongside the morph; the caption waits for it to land.
        self.chrome_tween = Some(Tween::new(0.0, 1.0, now, CHROME_IN_MS, Easing::CubicOut));
        self.nav_tween = Some(Tween::new(0.0, 1.0, now, NAV_IN_MS, Easing::CubicOut));
    }

    fn advance(value: &mut f64, tween: &mut Option<Tween<f64>>, now: f64) {
        if let Some(t) = tween {
            *value = t.sample(now);
            if t.finished(now) {
                *tween = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size::new(1440.0, 900.0);

    fn cell_rect() -> Rect {
        Rect::new(600.0, 300.0, 792.0, 492.0)
    }

    fn open_view(now: f64) -> DetailView {
        let mut detail = DetailView::new();
        detail.open(5, cell_rect(), VIEW, false, now);
        let mut t = now;
        loop {
            t += 16.0;
            if detail.tick(t) == Some(DetailEvent::Opened) {
                break;
            }
        }
        detail
    }

    #[test]
    fn open_morphs_cell_to_detail_region() {
        let mut detail = DetailView::new();
        detail.open(5, cell_rect(), VIEW, false, 0.0);
        assert_eq!(detail.phase(), DetailPhase::Morphing);
        assert!(detail.is_active());
        assert!(!detail.is_open());

        detail.tick(450.0);
        let mid = detail.overlay_rect();
        assert!(mid.x0 < cell_rect().x0);

        assert_eq!(detail.tick(900.0), Some(DetailEvent::Opened));
        assert!(detail.is_open());
        assert_eq!(detail.overlay_rect(), DetailView::detail_target_rect(VIEW));
    }

    #[test]
    fn centering_defers_the_morph_until_notified() {
        let mut detail = DetailView::new();
        detail.open(3, cell_rect(), VIEW, true, 0.0);
        assert_eq!(detail.phase(), DetailPhase::Centering);
        // Nothing moves while the grid pans.
        assert_eq!(detail.tick(400.0), None);
        assert_eq!(detail.overlay_rect(), cell_rect());

        // Pan landed; the cell is now centered on screen.
        let centered = Rect::new(624.0, 354.0, 816.0, 546.0);
        detail.notify_centered(centered, VIEW, 600.0);
        assert_eq!(detail.phase(), DetailPhase::Morphing);
        assert_eq!(detail.tick(1_500.0), Some(DetailEvent::Opened));
    }

    #[test]
    fn chrome_rises_with_the_morph_and_caption_waits() {
        let mut detail = DetailView::new();
        detail.open(0, cell_rect(), VIEW, false, 0.0);

        // Mid-morph the chrome is already coming up; no caption yet.
        detail.tick(450.0);
        assert!(detail.chrome_opacity() > 0.0 && detail.chrome_opacity() < 1.0);
        assert_eq!(detail.nav_opacity(), 1.0);
        assert_eq!(detail.caption_opacity(), 0.0);

        detail.tick(900.0);
        assert_eq!(detail.chrome_opacity(), 1.0);
        detail.tick(1_200.0);
        assert_eq!(detail.caption_opacity(), 1.0);
    }

    #[test]
    fn navigation_wraps_and_crossfades() {
        let mut detail = open_view(0.0);
        let t0 = 2_000.0;
        assert_eq!(detail.current_index(), 5);

        detail.navigate(1, 12, t0);
        assert_eq!(detail.current_index(), 6);
        // The old image is still up while fading out.
        assert_eq!(detail.displayed_index(), 5);
        detail.tick(t0 + 125.0);
        assert!(detail.image_opacity() < 1.0);

        // Fade-out lands: swap, then fade back in.
        detail.tick(t0 + 250.0);
        assert_eq!(detail.displayed_index(), 6);
        assert_eq!(detail.image_opacity(), 0.0);
        detail.tick(t0 + 500.0);
        assert_eq!(detail.image_opacity(), 1.0);

        // Wraparound in both directions.
        detail.navigate(-7, 12, t0 + 600.0);
        assert_eq!(detail.current_index(), 11);
        detail.navigate(1, 12, t0 + 700.0);
        assert_eq!(detail.current_index(), 0);
    }

    #[test]
    fn navigation_is_ignored_while_morphing() {
        let mut detail = DetailView::new();
        detail.open(2, cell_rect(), VIEW, false, 0.0);
        detail.navigate(1, 12, 100.0);
        assert_eq!(detail.current_index(), 2);
    }

    #[test]
    fn pinch_clamps_and_accumulates_within_a_session() {
        let mut detail = open_view(0.0);
        detail.pinch_begin(Point::new(600.0, 450.0), Point::new(700.0, 450.0));
        detail.pinch_update(Point::new(550.0, 450.0), Point::new(750.0, 450.0));
        assert_eq!(detail.overlay_scale(), 2.0);
        detail.pinch_end();

        // Second gesture multiplies from the committed 2.0 and clamps.
        detail.pinch_begin(Point::new(600.0, 450.0), Point::new(700.0, 450.0));
        detail.pinch_update(Point::new(500.0, 450.0), Point::new(800.0, 450.0));
        assert_eq!(detail.overlay_scale(), DETAIL_MAX_SCALE);
        detail.pinch_end();

        // Collapsing below the floor clamps at 1x, never below.
        detail.pinch_begin(Point::new(600.0, 450.0), Point::new(700.0, 450.0));
        detail.pinch_update(Point::new(649.0, 450.0), Point::new(651.0, 450.0));
        assert_eq!(detail.overlay_scale(), DETAIL_MIN_SCALE);
    }

    #[test]
    fn pinch_is_ignored_unless_open() {
        let mut detail = DetailView::new();
        detail.pinch_begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(!detail.is_pinching());

        detail.open(0, cell_rect(), VIEW, false, 0.0);
        detail.pinch_begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(!detail.is_pinching());
        assert_eq!(detail.overlay_scale(), 1.0);
    }

    #[test]
    fn close_morphs_back_and_resets() {
        let mut detail = open_view(0.0);
        detail.pinch_begin(Point::new(600.0, 450.0), Point::new(700.0, 450.0));
        detail.pinch_update(Point::new(500.0, 450.0), Point::new(800.0, 450.0));
        detail.pinch_end();

        detail.close(cell_rect(), 5_000.0);
        assert_eq!(detail.phase(), DetailPhase::Closing);
        // Pinch scale releases at close so the morph lands on the cell.
        assert_eq!(detail.overlay_scale(), 1.0);

        detail.tick(5_400.0);
        assert!(detail.nav_opacity() < 0.1);
        assert_eq!(detail.tick(5_800.0), Some(DetailEvent::Closed));
        assert_eq!(detail.phase(), DetailPhase::Closed);
        assert_eq!(detail.chrome_opacity(), 0.0);

        // A fresh session starts from a 1x pinch baseline.
        detail.open(1, cell_rect(), VIEW, false, 6_000.0);
        assert_eq!(detail.overlay_scale(), 1.0);
    }

    #[test]
    fn force_close_drops_everything_at_once() {
        let mut detail = open_view(0.0);
        detail.force_close();
        assert_eq!(detail.phase(), DetailPhase::Closed);
        assert_eq!(detail.tick(10_000.0), None);
    }
}
