// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition root tying all controllers to one input surface.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use vitrine_bounds::{centering_offset, overscroll_allowance, pan_bounds};
use vitrine_gestures::pinch::PinchRecognizer;
use vitrine_grid::{GridConfig, GridLayout};
use vitrine_tween::Easing;

use crate::cue::Cue;
use crate::detail::{DetailPhase, DetailView};
use crate::fade::VisibilityFader;
use crate::frame::{Caption, CellFrame, ChromeFrame, GalleryFrame, OverlayFrame};
use crate::intro::IntroSequence;
use crate::items::{GalleryItem, ItemList, caption_lines, caption_number};
use crate::pan::PanController;
use crate::transform::ViewTransform;
use crate::zoom::{MAX_ZOOM, MIN_ZOOM, ZoomController, fit_zoom, gap_for_zoom};

/// Centering pan before the detail morph.
const CENTER_PAN_MS: f64 = 600.0;
/// Pan distances below this skip the centering phase outright.
const CENTER_THRESHOLD: f64 = 2.0;

/// The whole gallery: one grid of items, one shared transform, at most one
/// detail view.
///
/// `Gallery` owns the interaction state machine and enforces its mutual
/// exclusion rules: exactly one of drag, zoom change, grid pinch, or
/// detail session may own the shared transform at a time, and while the
/// detail view is active the grid underneath is frozen.
///
/// All times are host-supplied milliseconds from one monotonic origin.
#[derive(Clone, Debug)]
pub struct Gallery {
    items: ItemList,
    view: Size,
    layout: GridLayout,
    pan: PanController,
    zoom: ZoomController,
    detail: DetailView,
    fader: VisibilityFader,
    intro: IntroSequence,
    grid_pinch: PinchRecognizer,
    pinch_active: bool,
    cues: Vec<Cue>,
}

impl Gallery {
    /// Creates a gallery over `items`, centered in `view` at
    /// `initial_zoom` (clamped into the zoom range).
    ///
    /// `intro_played` skips the cell choreography, leaving only a short
    /// viewport fade; hosts pass `true` when the intro already ran this
    /// session.
    #[must_use]
    pub fn new(
        items: Vec<GalleryItem>,
        config: GridConfig,
        view: Size,
        initial_zoom: f64,
        intro_played: bool,
        now: f64,
    ) -> Self {
        let items = ItemList::new(items);
        let zoom = ZoomController::new(initial_zoom);
        let gap = gap_for_zoom(zoom.level(), config.base_gap);
        let layout = GridLayout::new(config, items.len(), gap);
        let offset = centering_offset(view, layout.scaled_size(zoom.level()));
        let bounds = pan_bounds(
            view,
            layout.scaled_size(zoom.level()),
            layout.gap() * zoom.level(),
            overscroll_allowance(view),
        );
        let mut grid_pinch = PinchRecognizer::new(MIN_ZOOM, MAX_ZOOM);
        grid_pinch.set_baseline(zoom.level());
        let cell_count = layout.cell_count();
        Self {
            items,
            view,
            layout,
            pan: PanController::new(offset, bounds),
            zoom,
            detail: DetailView::new(),
            fader: VisibilityFader::new(cell_count),
            intro: IntroSequence::new(now, cell_count, intro_played),
            grid_pinch,
            pinch_active: false,
            cues: Vec::new(),
        }
    }

    /// The item snapshot being presented.
    #[must_use]
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    /// Current viewport size.
    #[must_use]
    pub fn view(&self) -> Size {
        self.view
    }

    /// Current zoom level.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom.level()
    }

    /// Current pan offset.
    #[must_use]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan.offset()
    }

    /// The shared content transform at this instant.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::new(self.pan.offset(), self.zoom.level())
    }

    /// The open (or opening/closing) detail view.
    #[must_use]
    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    /// Takes all cues emitted since the last drain, in order.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        core::mem::take(&mut self.cues)
    }

    // ---- pointer input ------------------------------------------------

    /// Starts a single-pointer drag on the grid.
    ///
    /// Ignored while the detail view is active, a zoom change is
    /// animating, a pinch is in progress, or the gallery is empty.
    pub fn pointer_down(&mut self, pos: Point, now: f64) {
        if self.detail.is_active()
            || self.zoom.is_animating()
            || self.pinch_active
            || self.layout.is_empty()
        {
            return;
        }
        self.pan.begin_drag(pos, now);
        self.cues.push(Cue::DragStart);
    }

    /// Moves an active drag.
    pub fn pointer_move(&mut self, pos: Point, now: f64) {
        self.pan.drag_move(pos, now);
    }

    /// Releases an active drag into a glide (or a settle).
    pub fn pointer_up(&mut self, now: f64) {
        if self.pan.is_dragging() {
            self.pan.end_drag(now);
            self.cues.push(Cue::DragEnd);
        }
    }

    // ---- touch input --------------------------------------------------

    /// Routes a touch-start with the full set of active points.
    ///
    /// One point behaves like [`Gallery::pointer_down`]. A second point
    /// converts the gesture into a pinch: on the grid it scales the zoom
    /// level from its current value; on an open detail view it scales the
    /// overlay. Additional points end the pinch.
    pub fn touch_start(&mut self, points: &[Point], now: f64) {
        match points {
            [p] => {
                if self.detail.is_active() {
                    return;
                }
                self.pointer_down(*p, now);
            }
            [p0, p1] => {
                if self.detail.is_open() {
                    self.detail.pinch_begin(*p0, *p1);
                    return;
                }
                if self.detail.is_active() || self.zoom.is_animating() || self.layout.is_empty() {
                    return;
                }
                if self.pan.is_dragging() {
                    self.pan.abort_drag(now);
                }
                self.grid_pinch.set_baseline(self.zoom.level());
                self.grid_pinch.begin(*p0, *p1);
                self.pinch_active = true;
            }
            _ => self.end_pinch(),
        }
    }

    /// Routes a touch-move with the current positions of all points.
    pub fn touch_move(&mut self, points: &[Point], now: f64) {
        match points {
            [p] => self.pointer_move(*p, now),
            [p0, p1] => {
                if self.detail.is_pinching() {
                    self.detail.pinch_update(*p0, *p1);
                } else if self.pinch_active {
                    if let Some(scale) = self.grid_pinch.update(*p0, *p1) {
                        self.zoom
                            .apply_direct(scale, &self.layout, &mut self.pan, self.view);
                    }
                }
            }
            _ => {}
        }
    }

    /// Routes a touch-end with the points still down afterwards.
    ///
    /// Ending a pinch commits its scale; the remaining finger does not
    /// resume a drag, it has to lift and touch again.
    pub fn touch_end(&mut self, remaining: &[Point], now: f64) {
        if self.detail.is_pinching() || self.pinch_active {
            if remaining.len() < 2 {
                self.end_pinch();
            }
            return;
        }
        if remaining.is_empty() {
            self.pointer_up(now);
        }
    }

    /// Handles an interrupted touch sequence.
    pub fn touch_cancel(&mut self, now: f64) {
        self.end_pinch();
        if self.pan.is_dragging() {
            self.pan.abort_drag(now);
        }
    }

    fn end_pinch(&mut self) {
        if self.detail.is_pinching() {
            self.detail.pinch_end();
        }
        if self.pinch_active {
            self.pinch_active = false;
            self.grid_pinch.end();
            self.zoom
                .commit_pinch(&mut self.layout, &mut self.pan, self.view);
            self.rebuild_bounds();
        }
    }

    // ---- selection and detail ----------------------------------------

    /// Grid cell under a view-space position, if the position lands on a
    /// cell body rather than in a gap.
    #[must_use]
    pub fn cell_at_view_point(&self, pos: Point) -> Option<usize> {
        let world = self.transform().view_to_world_point(pos);
        let config = self.layout.config();
        let step = config.item_size + self.layout.gap();
        if world.x < 0.0 || world.y < 0.0 || step <= 0.0 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "coordinates are checked non-negative and columns are bounded"
        )]
        let (col, row) = ((world.x / step) as usize, (world.y / step) as usize);
        if col >= config.cols || row >= config.rows {
            return None;
        }
        // In the gap between cells, not on a cell.
        if world.x - col as f64 * step > config.item_size
            || world.y - row as f64 * step > config.item_size
        {
            return None;
        }
        let index = row * config.cols + col;
        (index < self.layout.cell_count()).then_some(index)
    }

    /// Opens the detail view for the cell at `index`.
    ///
    /// The cell is first centered on screen if it is more than a couple of
    /// pixels off center, then the overlay morphs out of it. Ignored while
    /// any other interaction owns the transform.
    pub fn select_cell(&mut self, index: usize, now: f64) {
        if self.detail.is_active()
            || self.zoom.is_animating()
            || self.pan.is_dragging()
            || self.pinch_active
            || index >= self.layout.cell_count()
        {
            return;
        }
        let Some(center) = self.layout.cell_center(index) else {
            return;
        };
        self.cues.push(Cue::Click);
        self.cues.push(Cue::Open);

        let scale = self.zoom.level();
        let desired = Vec2::new(
            self.view.width / 2.0 - center.x * scale,
            self.view.height / 2.0 - center.y * scale,
        );
        let target = self.pan.bounds().clamp_soft(desired);
        let needs_center = (target - self.pan.offset()).hypot() > CENTER_THRESHOLD;
        let source = self.cell_view_rect(index);
        self.detail.open(index, source, self.view, needs_center, now);
        if needs_center {
            self.pan.animate_to(target, CENTER_PAN_MS, Easing::SCurve, now);
        }
    }

    /// Steps the open detail view to the next item, wrapping.
    pub fn next_item(&mut self, now: f64) {
        if self.detail.is_open() {
            self.detail.navigate(1, self.items.len(), now);
            self.cues.push(Cue::Click);
        }
    }

    /// Steps the open detail view to the previous item, wrapping.
    pub fn prev_item(&mut self, now: f64) {
        if self.detail.is_open() {
            self.detail.navigate(-1, self.items.len(), now);
            self.cues.push(Cue::Click);
        }
    }

    /// Closes the open detail view, morphing back to its source cell.
    pub fn close_detail(&mut self, now: f64) {
        if self.detail.is_open() {
            let target = self.cell_view_rect(self.detail.source_index());
            self.detail.close(target, now);
            self.cues.push(Cue::Close);
        }
    }

    // ---- zoom ---------------------------------------------------------

    /// Starts an animated change to the given zoom level.
    ///
    /// With the detail view active this closes it instead; the grid keeps
    /// its zoom. Ignored mid-drag and mid-pinch.
    pub fn set_zoom(&mut self, level: f64, now: f64) {
        if self.detail.is_active() {
            self.close_detail(now);
            return;
        }
        if self.pan.is_dragging() || self.pinch_active {
            return;
        }
        let previous = self.zoom.target_level();
        if self
            .zoom
            .begin_change(level, &mut self.layout, &self.pan, self.view, now)
        {
            self.cues.push(if self.zoom.target_level() > previous {
                Cue::ZoomIn
            } else {
                Cue::ZoomOut
            });
        }
    }

    /// Zooms so the whole grid fits the viewport under the toolbar.
    pub fn fit(&mut self, now: f64) {
        self.set_zoom(fit_zoom(self.view, self.layout.config()), now);
    }

    // ---- structural changes -------------------------------------------

    /// Adopts a new viewport size.
    ///
    /// All transform animations stop at their current values, an active
    /// detail session is dropped (its geometry was captured against the
    /// old viewport), the gap tier is committed, and the grid re-centers.
    pub fn resize(&mut self, view: Size, now: f64) {
        self.view = view;
        self.pan.cancel_animation(now);
        self.zoom.cancel(&mut self.layout, now);
        if self.detail.is_active() {
            self.detail.force_close();
        }
        let gap = gap_for_zoom(self.zoom.level(), self.layout.config().base_gap);
        self.layout.relayout(gap);
        self.pan
            .set_offset(centering_offset(view, self.layout.scaled_size(self.zoom.level())));
        self.rebuild_bounds();
    }

    /// Replaces the item snapshot.
    ///
    /// An active detail session is force-closed first; its indices would
    /// be meaningless against the new snapshot.
    pub fn set_items(&mut self, items: Vec<GalleryItem>, now: f64) {
        if self.detail.is_active() {
            self.detail.force_close();
        }
        self.pan.cancel_animation(now);
        self.items = ItemList::new(items);
        self.layout.set_item_count(self.items.len());
        self.fader.reset(self.layout.cell_count());
        self.rebuild_bounds();
        self.pan
            .set_offset(self.pan.bounds().clamp_hard(self.pan.offset()));
    }

    // ---- per-frame ----------------------------------------------------

    /// Advances every animation to `now`. Call once per animation frame,
    /// before [`Gallery::frame`].
    pub fn tick(&mut self, now: f64) {
        self.pan.tick(now);
        if self
            .zoom
            .tick(&mut self.layout, &mut self.pan, self.view, now)
        {
            self.rebuild_bounds();
        }
        if self.detail.phase() == DetailPhase::Centering && !self.pan.is_animating() {
            let source = self.cell_view_rect(self.detail.source_index());
            self.detail.notify_centered(source, self.view, now);
        }
        self.detail.tick(now);
        let transform = self.transform();
        self.fader.update(&self.layout, transform, self.view, now);
        self.fader.tick(now);
    }

    /// Snapshot of everything a host draws this frame.
    #[must_use]
    pub fn frame(&self, now: f64) -> GalleryFrame {
        let transform = self.transform();
        let gather = transform.view_to_world_point(Point::new(
            self.view.width / 2.0,
            self.view.height / 2.0,
        ));
        let overlay_up = self.detail.is_active() && self.detail.phase() != DetailPhase::Centering;

        let mut cells = Vec::with_capacity(self.layout.cell_count());
        for index in 0..self.layout.cell_count() {
            let Some(base) = self.layout.cell_origin(index) else {
                continue;
            };
            let (origin, scale, opacity) = match self.intro.cell(index, base, gather, now) {
                Some(cell) => (cell.origin, cell.scale, cell.opacity),
                None => (base, 1.0, 1.0),
            };
            cells.push(CellFrame {
                index,
                origin,
                scale,
                opacity,
                occlusion: self.fader.occlusion(index),
                image_hidden: overlay_up && index == self.detail.source_index(),
            });
        }

        let overlay = overlay_up.then(|| OverlayFrame {
            rect: self.detail.overlay_rect(),
            scale: self.detail.overlay_scale(),
            image_index: self.detail.displayed_index(),
            image_opacity: self.detail.image_opacity(),
        });
        let chrome = overlay_up
            .then(|| self.items.get(self.detail.current_index()))
            .flatten()
            .map(|item| ChromeFrame {
                split_opacity: self.detail.chrome_opacity(),
                nav_opacity: self.detail.nav_opacity(),
                caption_opacity: self.detail.caption_opacity(),
                caption: Caption {
                    number: caption_number(self.detail.current_index()),
                    title: item.title.clone(),
                    lines: caption_lines(&item.description),
                },
            });

        GalleryFrame {
            viewport_opacity: self.intro.viewport_opacity(now),
            controls_opacity: self.intro.controls_opacity(now),
            content: transform,
            cells,
            overlay,
            chrome,
        }
    }

    fn cell_view_rect(&self, index: usize) -> Rect {
        self.layout
            .cell_rect(index)
            .map(|rect| self.transform().world_to_view_rect(rect))
            .unwrap_or(Rect::ZERO)
    }

    fn rebuild_bounds(&mut self) {
        let scale = self.zoom.level();
        self.pan.set_bounds(pan_bounds(
            self.view,
            self.layout.scaled_size(scale),
            self.layout.gap() * scale,
            overscroll_allowance(self.view),
        ));
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use crate::detail::DetailPhase;
    use crate::items::ItemId;
    use crate::pan::PanPhase;

    use super::*;

    const VIEW: Size = Size::new(1440.0, 900.0);

    fn items(count: u64) -> Vec<GalleryItem> {
        (0..count)
            .map(|i| GalleryItem {
                id: ItemId(i),
                image_url: format!("https://example.com/{i}.jpg"),
                title: format!("Work {i}"),
                description: String::from("One sentence. Two!"),
            })
            .collect()
    }

    fn config() -> GridConfig {
        GridConfig {
            item_size: 320.0,
            base_gap: 16.0,
            rows: 8,
            cols: 12,
        }
    }

    /// A gallery past its intro, at zoom 0.6 (gap tier 32).
    fn gallery() -> Gallery {
        Gallery::new(items(96), config(), VIEW, 0.6, true, 0.0)
    }

    fn settle(gallery: &mut Gallery, mut now: f64) -> f64 {
        for _ in 0..2_000 {
            now += 16.0;
            gallery.tick(now);
        }
        now
    }

    #[test]
    fn construction_centers_and_clamps() {
        let g = gallery();
        assert_eq!(g.zoom_level(), 0.6);
        let centered = centering_offset(VIEW, g.layout.scaled_size(0.6));
        assert_eq!(g.pan_offset(), centered);

        let clamped = Gallery::new(items(96), config(), VIEW, 9.0, true, 0.0);
        assert_eq!(clamped.zoom_level(), MAX_ZOOM);
    }

    #[test]
    fn drag_glide_settles_within_hard_bounds() {
        let mut g = gallery();
        g.pointer_down(Point::new(700.0, 400.0), 0.0);
        g.pointer_move(Point::new(500.0, 380.0), 40.0);
        g.pointer_move(Point::new(300.0, 360.0), 80.0);
        g.pointer_up(80.0);

        settle(&mut g, 80.0);
        assert!(g.pan.bounds().contains_hard(g.pan_offset(), 0.5));
        assert_eq!(g.drain_cues(), alloc::vec![Cue::DragStart, Cue::DragEnd]);
    }

    #[test]
    fn tap_leaves_the_offset_alone() {
        let mut g = gallery();
        let before = g.pan_offset();
        g.pointer_down(Point::new(700.0, 400.0), 0.0);
        g.pointer_up(0.0);
        settle(&mut g, 0.0);
        assert_eq!(g.pan_offset(), before);
    }

    #[test]
    fn hit_testing_distinguishes_cells_and_gaps() {
        let g = gallery();
        let origin = g.layout.cell_origin(13).unwrap();
        let t = g.transform();

        let on_cell = t.world_to_view_point(Point::new(origin.x + 10.0, origin.y + 10.0));
        assert_eq!(g.cell_at_view_point(on_cell), Some(13));

        // Just past the cell body, inside the gap.
        let in_gap = t.world_to_view_point(Point::new(origin.x + 330.0, origin.y + 10.0));
        assert_eq!(g.cell_at_view_point(in_gap), None);

        assert_eq!(g.cell_at_view_point(t.world_to_view_point(Point::new(-5.0, 0.0))), None);
    }

    #[test]
    fn detail_round_trip_restores_the_grid() {
        let mut g = gallery();
        g.select_cell(41, 0.0);
        assert_eq!(g.detail().phase(), DetailPhase::Centering);
        assert_eq!(g.drain_cues(), alloc::vec![Cue::Click, Cue::Open]);

        let now = settle(&mut g, 0.0);
        assert!(g.detail().is_open());
        let offset_open = g.pan_offset();
        let zoom_open = g.zoom_level();

        // Cell 41 is deep in the grid; centering put it dead center.
        let center = g.layout.cell_center(41).unwrap();
        let view_center = g.transform().world_to_view_point(center);
        assert!((view_center.x - 720.0).abs() < 0.5);
        assert!((view_center.y - 450.0).abs() < 0.5);

        g.close_detail(now);
        assert_eq!(g.drain_cues(), alloc::vec![Cue::Close]);
        settle(&mut g, now);
        assert_eq!(g.detail().phase(), DetailPhase::Closed);
        // The grid is exactly where the detail session left it.
        assert_eq!(g.pan_offset(), offset_open);
        assert_eq!(g.zoom_level(), zoom_open);
    }

    #[test]
    fn grid_input_is_frozen_while_detail_is_active() {
        let mut g = gallery();
        g.select_cell(13, 0.0);
        let now = settle(&mut g, 0.0);
        let offset = g.pan_offset();

        g.pointer_down(Point::new(700.0, 400.0), now);
        assert!(!g.pan.is_dragging());
        g.select_cell(14, now);
        assert_eq!(g.detail().current_index(), 13);

        // Zoom requests close the detail view instead of zooming.
        g.drain_cues();
        g.set_zoom(1.0, now);
        assert_eq!(g.detail().phase(), DetailPhase::Closing);
        assert_eq!(g.drain_cues(), alloc::vec![Cue::Close]);
        settle(&mut g, now);
        assert_eq!(g.zoom_level(), 0.6);
        assert_eq!(g.pan_offset(), offset);
    }

    #[test]
    fn navigation_wraps_and_emits_clicks() {
        let mut g = gallery();
        g.select_cell(95, 0.0);
        let now = settle(&mut g, 0.0);

        g.next_item(now);
        assert_eq!(g.detail().current_index(), 0);
        g.prev_item(now + 700.0);
        assert_eq!(g.detail().current_index(), 95);
        // Source cell is unchanged; closing still returns to 95.
        assert_eq!(g.detail().source_index(), 95);
    }

    #[test]
    fn zoom_presets_animate_and_emit_directional_cues() {
        let mut g = gallery();
        g.drain_cues();
        g.set_zoom(1.0, 0.0);
        assert_eq!(g.drain_cues(), alloc::vec![Cue::ZoomIn]);
        assert!(g.zoom.is_animating());

        // Drags are rejected while the zoom animates.
        g.pointer_down(Point::new(700.0, 400.0), 100.0);
        assert!(!g.pan.is_dragging());

        let now = settle(&mut g, 0.0);
        assert_eq!(g.zoom_level(), 1.0);
        assert_eq!(g.layout.gap(), 16.0);
        let centered = centering_offset(VIEW, g.layout.scaled_size(1.0));
        assert_eq!(g.pan_offset(), centered);

        g.set_zoom(0.3, now);
        assert_eq!(g.drain_cues(), alloc::vec![Cue::ZoomOut]);
    }

    #[test]
    fn grid_pinch_drives_zoom_and_commits_the_tier() {
        let mut g = gallery();
        g.touch_start(&[Point::new(600.0, 450.0), Point::new(800.0, 450.0)], 0.0);
        g.touch_move(&[Point::new(500.0, 450.0), Point::new(900.0, 450.0)], 50.0);
        assert_eq!(g.zoom_level(), 1.2);

        g.touch_end(&[Point::new(500.0, 450.0)], 100.0);
        assert_eq!(g.zoom_level(), 1.2);
        // 1.2 sits in the tight tier; the gap committed instantly.
        assert_eq!(g.layout.gap(), 16.0);
        assert!(!g.pan.is_dragging());

        // The remaining finger does not become a drag.
        g.touch_move(&[Point::new(400.0, 450.0)], 150.0);
        assert!(!g.pan.is_dragging());
    }

    #[test]
    fn second_finger_converts_a_drag_into_a_pinch() {
        let mut g = gallery();
        g.touch_start(&[Point::new(700.0, 400.0)], 0.0);
        assert!(g.pan.is_dragging());

        g.touch_start(&[Point::new(700.0, 400.0), Point::new(800.0, 400.0)], 50.0);
        assert!(!g.pan.is_dragging());
        // The drag ended without a glide.
        assert_ne!(g.pan.phase(), PanPhase::Gliding);
        g.touch_move(&[Point::new(650.0, 400.0), Point::new(850.0, 400.0)], 100.0);
        assert_eq!(g.zoom_level(), 1.2);
    }

    #[test]
    fn detail_pinch_never_touches_the_grid_zoom() {
        let mut g = gallery();
        g.select_cell(13, 0.0);
        let now = settle(&mut g, 0.0);

        g.touch_start(&[Point::new(400.0, 450.0), Point::new(500.0, 450.0)], now);
        g.touch_move(&[Point::new(300.0, 450.0), Point::new(600.0, 450.0)], now + 50.0);
        assert_eq!(g.detail().overlay_scale(), 2.5);
        assert_eq!(g.zoom_level(), 0.6);
        g.touch_end(&[], now + 100.0);
        assert_eq!(g.detail().overlay_scale(), 2.5);
    }

    #[test]
    fn replacing_items_force_closes_the_detail_view() {
        let mut g = gallery();
        g.select_cell(13, 0.0);
        let now = settle(&mut g, 0.0);
        assert!(g.detail().is_open());

        g.set_items(items(4), now);
        assert_eq!(g.detail().phase(), DetailPhase::Closed);
        assert_eq!(g.items().len(), 4);
        assert_eq!(g.layout.cell_count(), 4);
        assert!(g.pan.bounds().contains_hard(g.pan_offset(), 1e-9));
    }

    #[test]
    fn resize_recenters_and_drops_animations() {
        let mut g = gallery();
        g.set_zoom(1.0, 0.0);
        // Past the gap phase, into the transform phase.
        g.tick(1_000.0);
        g.tick(1_500.0);
        assert!(g.zoom.is_animating());

        let small = Size::new(800.0, 600.0);
        g.resize(small, 1_500.0);
        assert!(!g.zoom.is_animating());
        // The interpolated level survives; the gap tier is committed.
        let level = g.zoom_level();
        assert!(level > 0.6 && level < 1.0);
        assert_eq!(g.layout.gap(), gap_for_zoom(level, 16.0));
        assert_eq!(
            g.pan_offset(),
            centering_offset(small, g.layout.scaled_size(level))
        );
    }

    #[test]
    fn empty_gallery_rejects_interaction() {
        let mut g = Gallery::new(Vec::new(), config(), VIEW, 0.6, true, 0.0);
        g.pointer_down(Point::new(700.0, 400.0), 0.0);
        assert!(!g.pan.is_dragging());
        g.select_cell(0, 0.0);
        assert!(!g.detail().is_active());
        assert!(g.drain_cues().is_empty());
        assert!(g.frame(0.0).cells.is_empty());
    }

    #[test]
    fn frame_reflects_detail_overlay_and_chrome() {
        let mut g = gallery();
        g.select_cell(13, 0.0);
        let now = settle(&mut g, 0.0);

        let frame = g.frame(now);
        let overlay = frame.overlay.expect("detail overlay present");
        assert_eq!(overlay.image_index, 13);
        assert_eq!(overlay.rect, crate::detail::DetailView::detail_target_rect(VIEW));
        let chrome = frame.chrome.expect("detail chrome present");
        assert_eq!(chrome.caption.number, "14");
        assert_eq!(chrome.caption.title, "Work 13");
        assert_eq!(chrome.caption.lines.len(), 2);
        // The source cell's grid image is stood in for by the overlay.
        assert!(frame.cells[13].image_hidden);
        assert!(!frame.cells[12].image_hidden);
    }

    #[test]
    fn intro_cells_gather_then_land() {
        let mut g = Gallery::new(items(96), config(), VIEW, 0.6, false, 0.0);
        g.tick(100.0);
        let frame = g.frame(100.0);
        assert!(frame.viewport_opacity < 1.0);
        // A late-stagger cell has not moved off the gather point yet.
        assert_eq!(frame.cells[95].opacity, 0.0);
        assert_eq!(frame.cells[95].scale, 0.8);

        g.tick(4_200.0);
        let frame = g.frame(4_200.0);
        assert_eq!(frame.viewport_opacity, 1.0);
        assert_eq!(frame.controls_opacity, 1.0);
        assert_eq!(frame.cells[95].opacity, 1.0);
        assert_eq!(frame.cells[95].origin, g.layout.cell_origin(95).unwrap());
    }
}
