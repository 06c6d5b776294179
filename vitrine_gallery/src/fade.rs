// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cell visibility fades driven by viewport intersection.
//!
//! Cells well outside the viewport carry full occlusion; as a cell's
//! on-screen rectangle starts intersecting a slightly expanded viewport it
//! fades toward zero occlusion, slowly, so images reveal lazily as the
//! user pans around. Fading back out is much quicker. The fades are purely
//! cosmetic: they never affect layout, bounds, or hit testing.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use vitrine_grid::GridLayout;
use vitrine_tween::{Easing, Tween};

use crate::transform::ViewTransform;

/// Fraction of each viewport dimension added on every side before testing
/// intersection, so cells start revealing just off screen.
const VIEWPORT_EXPANSION: f64 = 0.1;
/// Minimum visible fraction of a cell for it to count as on screen.
const MIN_VISIBLE_RATIO: f64 = 0.15;
/// Slow reveal toward zero occlusion.
const FADE_IN_MS: f64 = 2_500.0;
/// Quick fade back to full occlusion off screen.
const FADE_OUT_MS: f64 = 600.0;

#[derive(Clone, Debug)]
struct Channel {
    occlusion: f64,
    tween: Option<Tween<f64>>,
    visible: bool,
}

impl Channel {
    fn hidden() -> Self {
        Self {
            occlusion: 1.0,
            tween: None,
            visible: false,
        }
    }
}

/// Tracks one occlusion channel per grid cell.
#[derive(Clone, Debug, Default)]
pub struct VisibilityFader {
    channels: Vec<Channel>,
}

impl VisibilityFader {
    /// Creates a fader with every cell fully occluded.
    #[must_use]
    pub fn new(cell_count: usize) -> Self {
        let mut fader = Self::default();
        fader.reset(cell_count);
        fader
    }

    /// Drops all state and starts over with `cell_count` occluded cells.
    pub fn reset(&mut self, cell_count: usize) {
        self.channels.clear();
        self.channels.resize_with(cell_count, Channel::hidden);
    }

    /// Occlusion of cell `index`: `1.0` hidden, `0.0` fully revealed.
    #[must_use]
    pub fn occlusion(&self, index: usize) -> f64 {
        self.channels.get(index).map_or(1.0, |c| c.occlusion)
    }

    /// Returns `true` when cell `index` last tested as on screen.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.channels.get(index).is_some_and(|c| c.visible)
    }

    /// Retests every cell against the expanded viewport, starting fades
    /// for cells whose visibility flipped since the last update.
    pub fn update(&mut self, layout: &GridLayout, transform: ViewTransform, view: Size, now: f64) {
        if self.channels.len() != layout.cell_count() {
            self.reset(layout.cell_count());
        }
        let expanded = Rect::from_origin_size((0.0, 0.0), view).inflate(
            view.width * VIEWPORT_EXPANSION,
            view.height * VIEWPORT_EXPANSION,
        );
        for (index, channel) in self.channels.iter_mut().enumerate() {
            let Some(world_rect) = layout.cell_rect(index) else {
                continue;
            };
            let view_rect = transform.world_to_view_rect(world_rect);
            let visible = visible_ratio(view_rect, expanded) >= MIN_VISIBLE_RATIO;
            if visible != channel.visible {
                channel.visible = visible;
                let (target, duration) = if visible {
                    (0.0, FADE_IN_MS)
                } else {
                    (1.0, FADE_OUT_MS)
                };
                channel.tween = Some(Tween::new(
                    channel.occlusion,
                    target,
                    now,
                    duration,
                    Easing::CubicOut,
                ));
            }
        }
    }

    /// Advances all running fades.
    pub fn tick(&mut self, now: f64) {
        for channel in &mut self.channels {
            if let Some(tween) = &channel.tween {
                channel.occlusion = tween.sample(now);
                if tween.finished(now) {
                    channel.tween = None;
                }
            }
        }
    }
}

/// Fraction of `rect`'s area that lies inside `bounds`.
fn visible_ratio(rect: Rect, bounds: Rect) -> f64 {
    let area = rect.area();
    if area <= 0.0 {
        return 0.0;
    }
    rect.intersect(bounds).area() / area
}
