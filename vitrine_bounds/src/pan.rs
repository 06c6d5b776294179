// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::axis::{AxisBounds, axis_bounds};

/// Pan-offset limits for both axes of a 2D content layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    /// Limits along the horizontal axis.
    pub x: AxisBounds,
    /// Limits along the vertical axis.
    pub y: AxisBounds,
}

/// Computes pan bounds for a content layer behind a viewport.
///
/// `content` is the scaled content size; `margin` is the inset kept between
/// content and viewport edges when panning to an extreme (conventionally
/// `gap × zoom`); `overscroll` is the soft-bound allowance on every end,
/// typically from [`overscroll_allowance`].
#[must_use]
pub fn pan_bounds(view: Size, content: Size, margin: f64, overscroll: f64) -> PanBounds {
    PanBounds {
        x: axis_bounds(view.width, content.width, margin, overscroll),
        y: axis_bounds(view.height, content.height, margin, overscroll),
    }
}

/// Overscroll allowance for a viewport: `max(120, 0.35 × min(width, height))`.
#[must_use]
pub fn overscroll_allowance(view: Size) -> f64 {
    (view.width.min(view.height) * 0.35).max(120.0)
}

/// Pan offset that centers content of the given (scaled) size in the view.
#[must_use]
pub fn centering_offset(view: Size, content: Size) -> Vec2 {
    Vec2::new(
        (view.width - content.width) / 2.0,
        (view.height - content.height) / 2.0,
    )
}

impl PanBounds {
    /// Clamps a pan offset into the hard ranges of both axes.
    #[must_use]
    pub fn clamp_hard(&self, offset: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp_hard(offset.x), self.y.clamp_hard(offset.y))
    }

    /// Clamps a pan offset into the soft ranges of both axes.
    #[must_use]
    pub fn clamp_soft(&self, offset: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp_soft(offset.x), self.y.clamp_soft(offset.y))
    }

    /// Returns `true` if `offset` is within hard bounds on both axes.
    #[must_use]
    pub fn contains_hard(&self, offset: Vec2, epsilon: f64) -> bool {
        self.x.contains_hard(offset.x, epsilon) && self.y.contains_hard(offset.y, epsilon)
    }

    /// Applies per-axis edge resistance to a desired offset.
    #[must_use]
    pub fn resist(&self, desired: Vec2, resistance: f64) -> Vec2 {
        Vec2::new(
            self.x.resist(desired.x, resistance),
            self.y.resist(desired.y, resistance),
        )
    }
}
