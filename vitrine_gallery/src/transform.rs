// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The content layer's uniform pan + zoom transform.

use kurbo::{Point, Rect, Vec2};
use vitrine_tween::Lerp;

/// Uniform transform mapping grid world space into view/device space:
/// `view = world × scale + offset`.
///
/// This is the single shared transform that pan, zoom, and grid-pinch all
/// drive, exactly one of them at a time, enforced by the gallery's state
/// machine rather than by any lock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Translation of the content layer relative to the viewport origin.
    pub offset: Vec2,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl ViewTransform {
    /// Creates a transform from a pan offset and a zoom factor.
    #[must_use]
    pub fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Maps a world-space point into view space.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Maps a view-space point back into world space.
    ///
    /// Degenerate scales are floored at a tiny positive value so the
    /// inverse stays finite.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        let scale = self.scale.max(f64::MIN_POSITIVE);
        ((pt.to_vec2() - self.offset) / scale).to_point()
    }

    /// Maps a world-space rectangle into view space.
    ///
    /// The transform is axis-aligned with a positive uniform scale, so
    /// mapping the two corners is exact.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        let p0 = self.world_to_view_point(rect.origin());
        let p1 = self.world_to_view_point(Point::new(rect.x1, rect.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }
}

impl Lerp for ViewTransform {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        Self {
            offset: self.offset.lerp(target.offset, fraction),
            scale: self.scale.lerp(&target.scale, fraction),
        }
    }
}
