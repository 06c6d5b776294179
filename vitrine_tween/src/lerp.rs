// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Values that can be interpolated linearly.
///
/// `fraction` is conventionally in `[0, 1]`, but implementations must also
/// accept values outside that range, since elastic easing feeds overshooting
/// fractions through `lerp` on purpose.
pub trait Lerp {
    /// Interpolates from `self` toward `target` by `fraction`.
    #[must_use]
    fn lerp(&self, target: &Self, fraction: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Vec2 {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        *self + (*target - *self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        Point::lerp(*self, *target, fraction)
    }
}

impl Lerp for Size {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        Self::new(
            self.width.lerp(&target.width, fraction),
            self.height.lerp(&target.height, fraction),
        )
    }
}

impl Lerp for Rect {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        Self::new(
            self.x0.lerp(&target.x0, fraction),
            self.y0.lerp(&target.y0, fraction),
            self.x1.lerp(&target.x1, fraction),
            self.y1.lerp(&target.y1, fraction),
        )
    }
}
