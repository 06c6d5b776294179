// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Hard and soft pan-offset limits along a single axis.
///
/// Invariants: `hard_min <= hard_max`, `soft_min <= hard_min`, and
/// `soft_max >= hard_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    /// Smallest offset that shows no empty space past the content's far edge.
    pub hard_min: f64,
    /// Largest offset that shows no empty space before the content's near edge.
    pub hard_max: f64,
    /// Hard minimum extended by the overscroll allowance.
    pub soft_min: f64,
    /// Hard maximum extended by the overscroll allowance.
    pub soft_max: f64,
}

/// Computes pan limits for one axis.
///
/// `view_extent` and `content_extent` are in the same (device) units; the
/// content extent is expected to already include the zoom factor. When the
/// content fits inside the view, both hard limits collapse to the centering
/// offset `(view - content) / 2` and no panning is possible. Otherwise the
/// hard range lets the content edges meet the view edges, inset by `margin`
/// on each side.
#[must_use]
pub fn axis_bounds(view_extent: f64, content_extent: f64, margin: f64, overscroll: f64) -> AxisBounds {
    let (hard_min, hard_max) = if content_extent <= view_extent {
        let center = (view_extent - content_extent) / 2.0;
        (center, center)
    } else {
        (view_extent - content_extent - margin, margin)
    };
    AxisBounds {
        hard_min,
        hard_max,
        soft_min: hard_min - overscroll,
        soft_max: hard_max + overscroll,
    }
}

impl AxisBounds {
    /// Clamps an offset into the hard range.
    #[must_use]
    pub fn clamp_hard(&self, offset: f64) -> f64 {
        offset.clamp(self.hard_min, self.hard_max)
    }

    /// Clamps an offset into the soft range.
    #[must_use]
    pub fn clamp_soft(&self, offset: f64) -> f64 {
        offset.clamp(self.soft_min, self.soft_max)
    }

    /// Returns `true` if `offset` lies within the hard range, allowing
    /// `epsilon` of numeric slack on both ends.
    #[must_use]
    pub fn contains_hard(&self, offset: f64, epsilon: f64) -> bool {
        offset >= self.hard_min - epsilon && offset <= self.hard_max + epsilon
    }

    /// Applies edge resistance to a desired offset.
    ///
    /// Travel inside the hard range passes through unchanged. Travel beyond
    /// it is damped by `1 - resistance` (so `resistance` of `0.4` keeps 60%
    /// of the excursion) and then clamped into the soft range, which keeps
    /// direct input within soft bounds at all times.
    #[must_use]
    pub fn resist(&self, desired: f64, resistance: f64) -> f64 {
        let keep = (1.0 - resistance).clamp(0.0, 1.0);
        let damped = if desired > self.hard_max {
            self.hard_max + (desired - self.hard_max) * keep
        } else if desired < self.hard_min {
            self.hard_min + (desired - self.hard_min) * keep
        } else {
            desired
        };
        self.clamp_soft(damped)
    }
}
