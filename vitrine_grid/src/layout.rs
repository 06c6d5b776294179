// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

/// Static grid parameters, fixed for the lifetime of one gallery session.
///
/// Cell size is constant; only the gap between cells (and the overall scale,
/// which lives outside this crate) vary at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Width and height of one square cell, in world units.
    pub item_size: f64,
    /// Gap between cells at the neutral zoom tier.
    pub base_gap: f64,
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
}

impl GridConfig {
    /// Maximum number of cells this grid can place.
    ///
    /// Items beyond `rows * cols` are not laid out.
    #[must_use]
    pub fn cell_capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Total unscaled content size at the given gap.
    ///
    /// Per axis this is `n * (item_size + gap) - gap`, i.e. the outermost
    /// cell edges with no trailing gap. An empty grid has zero extent.
    #[must_use]
    pub fn content_size(&self, gap: f64) -> Size {
        if self.rows == 0 || self.cols == 0 {
            return Size::ZERO;
        }
        let cols = self.cols as f64;
        let rows = self.rows as f64;
        Size::new(
            cols * (self.item_size + gap) - gap,
            rows * (self.item_size + gap) - gap,
        )
    }
}

/// Cached row-major layout of grid cells.
///
/// `GridLayout` owns the side table of per-cell base origins. It is pure
/// data: rebuilding it (or calling [`GridLayout::relayout`]) is the only way
/// positions change, so callers control exactly when layout work happens.
#[derive(Clone, Debug)]
pub struct GridLayout {
    config: GridConfig,
    gap: f64,
    origins: Vec<Point>,
}

impl GridLayout {
    /// Lays out `item_count` cells under `config` at the given gap.
    ///
    /// At most [`GridConfig::cell_capacity`] cells are placed; any further
    /// items are ignored.
    #[must_use]
    pub fn new(config: GridConfig, item_count: usize, gap: f64) -> Self {
        let mut layout = Self {
            config,
            gap,
            origins: Vec::new(),
        };
        layout.rebuild(item_count);
        layout
    }

    /// Returns the static grid configuration.
    #[must_use]
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Returns the gap the current positions were computed with.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Number of cells actually laid out.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.origins.len()
    }

    /// Returns `true` if no cells are laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Recomputes every cell origin for a new gap, keeping the cell count.
    pub fn relayout(&mut self, gap: f64) {
        self.gap = gap;
        let count = self.origins.len();
        self.rebuild(count);
    }

    /// Recomputes positions for a new item count at the current gap.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.rebuild(item_count);
    }

    /// Base origin (top-left corner) of cell `index`, in world units.
    #[must_use]
    pub fn cell_origin(&self, index: usize) -> Option<Point> {
        self.origins.get(index).copied()
    }

    /// World-space rectangle covered by cell `index`.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        let origin = self.cell_origin(index)?;
        let size = self.config.item_size;
        Some(Rect::from_origin_size(origin, Size::new(size, size)))
    }

    /// World-space center of cell `index`.
    #[must_use]
    pub fn cell_center(&self, index: usize) -> Option<Point> {
        let origin = self.cell_origin(index)?;
        let half = self.config.item_size / 2.0;
        Some(Point::new(origin.x + half, origin.y + half))
    }

    /// Total unscaled content size at the current gap.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.config.content_size(self.gap)
    }

    /// Content size under a uniform zoom factor.
    #[must_use]
    pub fn scaled_size(&self, zoom: f64) -> Size {
        self.content_size() * zoom
    }

    fn rebuild(&mut self, item_count: usize) {
        let count = item_count.min(self.config.cell_capacity());
        let step = self.config.item_size + self.gap;
        self.origins.clear();
        self.origins.reserve(count);
        for index in 0..count {
            let row = index / self.config.cols;
            let col = index % self.config.cols;
            self.origins
                .push(Point::new(col as f64 * step, row as f64 * step));
        }
    }
}
