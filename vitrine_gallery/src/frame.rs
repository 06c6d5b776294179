// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame presentation snapshot.
//!
//! [`crate::Gallery::frame`] flattens all controller state into this plain
//! data tree once per animation frame. Hosts read it and draw; nothing in
//! here is interactive or retained.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::transform::ViewTransform;

/// One grid cell, in world coordinates under [`GalleryFrame::content`].
#[derive(Clone, Debug, PartialEq)]
pub struct CellFrame {
    /// Item index this cell presents.
    pub index: usize,
    /// World-space origin (intro motion already applied).
    pub origin: Point,
    /// Local scale on top of the shared transform (1.0 outside the intro).
    pub scale: f64,
    /// Cell opacity (intro fade).
    pub opacity: f64,
    /// Visibility occlusion, `0.0` revealed to `1.0` hidden.
    pub occlusion: f64,
    /// Set while the detail overlay stands in for this cell, so the host
    /// hides the underlying image instead of drawing it twice.
    pub image_hidden: bool,
}

/// The floating detail overlay, in view coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    /// Overlay rectangle before the pinch scale.
    pub rect: Rect,
    /// Pinch scale, applied about the rectangle center.
    pub scale: f64,
    /// Index of the image to draw.
    pub image_index: usize,
    /// Image opacity (dips to zero mid-crossfade).
    pub image_opacity: f64,
}

/// Caption content for the open detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    /// Two-digit slide number.
    pub number: String,
    /// Item title.
    pub title: String,
    /// Sentence-level description lines.
    pub lines: Vec<String>,
}

/// Detail chrome: split line, nav arrows, caption panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChromeFrame {
    /// Opacity of the split line between image and caption regions.
    pub split_opacity: f64,
    /// Opacity of the prev/next arrows.
    pub nav_opacity: f64,
    /// Opacity of the caption panel.
    pub caption_opacity: f64,
    /// Caption for the current item.
    pub caption: Caption,
}

/// Everything a host needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryFrame {
    /// Whole-viewport opacity (intro fade-in).
    pub viewport_opacity: f64,
    /// Toolbar controls opacity (intro fade-in).
    pub controls_opacity: f64,
    /// Shared transform mapping cell world coordinates to view space.
    pub content: ViewTransform,
    /// All laid-out cells, in item order.
    pub cells: Vec<CellFrame>,
    /// Detail overlay, present from morph start to morph-back end.
    pub overlay: Option<OverlayFrame>,
    /// Detail chrome, present while the detail view is open or fading.
    pub chrome: Option<ChromeFrame>,
}
