// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Gallery: headless controllers for an inertial gallery canvas.
//!
//! This crate composes the Vitrine leaf crates into the full interaction
//! model of a draggable, zoomable grid gallery with a single-item detail
//! view:
//!
//! - [`pan::PanController`]: drag with edge resistance, momentum glide on
//!   release, and an elastic snap-back when the glide overshoots the hard
//!   pan bounds.
//! - [`zoom::ZoomController`]: a clamped zoom level with tiered gap
//!   spacing, animated relayout/re-centering, and a fit-to-viewport
//!   operation.
//! - [`detail::DetailView`]: the grid ↔ detail transition state machine:
//!   capture the clicked cell's on-screen rectangle, center it, morph an
//!   overlay to the detail region, navigate siblings, morph back.
//! - [`fade::VisibilityFader`]: cosmetic per-cell occlusion fades driven by
//!   viewport intersection.
//! - [`Gallery`]: the composition root a host wires input events into and
//!   reads per-frame presentation state out of via [`frame::GalleryFrame`].
//!
//! Nothing here touches a scene graph, a DOM, audio, or a clock. Hosts own
//! all of those: they forward pointer/touch events with their own
//! monotonic-millisecond timestamps, call [`Gallery::tick`] once per
//! animation frame, drain [`cue::Cue`]s into whatever feedback system they
//! have (the original design plays UI sounds), and render the returned
//! frame snapshot however they like.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vitrine_gallery::{Gallery, GalleryItem, ItemId};
//! use vitrine_grid::GridConfig;
//!
//! let items = (0..12)
//!     .map(|i| GalleryItem {
//!         id: ItemId(i),
//!         image_url: format!("https://example.com/{i}.jpg"),
//!         title: format!("Work {i}"),
//!         description: String::from("A piece. Another sentence."),
//!     })
//!     .collect();
//! let config = GridConfig {
//!     item_size: 320.0,
//!     base_gap: 16.0,
//!     rows: 3,
//!     cols: 4,
//! };
//! let mut gallery = Gallery::new(items, config, Size::new(1440.0, 900.0), 0.6, true, 0.0);
//!
//! // One drag: down, move, up, then tick the glide forward.
//! gallery.pointer_down(Point::new(700.0, 400.0), 10.0);
//! gallery.pointer_move(Point::new(600.0, 380.0), 60.0);
//! gallery.pointer_up(110.0);
//! gallery.tick(500.0);
//!
//! let frame = gallery.frame(500.0);
//! assert_eq!(frame.cells.len(), 12);
//! ```

#![no_std]

extern crate alloc;

pub mod cue;
pub mod detail;
pub mod fade;
pub mod frame;
pub mod intro;
pub mod items;
pub mod pan;
pub mod transform;
pub mod zoom;

mod gallery;

pub use cue::Cue;
pub use gallery::Gallery;
pub use items::{GalleryItem, ItemId, ItemList};
pub use transform::ViewTransform;
