// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Grid: headless grid geometry for a pannable gallery canvas.
//!
//! This crate lays a flat list of equally sized items out on a fixed
//! `rows × cols` grid in world space and answers geometry queries about the
//! result. It focuses on:
//!
//! - Row-major cell placement at a constant item size and a variable gap.
//! - Total content extents, unscaled and under a uniform zoom factor.
//! - Per-cell base positions kept in a side table owned by the layout,
//!   never attached to view-layer objects.
//!
//! It does **not** own any scene graph, rendering backend, or interaction
//! state. Callers are expected to:
//!
//! - Rebuild or [`GridLayout::relayout`] whenever the gap or item count
//!   changes (positions are cached, not derived per query).
//! - Combine [`GridLayout::scaled_size`] with a viewport model to compute
//!   pan bounds and centering offsets at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_grid::{GridConfig, GridLayout};
//!
//! let config = GridConfig {
//!     item_size: 320.0,
//!     base_gap: 16.0,
//!     rows: 8,
//!     cols: 12,
//! };
//! let layout = GridLayout::new(config, 96, 32.0);
//!
//! // Cell 13 sits at row 1, column 1.
//! let origin = layout.cell_origin(13).unwrap();
//! assert_eq!(origin.x, 352.0);
//! assert_eq!(origin.y, 352.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod layout;

pub use layout::{GridConfig, GridLayout};
