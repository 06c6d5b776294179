// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Bounds: pan boundary model for a zoomable content layer.
//!
//! Given a viewport extent and the scaled extent of the content behind it,
//! this crate derives two nested ranges for the pan offset on each axis:
//!
//! - **Hard bounds**: the offsets beyond which empty space would become
//!   visible in the viewport. When the content fits inside the viewport,
//!   both hard limits collapse to the single centering offset.
//! - **Soft bounds**: the hard bounds expanded outward by an overscroll
//!   allowance; the range permitted during active interaction before a
//!   corrective snap-back.
//!
//! Axes are independent: [`AxisBounds`] models one axis and [`PanBounds`]
//! pairs two of them. The crate is pure arithmetic; callers recompute
//! bounds on every resize, zoom change, or content-size change and feed
//! them to whatever drives the pan offset.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use vitrine_bounds::{overscroll_allowance, pan_bounds};
//!
//! let view = Size::new(1440.0, 900.0);
//! let content = Size::new(1517.28, 1670.4);
//! let bounds = pan_bounds(view, content, 19.2, overscroll_allowance(view));
//!
//! // Content overflows on both axes, so panning is allowed.
//! assert!(bounds.x.hard_min < bounds.x.hard_max);
//! let clamped = bounds.clamp_hard(Vec2::new(1_000.0, 0.0));
//! assert_eq!(clamped.x, bounds.x.hard_max);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod pan;

pub use axis::{AxisBounds, axis_bounds};
pub use pan::{PanBounds, centering_offset, overscroll_allowance, pan_bounds};
