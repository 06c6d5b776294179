// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Tween: one small animation capability shared by every mover.
//!
//! This crate models a tween as pure data: a start value, an end value, a
//! start time, a duration, and an easing curve. Hosts drive it by passing
//! the current time (milliseconds, any monotonic origin) into
//! [`Tween::sample`] at animation-frame boundaries. The crate owns no
//! clock, no frame loop, and no thread.
//!
//! Cancellation is dropping the tween after one last `sample(now)`: the
//! driven property simply stays at its current interpolated value. This is
//! what lets a drag take over mid-glide with no snapping, and what a resize
//! handler does to every in-flight animation before recomputing geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_tween::{Easing, Tween};
//!
//! // Glide from 0 to 100 over one second, starting at t=5000ms.
//! let tween = Tween::new(0.0, 100.0, 5_000.0, 1_000.0, Easing::CubicOut);
//!
//! assert_eq!(tween.sample(5_000.0), 0.0);
//! assert!(tween.sample(5_500.0) > 50.0); // decelerating: front-loaded
//! assert_eq!(tween.sample(6_000.0), 100.0);
//! assert!(tween.finished(6_000.0));
//! ```
//!
//! Any [`Lerp`] value can be tweened; implementations are provided for
//! `f64` and for kurbo's `Vec2`, `Point`, `Size`, and `Rect` (rect tweens
//! drive the detail-overlay morph).
//!
//! This crate is `no_std`.

#![no_std]

mod easing;
mod lerp;
mod tween;

pub use easing::{Easing, cubic_bezier};
pub use lerp::Lerp;
pub use tween::Tween;
