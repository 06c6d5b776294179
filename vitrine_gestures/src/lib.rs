// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Gestures: small stateful trackers for pointer interactions.
//!
//! This crate provides two focused state machines used by the gallery
//! controllers:
//!
//! - [`velocity::VelocityTracker`]: a capped ring buffer of recent
//!   position/time samples taken during a drag, producing an exit velocity
//!   at release from the oldest and newest retained samples.
//! - [`pinch::PinchRecognizer`]: two-finger distance tracking that turns a
//!   pinch into a clamped scale factor, with a cumulative baseline carried
//!   across separate gestures.
//!
//! Neither tracker knows about any event system or UI framework. Hosts call
//! into them from their own pointer/touch handlers and decide what the
//! resulting velocity or scale drives: the grid zoom level in one context,
//! a detail overlay's local scale in another.
//!
//! ## Velocity at drag release
//!
//! ```rust
//! use kurbo::Point;
//! use vitrine_gestures::velocity::VelocityTracker;
//!
//! let mut tracker = VelocityTracker::new();
//! tracker.begin(Point::new(0.0, 0.0), 1_000.0);
//! tracker.push(Point::new(30.0, 0.0), 1_050.0);
//! tracker.push(Point::new(80.0, 0.0), 1_100.0);
//!
//! let v = tracker.velocity().unwrap();
//! assert_eq!(v.x, 0.8); // 80px over 100ms
//! ```
//!
//! ## Pinch-to-scale
//!
//! ```rust
//! use kurbo::Point;
//! use vitrine_gestures::pinch::PinchRecognizer;
//!
//! let mut pinch = PinchRecognizer::new(1.0, 2.5);
//! pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
//! let scale = pinch.update(Point::new(0.0, 0.0), Point::new(150.0, 0.0));
//! assert_eq!(scale, Some(1.5));
//! pinch.end();
//! // The next gesture scales from 1.5, not from 1.0.
//! assert_eq!(pinch.baseline(), 1.5);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod pinch;
pub mod velocity;
