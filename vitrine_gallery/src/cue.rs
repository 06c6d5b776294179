// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feedback cues emitted by the gallery.
//!
//! The controllers never reach into an ambient audio system; they push
//! named cues into a queue the host drains each frame
//! ([`crate::Gallery::drain_cues`]) and maps to whatever feedback it has;
//! the original design plays a small set of UI sounds.

/// A named interaction moment a host may want to sonify.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Cue {
    /// A grid cell was clicked.
    Click,
    /// The detail view started opening.
    Open,
    /// The detail view started closing.
    Close,
    /// Zoom level increased.
    ZoomIn,
    /// Zoom level decreased.
    ZoomOut,
    /// A drag gesture started.
    DragStart,
    /// A drag gesture was released.
    DragEnd,
}
