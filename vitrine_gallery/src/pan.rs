// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan controller: drag, momentum glide, elastic correction.
//!
//! Phase machine: `Idle → Dragging → Gliding → (Correcting) → Idle`, plus
//! `Settling` for programmatic moves (detail-view centering, which skips
//! boundary correction). Starting a drag during any animation cancels the
//! tween and adopts its current interpolated offset as the drag origin, so
//! there is never a snap.
//!
//! Invariants:
//! - While driven by direct input the offset stays within soft bounds
//!   (edge resistance, then a soft clamp).
//! - The offset may exceed hard bounds only between a glide landing in the
//!   overscroll zone and the elastic correction completing.

use kurbo::{Point, Vec2};
use vitrine_bounds::PanBounds;
use vitrine_gestures::velocity::VelocityTracker;
use vitrine_tween::{Easing, Tween};

/// Fraction of overscroll travel absorbed while dragging past hard bounds.
pub const EDGE_RESISTANCE: f64 = 0.4;
/// How far ahead of the release point the exit velocity is projected.
pub const MOMENTUM_PROJECTION_MS: f64 = 800.0;
/// Duration of the inertial glide after release.
pub const GLIDE_MS: f64 = 1_000.0;
/// Duration of the elastic snap-back into hard bounds.
pub const CORRECTION_MS: f64 = 1_100.0;

/// Below this distance (px) a projected glide or boundary excursion is
/// treated as already settled.
const SETTLE_EPSILON: f64 = 0.5;

const CORRECTION_EASE: Easing = Easing::ElasticOut {
    amplitude: 0.8,
    period: 0.35,
};

/// Interaction phase of the pan controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    /// No drag and no animation.
    Idle,
    /// Pointer-driven; offset follows the pointer 1:1 under edge resistance.
    Dragging,
    /// Post-release momentum tween toward the projected target.
    Gliding,
    /// Elastic snap-back after a glide settled outside hard bounds.
    Correcting,
    /// Programmatic move (centering); completes without correction.
    Settling,
}

/// Owns the live pan offset of the content layer.
#[derive(Clone, Debug)]
pub struct PanController {
    offset: Vec2,
    bounds: PanBounds,
    phase: PanPhase,
    tween: Option<Tween<Vec2>>,
    tracker: VelocityTracker,
    pointer_start: Point,
    offset_start: Vec2,
}

impl PanController {
    /// Creates a controller at the given offset with the given bounds.
    #[must_use]
    pub fn new(offset: Vec2, bounds: PanBounds) -> Self {
        Self {
            offset,
            bounds,
            phase: PanPhase::Idle,
            tween: None,
            tracker: VelocityTracker::new(),
            pointer_start: Point::ZERO,
            offset_start: Vec2::ZERO,
        }
    }

    /// Current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> PanPhase {
        self.phase
    }

    /// Current pan bounds.
    #[must_use]
    pub fn bounds(&self) -> PanBounds {
        self.bounds
    }

    /// Replaces the bounds (after a resize or zoom change).
    ///
    /// The offset is not clamped here; callers re-center or let the next
    /// interaction settle it.
    pub fn set_bounds(&mut self, bounds: PanBounds) {
        self.bounds = bounds;
    }

    /// Sets the offset directly, dropping any in-flight animation.
    ///
    /// Used by the zoom controller and grid pinch while they own the
    /// shared transform.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.tween = None;
        if self.phase != PanPhase::Dragging {
            self.phase = PanPhase::Idle;
        }
        self.offset = offset;
    }

    /// Returns `true` while a glide/correction/settle tween is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == PanPhase::Dragging
    }

    /// Starts a drag at the given pointer position.
    ///
    /// Cancels any in-flight tween, taking its current interpolated offset
    /// as the drag origin, and seeds the velocity buffer.
    pub fn begin_drag(&mut self, pointer: Point, now: f64) {
        if let Some(tween) = self.tween.take() {
            self.offset = tween.sample(now);
        }
        self.phase = PanPhase::Dragging;
        self.pointer_start = pointer;
        self.offset_start = self.offset;
        self.tracker.begin(self.offset.to_point(), now);
    }

    /// Moves an active drag; 1:1 pointer tracking under edge resistance.
    pub fn drag_move(&mut self, pointer: Point, now: f64) {
        if self.phase != PanPhase::Dragging {
            return;
        }
        let desired = self.offset_start + (pointer - self.pointer_start);
        self.offset = self.bounds.resist(desired, EDGE_RESISTANCE);
        self.tracker.push(self.offset.to_point(), now);
    }

    /// Releases a drag: project exit velocity into a glide, or settle.
    pub fn end_drag(&mut self, now: f64) {
        if self.phase != PanPhase::Dragging {
            return;
        }
        let velocity = self.tracker.velocity();
        self.tracker.clear();

        let Some(velocity) = velocity else {
            // Tap: no usable velocity, settle in place.
            self.settle_or_correct(now);
            return;
        };
        let target = self
            .bounds
            .clamp_soft(self.offset + velocity * MOMENTUM_PROJECTION_MS);
        if (target - self.offset).hypot() < SETTLE_EPSILON {
            self.settle_or_correct(now);
            return;
        }
        self.tween = Some(Tween::new(self.offset, target, now, GLIDE_MS, Easing::CubicOut));
        self.phase = PanPhase::Gliding;
    }

    /// Aborts a drag with no glide (the pointer was claimed by a pinch).
    pub fn abort_drag(&mut self, now: f64) {
        if self.phase == PanPhase::Dragging {
            self.tracker.clear();
            self.settle_or_correct(now);
        }
    }

    /// Animates the offset to `target`, skipping boundary correction.
    pub fn animate_to(&mut self, target: Vec2, duration: f64, easing: Easing, now: f64) {
        if let Some(tween) = self.tween.take() {
            self.offset = tween.sample(now);
        }
        self.tween = Some(Tween::new(self.offset, target, now, duration, easing));
        self.phase = PanPhase::Settling;
    }

    /// Cancels any in-flight tween at its current interpolated value.
    ///
    /// Required before recomputing geometry on resize so nothing keeps
    /// animating toward a stale target.
    pub fn cancel_animation(&mut self, now: f64) {
        if let Some(tween) = self.tween.take() {
            self.offset = tween.sample(now);
        }
        if self.phase != PanPhase::Dragging {
            self.phase = PanPhase::Idle;
        }
    }

    /// Advances the active tween to `now`.
    pub fn tick(&mut self, now: f64) {
        let Some(tween) = &self.tween else {
            return;
        };
        self.offset = tween.sample(now);
        if !tween.finished(now) {
            return;
        }
        self.tween = None;
        match self.phase {
            PanPhase::Gliding => self.settle_or_correct(now),
            PanPhase::Correcting | PanPhase::Settling => self.phase = PanPhase::Idle,
            PanPhase::Idle | PanPhase::Dragging => {}
        }
    }

    fn settle_or_correct(&mut self, now: f64) {
        if self.bounds.contains_hard(self.offset, SETTLE_EPSILON) {
            self.phase = PanPhase::Idle;
            return;
        }
        let target = self.bounds.clamp_hard(self.offset);
        self.tween = Some(Tween::new(self.offset, target, now, CORRECTION_MS, CORRECTION_EASE));
        self.phase = PanPhase::Correcting;
    }
}
