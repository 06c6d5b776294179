// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

/// Easing curve applied to a tween's linear time fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Quadratic deceleration: `1 - (1 - t)^2`.
    QuadOut,
    /// Cubic deceleration: `1 - (1 - t)^3`. The curve behind inertial
    /// glides and opacity fades.
    CubicOut,
    /// Smooth symmetric S-shaped curve, cubic bézier `(0.45, 0, 0.55, 1)`.
    /// The house curve for layout, zoom, and morph animations.
    SCurve,
    /// Elastic overshoot settling on the target, used by the boundary
    /// snap-back after a glide overshoots the hard limits.
    ElasticOut {
        /// Overshoot amplitude; values below `1.0` behave as `1.0`.
        amplitude: f64,
        /// Oscillation period as a fraction of the duration.
        period: f64,
    },
}

impl Easing {
    /// Maps a linear fraction in `[0, 1]` through the curve.
    ///
    /// Input outside `[0, 1]` is clamped. All curves pass through `(0, 0)`
    /// and `(1, 1)`; `ElasticOut` may exceed `1.0` in between.
    #[must_use]
    pub fn apply(&self, fraction: f64) -> f64 {
        let t = fraction.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::QuadOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Self::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::SCurve => cubic_bezier(0.45, 0.0, 0.55, 1.0, t),
            Self::ElasticOut { amplitude, period } => elastic_out(amplitude, period, t),
        }
    }
}

/// Evaluates a CSS-style cubic bézier timing curve at linear fraction `t`.
///
/// The curve runs from `(0, 0)` to `(1, 1)` with control points
/// `(x1, y1)` and `(x2, y2)`. The bézier parameter for the given `t` (an
/// x coordinate) is found by Newton iteration with a bisection fallback
/// when the derivative gets too flat.
#[must_use]
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let sample = |c1: f64, c2: f64, u: f64| -> f64 {
        let inv = 1.0 - u;
        3.0 * inv * inv * u * c1 + 3.0 * inv * u * u * c2 + u * u * u
    };
    let derivative = |c1: f64, c2: f64, u: f64| -> f64 {
        let inv = 1.0 - u;
        3.0 * inv * inv * c1 + 6.0 * inv * u * (c2 - c1) + 3.0 * u * u * (1.0 - c2)
    };

    let mut u = t;
    for _ in 0..8 {
        let x = sample(x1, x2, u) - t;
        if x.abs() < 1e-7 {
            return sample(y1, y2, u);
        }
        let d = derivative(x1, x2, u);
        if d.abs() < 1e-6 {
            break;
        }
        u -= x / d;
        u = u.clamp(0.0, 1.0);
    }

    // Bisection fallback; x(u) is monotonic for valid control points.
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..32 {
        u = (lo + hi) / 2.0;
        if sample(x1, x2, u) < t {
            lo = u;
        } else {
            hi = u;
        }
    }
    sample(y1, y2, u)
}

fn elastic_out(amplitude: f64, period: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let p = period.max(1e-6);
    let a = amplitude.max(1.0);
    let s = p / TAU * libm::asin(1.0 / a);
    a * libm::exp2(-10.0 * t) * libm::sin((t - s) * TAU / p) + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 5] = [
        Easing::Linear,
        Easing::QuadOut,
        Easing::CubicOut,
        Easing::SCurve,
        Easing::ElasticOut {
            amplitude: 0.8,
            period: 0.35,
        },
    ];

    #[test]
    fn every_curve_hits_both_endpoints() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
            // Out-of-range input clamps.
            assert_eq!(curve.apply(-0.5), 0.0);
            assert_eq!(curve.apply(1.5), 1.0);
        }
    }

    #[test]
    fn cubic_out_is_front_loaded() {
        let half = Easing::CubicOut.apply(0.5);
        assert!((half - 0.875).abs() < 1e-9);
        assert!(Easing::CubicOut.apply(0.25) > 0.25);
    }

    #[test]
    fn s_curve_is_symmetric_about_the_midpoint() {
        let curve = Easing::SCurve;
        assert!((curve.apply(0.5) - 0.5).abs() < 1e-4);
        for t in [0.1, 0.2, 0.3, 0.4] {
            let a = curve.apply(t);
            let b = curve.apply(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-4);
        }
        // Slow start, slow end.
        assert!(curve.apply(0.1) < 0.1);
        assert!(curve.apply(0.9) > 0.9);
    }

    #[test]
    fn cubic_bezier_is_monotonic_for_valid_controls() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let t = f64::from(i) / 100.0;
            let y = cubic_bezier(0.45, 0.0, 0.55, 1.0, t);
            assert!(y >= prev);
            prev = y;
        }
    }

    #[test]
    fn elastic_out_overshoots_then_settles() {
        let curve = Easing::ElasticOut {
            amplitude: 0.8,
            period: 0.35,
        };
        let mut overshot = false;
        for i in 1..100 {
            let y = curve.apply(f64::from(i) / 100.0);
            if y > 1.0 {
                overshot = true;
            }
        }
        assert!(overshot, "elastic curve should cross its target");
        // Late in the curve the oscillation has mostly decayed.
        assert!((curve.apply(0.95) - 1.0).abs() < 0.05);
    }
}
