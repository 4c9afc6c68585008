//! Easing curves
//!
//! Maps linear progress (0.0 to 1.0) onto a shaped curve. The named CSS
//! curves go through the cubic-bezier solver; the cubic family uses closed
//! forms.

use serde::{Deserialize, Serialize};

/// An easing curve applied to normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Identity curve.
    #[default]
    Linear,
    /// Standard ease-in, cubic-bezier(0.42, 0, 1, 1).
    EaseIn,
    /// Standard ease-out, cubic-bezier(0, 0, 0.58, 1).
    EaseOut,
    /// Standard ease-in-out, cubic-bezier(0.42, 0, 0.58, 1).
    EaseInOut,
    /// Cubic acceleration, t³.
    EaseInCubic,
    /// Cubic deceleration, 1 − (1 − t)³.
    EaseOutCubic,
    /// Cubic acceleration then deceleration.
    EaseInOutCubic,
    /// Arbitrary cubic-bezier control points (x1, y1, x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the curve to a progress value, clamped to [0.0, 1.0].
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => solve_bezier(t, 0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => solve_bezier(t, 0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => solve_bezier(t, 0.42, 0.0, 0.58, 1.0),
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => solve_bezier(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Cubic bezier evaluation matching the CSS timing-function definition.
///
/// Newton-Raphson on the x polynomial with a bisection fallback when the
/// local slope is too flat. Solves in f64 so repeated per-frame evaluation
/// does not accumulate f32 jitter.
fn solve_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = f64::from(t);
    let (x1, y1, x2, y2) = (f64::from(x1), f64::from(y1), f64::from(x2), f64::from(y2));

    let mut p = x;
    for _ in 0..8 {
        let err = sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return sample(p, y1, y2) as f32;
        }
        let slope = slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..20 {
        let sampled = sample(p, x1, x2);
        if (sampled - x).abs() < 1e-7 {
            break;
        }
        if sampled < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    sample(p, y1, y2) as f32
}

/// One-axis cubic bezier with implicit endpoints 0 and 1, in Horner form.
#[inline]
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 8] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn test_endpoints_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_out_of_range_input_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn test_linear_is_identity() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((Easing::Linear.apply(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_out_cubic_midpoint() {
        // 1 - (1 - 0.5)^3 = 0.875
        assert!((Easing::EaseOutCubic.apply(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_out_curves_lead_linear() {
        for easing in [Easing::EaseOut, Easing::EaseOutCubic] {
            assert!(easing.apply(0.5) > 0.5, "{:?} should run ahead of linear", easing);
        }
        for easing in [Easing::EaseIn, Easing::EaseInCubic] {
            assert!(easing.apply(0.5) < 0.5, "{:?} should trail linear", easing);
        }
    }

    #[test]
    fn test_monotone_curves_nondecreasing() {
        for easing in ALL {
            let mut prev = 0.0_f32;
            for i in 1..=100 {
                let value = easing.apply(i as f32 / 100.0);
                assert!(value >= prev - 1e-5, "{:?} dipped at step {}", easing, i);
                prev = value;
            }
        }
    }

    #[test]
    fn test_bezier_matches_closed_form_cubic() {
        // ease-out-cubic expressed as a bezier stays within solver tolerance
        let bezier = Easing::CubicBezier(0.33, 1.0, 0.68, 1.0);
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let diff = (bezier.apply(t) - Easing::EaseOutCubic.apply(t)).abs();
            assert!(diff < 0.02, "divergence {} at t={}", diff, t);
        }
    }
}
