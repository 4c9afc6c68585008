//! Timed interpolation
//!
//! Drives one scalar from a start to an end value over a fixed duration,
//! shaped by an [`Easing`] curve. Advanced explicitly with frame deltas.

use crate::easing::Easing;

/// A fixed-duration interpolation of one scalar value.
///
/// Progress saturates at the end of the duration; once finished, further
/// ticks are no-ops and the value stays pinned at the target.
#[derive(Clone, Debug)]
pub struct Timing {
    from: f32,
    to: f32,
    duration_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
}

impl Timing {
    /// Create an interpolation from `from` to `to` over `duration_ms`.
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            easing,
            elapsed_ms: 0.0,
        }
    }

    /// Advance by a frame delta and return the current value.
    ///
    /// Negative deltas are ignored; time never flows backwards.
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        if dt_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        }
        self.value()
    }

    /// Normalized progress in [0.0, 1.0]. A zero duration is complete
    /// immediately.
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// Current eased value between `from` and `to`.
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Whether the full duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Rewind to the start.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_from() {
        let timing = Timing::new(0.0, 1.0, 600.0, Easing::Linear);
        assert_eq!(timing.value(), 0.0);
        assert_eq!(timing.progress(), 0.0);
        assert!(!timing.is_finished());
    }

    #[test]
    fn test_linear_midpoint() {
        let mut timing = Timing::new(0.0, 1.0, 400.0, Easing::Linear);
        let value = timing.tick(200.0);
        assert!((value - 0.5).abs() < 1e-6);
        assert!(!timing.is_finished());
    }

    #[test]
    fn test_saturates_at_target() {
        let mut timing = Timing::new(0.0, 1.0, 400.0, Easing::Linear);
        timing.tick(10_000.0);
        assert_eq!(timing.value(), 1.0);
        assert!(timing.is_finished());

        // further ticks stay pinned
        timing.tick(16.0);
        assert_eq!(timing.value(), 1.0);
        assert_eq!(timing.progress(), 1.0);
    }

    #[test]
    fn test_accumulates_small_deltas() {
        let mut timing = Timing::new(0.0, 1.0, 600.0, Easing::Linear);
        for _ in 0..30 {
            timing.tick(10.0);
        }
        assert!((timing.progress() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut timing = Timing::new(0.0, 1.0, 100.0, Easing::Linear);
        timing.tick(50.0);
        let before = timing.value();
        timing.tick(-40.0);
        assert_eq!(timing.value(), before);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let timing = Timing::new(0.3, 1.0, 0.0, Easing::EaseOutCubic);
        assert_eq!(timing.progress(), 1.0);
        assert_eq!(timing.value(), 1.0);
        assert!(timing.is_finished());
    }

    #[test]
    fn test_interpolates_arbitrary_range() {
        let mut timing = Timing::new(0.3, 1.0, 500.0, Easing::Linear);
        timing.tick(250.0);
        assert!((timing.value() - 0.65).abs() < 1e-6);
    }

    #[test]
    fn test_eased_value_respects_curve() {
        let mut timing = Timing::new(0.0, 1.0, 600.0, Easing::EaseOutCubic);
        timing.tick(300.0);
        // 1 - (1 - 0.5)^3
        assert!((timing.value() - 0.875).abs() < 1e-5);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut timing = Timing::new(0.0, 1.0, 100.0, Easing::Linear);
        timing.tick(100.0);
        assert!(timing.is_finished());
        timing.reset();
        assert_eq!(timing.value(), 0.0);
        assert!(!timing.is_finished());
    }
}
