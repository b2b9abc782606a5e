//! Explicit interpolation driver
//!
//! A `Tween` is `(from, to, start, duration, curve)`; its value is a pure
//! function of the sampling instant, so the renderer can read it on any frame
//! without the tween being mutated.

use std::time::{Duration, Instant};

use super::Curve;

/// Time-based interpolation between two scalars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    curve: Curve,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, curve: Curve) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            curve,
        }
    }

    /// A tween that is already at rest on `value`
    pub fn settled(value: f32, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO, Curve::Linear)
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.curve.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Instant at which the tween reaches `to`
    pub fn end(&self) -> Instant {
        self.start + self.duration
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_between_endpoints() {
        let start = Instant::now();
        let tween = Tween::new(0.2, 0.8, start, Duration::from_secs(1), Curve::EaseInOut);

        assert_eq!(tween.value_at(start), 0.2);
        assert!((tween.value_at(start + Duration::from_millis(500)) - 0.5).abs() < 1e-3);
        assert_eq!(tween.value_at(start + Duration::from_secs(1)), 0.8);
        assert_eq!(tween.value_at(start + Duration::from_secs(30)), 0.8);
        assert!(tween.is_finished(start + Duration::from_secs(1)));
        assert!(!tween.is_finished(start + Duration::from_millis(999)));
    }

    #[test]
    fn sampling_before_start_holds_origin() {
        let now = Instant::now();
        let tween = Tween::new(
            1.0,
            0.0,
            now + Duration::from_secs(2),
            Duration::from_secs(1),
            Curve::Linear,
        );
        assert_eq!(tween.value_at(now), 1.0);
    }

    #[test]
    fn settled_tween_is_finished() {
        let now = Instant::now();
        let tween = Tween::settled(0.4, now);
        assert!(tween.is_finished(now));
        assert_eq!(tween.value_at(now), 0.4);
        assert_eq!(tween.end(), now);
    }
}
