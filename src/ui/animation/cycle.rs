//! Repeat-forever animation phases
//!
//! Ambient loops (background gradient, logo float, spinner rotation, shimmer)
//! never retarget, so they are sampled from elapsed time instead of being
//! stored as tweens.

use std::time::Duration;

use super::Curve;

/// A looping animation: phase in [0, 1] as a function of elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    period: Duration,
    curve: Curve,
    autoreverse: bool,
    delay: Duration,
}

impl Cycle {
    /// Linear loop restarting from 0 every `period`
    pub const fn looping(period: Duration) -> Self {
        Self {
            period,
            curve: Curve::Linear,
            autoreverse: false,
            delay: Duration::ZERO,
        }
    }

    /// Eased loop that runs 0 -> 1 -> 0, each leg taking `period`
    pub const fn ping_pong(period: Duration) -> Self {
        Self {
            period,
            curve: Curve::EaseInOut,
            autoreverse: true,
            delay: Duration::ZERO,
        }
    }

    pub const fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Phase in [0, 1] after `elapsed`
    pub fn phase(&self, elapsed: Duration) -> f32 {
        if elapsed <= self.delay || self.period.is_zero() {
            return 0.0;
        }

        let t = (elapsed - self.delay).as_secs_f64() / self.period.as_secs_f64();
        let leg = t.floor() as u64;
        let fraction = t.fract() as f32;

        let linear = if self.autoreverse && leg % 2 == 1 {
            1.0 - fraction
        } else {
            fraction
        };
        self.curve.apply(linear)
    }

    /// Interpolate between `from` and `to` by the current phase
    pub fn lerp(&self, elapsed: Duration, from: f32, to: f32) -> f32 {
        from + (to - from) * self.phase(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looping_wraps_to_zero() {
        let cycle = Cycle::looping(Duration::from_secs(2));
        assert_eq!(cycle.phase(Duration::ZERO), 0.0);
        assert!((cycle.phase(Duration::from_millis(500)) - 0.25).abs() < 1e-4);
        assert!((cycle.phase(Duration::from_millis(2500)) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn ping_pong_reverses_on_odd_legs() {
        let cycle = Cycle::ping_pong(Duration::from_secs(1)).curve(Curve::Linear);
        assert!((cycle.phase(Duration::from_millis(250)) - 0.25).abs() < 1e-4);
        assert!((cycle.phase(Duration::from_millis(1250)) - 0.75).abs() < 1e-4);
        assert!((cycle.phase(Duration::from_millis(2250)) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn delay_holds_phase_at_zero() {
        let cycle = Cycle::looping(Duration::from_secs(1)).delay(Duration::from_millis(400));
        assert_eq!(cycle.phase(Duration::from_millis(300)), 0.0);
        assert!((cycle.phase(Duration::from_millis(900)) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn lerp_maps_phase_into_range() {
        let cycle = Cycle::ping_pong(Duration::from_secs(2));
        // Each leg takes the full period, so the far end is reached at 2s
        assert!((cycle.lerp(Duration::from_secs(2), 1.0, 1.1) - 1.1).abs() < 1e-4);
        assert!((cycle.lerp(Duration::from_secs(4), 1.0, 1.1) - 1.0).abs() < 1e-4);
    }
}
