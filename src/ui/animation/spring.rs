//! Spring physics for settle animations
//!
//! Uses time-based analytical solutions rather than frame-by-frame
//! integration, so a spring can be sampled at any instant.
//!
//! ## Key Algorithm
//!
//! Overdamped condition: `1.0 <= damping / (2.0 * sqrt(stiffness * mass))`
//!
//! ### Overdamped formula
//! ```text
//! angular_frequency = -sqrt(stiffness / mass)
//! leftover = -angular_frequency * delta - velocity
//! position(t) = to - (delta + t * leftover) * e^(t * angular_frequency)
//! ```
//!
//! ### Underdamped formula
//! ```text
//! damping_frequency = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * velocity) / damping_frequency
//! dfm = 0.5 * damping_frequency / mass
//! dm = -0.5 * damping / mass
//! position(t) = to - (cos(t * dfm) * delta + sin(t * dfm) * leftover) * e^(t * dm)
//! ```

use std::f64::consts::TAU;
use std::time::Instant;

pub type Num = f64;

/// Numerical derivative step size (seconds)
const H: Num = 0.001;

/// Distance and speed under which a spring counts as at rest
const REST_THRESHOLD: Num = 1e-3;

/// Spring parameters for physics simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    /// Build parameters from a perceptual response time (seconds, one
    /// undamped period) and a damping fraction (1.0 = critical)
    pub fn from_response(response: Num, damping_fraction: Num) -> Self {
        let response = response.max(0.01);
        let stiffness = (TAU / response).powi(2);
        let damping = 4.0 * std::f64::consts::PI * damping_fraction.max(0.0) / response;
        Self {
            mass: 1.0,
            damping,
            stiffness,
        }
    }

    /// Toggle knob settle: quick and nearly critically damped
    pub fn settle() -> Self {
        Self::from_response(0.4, 0.8)
    }

    /// Damping ratio (zeta)
    pub fn damping_ratio(&self) -> Num {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Check if overdamped: 1.0 <= damping / (2.0 * sqrt(stiffness * mass))
    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping_ratio()
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
        }
    }
}

/// Closed-form solution of one spring leg
#[derive(Debug, Clone, Copy, PartialEq)]
enum Solution {
    Overdamped {
        angular_frequency: Num,
        leftover: Num,
    },
    Underdamped {
        leftover: Num,
        dfm: Num,
        dm: Num,
    },
}

impl Solution {
    fn solve(delta: Num, velocity: Num, params: &SpringParams) -> Self {
        let SpringParams {
            mass,
            damping,
            stiffness,
        } = *params;

        if params.is_overdamped() {
            let angular_frequency = -(stiffness / mass).sqrt();
            Solution::Overdamped {
                angular_frequency,
                leftover: -angular_frequency * delta - velocity,
            }
        } else {
            let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
            Solution::Underdamped {
                leftover: (damping * delta - 2.0 * mass * velocity) / damping_frequency,
                dfm: 0.5 * damping_frequency / mass,
                dm: -0.5 * damping / mass,
            }
        }
    }

    /// Displacement from the target at `t` seconds into the leg
    fn displacement(&self, delta: Num, t: Num) -> Num {
        match *self {
            Solution::Overdamped {
                angular_frequency,
                leftover,
            } => (delta + t * leftover) * (t * angular_frequency).exp(),
            Solution::Underdamped { leftover, dfm, dm } => {
                ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * (t * dm).exp()
            }
        }
    }
}

/// Spring animation with analytical solution
///
/// Retargeting captures the position and velocity at the retarget instant,
/// so interrupted settles continue smoothly instead of snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    from: Num,
    target: Num,
    started: Instant,
    params: SpringParams,
    solution: Solution,
}

impl Spring {
    /// Create a spring at rest on `position`
    pub fn new(position: Num, params: SpringParams, now: Instant) -> Self {
        Self {
            from: position,
            target: position,
            started: now,
            params,
            solution: Solution::solve(0.0, 0.0, &params),
        }
    }

    fn elapsed(&self, now: Instant) -> Num {
        now.saturating_duration_since(self.started).as_secs_f64()
    }

    fn position_after(&self, t: Num) -> Num {
        let t = t.max(0.0);
        self.target - self.solution.displacement(self.target - self.from, t)
    }

    /// Position at `now`
    pub fn position_at(&self, now: Instant) -> Num {
        self.position_after(self.elapsed(now))
    }

    /// Velocity at `now` (central difference)
    pub fn velocity_at(&self, now: Instant) -> Num {
        let t = self.elapsed(now);
        if t < H {
            return (self.position_after(t + H) - self.position_after(t)) / H;
        }
        (self.position_after(t + H) - self.position_after(t - H)) / (2.0 * H)
    }

    /// Move the target, continuing from the current position and velocity
    pub fn set_target(&mut self, target: Num, now: Instant) {
        let position = self.position_at(now);
        let velocity = self.velocity_at(now);
        self.from = position;
        self.target = target;
        self.started = now;
        self.solution = Solution::solve(target - position, velocity, &self.params);
    }

    /// Check if the spring has arrived at its target
    pub fn is_settled(&self, now: Instant) -> bool {
        (self.target - self.position_at(now)).abs() < REST_THRESHOLD
            && self.velocity_at(now).abs() < REST_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn test_spring_basic() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0, SpringParams::settle(), start);
        spring.set_target(100.0, start);

        let pos = spring.position_at(at(start, 50));
        assert!(pos > 0.0, "Spring should move from 0");
        assert!(pos < 100.0, "Spring should not reach target yet");

        let end = at(start, 3000);
        assert!((spring.position_at(end) - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_new_spring_is_at_rest() {
        let now = Instant::now();
        let spring = Spring::new(1.0, SpringParams::settle(), now);
        assert!(spring.is_settled(now));
        assert_eq!(spring.position_at(at(now, 500)), 1.0);
    }

    #[test]
    fn test_retarget_keeps_position_continuous() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0, SpringParams::settle(), start);
        spring.set_target(1.0, start);

        let mid = at(start, 120);
        let before = spring.position_at(mid);
        spring.set_target(0.0, mid);
        let after = spring.position_at(mid);

        assert!((before - after).abs() < 1e-9);
        assert!(spring.position_at(at(start, 4000)).abs() < 0.01);
    }

    #[test]
    fn test_settle_params() {
        let params = SpringParams::settle();
        assert!((params.damping_ratio() - 0.8).abs() < 1e-9);
        assert!(!params.is_overdamped());
        assert!(SpringParams::from_response(0.4, 1.2).is_overdamped());
    }

    #[test]
    fn test_settle_overshoot_is_small() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0, SpringParams::settle(), start);
        spring.set_target(1.0, start);

        let peak = (0..200)
            .map(|i| spring.position_at(at(start, i * 10)))
            .fold(0.0_f64, f64::max);
        assert!(peak < 1.02, "overshoot too large: {peak}");
    }

    #[test]
    fn test_overdamped() {
        let params = SpringParams {
            mass: 1.0,
            damping: 100.0,
            stiffness: 100.0,
        };
        assert!(params.is_overdamped());

        let params2 = SpringParams {
            mass: 1.0,
            damping: 5.0,
            stiffness: 100.0,
        };
        assert!(!params2.is_overdamped());
    }
}
