//! Timing curves for time-based interpolation
//!
//! Curves are the standard CSS cubic-bezier presets. `apply` maps linear
//! progress in [0, 1] to eased progress in [0, 1]; all presets are monotonic.

/// Newton iterations before falling back to bisection
const NEWTON_ITERATIONS: usize = 8;
/// Bisection iterations for the fallback path
const BISECTION_ITERATIONS: usize = 32;
/// Acceptable error on the x axis
const EPSILON: f32 = 1e-6;

/// Easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Curve {
    /// Control points (x1, y1, x2, y2) of the cubic bezier
    fn control_points(self) -> (f32, f32, f32, f32) {
        match self {
            Curve::Linear => (0.0, 0.0, 1.0, 1.0),
            Curve::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Curve::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Curve::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Map linear progress to eased progress
    pub fn apply(self, t: f32) -> f32 {
        if !t.is_finite() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        if self == Curve::Linear {
            return t;
        }

        let (x1, y1, x2, y2) = self.control_points();
        let s = solve_parameter(x1, x2, t);
        bezier(y1, y2, s).clamp(0.0, 1.0)
    }
}

/// One axis of a cubic bezier anchored at 0 and 1
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate equals `x`
fn solve_parameter(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier(x1, x2, s) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_derivative(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= error / slope;
    }

    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) * 0.5;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Curve; 4] = [
        Curve::Linear,
        Curve::EaseIn,
        Curve::EaseOut,
        Curve::EaseInOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for curve in ALL {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
            assert_eq!(curve.apply(-3.0), 0.0);
            assert_eq!(curve.apply(7.5), 1.0);
            assert_eq!(curve.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in ALL {
            let mut last = 0.0;
            for step in 0..=200 {
                let value = curve.apply(step as f32 / 200.0);
                assert!(value + 1e-5 >= last, "{curve:?} went backwards at {step}");
                last = value;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let curve = Curve::EaseInOut;
        assert!((curve.apply(0.5) - 0.5).abs() < 1e-3);
        for step in 1..10 {
            let t = step as f32 / 10.0;
            let mirrored = 1.0 - curve.apply(1.0 - t);
            assert!((curve.apply(t) - mirrored).abs() < 1e-3);
        }
    }

    #[test]
    fn ease_out_leads_ease_in() {
        assert!(Curve::EaseOut.apply(0.3) > 0.3);
        assert!(Curve::EaseIn.apply(0.3) < 0.3);
    }
}
