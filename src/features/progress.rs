//! Animated progress value
//!
//! Holds a target in [0, 1] and the value currently shown. Setting a new
//! target restarts an ease-in-ease-out interpolation from whatever is on
//! screen at that instant, so interrupted animations never jump.

use std::time::{Duration, Instant};

use crate::ui::animation::{Curve, Tween};

/// Default interpolation window
pub const DEFAULT_DURATION: Duration = Duration::from_millis(800);
/// Shortest allowed interpolation window
pub const MIN_DURATION: Duration = Duration::from_millis(800);
/// Longest allowed interpolation window
pub const MAX_DURATION: Duration = Duration::from_millis(1000);

/// Clamp into [0, 1]; NaN and infinities map to 0
fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub target: f32,
    pub display: f32,
}

impl ProgressSnapshot {
    /// Whole percent of the target, as shown next to the bar
    pub fn percent(&self) -> u32 {
        (self.target * 100.0).round() as u32
    }
}

/// Progress bar state
#[derive(Debug, Clone)]
pub struct ProgressState {
    target: f32,
    display: f32,
    duration: Duration,
    tween: Tween,
}

impl ProgressState {
    pub fn new(initial: f32, now: Instant) -> Self {
        let value = clamp_unit(initial);
        Self {
            target: value,
            display: value,
            duration: DEFAULT_DURATION,
            tween: Tween::settled(value, now),
        }
    }

    /// Use a different interpolation window (kept within 0.8s..=1.0s)
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration.clamp(MIN_DURATION, MAX_DURATION);
        self
    }

    /// Animate toward `value` over the configured window
    pub fn set_target(&mut self, value: f32, now: Instant) {
        self.set_target_over(value, self.duration, now);
    }

    /// Animate toward `value` over an explicit window
    pub fn set_target_over(&mut self, value: f32, duration: Duration, now: Instant) {
        let from = self.display_at(now);
        self.target = clamp_unit(value);
        self.display = from;
        self.tween = Tween::new(from, self.target, now, duration, Curve::EaseInOut);
    }

    /// Displayed value at `now`, without mutating
    pub fn display_at(&self, now: Instant) -> f32 {
        clamp_unit(self.tween.value_at(now))
    }

    /// Advance the cached display value; returns it
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.display = self.display_at(now);
        self.display
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.tween.is_finished(now)
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Display value as of the last tick or retarget
    pub fn display(&self) -> f32 {
        self.display
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            target: self.target,
            display: self.display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn starts_settled_on_initial_value() {
        let now = Instant::now();
        let state = ProgressState::new(0.7, now);
        assert_eq!(state.snapshot(), ProgressSnapshot { target: 0.7, display: 0.7 });
        assert!(!state.is_animating(now));
    }

    #[test]
    fn every_target_is_reached_and_display_stays_in_range() {
        let start = Instant::now();
        for step in 0..=20 {
            let value = step as f32 / 20.0;
            let mut state = ProgressState::new(1.0 - value, start);
            state.set_target(value, start);

            for frame in 0..=60 {
                let display = state.tick(ms(start, frame * 16));
                assert!((0.0..=1.0).contains(&display));
            }

            let done = ms(start, 800);
            assert!((state.tick(done) - value).abs() < 1e-5);
            assert!(!state.is_animating(done));
        }
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        let now = Instant::now();
        let mut state = ProgressState::new(0.5, now);

        state.set_target(1.7, now);
        assert_eq!(state.target(), 1.0);

        state.set_target(-0.3, now);
        assert_eq!(state.target(), 0.0);

        state.set_target(f32::NAN, now);
        assert_eq!(state.target(), 0.0);

        assert_eq!(ProgressState::new(4.0, now).display(), 1.0);
    }

    #[test]
    fn retarget_mid_flight_continues_without_jump() {
        let start = Instant::now();
        let mut state = ProgressState::new(0.0, start);

        state.set_target(0.25, start);
        let mid = ms(start, 300);
        let before = state.tick(mid);
        assert!(before > 0.0 && before < 0.25);

        state.set_target(0.75, mid);
        assert!((state.display() - before).abs() < 1e-6);

        let mut last = before;
        for frame in 0..=60 {
            let display = state.tick(ms(start, 300 + frame * 16));
            assert!(display + 1e-6 >= last, "went backwards at frame {frame}");
            last = display;
        }
        assert!((state.tick(ms(start, 1100)) - 0.75).abs() < 1e-5);
    }

    #[test]
    fn retarget_from_above_moves_monotonically_down() {
        let start = Instant::now();
        let mut state = ProgressState::new(0.9, start);
        state.set_target(0.1, start);

        let mut last = state.display();
        for frame in 0..=50 {
            let display = state.tick(ms(start, frame * 16));
            assert!(display <= last + 1e-6);
            last = display;
        }
    }

    #[test]
    fn duration_is_kept_within_window() {
        let now = Instant::now();
        let short = ProgressState::new(0.0, now).with_duration(Duration::from_millis(100));
        let long = ProgressState::new(0.0, now).with_duration(Duration::from_secs(5));
        assert_eq!(short.duration(), MIN_DURATION);
        assert_eq!(long.duration(), MAX_DURATION);
    }

    #[test]
    fn percent_follows_target() {
        let now = Instant::now();
        let mut state = ProgressState::new(0.0, now);
        state.set_target(0.5, now);
        assert_eq!(state.snapshot().percent(), 50);
    }
}
