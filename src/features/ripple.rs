//! Touch ripples for the interactive overlay
//!
//! Each press spawns a ring at the pointer that grows to 3x over one second
//! and fades as it grows. Ripples expire on their own; closing the overlay
//! drops any still in flight.

use std::time::{Duration, Instant};

use iced::Point;

use crate::ui::animation::{Curve, Tween};

/// Lifetime of one ripple
pub const RIPPLE_DURATION: Duration = Duration::from_secs(1);
/// Final scale relative to the base diameter
pub const MAX_SCALE: f32 = 3.0;
/// Ring diameter at scale 1.0
pub const BASE_DIAMETER: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Ripple {
    center: Point,
    scale: Tween,
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleSnapshot {
    pub center: Point,
    pub diameter: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, Default)]
pub struct RippleField {
    ripples: Vec<Ripple>,
    cursor: Option<Point>,
}

impl RippleField {
    /// Track the pointer so the next press knows where to spawn
    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    /// Spawn at the last known pointer position
    pub fn spawn(&mut self, now: Instant) -> bool {
        match self.cursor {
            Some(center) => {
                self.spawn_at(center, now);
                true
            }
            None => false,
        }
    }

    pub fn spawn_at(&mut self, center: Point, now: Instant) {
        self.ripples.push(Ripple {
            center,
            scale: Tween::new(0.0, MAX_SCALE, now, RIPPLE_DURATION, Curve::EaseOut),
        });
    }

    /// Drop ripples whose lifetime is over
    pub fn tick(&mut self, now: Instant) {
        self.ripples.retain(|ripple| !ripple.scale.is_finished(now));
    }

    /// Drop ripples in flight; the last pointer position is kept
    pub fn clear(&mut self) {
        self.ripples.clear();
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.ripples
            .iter()
            .any(|ripple| !ripple.scale.is_finished(now))
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn snapshots(&self, now: Instant) -> Vec<RippleSnapshot> {
        self.ripples
            .iter()
            .filter(|ripple| !ripple.scale.is_finished(now))
            .map(|ripple| {
                let scale = ripple.scale.value_at(now);
                RippleSnapshot {
                    center: ripple.center,
                    diameter: BASE_DIAMETER * scale,
                    opacity: (1.0 - scale / MAX_SCALE).clamp(0.0, 1.0),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_needs_a_known_pointer() {
        let now = Instant::now();
        let mut field = RippleField::default();
        assert!(!field.spawn(now));

        field.cursor_moved(Point::new(40.0, 80.0));
        assert!(field.spawn(now));
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn ripple_grows_fades_and_expires() {
        let now = Instant::now();
        let mut field = RippleField::default();
        field.spawn_at(Point::new(10.0, 10.0), now);

        let early = field.snapshots(now + Duration::from_millis(100))[0];
        let late = field.snapshots(now + Duration::from_millis(800))[0];
        assert!(late.diameter > early.diameter);
        assert!(late.opacity < early.opacity);

        let done = now + RIPPLE_DURATION;
        field.tick(done);
        assert_eq!(field.len(), 0);
        assert!(!field.is_animating(done));
    }

    #[test]
    fn clear_drops_ripples_in_flight() {
        let now = Instant::now();
        let mut field = RippleField::default();
        field.cursor_moved(Point::ORIGIN);
        field.spawn(now);
        field.spawn(now + Duration::from_millis(200));

        field.clear();
        assert_eq!(field.len(), 0);
        assert!(!field.is_animating(now));
    }

    #[test]
    fn first_press_after_clear_spawns_at_last_pointer() {
        let now = Instant::now();
        let mut field = RippleField::default();
        field.cursor_moved(Point::new(120.0, 64.0));

        // Overlay reopened without the pointer moving
        field.clear();
        assert!(field.spawn(now));
        assert_eq!(field.len(), 1);
        assert_eq!(field.snapshots(now)[0].center, Point::new(120.0, 64.0));
    }
}
