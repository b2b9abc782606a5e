//! Floating particle motion
//!
//! Each particle waits a random delay after mount, then drifts forever:
//! every time a leg of motion finishes, a new random target and duration are
//! drawn and the next leg starts from where the previous one ended. Position
//! and opacity run as independent legs, the opacity leg being 0.7x as long as
//! the current position cycle.
//!
//! Unmounting cancels the pending delay and any legs in flight; an unmounted
//! particle ignores every later tick.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::ui::animation::{Curve, Tween};

/// Horizontal drift target range (logical px)
pub const OFFSET_X: RangeInclusive<f32> = -100.0..=100.0;
/// Vertical drift target range (logical px)
pub const OFFSET_Y: RangeInclusive<f32> = -150.0..=150.0;
/// Opacity target range
pub const OPACITY: RangeInclusive<f32> = 0.1..=0.6;
/// Position cycle duration range (seconds)
pub const CYCLE_SECS: RangeInclusive<f32> = 3.0..=6.0;
/// Start delay range after mount (seconds)
pub const START_DELAY_SECS: RangeInclusive<f32> = 0.0..=2.0;
/// Particle diameter range (logical px)
pub const SIZE: RangeInclusive<f32> = 20.0..=40.0;
/// Opacity leg length relative to the position cycle
pub const OPACITY_LEG_FACTOR: f32 = 0.7;
/// Opacity before the first cycle starts
pub const INITIAL_OPACITY: f32 = 0.3;
/// Upper bound on legs replayed in a single tick after a stall
const MAX_CATCH_UP_LEGS: usize = 16;

/// Fixed hue family of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    /// Primary (blue)
    A,
    /// Secondary (purple)
    B,
    /// Tertiary (cyan)
    C,
}

impl ColorClass {
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => ColorClass::A,
            1 => ColorClass::B,
            _ => ColorClass::C,
        }
    }
}

/// Position leg: x and y share start and duration
#[derive(Debug, Clone, Copy, PartialEq)]
struct PositionLeg {
    x: Tween,
    y: Tween,
}

impl PositionLeg {
    fn value_at(&self, now: Instant) -> (f32, f32) {
        (self.x.value_at(now), self.y.value_at(now))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Waiting for the start delay to elapse
    Pending { start_at: Instant },
    Cycling {
        position: PositionLeg,
        opacity: Tween,
    },
    /// Torn down; no further mutation
    Unmounted,
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSnapshot {
    pub index: usize,
    pub color_class: ColorClass,
    pub size: f32,
    pub offset: (f32, f32),
    pub opacity: f32,
}

/// Motion state of one particle
#[derive(Debug, Clone)]
pub struct ParticleMotion {
    index: usize,
    color_class: ColorClass,
    size: f32,
    offset_target: (f32, f32),
    opacity_target: f32,
    cycle_duration: Duration,
    phase: Phase,
    revision: u64,
}

impl ParticleMotion {
    /// Create a particle whose motion begins after a random delay
    pub fn mount<R: Rng + ?Sized>(index: usize, now: Instant, rng: &mut R) -> Self {
        let delay = rng.random_range(START_DELAY_SECS);
        let size = rng.random_range(SIZE);
        Self {
            index,
            color_class: ColorClass::from_index(index),
            size,
            offset_target: (0.0, 0.0),
            opacity_target: INITIAL_OPACITY,
            cycle_duration: Duration::ZERO,
            phase: Phase::Pending {
                start_at: now + Duration::from_secs_f32(delay),
            },
            revision: 0,
        }
    }

    fn position_leg<R: Rng + ?Sized>(
        &mut self,
        from: (f32, f32),
        start: Instant,
        rng: &mut R,
    ) -> PositionLeg {
        self.offset_target = (rng.random_range(OFFSET_X), rng.random_range(OFFSET_Y));
        self.cycle_duration = Duration::from_secs_f32(rng.random_range(CYCLE_SECS));
        PositionLeg {
            x: Tween::new(
                from.0,
                self.offset_target.0,
                start,
                self.cycle_duration,
                Curve::EaseInOut,
            ),
            y: Tween::new(
                from.1,
                self.offset_target.1,
                start,
                self.cycle_duration,
                Curve::EaseInOut,
            ),
        }
    }

    fn opacity_leg<R: Rng + ?Sized>(&mut self, from: f32, start: Instant, rng: &mut R) -> Tween {
        self.opacity_target = rng.random_range(OPACITY);
        Tween::new(
            from,
            self.opacity_target,
            start,
            self.cycle_duration.mul_f32(OPACITY_LEG_FACTOR),
            Curve::EaseInOut,
        )
    }

    /// Advance the cycle; draws new targets whenever a leg has finished
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        match self.phase {
            Phase::Unmounted => {}
            Phase::Pending { start_at } => {
                if now < start_at {
                    return;
                }
                let position = self.position_leg((0.0, 0.0), start_at, rng);
                let opacity = self.opacity_leg(INITIAL_OPACITY, start_at, rng);
                self.phase = Phase::Cycling { position, opacity };
                self.revision += 1;
                // The first legs may already be over after a long stall
                self.tick(now, rng);
            }
            Phase::Cycling {
                mut position,
                mut opacity,
            } => {
                let mut changed = false;

                for _ in 0..MAX_CATCH_UP_LEGS {
                    if !position.x.is_finished(now) {
                        break;
                    }
                    let from = (position.x.to(), position.y.to());
                    position = self.position_leg(from, position.x.end(), rng);
                    changed = true;
                }
                if position.x.is_finished(now) {
                    let from = (position.x.to(), position.y.to());
                    position = self.position_leg(from, now, rng);
                }

                for _ in 0..MAX_CATCH_UP_LEGS {
                    if !opacity.is_finished(now) {
                        break;
                    }
                    opacity = self.opacity_leg(opacity.to(), opacity.end(), rng);
                    changed = true;
                }
                if opacity.is_finished(now) {
                    opacity = self.opacity_leg(opacity.to(), now, rng);
                }

                if changed {
                    self.phase = Phase::Cycling { position, opacity };
                    self.revision += 1;
                }
            }
        }
    }

    /// Cancel the start delay and any motion in flight
    pub fn unmount(&mut self) {
        if self.phase != Phase::Unmounted {
            self.phase = Phase::Unmounted;
            self.revision += 1;
        }
    }

    /// Current offset and opacity; `None` once unmounted
    pub fn snapshot(&self, now: Instant) -> Option<ParticleSnapshot> {
        let (offset, opacity) = match &self.phase {
            Phase::Unmounted => return None,
            Phase::Pending { .. } => ((0.0, 0.0), INITIAL_OPACITY),
            Phase::Cycling { position, opacity } => {
                (position.value_at(now), opacity.value_at(now))
            }
        };
        Some(ParticleSnapshot {
            index: self.index,
            color_class: self.color_class,
            size: self.size,
            offset,
            opacity,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn color_class(&self) -> ColorClass {
        self.color_class
    }

    pub fn offset_target(&self) -> (f32, f32) {
        self.offset_target
    }

    pub fn opacity_target(&self) -> f32 {
        self.opacity_target
    }

    pub fn cycle_duration(&self) -> Duration {
        self.cycle_duration
    }

    /// Incremented on every state mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    pub fn is_cycling(&self) -> bool {
        matches!(self.phase, Phase::Cycling { .. })
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Unmounted
    }
}

/// All particles floating over one page
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<ParticleMotion>,
}

impl ParticleField {
    /// Mount `count` particles; a mounted field is remounted from scratch
    pub fn mount<R: Rng + ?Sized>(&mut self, count: usize, now: Instant, rng: &mut R) {
        self.unmount();
        self.particles = (0..count)
            .map(|index| ParticleMotion::mount(index, now, rng))
            .collect();
        tracing::debug!("Mounted {} particles", count);
    }

    /// Cancel every particle and drop them
    pub fn unmount(&mut self) {
        if self.particles.is_empty() {
            return;
        }
        for particle in &mut self.particles {
            particle.unmount();
        }
        tracing::debug!("Unmounted {} particles", self.particles.len());
        self.particles.clear();
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        for particle in &mut self.particles {
            particle.tick(now, rng);
        }
    }

    pub fn snapshots(&self, now: Instant) -> Vec<ParticleSnapshot> {
        self.particles
            .iter()
            .filter_map(|particle| particle.snapshot(now))
            .collect()
    }

    pub fn is_mounted(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn secs(now: Instant, secs: f32) -> Instant {
        now + Duration::from_secs_f32(secs)
    }

    #[test]
    fn color_class_follows_index_mod_three() {
        let now = Instant::now();
        let mut rng = rng();
        assert_eq!(ParticleMotion::mount(0, now, &mut rng).color_class(), ColorClass::A);
        assert_eq!(ParticleMotion::mount(4, now, &mut rng).color_class(), ColorClass::B);
        assert_eq!(ParticleMotion::mount(5, now, &mut rng).color_class(), ColorClass::C);
        assert_eq!(ColorClass::from_index(3), ColorClass::A);
    }

    #[test]
    fn starts_pending_and_begins_after_delay() {
        let now = Instant::now();
        let mut rng = rng();
        let mut particle = ParticleMotion::mount(1, now, &mut rng);
        assert!(particle.is_pending());

        let snapshot = particle.snapshot(now).expect("mounted");
        assert_eq!(snapshot.offset, (0.0, 0.0));
        assert_eq!(snapshot.opacity, INITIAL_OPACITY);
        assert!(SIZE.contains(&snapshot.size));

        // The delay never exceeds two seconds
        particle.tick(secs(now, 2.01), &mut rng);
        assert!(particle.is_cycling());
    }

    #[test]
    fn drawn_targets_stay_in_range() {
        let now = Instant::now();
        let mut rng = rng();
        let mut particle = ParticleMotion::mount(2, now, &mut rng);

        for step in 1..=400 {
            particle.tick(secs(now, step as f32 * 0.25), &mut rng);
            // Targets are only drawn once the start delay has passed
            if !particle.is_cycling() {
                assert!(step <= 8, "still pending after the longest delay");
                continue;
            }
            let (x, y) = particle.offset_target();
            assert!(OFFSET_X.contains(&x));
            assert!(OFFSET_Y.contains(&y));
            assert!(OPACITY.contains(&particle.opacity_target()));
            assert!(CYCLE_SECS.contains(&particle.cycle_duration().as_secs_f32()));

            let snapshot = particle.snapshot(secs(now, step as f32 * 0.25)).unwrap();
            assert!(snapshot.opacity >= 0.1 - 1e-4 && snapshot.opacity <= 0.6 + 1e-4);
        }
    }

    #[test]
    fn new_cycle_continues_from_current_position() {
        let now = Instant::now();
        let mut rng = rng();
        let mut particle = ParticleMotion::mount(0, now, &mut rng);

        // Find the start instant to within a millisecond
        let mut started = now;
        for millis in 0..=2000 {
            started = now + Duration::from_millis(millis);
            particle.tick(started, &mut rng);
            if particle.is_cycling() {
                break;
            }
        }

        let first_target = particle.offset_target();
        let boundary = started + particle.cycle_duration() + Duration::from_millis(1);
        let before = particle.revision();

        particle.tick(boundary, &mut rng);
        assert!(particle.revision() > before);
        assert_ne!(particle.offset_target(), first_target);

        let position = particle.snapshot(boundary).unwrap().offset;
        assert!((position.0 - first_target.0).abs() < 1.0);
        assert!((position.1 - first_target.1).abs() < 1.0);
    }

    #[test]
    fn unmount_before_delay_stops_all_mutation() {
        let now = Instant::now();
        let mut rng = rng();
        let mut particle = ParticleMotion::mount(3, now, &mut rng);
        particle.unmount();
        let revision = particle.revision();

        for step in 0..100 {
            particle.tick(secs(now, step as f32 * 0.1), &mut rng);
        }

        assert_eq!(particle.revision(), revision);
        assert!(!particle.is_mounted());
        assert!(particle.snapshot(secs(now, 5.0)).is_none());
    }

    #[test]
    fn unmount_mid_cycle_stops_all_mutation() {
        let now = Instant::now();
        let mut rng = rng();
        let mut particle = ParticleMotion::mount(1, now, &mut rng);
        particle.tick(secs(now, 3.0), &mut rng);
        assert!(particle.is_cycling());

        particle.unmount();
        let revision = particle.revision();
        particle.tick(secs(now, 60.0), &mut rng);
        assert_eq!(particle.revision(), revision);
    }

    #[test]
    fn long_stall_catches_up_without_stopping() {
        let now = Instant::now();
        let mut rng = rng();
        let mut particle = ParticleMotion::mount(0, now, &mut rng);
        let late = secs(now, 3600.0);
        particle.tick(late, &mut rng);
        assert!(particle.is_cycling());

        // Motion is still in flight after the stall
        let a = particle.snapshot(late).unwrap();
        let b = particle.snapshot(secs(now, 3601.0)).unwrap();
        assert_ne!(a.offset, b.offset);
    }

    #[test]
    fn field_mounts_and_unmounts() {
        let now = Instant::now();
        let mut rng = rng();
        let mut field = ParticleField::default();

        field.mount(6, now, &mut rng);
        assert_eq!(field.len(), 6);
        assert_eq!(field.snapshots(now).len(), 6);

        field.unmount();
        assert!(!field.is_mounted());
        field.tick(secs(now, 10.0), &mut rng);
        assert!(field.snapshots(secs(now, 10.0)).is_empty());
    }
}
