//! Liquid toggle switch state
//!
//! Holds the committed boolean, the live drag offset and a small gesture
//! machine that turns raw pointer input into taps and drags:
//!
//! ```text
//! Idle --press--> Pressed --move > slop--> Dragging
//!   ^               |                         |
//!   +----release----+ (tap)     release ------+ (drag end)
//! ```
//!
//! The knob position is driven by a settle spring so that every committed
//! flip, including rapid repeated taps, animates from wherever the knob is.

use std::time::Instant;

use crate::ui::animation::{Spring, SpringParams};

/// Logical track width
pub const TRACK_WIDTH: f32 = 60.0;
/// Logical track height
pub const TRACK_HEIGHT: f32 = 32.0;
/// Knob diameter
pub const KNOB_SIZE: f32 = 24.0;
/// Pointer travel that turns a press into a drag
pub const DRAG_SLOP: f32 = 2.0;
/// Fraction of the drag offset applied to the knob while dragging
const DRAG_FOLLOW: f32 = 0.5;

/// Gesture recogniser phase
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// Pointer is down but has not moved past the slop
    Pressed { origin: f32 },
    /// Pointer is dragging the knob
    Dragging { origin: f32 },
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleSnapshot {
    pub is_on: bool,
    pub is_dragging: bool,
    pub drag_offset: f32,
    /// Knob center offset from the track center
    pub knob_offset: f32,
    /// 0.0 = fully off, 1.0 = fully on (follows the settle spring)
    pub on_amount: f32,
    pub track_width: f32,
    pub knob_size: f32,
}

/// Toggle switch state
#[derive(Debug, Clone)]
pub struct ToggleState {
    is_on: bool,
    drag_offset: f32,
    is_dragging: bool,
    track_width: f32,
    knob_size: f32,
    gesture: GesturePhase,
    settle: Spring,
}

impl ToggleState {
    pub fn new(is_on: bool, now: Instant) -> Self {
        Self::with_track_width(is_on, TRACK_WIDTH, now)
    }

    /// Toggle with a custom logical track width (drag threshold follows it)
    pub fn with_track_width(is_on: bool, width: f32, now: Instant) -> Self {
        Self {
            is_on,
            drag_offset: 0.0,
            is_dragging: false,
            track_width: width.max(KNOB_SIZE),
            knob_size: KNOB_SIZE,
            gesture: GesturePhase::Idle,
            settle: Spring::new(Self::rest_position(is_on), SpringParams::settle(), now),
        }
    }

    fn rest_position(is_on: bool) -> f64 {
        if is_on { 1.0 } else { 0.0 }
    }

    fn settle_to_value(&mut self, now: Instant) {
        self.settle.set_target(Self::rest_position(self.is_on), now);
    }

    /// Drag distance a gesture must exceed to commit
    pub fn threshold(&self) -> f32 {
        self.track_width / 4.0
    }

    /// Flip unconditionally
    pub fn on_tap(&mut self, now: Instant) {
        self.is_on = !self.is_on;
        self.settle_to_value(now);
        tracing::debug!("Toggle tapped -> {}", self.is_on);
    }

    /// Live drag update; the offset is not clamped
    pub fn on_drag_change(&mut self, delta_x: f32) {
        self.drag_offset = delta_x;
        self.is_dragging = true;
    }

    /// Finish a drag, committing if it travelled past the threshold
    pub fn on_drag_end(&mut self, delta_x: f32, now: Instant) {
        self.is_dragging = false;
        self.drag_offset = 0.0;

        if delta_x.abs() > self.threshold() {
            let next = delta_x > 0.0;
            if next != self.is_on {
                self.is_on = next;
                self.settle_to_value(now);
            }
            tracing::debug!("Toggle drag committed ({:.1}px) -> {}", delta_x, self.is_on);
        }
    }

    /// Set the value programmatically (animated)
    pub fn set(&mut self, is_on: bool, now: Instant) {
        self.gesture = GesturePhase::Idle;
        self.is_dragging = false;
        self.drag_offset = 0.0;
        if self.is_on != is_on {
            self.is_on = is_on;
            self.settle_to_value(now);
        }
    }

    // ========== Gesture machine ==========

    pub fn pointer_pressed(&mut self, x: f32) {
        self.gesture = GesturePhase::Pressed { origin: x };
    }

    pub fn pointer_moved(&mut self, x: f32) {
        match self.gesture {
            GesturePhase::Idle => {}
            GesturePhase::Pressed { origin } => {
                if (x - origin).abs() > DRAG_SLOP {
                    self.gesture = GesturePhase::Dragging { origin };
                    self.on_drag_change(x - origin);
                }
            }
            GesturePhase::Dragging { origin } => self.on_drag_change(x - origin),
        }
    }

    pub fn pointer_released(&mut self, x: f32, now: Instant) {
        match std::mem::take(&mut self.gesture) {
            GesturePhase::Idle => {}
            GesturePhase::Pressed { .. } => self.on_tap(now),
            GesturePhase::Dragging { origin } => self.on_drag_end(x - origin, now),
        }
    }

    /// Pointer lost (left the window, capture broken): reset without committing
    pub fn pointer_cancelled(&mut self) {
        self.gesture = GesturePhase::Idle;
        self.is_dragging = false;
        self.drag_offset = 0.0;
    }

    // ========== Rendering ==========

    /// Distance from track center to either knob rest position
    pub fn knob_travel(&self) -> f32 {
        (self.track_width - self.knob_size) / 2.0
    }

    /// Knob center offset from the track center at `now`
    pub fn knob_offset(&self, now: Instant) -> f32 {
        let travel = self.knob_travel();
        let base = -travel + 2.0 * travel * self.settle.position_at(now) as f32;
        if self.is_dragging {
            base + self.drag_offset * DRAG_FOLLOW
        } else {
            base
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_dragging || !self.settle.is_settled(now)
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn gesture(&self) -> GesturePhase {
        self.gesture
    }

    pub fn snapshot(&self, now: Instant) -> ToggleSnapshot {
        ToggleSnapshot {
            is_on: self.is_on,
            is_dragging: self.is_dragging,
            drag_offset: self.drag_offset,
            knob_offset: self.knob_offset(now),
            on_amount: (self.settle.position_at(now) as f32).clamp(0.0, 1.0),
            track_width: self.track_width,
            knob_size: self.knob_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn later(now: Instant, millis: u64) -> Instant {
        now + Duration::from_millis(millis)
    }

    #[test]
    fn drag_past_quarter_width_commits() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);
        assert_eq!(toggle.threshold(), 15.0);

        toggle.on_drag_end(20.0, now);
        assert!(toggle.is_on());
    }

    #[test]
    fn threshold_follows_track_width() {
        let now = Instant::now();
        let mut toggle = ToggleState::with_track_width(false, 100.0, now);
        assert_eq!(toggle.threshold(), 25.0);
        assert_eq!(toggle.snapshot(now).track_width, 100.0);

        // Would commit on the default track, not on the wider one
        toggle.on_drag_end(20.0, now);
        assert!(!toggle.is_on());

        toggle.on_drag_end(30.0, now);
        assert!(toggle.is_on());

        // Narrower than the knob is widened to fit it
        let narrow = ToggleState::with_track_width(false, 10.0, now);
        assert_eq!(narrow.threshold(), KNOB_SIZE / 4.0);
    }

    #[test]
    fn short_drag_leaves_value_unchanged() {
        let now = Instant::now();
        let mut off = ToggleState::new(false, now);
        off.on_drag_end(10.0, now);
        assert!(!off.is_on());

        let mut on = ToggleState::new(true, now);
        on.on_drag_end(-10.0, now);
        assert!(on.is_on());

        // Exactly on the threshold does not commit
        off.on_drag_end(15.0, now);
        assert!(!off.is_on());
    }

    #[test]
    fn drag_direction_decides_value() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(true, now);
        toggle.on_drag_end(-20.0, now);
        assert!(!toggle.is_on());

        // Dragging further off keeps it off
        toggle.on_drag_end(-40.0, now);
        assert!(!toggle.is_on());
    }

    #[test]
    fn tap_is_its_own_inverse() {
        let now = Instant::now();
        for initial in [false, true] {
            let mut toggle = ToggleState::new(initial, now);
            toggle.on_tap(now);
            assert_eq!(toggle.is_on(), !initial);
            toggle.on_tap(later(now, 16));
            assert_eq!(toggle.is_on(), initial);
        }
    }

    #[test]
    fn rapid_taps_each_flip_during_settle() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);
        for i in 0..5 {
            toggle.on_tap(later(now, i * 30));
        }
        assert!(toggle.is_on());
        assert!(toggle.is_animating(later(now, 150)));
    }

    #[test]
    fn drag_offset_is_zero_when_not_dragging() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);

        toggle.on_drag_change(42.0);
        assert!(toggle.is_dragging());
        assert_eq!(toggle.drag_offset(), 42.0);

        toggle.on_drag_end(42.0, now);
        assert!(!toggle.is_dragging());
        assert_eq!(toggle.drag_offset(), 0.0);

        toggle.on_drag_change(-80.0);
        toggle.pointer_cancelled();
        assert!(!toggle.is_dragging());
        assert_eq!(toggle.drag_offset(), 0.0);
    }

    #[test]
    fn drag_offset_is_not_clamped() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);
        toggle.on_drag_change(500.0);
        assert_eq!(toggle.drag_offset(), 500.0);
    }

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);

        toggle.pointer_pressed(30.0);
        toggle.pointer_moved(31.0);
        assert!(!toggle.is_dragging());
        toggle.pointer_released(31.0, now);

        assert!(toggle.is_on());
        assert_eq!(toggle.gesture(), GesturePhase::Idle);
    }

    #[test]
    fn press_move_release_is_a_drag() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);

        toggle.pointer_pressed(10.0);
        toggle.pointer_moved(20.0);
        assert!(toggle.is_dragging());
        assert_eq!(toggle.drag_offset(), 10.0);

        toggle.pointer_moved(32.0);
        assert_eq!(toggle.drag_offset(), 22.0);

        toggle.pointer_released(32.0, now);
        assert!(toggle.is_on());
        assert!(!toggle.is_dragging());
    }

    #[test]
    fn short_drag_gesture_does_not_flip() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);

        toggle.pointer_pressed(10.0);
        toggle.pointer_moved(18.0);
        toggle.pointer_released(18.0, now);

        assert!(!toggle.is_on());
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);
        toggle.pointer_moved(50.0);
        toggle.pointer_released(50.0, now);
        assert!(!toggle.is_on());
        assert!(!toggle.is_dragging());
    }

    #[test]
    fn knob_settles_at_track_ends() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);
        let travel = toggle.knob_travel();
        assert_eq!(travel, 18.0);
        assert!((toggle.knob_offset(now) + travel).abs() < 1e-4);

        toggle.on_tap(now);
        let settled = later(now, 3000);
        assert!((toggle.knob_offset(settled) - travel).abs() < 0.05);
        assert!(!toggle.is_animating(settled));
        assert!((toggle.snapshot(settled).on_amount - 1.0).abs() < 0.01);
    }

    #[test]
    fn knob_follows_half_the_drag() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(false, now);
        toggle.on_drag_change(10.0);
        let offset = toggle.knob_offset(now);
        assert!((offset - (-18.0 + 5.0)).abs() < 1e-4);
    }

    #[test]
    fn set_is_animated_and_idempotent() {
        let now = Instant::now();
        let mut toggle = ToggleState::new(true, now);
        toggle.set(true, now);
        assert!(!toggle.is_animating(now));

        toggle.set(false, now);
        assert!(!toggle.is_on());
        assert!(toggle.is_animating(later(now, 50)));
    }
}
