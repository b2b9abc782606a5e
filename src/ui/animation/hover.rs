//! Pointer feedback animations using iced_anim
//!
//! Only one control can be under the pointer (or held down) at a time, so
//! each tracker keeps just the active key plus the key that is fading out.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::spring::Motion;
use iced_anim::transition::Easing;

use super::{Curve, Tween};

/// Hover fade duration (200ms for snappy feel)
const HOVER_DURATION: Duration = Duration::from_millis(200);

/// Liquid flow burst after a click
const FLOW_DURATION: Duration = Duration::from_millis(600);

/// How a tracker animates between 0 and 1
#[derive(Debug, Clone)]
enum Flavor {
    Transition(Easing),
    Spring(Motion),
}

impl Flavor {
    fn animated(&self, value: f32) -> Animated<f32> {
        match self {
            Flavor::Transition(easing) => Animated::transition(value, easing.clone()),
            Flavor::Spring(motion) => Animated::spring(value, motion.clone()),
        }
    }
}

/// Exclusive 0 -> 1 animation keyed by control
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    flavor: Flavor,
    /// Currently active key
    active_key: Option<K>,
    active_anim: Animated<f32>,
    /// Previously active key (animating back to 0)
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    /// Ease-out transitions, used for hover highlights
    pub fn new() -> Self {
        Self::with_flavor(Flavor::Transition(
            Easing::EASE_OUT.with_duration(HOVER_DURATION),
        ))
    }

    /// Spring-driven tracker, used for press feedback
    pub fn spring(motion: Motion) -> Self {
        Self::with_flavor(Flavor::Spring(motion))
    }

    fn with_flavor(flavor: Flavor) -> Self {
        Self {
            active_key: None,
            active_anim: flavor.animated(0.0),
            fading_key: None,
            fading_anim: flavor.animated(0.0),
            flavor,
        }
    }

    /// Make `key` the single active item; `None` releases the current one
    pub fn set_active(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        if let Some(old) = self.active_key.take() {
            let current = *self.active_anim.value();
            self.fading_key = Some(old);
            self.fading_anim = self.flavor.animated(current);
            self.fading_anim.update(0.0.into());
        }

        if let Some(new_key) = key {
            // Re-entering the fading item resumes from its current value
            let start = if self.fading_key.as_ref() == Some(&new_key) {
                self.fading_key = None;
                *self.fading_anim.value()
            } else {
                0.0
            };
            self.active_key = Some(new_key);
            self.active_anim = self.flavor.animated(start);
            self.active_anim.update(1.0.into());
        }
    }

    /// Interpolated value for a key (0.0 to 1.0)
    pub fn progress(&self, key: &K) -> f32 {
        let value = if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        };
        value.clamp(0.0, 1.0)
    }

    /// Raw value for a key; springs may overshoot [0, 1]
    pub fn raw(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    pub fn active(&self) -> Option<&K> {
        self.active_key.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Drop the fading key once it has come to rest
    pub fn cleanup_completed(&mut self) {
        if self.fading_key.is_some()
            && !self.fading_anim.is_animating()
            && self.fading_anim.value().abs() < 0.01
        {
            self.fading_key = None;
        }
    }

    pub fn clear(&mut self) {
        self.active_key = None;
        self.fading_key = None;
        self.active_anim = self.flavor.animated(0.0);
        self.fading_anim = self.flavor.animated(0.0);
    }

    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
    }
}

/// Pointer feedback for every interactive control on screen
#[derive(Debug)]
pub struct ControlAnimations<K: Eq + Hash + Clone> {
    pub hover: HoverAnimations<K>,
    pub press: HoverAnimations<K>,
    /// Click burst: the control and its 0 -> 1 flow
    flow: Option<(K, Tween)>,
}

impl<K: Eq + Hash + Clone> Default for ControlAnimations<K> {
    fn default() -> Self {
        Self {
            hover: HoverAnimations::new(),
            press: HoverAnimations::spring(Motion::SNAPPY),
            flow: None,
        }
    }
}

impl<K: Eq + Hash + Clone> ControlAnimations<K> {
    pub fn hovered(&mut self, key: Option<K>) {
        self.hover.set_active(key);
    }

    pub fn pressed(&mut self, key: K) {
        self.press.set_active(Some(key));
    }

    /// Release the held control; returns it if the release completes a click
    pub fn released(&mut self, key: &K, now: Instant) -> bool {
        if !self.press.is_active(key) {
            return false;
        }
        self.press.set_active(None);
        self.flow = Some((
            key.clone(),
            Tween::new(0.0, 1.0, now, FLOW_DURATION, Curve::EaseOut),
        ));
        true
    }

    /// Pointer left without releasing: cancel the press without a click
    pub fn cancel_press(&mut self) {
        self.press.set_active(None);
    }

    /// Flow burst progress for a control; 0 once the burst has finished
    pub fn flow(&self, key: &K, now: Instant) -> f32 {
        match &self.flow {
            Some((flowing, tween)) if flowing == key && !tween.is_finished(now) => {
                tween.value_at(now)
            }
            _ => 0.0,
        }
    }

    /// Visual scale: pressed shrinks, hovered grows slightly
    pub fn scale(&self, key: &K, pressed_scale: f32, hovered_scale: f32) -> f32 {
        let pressed = self.press.raw(key);
        let hovered = self.hover.progress(key);
        let base = 1.0 + (hovered_scale - 1.0) * hovered;
        base + (pressed_scale - base) * pressed
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.hover.is_animating()
            || self.press.is_animating()
            || self
                .flow
                .as_ref()
                .is_some_and(|(_, tween)| !tween.is_finished(now))
    }

    pub fn tick(&mut self, now: Instant) {
        self.hover.tick(now);
        self.press.tick(now);
        self.hover.cleanup_completed();
        self.press.cleanup_completed();
        if self
            .flow
            .as_ref()
            .is_some_and(|(_, tween)| tween.is_finished(now))
        {
            self.flow = None;
        }
    }

    pub fn clear(&mut self) {
        self.hover.clear();
        self.press.clear();
        self.flow = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_activation() {
        let mut anims: HoverAnimations<u8> = HoverAnimations::new();
        assert_eq!(anims.progress(&1), 0.0);

        anims.set_active(Some(1));
        assert!(anims.is_active(&1));

        anims.set_active(Some(2));
        assert!(anims.is_active(&2));
        assert!(!anims.is_active(&1));

        anims.set_active(None);
        assert!(anims.active().is_none());
    }

    #[test]
    fn test_progress_range() {
        let mut anims: HoverAnimations<u8> = HoverAnimations::spring(Motion::BOUNCY);
        anims.set_active(Some(1));
        assert!((0.0..=1.0).contains(&anims.progress(&1)));
        assert!((0.0..=1.0).contains(&anims.progress(&9)));
    }

    #[test]
    fn test_release_completes_click_only_when_pressed() {
        let now = Instant::now();
        let mut controls: ControlAnimations<u8> = ControlAnimations::default();

        assert!(!controls.released(&3, now));

        controls.pressed(3);
        assert!(controls.released(&3, now));
        assert!(controls.flow(&3, now + Duration::from_millis(300)) > 0.0);
        assert_eq!(controls.flow(&3, now + Duration::from_millis(700)), 0.0);
        assert_eq!(controls.flow(&4, now + Duration::from_millis(300)), 0.0);
    }

    #[test]
    fn test_cancelled_press_has_no_flow() {
        let now = Instant::now();
        let mut controls: ControlAnimations<u8> = ControlAnimations::default();
        controls.pressed(1);
        controls.cancel_press();
        assert!(!controls.released(&1, now));
        assert_eq!(controls.flow(&1, now), 0.0);
    }

    #[test]
    fn test_scale_at_rest_is_identity() {
        let controls: ControlAnimations<u8> = ControlAnimations::default();
        assert_eq!(controls.scale(&1, 0.95, 1.02), 1.0);
    }
}
