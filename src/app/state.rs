// src/app/state.rs
//! Application state definitions

use std::time::{Duration, Instant};

use crate::app::ControlId;
use crate::features::{ParticleField, ProgressState, RippleField, Settings, ToggleState};
use crate::i18n::Locale;
use crate::ui::animation::ControlAnimations;
use crate::ui::components::Tab;
use crate::ui::pages::Clock;

/// Main application state
pub struct App {
    /// Settings and locale
    pub core: CoreState,
    /// UI state (navigation, page states, animations)
    pub ui: UiState,
}

/// Loaded configuration
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
}

impl CoreState {
    pub fn new(settings: Settings, locale: Locale) -> Self {
        Self { settings, locale }
    }

    pub fn reduced_motion(&self) -> bool {
        self.settings.display.reduced_motion
    }
}

/// Home page state
#[derive(Debug, Default)]
pub struct HomePageState {
    pub particles: ParticleField,
}

/// Component gallery state
#[derive(Debug)]
pub struct GalleryState {
    pub progress: ProgressState,
    pub toggle: ToggleState,
    pub text: String,
    /// Set on first edit, cleared on submit or reset
    pub text_focused: bool,
}

impl GalleryState {
    pub fn new(settings: &Settings, now: Instant) -> Self {
        Self {
            progress: ProgressState::new(settings.demo.initial_progress, now)
                .with_duration(settings.demo.progress_duration()),
            toggle: ToggleState::new(false, now),
            text: String::new(),
            text_focused: false,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress.is_animating(now) || self.toggle.is_animating(now)
    }
}

/// Touch-anywhere overlay state
#[derive(Debug, Default)]
pub struct OverlayState {
    pub is_open: bool,
    pub ripples: RippleField,
}

/// UI state
pub struct UiState {
    pub active_tab: Tab,
    /// Latest frame time
    pub now: Instant,
    /// When ambient loops started
    pub started: Instant,
    pub home: HomePageState,
    pub gallery: GalleryState,
    pub overlay: OverlayState,
    /// Hover/press/flow feedback for every pressable control
    pub controls: ControlAnimations<ControlId>,
}

impl UiState {
    pub fn new(settings: &Settings, now: Instant) -> Self {
        Self {
            active_tab: Tab::default(),
            now,
            started: now,
            home: HomePageState::default(),
            gallery: GalleryState::new(settings, now),
            overlay: OverlayState::default(),
            controls: ControlAnimations::default(),
        }
    }

    /// Clock pages sample with; ambient time stands still under reduced motion
    pub fn clock(&self, reduced_motion: bool) -> Clock {
        let ambient = if reduced_motion {
            Duration::ZERO
        } else {
            self.now.saturating_duration_since(self.started)
        };
        Clock {
            now: self.now,
            ambient,
        }
    }

    /// Whether any transition still needs frames
    ///
    /// Ambient loops are not counted here; see `subscription_logic`.
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.home.particles.is_mounted()
            || self.gallery.is_animating(now)
            || self.overlay.ripples.is_animating(now)
            || self.controls.is_animating(now)
    }

    /// Forget pointer feedback, e.g. when the page under the pointer changes
    pub fn reset_pointer_feedback(&mut self) {
        self.controls.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_freezes_ambient_clock() {
        let start = Instant::now();
        let mut ui = UiState::new(&Settings::default(), start);
        ui.now = start + Duration::from_secs(2);

        assert_eq!(ui.clock(false).ambient, Duration::from_secs(2));
        assert_eq!(ui.clock(true).ambient, Duration::ZERO);
        assert_eq!(ui.clock(true).now, ui.now);
    }

    #[test]
    fn gallery_starts_from_settings() {
        let now = Instant::now();
        let gallery = GalleryState::new(&Settings::default(), now);
        assert_eq!(gallery.progress.target(), 0.7);
        assert!(!gallery.toggle.is_on());
        assert!(gallery.text.is_empty());
    }

    #[test]
    fn idle_state_has_no_transitions() {
        let now = Instant::now();
        let ui = UiState::new(&Settings::default(), now);
        assert!(!ui.has_active_animations(now + Duration::from_secs(5)));
    }
}
