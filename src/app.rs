//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::time::Instant;
use iced::{Task, Theme};

use crate::features::Settings;
use crate::i18n::{Key, Language, Locale};
pub use message::{ControlId, Message, PROGRESS_PRESETS};
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));
        tracing::info!(
            "Starting with language {} (reduced motion: {})",
            locale.language.display_name(),
            settings.display.reduced_motion
        );

        // 2. Initialize sub-states
        let now = Instant::now();
        let ui = UiState::new(&settings, now);
        let core = CoreState::new(settings.clone(), locale);

        let mut app = Self { core, ui };

        // 3. Home is the first tab shown
        app.mount_particles();

        // 4. Write default settings on first run
        let init_task = Task::perform(helpers::ensure_settings_file(settings), |result| {
            Message::SettingsFileReady(result.map_err(|e| format!("{:#}", e)))
        });

        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Window title
    pub fn title(&self) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Frame subscription while anything moves
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let now = Instant::now().max(self.ui.now);

        let needs_frames = subscription_logic::needs_animation_subscription(
            !self.core.reduced_motion(),
            self.ui.has_active_animations(now),
        );

        if needs_frames {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Ambient loops run on every page, so they need frames unless frozen
    pub fn needs_animation_subscription(ambient_loops: bool, has_transitions: bool) -> bool {
        ambient_loops || has_transitions
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn ambient_loops_keep_frames_running() {
        assert!(needs_animation_subscription(true, false));
        assert!(needs_animation_subscription(true, true));
    }

    #[test]
    fn reduced_motion_still_animates_transitions() {
        // A tap on the toggle must settle even with ambient loops frozen
        assert!(needs_animation_subscription(false, true));
    }

    #[test]
    fn idle_reduced_motion_stops_frames() {
        assert!(!needs_animation_subscription(false, false));
    }
}
