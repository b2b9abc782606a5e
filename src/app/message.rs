//! Application messages

use std::path::PathBuf;
use std::time::Instant;

use iced::Point;

use crate::ui::components::Tab;
use crate::ui::primitives::ToggleInput;

/// Progress values offered by the preset buttons
pub const PROGRESS_PRESETS: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

/// Pressable controls that carry pointer feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    ViewDemo,
    ExperienceDemo,
    ResetDemo,
    /// Index into `PROGRESS_PRESETS`
    ProgressPreset(usize),
    HomeCard(usize),
    GalleryCard(usize),
}

impl ControlId {
    /// Message a completed click on this control triggers
    pub fn action(&self) -> Option<Message> {
        match self {
            ControlId::ViewDemo => Some(Message::SelectTab(Tab::Demo)),
            ControlId::ExperienceDemo => Some(Message::OpenOverlay),
            ControlId::ResetDemo => Some(Message::ResetGallery),
            ControlId::ProgressPreset(index) => PROGRESS_PRESETS
                .get(*index)
                .map(|value| Message::SetProgress(*value)),
            // Cards only play their press feedback
            ControlId::HomeCard(_) | ControlId::GalleryCard(_) => None,
        }
    }
}

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception
    Noop,

    // ============ Navigation ============
    /// Tab bar selection
    SelectTab(Tab),
    /// Show the touch-anywhere overlay
    OpenOverlay,
    /// Dismiss the overlay and drop its ripples
    CloseOverlay,

    // ============ Animation ============
    /// Window frame; drives every time-sampled animation
    AnimationTick(Instant),

    // ============ Gallery ============
    /// Animate the progress bar toward a value
    SetProgress(f32),
    /// Toggle off, progress to zero, text cleared
    ResetGallery,
    /// Raw pointer input from the liquid toggle
    TogglePointer(ToggleInput),
    TextChanged(String),
    TextCleared,
    TextSubmitted,

    // ============ Pointer feedback ============
    ControlEntered(ControlId),
    ControlExited(ControlId),
    ControlPressed(ControlId),
    ControlReleased(ControlId),

    // ============ Interactive overlay ============
    OverlayCursorMoved(Point),
    OverlayPressed,

    // ============ Settings ============
    /// First-run settings write finished (path written, if any)
    SettingsFileReady(Result<Option<PathBuf>, String>),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use a macro to reduce boilerplate for simple variants
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick(_) => simple!("AnimationTick"),
            Self::OverlayCursorMoved(_) => simple!("OverlayCursorMoved"),
            Self::TogglePointer(input) => simple!("TogglePointer", "{:?}", input),
            Self::Noop => simple!("Noop"),

            Self::SelectTab(tab) => simple!("SelectTab", "{:?}", tab),
            Self::OpenOverlay => simple!("OpenOverlay"),
            Self::CloseOverlay => simple!("CloseOverlay"),
            Self::SetProgress(value) => simple!("SetProgress", "{:.2}", value),
            Self::ResetGallery => simple!("ResetGallery"),

            // Text content is user input - only show length
            Self::TextChanged(text) => simple!("TextChanged", "{} chars", text.chars().count()),
            Self::TextCleared => simple!("TextCleared"),
            Self::TextSubmitted => simple!("TextSubmitted"),

            Self::ControlEntered(id) => simple!("ControlEntered", "{:?}", id),
            Self::ControlExited(id) => simple!("ControlExited", "{:?}", id),
            Self::ControlPressed(id) => simple!("ControlPressed", "{:?}", id),
            Self::ControlReleased(id) => simple!("ControlReleased", "{:?}", id),
            Self::OverlayPressed => simple!("OverlayPressed"),

            Self::SettingsFileReady(result) => simple!("SettingsFileReady", "{:?}", result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_map_to_progress_targets() {
        for (index, value) in PROGRESS_PRESETS.iter().enumerate() {
            match ControlId::ProgressPreset(index).action() {
                Some(Message::SetProgress(target)) => assert_eq!(target, *value),
                other => panic!("unexpected action {:?}", other),
            }
        }
        assert!(ControlId::ProgressPreset(9).action().is_none());
    }

    #[test]
    fn cards_have_no_action() {
        assert!(ControlId::HomeCard(0).action().is_none());
        assert!(ControlId::GalleryCard(2).action().is_none());
    }

    #[test]
    fn debug_hides_text_content() {
        let message = Message::TextChanged("secret".to_string());
        assert_eq!(format!("{:?}", message), "TextChanged(6 chars)");
    }
}
