//! Section header widget
//!
//! Displays a section title with an optional trailing caption.
//! This is a reusable widget that does not depend on application-specific types.

use iced::widget::{Space, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, SEMIBOLD_WEIGHT};

/// Create a section header element
///
/// # Arguments
/// * `title` - The section title text
/// * `caption` - Optional text aligned to the right (e.g. a percentage)
pub fn view<'a, Message: 'a>(title: &'a str, caption: Option<String>) -> Element<'a, Message> {
    let title_text = text(title)
        .size(22)
        .color(theme::TEXT_PRIMARY)
        .font(iced::Font {
            weight: SEMIBOLD_WEIGHT,
            ..Default::default()
        });

    let caption: Element<'a, Message> = match caption {
        Some(caption) => text(caption).size(12).color(theme::TEXT_SECONDARY).into(),
        None => Space::new().width(0).into(),
    };

    row![title_text, Space::new().width(Fill), caption]
        .align_y(Alignment::Center)
        .into()
}
