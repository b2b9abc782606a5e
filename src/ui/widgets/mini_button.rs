//! Mini glass button for compact presets

use iced::widget::{container, text};
use iced::Element;

use super::liquid_button::{PointerEvents, pressable};
use super::scale::scaled_padding;
use crate::ui::theme;

const PRESSED_SCALE: f32 = 0.95;

/// Create a mini glass button
pub fn view<'a, Message: Clone + 'a>(
    label: String,
    hover: f32,
    press: f32,
    events: PointerEvents<Message>,
) -> Element<'a, Message> {
    let scale = 1.0 + (PRESSED_SCALE - 1.0) * press;
    let (outer, inner) = scaled_padding([6.0, 12.0], scale);

    let button = container(text(label).size(12).color(theme::TEXT_PRIMARY))
        .padding(inner)
        .style(move |_theme| theme::mini_button(hover, press));

    pressable(container(button).padding(outer), Some(events))
}
