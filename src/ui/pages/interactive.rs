//! Touch-anywhere overlay
//!
//! Covers the whole window. Every press spawns a ripple at the pointer;
//! the close button in the corner dismisses the overlay.

use iced::widget::{Space, button, column, container, mouse_area, row, stack, svg, text};
use iced::{Alignment, Element, Fill};

use super::Clock;
use crate::app::Message;
use crate::features::RippleSnapshot;
use crate::i18n::{Key, Locale};
use crate::ui::animation::prelude::presets;
use crate::ui::components::background;
use crate::ui::primitives::view_ripple_layer;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::icons;

const HAND_SIZE: f32 = 60.0;

fn close_button(locale: Locale) -> Element<'static, Message> {
    button(
        row![
            svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
                .width(16)
                .height(16)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::TEXT_PRIMARY),
                }),
            text(locale.get(Key::Close)).size(14),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .padding([8, 14])
    .style(theme::close_button)
    .on_press(Message::CloseOverlay)
    .into()
}

/// Build the overlay
pub fn view(
    locale: Locale,
    clock: Clock,
    ripples: Vec<RippleSnapshot>,
) -> Element<'static, Message> {
    let prompt = column![
        svg(svg::Handle::from_memory(icons::HAND_TAP.as_bytes()))
            .width(HAND_SIZE)
            .height(HAND_SIZE)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::alpha(iced::Color::WHITE, 0.7)),
            }),
        text(locale.get(Key::TouchAnywhere))
            .size(28)
            .color(theme::TEXT_PRIMARY)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        text(locale.get(Key::TouchSubtitle))
            .size(16)
            .color(theme::TEXT_SECONDARY),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    let content = column![
        row![Space::new().width(Fill), close_button(locale)].padding(20),
        container(prompt).center(Fill),
    ]
    .width(Fill)
    .height(Fill);

    let surface = stack![
        background::view(presets::BACKGROUND.phase(clock.ambient)),
        view_ripple_layer(ripples),
        content,
    ]
    .width(Fill)
    .height(Fill);

    mouse_area(surface)
        .on_move(Message::OverlayCursorMoved)
        .on_press(Message::OverlayPressed)
        .into()
}
