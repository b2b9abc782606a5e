//! Glass card widget
//!
//! Icon disk, title and description on a translucent surface. The card has
//! no action of its own; pressing it only plays the shrink feedback.

use iced::widget::{Space, column, container, row, svg, text};
use iced::{Alignment, Color, Element, Fill};

use super::liquid_button::{PointerEvents, pressable};
use super::scale::scaled_padding;
use crate::ui::icons;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Scale a held card shrinks to
pub const PRESSED_SCALE: f32 = 0.95;

const PADDING: f32 = 20.0;
const ICON_DISK: f32 = 50.0;

/// Static content of a card
#[derive(Debug, Clone, Copy)]
pub struct CardContent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub icon: &'static str,
    pub colors: [Color; 2],
}

/// Create a glass card element
///
/// # Arguments
/// * `content` - Title, description, icon and tint
/// * `press` - Press spring progress (0.0 to 1.0)
/// * `events` - Pointer messages for the press feedback
pub fn view<'a, Message: Clone + 'a>(
    content: CardContent<'a>,
    press: f32,
    events: PointerEvents<Message>,
) -> Element<'a, Message> {
    let scale = 1.0 + (PRESSED_SCALE - 1.0) * press;
    let (outer, inner) = scaled_padding([PADDING, PADDING], scale);
    let tint = content.colors[0];

    let icon = container(
        svg(svg::Handle::from_memory(content.icon.as_bytes()))
            .width(24)
            .height(24)
            .style(move |_theme, _status| svg::Style { color: Some(tint) }),
    )
    .center_x(ICON_DISK)
    .center_y(ICON_DISK)
    .style(move |_theme| theme::icon_disk(content.colors));

    let body = column![
        text(content.title)
            .size(17)
            .color(theme::TEXT_PRIMARY)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        text(content.description)
            .size(14)
            .color(theme::alpha(Color::WHITE, 0.7)),
    ]
    .spacing(5);

    let trailing = svg(svg::Handle::from_memory(icons::BUBBLES.as_bytes()))
        .width(12)
        .height(12)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::TEXT_MUTED),
        });

    let card = container(
        row![icon, body, Space::new().width(Fill), trailing]
            .spacing(15)
            .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(inner)
    .style(move |_theme| theme::glass_card(press));

    pressable(container(card).padding(outer), Some(events))
}
