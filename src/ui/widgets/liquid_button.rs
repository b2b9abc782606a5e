//! Liquid button widget
//!
//! Gradient glass button with an icon and label. Press/hover/flow amounts
//! come from the caller's animation state; the widget only reports pointer
//! events. A click is a press followed by a release on the same button.

use iced::widget::{container, mouse_area, row, svg, text};
use iced::{Alignment, Element, mouse};

use super::scale::scaled_padding;
use crate::ui::theme::{self, ButtonSize, ButtonStyle, ButtonVisual, SEMIBOLD_WEIGHT};

/// Pointer messages a pressable control emits
#[derive(Debug, Clone)]
pub struct PointerEvents<Message> {
    pub enter: Message,
    pub exit: Message,
    pub press: Message,
    pub release: Message,
}

/// Animated inputs for one button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonAnimation {
    pub hover: f32,
    pub press: f32,
    pub flow: f32,
    /// Combined press/hover/pulse scale
    pub scale: f32,
}

impl Default for ButtonAnimation {
    fn default() -> Self {
        Self {
            hover: 0.0,
            press: 0.0,
            flow: 0.0,
            scale: 1.0,
        }
    }
}

/// Wrap `content` in a mouse area wired to `events`
pub(super) fn pressable<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    events: Option<PointerEvents<Message>>,
) -> Element<'a, Message> {
    match events {
        Some(events) => mouse_area(content)
            .on_enter(events.enter)
            .on_exit(events.exit)
            .on_press(events.press)
            .on_release(events.release)
            .interaction(mouse::Interaction::Pointer)
            .into(),
        None => content.into(),
    }
}

/// Create a liquid button element
///
/// `events` of `None` renders the button disabled.
pub fn view<'a, Message: Clone + 'a>(
    label: &'a str,
    icon: Option<&'static str>,
    style: ButtonStyle,
    size: ButtonSize,
    animation: ButtonAnimation,
    events: Option<PointerEvents<Message>>,
) -> Element<'a, Message> {
    let palette = style.palette();
    let metrics = size.metrics();
    let enabled = events.is_some();
    let (outer, inner) = scaled_padding(metrics.padding, animation.scale);

    let label = text(label)
        .size(metrics.text_size)
        .font(iced::Font {
            weight: SEMIBOLD_WEIGHT,
            ..Default::default()
        });

    let content: Element<'a, Message> = match icon {
        Some(icon) => {
            // Icon dips a little further than the frame while pressed
            let icon_size = metrics.icon_size * (1.0 - 0.1 * animation.press);
            let text_color = palette.text;
            row![
                svg(svg::Handle::from_memory(icon.as_bytes()))
                    .width(icon_size)
                    .height(icon_size)
                    .style(move |_theme, _status| svg::Style {
                        color: Some(text_color),
                    }),
                label,
            ]
            .spacing(8)
            .align_y(Alignment::Center)
            .into()
        }
        None => label.into(),
    };

    let visual = ButtonVisual {
        hover: animation.hover,
        press: animation.press,
        flow: animation.flow,
        enabled,
    };

    let frame = container(content)
        .padding(inner)
        .style(move |_theme| theme::liquid_button(&palette, metrics.corner_radius, visual));

    pressable(container(frame).padding(outer), events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_animation_is_at_rest() {
        let rest = ButtonAnimation::default();
        assert_eq!(rest.scale, 1.0);
        assert_eq!(rest.flow, 0.0);
    }
}
