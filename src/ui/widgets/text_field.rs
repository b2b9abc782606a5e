//! Liquid text field widget
//!
//! Glass frame around a chrome-less `text_input`, with a clear button while
//! there is text. Focus is tracked by the caller.

use iced::widget::{Space, button, container, row, svg, text_input};
use iced::{Alignment, Element, Fill};

use crate::ui::icons;
use crate::ui::theme;

const HEIGHT: f32 = 50.0;

/// Create a liquid text field
///
/// # Arguments
/// * `value` - Current text
/// * `placeholder` - Hint shown while empty
/// * `focused` - Whether the field has been activated
/// * `shimmer` - Shimmer loop phase (0.0 to 1.0), used while focused
/// * `on_input` / `on_clear` / `on_submit` - Edit messages
pub fn view<'a, Message: Clone + 'a>(
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    shimmer: f32,
    on_input: impl Fn(String) -> Message + 'a,
    on_clear: Message,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(on_input)
        .on_submit(on_submit)
        .size(16)
        .padding(0)
        .width(Fill)
        .style(theme::text_field_input);

    let clear: Element<'a, Message> = if value.is_empty() {
        Space::new().width(0).height(0).into()
    } else {
        button(
            svg(svg::Handle::from_memory(icons::CLEAR.as_bytes()))
                .width(18)
                .height(18)
                .style(|_theme, status| svg::Style {
                    color: Some(match status {
                        svg::Status::Hovered => theme::alpha(iced::Color::WHITE, 0.9),
                        svg::Status::Idle => theme::TEXT_MUTED,
                    }),
                }),
        )
        .padding(0)
        .style(theme::clear_button)
        .on_press(on_clear)
        .into()
    };

    container(row![input, clear].spacing(8).align_y(Alignment::Center))
        .width(Fill)
        .height(HEIGHT)
        .padding([0, 16])
        .align_y(Alignment::Center)
        .style(move |_theme| theme::text_field(focused, shimmer))
        .into()
}
