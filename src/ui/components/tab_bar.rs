//! Bottom tab bar
//! Home and Demo tabs; the selected one takes the cyan accent

use iced::widget::{button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::icons;
use crate::ui::theme;

pub const TAB_BAR_HEIGHT: f32 = 64.0;

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Demo,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Demo];

    pub fn i18n_key(&self) -> Key {
        match self {
            Tab::Home => Key::TabHome,
            Tab::Demo => Key::TabDemo,
        }
    }

    pub fn icon_svg(&self) -> &'static str {
        match self {
            Tab::Home => icons::HOME,
            Tab::Demo => icons::DROP,
        }
    }
}

fn tab_button(tab: Tab, locale: Locale, selected: bool) -> Element<'static, Message> {
    let icon_color = if selected {
        theme::ACCENT
    } else {
        theme::alpha(iced::Color::WHITE, 0.5)
    };

    button(
        column![
            svg(svg::Handle::from_memory(tab.icon_svg().as_bytes()))
                .width(22)
                .height(22)
                .style(move |_theme, _status| svg::Style {
                    color: Some(icon_color),
                }),
            text(locale.get(tab.i18n_key())).size(11),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding([8, 0])
    .style(move |_theme, status| theme::tab_button(selected, status))
    .on_press(Message::SelectTab(tab))
    .into()
}

/// Build the tab bar
pub fn view(active: Tab, locale: Locale) -> Element<'static, Message> {
    let tabs = row(Tab::ALL
        .into_iter()
        .map(|tab| tab_button(tab, locale, tab == active)))
    .align_y(Alignment::Center);

    container(tabs)
        .width(Fill)
        .height(TAB_BAR_HEIGHT)
        .align_y(Alignment::Center)
        .style(theme::tab_bar)
        .into()
}
