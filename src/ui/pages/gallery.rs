//! Component gallery page
//!
//! Waves, loading spinner, progress bar with presets, toggle, text field,
//! showcase cards and the buttons that open the overlay or reset the demo.

use iced::widget::{Space, column, container, row, scrollable, stack, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use super::{Clock, button_animation, pointer_events};
use crate::app::{ControlId, Message, PROGRESS_PRESETS};
use crate::features::{ProgressSnapshot, ToggleSnapshot};
use crate::i18n::{Key, Locale};
use crate::ui::animation::prelude::{ControlAnimations, presets};
use crate::ui::components::background;
use crate::ui::icons;
use crate::ui::primitives::{
    LiquidProgress, LoadingSpinner, WaveStrip, liquid_toggle, view_liquid_progress,
    view_loading_spinner, view_wave_strip,
};
use crate::ui::theme::{self, BOLD_WEIGHT, ButtonSize, ButtonStyle};
use crate::ui::widgets::{
    CardContent, glass_card, liquid_button, mini_button, section_header, text_field,
};

/// Everything the gallery shows that is not pointer feedback
#[derive(Debug, Clone, Copy)]
pub struct GalleryView<'a> {
    pub progress: ProgressSnapshot,
    pub toggle: ToggleSnapshot,
    pub text: &'a str,
    pub text_focused: bool,
}

fn showcase_cards(locale: Locale) -> [CardContent<'static>; 3] {
    [
        CardContent {
            title: locale.get(Key::ShowcaseMorphTitle),
            description: locale.get(Key::ShowcaseMorphDesc),
            icon: icons::WATER_WAVES,
            colors: [theme::BLUE, theme::TEAL],
        },
        CardContent {
            title: locale.get(Key::ShowcaseParticleTitle),
            description: locale.get(Key::ShowcaseParticleDesc),
            icon: icons::SPARKLES,
            colors: [theme::PURPLE, theme::INDIGO],
        },
        CardContent {
            title: locale.get(Key::ShowcaseFlowTitle),
            description: locale.get(Key::ShowcaseFlowDesc),
            icon: icons::WAVEFORM_ECG,
            colors: [theme::GREEN, theme::MINT],
        },
    ]
}

/// Titled section with the standard gallery spacing
fn section<'a>(
    header: Element<'a, Message>,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    column![header, body.into()]
        .spacing(15)
        .padding([0, 20])
        .into()
}

fn waves(locale: Locale, clock: Clock) -> Element<'static, Message> {
    let strip = WaveStrip {
        front: presets::WAVE_FRONT.phase(clock.ambient),
        back: presets::WAVE_BACK.phase(clock.ambient),
    };

    section(
        section_header::view(locale.get(Key::SectionWaves), None),
        container(view_wave_strip(strip, 150.0))
            .clip(true)
            .style(|_theme| container::Style {
                border: iced::Border {
                    radius: 20.0.into(),
                    width: 1.0,
                    color: theme::alpha(Color::WHITE, 0.2),
                },
                ..Default::default()
            }),
    )
}

fn loading(locale: Locale, clock: Clock) -> Element<'static, Message> {
    let drops = [0u32, 1, 2].map(|index| presets::spinner_drop(index).phase(clock.ambient));
    let spinner = LoadingSpinner::new(presets::SPINNER_ROTATION.phase(clock.ambient), drops);

    section(
        section_header::view(locale.get(Key::SectionLoading), None),
        container(view_loading_spinner(spinner, 80.0))
            .center_x(Fill)
            .padding([20, 0])
            .style(theme::glass_panel),
    )
}

fn progress<'a>(
    locale: Locale,
    clock: Clock,
    snapshot: ProgressSnapshot,
    controls: &'a ControlAnimations<ControlId>,
) -> Element<'a, Message> {
    let bar = LiquidProgress {
        value: snapshot.display,
        shimmer: presets::PROGRESS_SHIMMER.phase(clock.ambient),
    };

    let presets_row = row(PROGRESS_PRESETS.iter().enumerate().map(|(index, value)| {
        let id = ControlId::ProgressPreset(index);
        mini_button::view(
            format!("{}%", (value * 100.0).round() as u32),
            controls.hover.progress(&id),
            controls.press.progress(&id),
            pointer_events(id),
        )
    }))
    .spacing(4);

    let body = column![
        section_header::view(
            locale.get(Key::SectionProgress),
            Some(format!("{}%", snapshot.percent())),
        ),
        view_liquid_progress(bar, 30.0),
        presets_row,
    ]
    .spacing(15);

    container(body)
        .padding(20)
        .style(theme::glass_panel)
        .into()
}

fn toggle(locale: Locale, snapshot: ToggleSnapshot) -> Element<'static, Message> {
    let toggle_row = row![
        text(locale.get(Key::ToggleLabel))
            .size(16)
            .color(theme::TEXT_SECONDARY),
        Space::new().width(Fill),
        liquid_toggle(snapshot, Message::TogglePointer),
    ]
    .align_y(Alignment::Center);

    section(
        section_header::view(locale.get(Key::SectionToggle), None),
        container(toggle_row).padding(20).style(theme::glass_panel),
    )
}

fn text_entry<'a>(locale: Locale, clock: Clock, value: &'a str, focused: bool) -> Element<'a, Message> {
    section(
        section_header::view(locale.get(Key::SectionTextField), None),
        text_field::view(
            value,
            locale.get(Key::TextFieldPlaceholder),
            focused,
            presets::FIELD_SHIMMER.phase(clock.ambient),
            Message::TextChanged,
            Message::TextCleared,
            Message::TextSubmitted,
        ),
    )
}

/// Build the gallery page
pub fn view<'a>(
    locale: Locale,
    clock: Clock,
    state: GalleryView<'a>,
    controls: &'a ControlAnimations<ControlId>,
) -> Element<'a, Message> {
    let header = column![
        text(locale.get(Key::GalleryTitle))
            .size(34)
            .color(theme::TEXT_PRIMARY)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        text(locale.get(Key::GallerySubtitle))
            .size(17)
            .color(theme::TEXT_SECONDARY),
    ]
    .spacing(15)
    .align_x(Alignment::Center);

    let cards = column(
        showcase_cards(locale)
            .into_iter()
            .enumerate()
            .map(|(index, card)| {
                let id = ControlId::GalleryCard(index);
                glass_card::view(card, controls.press.progress(&id), pointer_events(id))
            }),
    )
    .spacing(15)
    .padding([0, 20]);

    let actions = column![
        liquid_button::view(
            locale.get(Key::ExperienceDemo),
            Some(icons::SPARKLES),
            ButtonStyle::Primary,
            ButtonSize::Medium,
            button_animation(controls, ControlId::ExperienceDemo, clock),
            Some(pointer_events(ControlId::ExperienceDemo)),
        ),
        liquid_button::view(
            locale.get(Key::ResetDemo),
            Some(icons::RESET),
            ButtonStyle::Ghost,
            ButtonSize::Small,
            button_animation(controls, ControlId::ResetDemo, clock),
            Some(pointer_events(ControlId::ResetDemo)),
        ),
    ]
    .spacing(15)
    .align_x(Alignment::Center);

    let content = column![
        Space::new().height(40),
        container(header).center_x(Fill),
        waves(locale, clock),
        loading(locale, clock),
        container(progress(locale, clock, state.progress, controls)).padding([0, 20]),
        toggle(locale, state.toggle),
        text_entry(locale, clock, state.text, state.text_focused),
        cards,
        container(actions)
            .center_x(Fill)
            .padding(Padding::ZERO.left(40.0).right(40.0).bottom(80.0)),
    ]
    .spacing(30)
    .width(Fill);

    stack![
        background::view(presets::BACKGROUND.phase(clock.ambient)),
        scrollable(content)
            .id(iced::widget::Id::new(super::GALLERY_SCROLL))
            .width(Fill)
            .height(Fill)
            .style(theme::glass_scrollable),
    ]
    .width(Fill)
    .height(Fill)
    .into()
}
