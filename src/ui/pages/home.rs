//! Home page
//!
//! Floating logo with a breathing halo, three feature cards, a button into
//! the demo gallery and a field of drifting particles.

use iced::widget::{Space, column, container, scrollable, stack, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use super::{Clock, button_animation, pointer_events};
use crate::app::{ControlId, Message};
use crate::features::ParticleSnapshot;
use crate::i18n::{Key, Locale};
use crate::ui::animation::prelude::{ControlAnimations, presets};
use crate::ui::components::background;
use crate::ui::primitives::{view_hero_glow, view_particle_layer};
use crate::ui::theme::{self, BOLD_WEIGHT, ButtonSize, ButtonStyle};
use crate::ui::widgets::{CardContent, glass_card, liquid_button};
use crate::ui::icons;

/// Halo canvas size
const HALO_SIZE: f32 = 160.0;
/// Logo glyph size
const LOGO_SIZE: f32 = 50.0;
/// Headroom the floating logo moves within
const FLOAT_RANGE: f32 = 10.0;

fn feature_cards(locale: Locale) -> [CardContent<'static>; 3] {
    [
        CardContent {
            title: locale.get(Key::FeatureFluidTitle),
            description: locale.get(Key::FeatureFluidDesc),
            icon: icons::HAND_TAP,
            colors: [theme::BLUE, theme::CYAN],
        },
        CardContent {
            title: locale.get(Key::FeatureDynamicTitle),
            description: locale.get(Key::FeatureDynamicDesc),
            icon: icons::WAVEFORM,
            colors: [theme::PURPLE, theme::PINK],
        },
        CardContent {
            title: locale.get(Key::FeatureGlassTitle),
            description: locale.get(Key::FeatureGlassDesc),
            icon: icons::SPARKLES,
            colors: [theme::GREEN, theme::MINT],
        },
    ]
}

fn header(locale: Locale, clock: Clock) -> Element<'static, Message> {
    let halo_scale = presets::LOGO_PULSE.lerp(clock.ambient, 1.0, 1.1);
    let float = presets::LOGO_FLOAT.lerp(clock.ambient, 0.0, -FLOAT_RANGE);

    // Float by trading padding above and below the glyph
    let logo = container(
        svg(svg::Handle::from_memory(icons::DROP.as_bytes()))
            .width(LOGO_SIZE)
            .height(LOGO_SIZE)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::CYAN),
            }),
    )
    .padding(
        Padding::ZERO
            .top(FLOAT_RANGE + float)
            .bottom(FLOAT_RANGE - float),
    );

    let mark = stack![
        view_hero_glow(halo_scale, HALO_SIZE),
        container(logo).center_x(HALO_SIZE).center_y(HALO_SIZE),
    ];

    column![
        mark,
        text(locale.get(Key::HomeTitle))
            .size(34)
            .color(theme::TEXT_PRIMARY)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        text(locale.get(Key::HomeSubtitle))
            .size(17)
            .color(theme::TEXT_SECONDARY),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

/// Build the home page
pub fn view<'a>(
    locale: Locale,
    clock: Clock,
    particles: Vec<ParticleSnapshot>,
    controls: &'a ControlAnimations<ControlId>,
) -> Element<'a, Message> {
    let cards = column(
        feature_cards(locale)
            .into_iter()
            .enumerate()
            .map(|(index, card)| {
                let id = ControlId::HomeCard(index);
                glass_card::view(card, controls.press.progress(&id), pointer_events(id))
            }),
    )
    .spacing(20)
    .padding([0, 20]);

    let view_demo = container(liquid_button::view(
        locale.get(Key::ViewDemo),
        Some(icons::DROP),
        ButtonStyle::Primary,
        ButtonSize::Medium,
        button_animation(controls, ControlId::ViewDemo, clock),
        Some(pointer_events(ControlId::ViewDemo)),
    ))
    .center_x(Fill)
    .padding(Padding::ZERO.left(40.0).right(40.0).bottom(50.0));

    let content = column![
        Space::new().height(50),
        container(header(locale, clock)).center_x(Fill),
        cards,
        view_demo,
    ]
    .spacing(30)
    .width(Fill);

    let background_phase = presets::BACKGROUND.phase(clock.ambient);

    stack![
        background::view(background_phase),
        view_particle_layer(particles),
        scrollable(content)
            .id(iced::widget::Id::new(super::HOME_SCROLL))
            .width(Fill)
            .height(Fill)
            .style(theme::glass_scrollable),
    ]
    .width(Fill)
    .height(Fill)
    .into()
}
