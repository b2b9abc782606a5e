//! Theme system for Liquid Water
//! Dark canvas with translucent glass surfaces and gradient accents

use std::f32::consts::{FRAC_PI_2, PI};

use iced::color;
use iced::gradient::Linear;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Gradient, Radians, Shadow, Theme, Vector};

// ============================================================================
// Color Palette
// ============================================================================

pub const BLUE: Color = color!(0x007aff);
pub const PURPLE: Color = color!(0xaf52de);
pub const PINK: Color = color!(0xff2d55);
pub const CYAN: Color = color!(0x32ade6);
pub const TEAL: Color = color!(0x30b0c7);
pub const MINT: Color = color!(0x00c7be);
pub const GREEN: Color = color!(0x34c759);
pub const INDIGO: Color = color!(0x5856d6);
pub const RED: Color = color!(0xff3b30);
pub const ORANGE: Color = color!(0xff9500);
pub const GRAY: Color = color!(0x8e8e93);

/// Base canvas behind every page
pub const BACKGROUND: Color = Color::BLACK;
/// Selected tab and focus accent
pub const ACCENT: Color = CYAN;

pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_SECONDARY: Color = alpha(Color::WHITE, 0.8);
pub const TEXT_MUTED: Color = alpha(Color::WHITE, 0.6);

pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;
pub const SEMIBOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Semibold;

/// Same color with a different alpha
pub const fn alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Linear blend between two colors
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

// ============================================================================
// Gradients
// ============================================================================

/// Left edge to right edge
pub const LEADING_TO_TRAILING: Radians = Radians(FRAC_PI_2);
/// Top-left corner to bottom-right corner
pub const DIAGONAL: Radians = Radians(PI * 0.75);

/// Evenly spaced linear gradient through `colors`
pub fn linear_gradient(angle: Radians, colors: &[Color]) -> Background {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    let linear = colors
        .iter()
        .enumerate()
        .fold(Linear::new(angle), |gradient, (i, color)| {
            gradient.add_stop(i as f32 / last, *color)
        });

    Background::Gradient(Gradient::Linear(linear))
}

/// Page background colors at either end of the ping-pong
const BACKGROUND_FROM: [Color; 3] = [alpha(BLUE, 0.6), alpha(PURPLE, 0.4), alpha(PINK, 0.3)];
const BACKGROUND_TO: [Color; 3] = [alpha(PURPLE, 0.4), alpha(BLUE, 0.3), alpha(CYAN, 0.5)];

/// Animated page gradient; `phase` sweeps colors and direction
pub fn page_gradient(phase: f32) -> container::Style {
    let colors = [
        mix(BACKGROUND_FROM[0], BACKGROUND_TO[0], phase),
        mix(BACKGROUND_FROM[1], BACKGROUND_TO[1], phase),
        mix(BACKGROUND_FROM[2], BACKGROUND_TO[2], phase),
    ];
    let angle = Radians(DIAGONAL.0 + PI * phase.clamp(0.0, 1.0));

    container::Style {
        background: Some(linear_gradient(angle, &colors)),
        ..Default::default()
    }
}

/// Solid black page base
pub fn page_base(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

// ============================================================================
// Liquid Button Styles
// ============================================================================

/// Visual flavor of a liquid button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Accent,
    Destructive,
    Ghost,
}

/// Colors a liquid button is drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonPalette {
    pub gradient: &'static [Color],
    pub text: Color,
    pub border: Color,
    pub glow: Color,
}

static PRIMARY_GRADIENT: [Color; 3] = [BLUE, PURPLE, PINK];
static SECONDARY_GRADIENT: [Color; 2] = [alpha(GRAY, 0.6), alpha(BLUE, 0.4)];
static ACCENT_GRADIENT: [Color; 3] = [CYAN, TEAL, MINT];
static DESTRUCTIVE_GRADIENT: [Color; 3] = [RED, ORANGE, PINK];
static GHOST_GRADIENT: [Color; 1] = [Color::TRANSPARENT];

impl ButtonStyle {
    pub fn palette(self) -> ButtonPalette {
        match self {
            ButtonStyle::Primary => ButtonPalette {
                gradient: &PRIMARY_GRADIENT,
                text: Color::WHITE,
                border: alpha(Color::WHITE, 0.4),
                glow: BLUE,
            },
            ButtonStyle::Secondary => ButtonPalette {
                gradient: &SECONDARY_GRADIENT,
                text: BLUE,
                border: alpha(BLUE, 0.6),
                glow: GRAY,
            },
            ButtonStyle::Accent => ButtonPalette {
                gradient: &ACCENT_GRADIENT,
                text: Color::WHITE,
                border: alpha(CYAN, 0.6),
                glow: CYAN,
            },
            ButtonStyle::Destructive => ButtonPalette {
                gradient: &DESTRUCTIVE_GRADIENT,
                text: Color::WHITE,
                border: alpha(RED, 0.6),
                glow: RED,
            },
            ButtonStyle::Ghost => ButtonPalette {
                gradient: &GHOST_GRADIENT,
                text: alpha(Color::WHITE, 0.9),
                border: alpha(Color::WHITE, 0.3),
                glow: Color::WHITE,
            },
        }
    }
}

/// Liquid button size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Layout metrics for a button size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    /// Vertical and horizontal padding
    pub padding: [f32; 2],
    pub text_size: f32,
    pub corner_radius: f32,
    pub icon_size: f32,
}

impl ButtonSize {
    pub fn metrics(self) -> SizeMetrics {
        match self {
            ButtonSize::Small => SizeMetrics {
                padding: [8.0, 16.0],
                text_size: 14.0,
                corner_radius: 16.0,
                icon_size: 14.0,
            },
            ButtonSize::Medium => SizeMetrics {
                padding: [12.0, 24.0],
                text_size: 16.0,
                corner_radius: 20.0,
                icon_size: 16.0,
            },
            ButtonSize::Large => SizeMetrics {
                padding: [16.0, 32.0],
                text_size: 20.0,
                corner_radius: 24.0,
                icon_size: 20.0,
            },
        }
    }
}

/// Animated inputs for a liquid button frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonVisual {
    /// Hover amount (0.0 - 1.0)
    pub hover: f32,
    /// Press amount (0.0 - 1.0)
    pub press: f32,
    /// Click flow glow (0.0 - 1.0)
    pub flow: f32,
    pub enabled: bool,
}

/// Glass button surface
pub fn liquid_button(
    palette: &ButtonPalette,
    corner_radius: f32,
    visual: ButtonVisual,
) -> container::Style {
    let fade = if visual.enabled { 1.0 } else { 0.6 };
    let lift = 0.25 * visual.flow;

    let colors: Vec<Color> = palette
        .gradient
        .iter()
        .map(|c| {
            let tinted = mix(*c, Color::WHITE, lift);
            alpha(tinted, c.a * 0.8 * fade)
        })
        .collect();

    let background = if palette.gradient.iter().all(|c| c.a == 0.0) {
        Background::Color(alpha(Color::WHITE, (0.08 + 0.15 * visual.flow) * fade))
    } else {
        linear_gradient(DIAGONAL, &colors)
    };

    let border_alpha = palette.border.a * if visual.enabled { 1.0 } else { 0.5 };
    let glow_intensity = 0.3 + 0.5 * visual.flow;
    let active = visual.hover.max(visual.press);

    container::Style {
        background: Some(background),
        text_color: Some(alpha(palette.text, palette.text.a * fade)),
        border: Border {
            radius: corner_radius.into(),
            width: 2.0 + visual.press,
            color: alpha(palette.border, border_alpha),
        },
        shadow: Shadow {
            color: alpha(
                palette.glow,
                (0.2 + 0.2 * visual.press + glow_intensity * 0.4 * active) * fade,
            ),
            offset: Vector::new(0.0, 4.0 - 2.0 * visual.press),
            blur_radius: 4.0 + 4.0 * visual.press + 8.0 * active,
        },
        ..Default::default()
    }
}

// ============================================================================
// Glass Surfaces
// ============================================================================

/// Glass card with a press shade
pub fn glass_card(press: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(alpha(
            Color::WHITE,
            0.08 + 0.04 * press,
        ))),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            radius: 20.0.into(),
            width: 1.0,
            color: alpha(Color::WHITE, 0.3),
        },
        shadow: Shadow {
            color: alpha(Color::BLACK, 0.25 - 0.1 * press),
            offset: Vector::new(0.0, 6.0 - 3.0 * press),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Glass section panel on the gallery page
pub fn glass_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(alpha(Color::WHITE, 0.06))),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            radius: 20.0.into(),
            width: 1.0,
            color: alpha(Color::WHITE, 0.15),
        },
        ..Default::default()
    }
}

/// Round icon backdrop tinted with the card colors
pub fn icon_disk(colors: [Color; 2]) -> container::Style {
    container::Style {
        background: Some(linear_gradient(
            DIAGONAL,
            &[alpha(colors[0], 0.3), alpha(colors[1], 0.3)],
        )),
        text_color: Some(colors[0]),
        border: Border {
            radius: 25.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Flat `base` with a soft `highlight` band centered at `phase` along `angle`
pub fn shimmer_background(angle: Radians, base: Color, highlight: Color, phase: f32) -> Background {
    const HALF_BAND: f32 = 0.15;
    let center = phase.clamp(0.0, 1.0);
    let stops = [
        (0.0, base),
        (center - HALF_BAND, base),
        (center, highlight),
        (center + HALF_BAND, base),
        (1.0, base),
    ];

    let linear = stops
        .into_iter()
        .filter(|(offset, _)| (0.0..=1.0).contains(offset))
        .fold(Linear::new(angle), |gradient, (offset, color)| {
            gradient.add_stop(offset, color)
        });

    Background::Gradient(Gradient::Linear(linear))
}

/// Text field frame; the border lights up and a shimmer runs while focused
pub fn text_field(focused: bool, shimmer: f32) -> container::Style {
    let base = alpha(Color::WHITE, 0.07);

    if focused {
        container::Style {
            background: Some(shimmer_background(
                LEADING_TO_TRAILING,
                base,
                alpha(Color::WHITE, 0.2),
                shimmer,
            )),
            border: Border {
                radius: 15.0.into(),
                width: 2.0,
                color: alpha(BLUE, 0.6),
            },
            shadow: Shadow {
                color: alpha(PURPLE, 0.35),
                offset: Vector::ZERO,
                blur_radius: 10.0,
            },
            ..Default::default()
        }
    } else {
        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                radius: 15.0.into(),
                width: 1.0,
                color: alpha(Color::WHITE, 0.2),
            },
            ..Default::default()
        }
    }
}

/// Inner text input with no chrome of its own
pub fn text_field_input(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon: TEXT_MUTED,
        placeholder: alpha(Color::WHITE, 0.45),
        value: TEXT_PRIMARY,
        selection: alpha(CYAN, 0.4),
    }
}

/// Small glass preset button
pub fn mini_button(hover: f32, press: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(alpha(
            Color::WHITE,
            0.1 + 0.05 * hover + 0.05 * press,
        ))),
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: alpha(Color::WHITE, 0.2 + 0.1 * hover),
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Clear button inside the text field
pub fn clear_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: TEXT_MUTED,
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            text_color: alpha(Color::WHITE, 0.9),
            ..base
        },
        _ => base,
    }
}

/// Close button on the interactive overlay
pub fn close_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(alpha(Color::WHITE, 0.08))),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: alpha(Color::WHITE, 0.2),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(alpha(Color::WHITE, 0.16))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(alpha(Color::WHITE, 0.22))),
            ..base
        },
        _ => base,
    }
}

/// Tab bar entry; the selected tab takes the accent color
pub fn tab_button(selected: bool, status: button::Status) -> button::Style {
    let text_color = if selected {
        ACCENT
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => TEXT_SECONDARY,
            _ => alpha(Color::WHITE, 0.5),
        }
    };

    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Translucent strip holding the tabs
pub fn tab_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(alpha(color!(0x0c0c10), 0.85))),
        border: Border {
            radius: 0.0.into(),
            width: 1.0,
            color: alpha(Color::WHITE, 0.1),
        },
        ..Default::default()
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Thin translucent scroller over the glass pages
pub fn glass_scrollable(_theme: &Theme, status: scrollable::Status) -> scrollable::Style {
    let active = matches!(
        status,
        scrollable::Status::Hovered { .. } | scrollable::Status::Dragged { .. }
    );

    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(alpha(Color::WHITE, if active { 0.3 } else { 0.15 })),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(alpha(Color::BLACK, 0.6)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: TEXT_MUTED,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_metrics_scale_up() {
        let small = ButtonSize::Small.metrics();
        let medium = ButtonSize::Medium.metrics();
        let large = ButtonSize::Large.metrics();

        assert_eq!(small.padding, [8.0, 16.0]);
        assert_eq!(medium.padding, [12.0, 24.0]);
        assert_eq!(large.padding, [16.0, 32.0]);
        assert_eq!(
            [small.corner_radius, medium.corner_radius, large.corner_radius],
            [16.0, 20.0, 24.0]
        );
        assert_eq!(
            [small.icon_size, medium.icon_size, large.icon_size],
            [14.0, 16.0, 20.0]
        );
    }

    #[test]
    fn ghost_buttons_have_no_gradient() {
        let ghost = ButtonStyle::Ghost.palette();
        assert!(ghost.gradient.iter().all(|c| c.a == 0.0));
        assert_eq!(ButtonStyle::Primary.palette().gradient.len(), 3);
        assert_eq!(ButtonStyle::Secondary.palette().text, BLUE);
    }

    #[test]
    fn disabled_buttons_fade() {
        let palette = ButtonStyle::Primary.palette();
        let enabled = liquid_button(
            &palette,
            20.0,
            ButtonVisual {
                enabled: true,
                ..Default::default()
            },
        );
        let disabled = liquid_button(&palette, 20.0, ButtonVisual::default());

        let text_alpha = |style: &container::Style| style.text_color.map(|c| c.a);
        assert_eq!(text_alpha(&enabled), Some(1.0));
        assert!(text_alpha(&disabled) < Some(0.61));
    }

    #[test]
    fn mix_hits_both_ends() {
        let close = |a: Color, b: Color| {
            [a.r - b.r, a.g - b.g, a.b - b.b, a.a - b.a]
                .iter()
                .all(|d| d.abs() < 1e-5)
        };
        assert!(close(mix(BLUE, PINK, 0.0), BLUE));
        assert!(close(mix(BLUE, PINK, 1.0), PINK));
        // Out-of-range blends clamp
        assert!(close(mix(BLUE, PINK, 3.0), PINK));
    }
}
