//! Liquid loading spinner
//!
//! A rotating gradient ring with three drops breathing in and out of the
//! center. Both motions are sampled by the caller and passed in.

use std::f32::consts::TAU;

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, path::Arc};
use iced::{Color, Element, Point, Radians, Renderer, Theme, mouse};

use super::glow::soft_disc;
use crate::ui::theme;

/// Segments used to fake a gradient along the ring
const RING_SEGMENTS: usize = 48;
/// How far each drop travels from the center
const DROP_REACH: f32 = 20.0;
const DROP_RADIUS: f32 = 6.0;

#[derive(Debug, Clone, Copy)]
pub struct LoadingSpinner {
    /// Ring rotation in turns (0.0 - 1.0)
    pub rotation: f32,
    /// Per-drop spread (0.0 = at center, 1.0 = fully out)
    pub drops: [f32; 3],
    pub ring_radius: f32,
    pub stroke_width: f32,
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            drops: [0.0; 3],
            ring_radius: 30.0,
            stroke_width: 4.0,
        }
    }
}

impl LoadingSpinner {
    pub fn new(rotation: f32, drops: [f32; 3]) -> Self {
        Self {
            rotation,
            drops,
            ..Default::default()
        }
    }

    /// Ring color at `t` along the circumference: blue, purple, pink
    fn ring_color(t: f32) -> Color {
        let stops = [
            theme::alpha(theme::BLUE, 0.3),
            theme::alpha(theme::PURPLE, 0.6),
            theme::alpha(theme::PINK, 0.3),
        ];
        if t < 0.5 {
            theme::mix(stops[0], stops[1], t * 2.0)
        } else {
            theme::mix(stops[1], stops[2], (t - 0.5) * 2.0)
        }
    }

    fn drop_color(index: usize) -> Color {
        match index {
            0 => theme::BLUE,
            1 => theme::PURPLE,
            _ => theme::CYAN,
        }
    }
}

impl<Message> Program<Message> for LoadingSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let start = self.rotation * TAU;
        let sweep = TAU / RING_SEGMENTS as f32;

        // Ring
        for segment in 0..RING_SEGMENTS {
            let t = segment as f32 / RING_SEGMENTS as f32;
            let from = start + sweep * segment as f32;
            let arc = Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius: self.ring_radius,
                    start_angle: Radians(from),
                    // Overlap slightly so segments do not leave seams
                    end_angle: Radians(from + sweep * 1.05),
                });
            });
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_width(self.stroke_width)
                    .with_color(Self::ring_color(t)),
            );
        }

        // Drops
        for (index, spread) in self.drops.iter().enumerate() {
            let angle = index as f32 * TAU / 3.0;
            let distance = DROP_REACH * spread.clamp(0.0, 1.0);
            let position = Point::new(
                center.x + angle.cos() * distance,
                center.y + angle.sin() * distance,
            );
            let color = Self::drop_color(index);

            soft_disc(&mut frame, position, DROP_RADIUS, theme::alpha(color, 0.3));
            frame.fill(
                &Path::circle(position, DROP_RADIUS * 0.5),
                theme::alpha(color, 0.8),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Spinner canvas of the given square size
pub fn view_loading_spinner<'a, Message: 'a>(
    spinner: LoadingSpinner,
    size: f32,
) -> Element<'a, Message> {
    Canvas::new(spinner).width(size).height(size).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_color_runs_blue_purple_pink() {
        assert_eq!(LoadingSpinner::ring_color(0.0), theme::alpha(theme::BLUE, 0.3));
        assert_eq!(LoadingSpinner::ring_color(0.5), theme::alpha(theme::PURPLE, 0.6));
        let end = LoadingSpinner::ring_color(1.0);
        assert!((end.r - theme::PINK.r).abs() < 1e-6);
    }
}
