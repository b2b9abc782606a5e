//! Floating particle layer
//!
//! Renders particle snapshots as soft discs around the center of the layer.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme, mouse};

use super::glow::soft_disc;
use crate::features::{ColorClass, ParticleSnapshot};
use crate::ui::theme;

fn class_color(class: ColorClass) -> Color {
    match class {
        ColorClass::A => theme::BLUE,
        ColorClass::B => theme::PURPLE,
        ColorClass::C => theme::CYAN,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleLayer {
    pub particles: Vec<ParticleSnapshot>,
}

impl<Message> Program<Message> for ParticleLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();

        for particle in &self.particles {
            let (dx, dy) = particle.offset;
            let color = class_color(particle.color_class);
            let position = Point::new(center.x + dx, center.y + dy);

            // Outer haze, then the brighter core
            soft_disc(
                &mut frame,
                position,
                particle.size / 2.0,
                theme::alpha(color, 0.2 * particle.opacity),
            );
            soft_disc(
                &mut frame,
                position,
                particle.size / 4.0,
                theme::alpha(color, 0.6 * particle.opacity),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size particle canvas
pub fn view_particle_layer<'a, Message: 'a>(particles: Vec<ParticleSnapshot>) -> Element<'a, Message> {
    Canvas::new(ParticleLayer { particles })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
