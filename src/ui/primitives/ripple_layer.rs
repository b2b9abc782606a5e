//! Touch ripple layer for the interactive overlay

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Length, Rectangle, Renderer, Theme, mouse};

use crate::features::RippleSnapshot;
use crate::ui::theme;

/// Ring thickness
const STROKE_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, Default)]
pub struct RippleLayer {
    pub ripples: Vec<RippleSnapshot>,
}

impl<Message> Program<Message> for RippleLayer {
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

        for ripple in &self.ripples {
            let radius = ripple.diameter / 2.0;
            if radius <= 0.0 {
                continue;
            }

            let ring = Path::circle(ripple.center, radius);
            frame.stroke(
                &ring,
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(theme::alpha(Color::WHITE, 0.8 * ripple.opacity)),
            );

            // Faint inner ring for depth
            let inner = Path::circle(ripple.center, (radius - STROKE_WIDTH * 2.0).max(0.0));
            frame.stroke(
                &inner,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(theme::alpha(theme::CYAN, 0.3 * ripple.opacity)),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size ripple canvas
pub fn view_ripple_layer<'a, Message: 'a>(ripples: Vec<RippleSnapshot>) -> Element<'a, Message> {
    Canvas::new(RippleLayer { ripples })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
