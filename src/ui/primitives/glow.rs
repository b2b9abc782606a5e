//! Soft glows drawn on a canvas
//!
//! Canvas has no radial gradient, so a glow is approximated by stacking
//! translucent discs that shrink toward the center.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Element, Point, Rectangle, Renderer, Theme, mouse};

use crate::ui::theme;

/// Number of stacked discs in a soft disc
const LAYERS: usize = 8;

/// Fill a disc whose alpha peaks at `color.a` in the center and fades out at `radius`
pub fn soft_disc(frame: &mut Frame, center: Point, radius: f32, color: Color) {
    if radius <= 0.0 || color.a <= 0.0 {
        return;
    }

    let per_layer = color.a / LAYERS as f32;
    for layer in 0..LAYERS {
        let r = radius * (1.0 - layer as f32 / LAYERS as f32);
        frame.fill(&Path::circle(center, r), theme::alpha(color, per_layer));
    }
}

/// Pulsing halo behind the home logo
#[derive(Debug, Clone, Copy)]
pub struct HeroGlow {
    /// Halo scale (1.0 at rest)
    pub scale: f32,
}

impl<Message> Program<Message> for HeroGlow {
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
        let radius = 60.0 * self.scale;

        // Three hues offset toward the diagonal, like a blurred gradient disc
        let shift = radius * 0.25;
        soft_disc(
            &mut frame,
            Point::new(center.x - shift, center.y - shift),
            radius,
            theme::alpha(theme::BLUE, 0.3),
        );
        soft_disc(&mut frame, center, radius, theme::alpha(theme::PURPLE, 0.2));
        soft_disc(
            &mut frame,
            Point::new(center.x + shift, center.y + shift),
            radius,
            theme::alpha(theme::PINK, 0.3),
        );

        vec![frame.into_geometry()]
    }
}

/// Halo canvas of the given square size
pub fn view_hero_glow<'a, Message: 'a>(scale: f32, size: f32) -> Element<'a, Message> {
    Canvas::new(HeroGlow { scale }).width(size).height(size).into()
}
