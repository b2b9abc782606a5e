//! Two translucent bands sliding past each other

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, gradient};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::ui::theme;

/// Horizontal travel of each band over one loop
const TRAVEL: f32 = 100.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct WaveStrip {
    /// Front band loop phase (0.0 - 1.0), moves right
    pub front: f32,
    /// Back band loop phase (0.0 - 1.0), moves left
    pub back: f32,
}

impl WaveStrip {
    fn band(frame: &mut Frame, bounds: Size, offset: f32, colors: [Color; 2], reversed: bool) {
        let top_left = Point::new(offset, 0.0);
        let (start, end) = if reversed {
            (Point::new(offset + bounds.width, 0.0), top_left)
        } else {
            (top_left, Point::new(offset + bounds.width, 0.0))
        };

        let fill = gradient::Linear::new(start, end)
            .add_stop(0.0, colors[0])
            .add_stop(1.0, colors[1]);

        frame.fill(&Path::rectangle(top_left, bounds), fill);
    }
}

impl<Message> Program<Message> for WaveStrip {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);

        Self::band(
            &mut frame,
            size,
            -TRAVEL * self.back,
            [theme::alpha(theme::PURPLE, 0.3), theme::alpha(theme::PINK, 0.2)],
            true,
        );
        Self::band(
            &mut frame,
            size,
            TRAVEL * self.front,
            [theme::alpha(theme::BLUE, 0.4), theme::alpha(theme::CYAN, 0.2)],
            false,
        );

        vec![frame.into_geometry()]
    }
}

/// Full-width wave strip of the given height
pub fn view_wave_strip<'a, Message: 'a>(strip: WaveStrip, height: f32) -> Element<'a, Message> {
    Canvas::new(strip).width(Length::Fill).height(height).into()
}
