//! Liquid progress bar canvas
//!
//! Glass track, gradient fill of `value × width` and a shimmer band that
//! slides across the fill.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, gradient};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::ui::theme;

const CORNER_RADIUS: f32 = 15.0;
/// Shimmer travel over one loop
const SHIMMER_TRAVEL: f32 = 200.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidProgress {
    /// Displayed value (0.0 - 1.0)
    pub value: f32,
    /// Shimmer loop phase (0.0 - 1.0)
    pub shimmer: f32,
}

impl LiquidProgress {
    /// Fill width for a track of `width`
    pub fn fill_width(&self, width: f32) -> f32 {
        width * self.value.clamp(0.0, 1.0)
    }
}

impl<Message> Program<Message> for LiquidProgress {
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
        let radius = CORNER_RADIUS.min(size.height / 2.0);

        // Track
        let track = Path::rounded_rectangle(Point::ORIGIN, size, radius.into());
        frame.fill(&track, theme::alpha(Color::WHITE, 0.08));
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(1.0)
                .with_color(theme::alpha(Color::WHITE, 0.2)),
        );

        let fill_width = self.fill_width(size.width);
        if fill_width > 0.5 {
            let fill_size = Size::new(fill_width, size.height);
            let fill = Path::rounded_rectangle(
                Point::ORIGIN,
                fill_size,
                radius.min(fill_width / 2.0).into(),
            );

            frame.fill(
                &fill,
                gradient::Linear::new(Point::ORIGIN, Point::new(fill_width, 0.0))
                    .add_stop(0.0, theme::alpha(theme::BLUE, 0.8))
                    .add_stop(0.5, theme::alpha(theme::CYAN, 0.6))
                    .add_stop(1.0, theme::alpha(theme::PURPLE, 0.4)),
            );

            // Shimmer, kept inside the fill
            let band = fill_width.min(SHIMMER_TRAVEL * 0.5);
            let x = (SHIMMER_TRAVEL * self.shimmer - band).min(fill_width - band);
            if x + band > 0.0 {
                let left = x.max(0.0);
                let right = (x + band).min(fill_width);
                frame.fill(
                    &Path::rectangle(Point::new(left, 0.0), Size::new(right - left, size.height)),
                    gradient::Linear::new(Point::new(x, 0.0), Point::new(x + band, 0.0))
                        .add_stop(0.0, Color::TRANSPARENT)
                        .add_stop(0.5, theme::alpha(Color::WHITE, 0.3))
                        .add_stop(1.0, Color::TRANSPARENT),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Full-width progress canvas of the given height
pub fn view_liquid_progress<'a, Message: 'a>(
    progress: LiquidProgress,
    height: f32,
) -> Element<'a, Message> {
    Canvas::new(progress).width(Length::Fill).height(height).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_tracks_value() {
        let progress = LiquidProgress {
            value: 0.25,
            shimmer: 0.0,
        };
        assert_eq!(progress.fill_width(200.0), 50.0);

        let overfull = LiquidProgress {
            value: 1.5,
            shimmer: 0.0,
        };
        assert_eq!(overfull.fill_width(200.0), 200.0);
    }
}
