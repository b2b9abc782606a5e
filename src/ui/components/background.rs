//! Animated liquid background
//!
//! Black base, a diagonal gradient that swaps colors and direction over a
//! ping-pong cycle, and a cyan glow drifting between opposite corners.

use iced::widget::canvas::{Frame, Geometry, Program};
use iced::widget::{Canvas, Space, container, stack};
use iced::{Element, Fill, Point, Rectangle, Renderer, Theme, mouse};

use crate::app::Message;
use crate::ui::primitives::glow::soft_disc;
use crate::ui::theme;

/// Drifting cyan glow
#[derive(Debug, Clone, Copy)]
struct FlowingGlow {
    phase: f32,
}

impl Program<Message> for FlowingGlow {
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

        // Top-trailing at phase 0, bottom-leading at phase 1
        let t = self.phase.clamp(0.0, 1.0);
        let center = Point::new(bounds.width * (1.0 - t), bounds.height * t);
        let reach = bounds.width.max(bounds.height).min(800.0) * 0.5;

        soft_disc(&mut frame, center, reach, theme::alpha(theme::BLUE, 0.2));
        soft_disc(&mut frame, center, reach * 0.6, theme::alpha(theme::CYAN, 0.3));

        vec![frame.into_geometry()]
    }
}

/// Build the background layers for the given loop phase
pub fn view(phase: f32) -> Element<'static, Message> {
    stack![
        container(Space::new().width(Fill).height(Fill)).style(theme::page_base),
        container(Space::new().width(Fill).height(Fill))
            .style(move |_theme| theme::page_gradient(phase)),
        Canvas::new(FlowingGlow { phase }).width(Fill).height(Fill),
    ]
    .width(Fill)
    .height(Fill)
    .into()
}
