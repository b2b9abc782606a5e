//! Liquid toggle switch widget
//!
//! Draws the track and knob from a [`ToggleSnapshot`] and reports raw
//! pointer input. Tap/drag recognition lives in `ToggleState`, so the
//! widget only needs to remember whether it owns the pointer.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::gradient::Linear;
use iced::mouse;
use iced::{
    Background, Border, Color, Element, Gradient, Length, Rectangle, Shadow, Size, Theme, Vector,
};

use crate::features::ToggleSnapshot;
use crate::features::toggle::TRACK_HEIGHT;
use crate::ui::theme;

/// Raw pointer input, in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToggleInput {
    Pressed(f32),
    Moved(f32),
    Released(f32),
    /// Pointer left the window mid-gesture
    Cancelled,
}

/// Scale applied to the knob while it is being dragged
const DRAG_KNOB_SCALE: f32 = 1.1;

pub struct LiquidToggle<'a, Message> {
    snapshot: ToggleSnapshot,
    height: f32,
    on_input: Box<dyn Fn(ToggleInput) -> Message + 'a>,
}

impl<'a, Message> LiquidToggle<'a, Message> {
    pub fn new<F>(snapshot: ToggleSnapshot, on_input: F) -> Self
    where
        F: Fn(ToggleInput) -> Message + 'a,
    {
        Self {
            snapshot,
            height: TRACK_HEIGHT,
            on_input: Box::new(on_input),
        }
    }

    fn track_colors(&self) -> [Color; 2] {
        let t = self.snapshot.on_amount;
        [
            theme::mix(
                theme::alpha(theme::GRAY, 0.3),
                theme::alpha(theme::BLUE, 0.6),
                t,
            ),
            theme::mix(
                theme::alpha(theme::GRAY, 0.2),
                theme::alpha(theme::PURPLE, 0.4),
                t,
            ),
        ]
    }
}

/// Pointer ownership
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    is_pressed: bool,
    last_x: f32,
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for LiquidToggle<'a, Message>
where
    Renderer: renderer::Renderer,
    Message: Clone,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(
            Length::Fixed(self.snapshot.track_width),
            Length::Fixed(self.height),
        )
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let width = Length::Fixed(self.snapshot.track_width);
        let height = Length::Fixed(self.height);
        let size = limits.width(width).height(height).resolve(width, height, Size::ZERO);
        layout::Node::new(size)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.is_pressed = true;
                    state.last_x = position.x;
                    shell.publish((self.on_input)(ToggleInput::Pressed(position.x)));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if state.is_pressed {
                    state.last_x = position.x;
                    shell.publish((self.on_input)(ToggleInput::Moved(position.x)));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_pressed {
                    state.is_pressed = false;
                    let x = cursor.position().map_or(state.last_x, |p| p.x);
                    shell.publish((self.on_input)(ToggleInput::Released(x)));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if state.is_pressed {
                    state.is_pressed = false;
                    shell.publish((self.on_input)(ToggleInput::Cancelled));
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let radius = bounds.height / 2.0;
        let [start, end] = self.track_colors();

        // Track
        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    radius: radius.into(),
                    width: 1.0,
                    color: theme::alpha(Color::WHITE, 0.2),
                },
                ..Default::default()
            },
            Background::Gradient(Gradient::Linear(
                Linear::new(theme::LEADING_TO_TRAILING)
                    .add_stop(0.0, start)
                    .add_stop(1.0, end),
            )),
        );

        // Knob
        let scale = if self.snapshot.is_dragging {
            DRAG_KNOB_SCALE
        } else {
            1.0
        };
        let knob = self.snapshot.knob_size * scale;
        let center_x = bounds.center_x() + self.snapshot.knob_offset;
        let knob_bounds = Rectangle {
            x: center_x - knob / 2.0,
            y: bounds.center_y() - knob / 2.0,
            width: knob,
            height: knob,
        };

        renderer.fill_quad(
            renderer::Quad {
                bounds: knob_bounds,
                border: Border::default().rounded(knob / 2.0),
                shadow: Shadow {
                    color: theme::alpha(Color::BLACK, 0.2),
                    offset: Vector::new(0.0, 1.0),
                    blur_radius: 3.0,
                },
                ..Default::default()
            },
            Background::Color(theme::alpha(Color::WHITE, 0.9)),
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_pressed && self.snapshot.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<LiquidToggle<'a, Message>> for Element<'a, Message, Theme>
where
    Message: Clone + 'a,
{
    fn from(toggle: LiquidToggle<'a, Message>) -> Self {
        Element::new(toggle)
    }
}

/// Creates a new liquid toggle
pub fn liquid_toggle<'a, Message>(
    snapshot: ToggleSnapshot,
    on_input: impl Fn(ToggleInput) -> Message + 'a,
) -> LiquidToggle<'a, Message> {
    LiquidToggle::new(snapshot, on_input)
}
