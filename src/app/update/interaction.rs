//! Pointer feedback and overlay ripple handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_interaction(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ControlEntered(id) => {
                self.ui.controls.hovered(Some(*id));
                Some(Task::none())
            }

            Message::ControlExited(id) => {
                if self.ui.controls.hover.is_active(id) {
                    self.ui.controls.hovered(None);
                }
                // Dragging off a control abandons the click
                if self.ui.controls.press.is_active(id) {
                    self.ui.controls.cancel_press();
                }
                Some(Task::none())
            }

            Message::ControlPressed(id) => {
                self.ui.controls.pressed(*id);
                Some(Task::none())
            }

            Message::ControlReleased(id) => {
                let now = self.input_now();
                if !self.ui.controls.released(id, now) {
                    return Some(Task::none());
                }
                tracing::debug!("Clicked {:?}", id);
                Some(id.action().map_or_else(Task::none, Task::done))
            }

            Message::OverlayCursorMoved(position) => {
                self.ui.overlay.ripples.cursor_moved(*position);
                Some(Task::none())
            }

            Message::OverlayPressed => {
                let now = self.input_now();
                if self.ui.overlay.ripples.spawn(now) {
                    tracing::debug!("Ripple spawned ({} live)", self.ui.overlay.ripples.len());
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
