//! Component gallery handlers: progress, toggle, text field, reset

use std::time::Duration;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::primitives::ToggleInput;

/// Progress interpolation window used by reset
const RESET_PROGRESS_DURATION: Duration = Duration::from_millis(500);

impl App {
    pub fn handle_gallery(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SetProgress(value) => {
                let now = self.input_now();
                self.ui.gallery.progress.set_target(*value, now);
                tracing::debug!("Progress target set to {:.2}", self.ui.gallery.progress.target());
                Some(Task::none())
            }

            Message::ResetGallery => {
                let now = self.input_now();
                let gallery = &mut self.ui.gallery;
                gallery
                    .progress
                    .set_target_over(0.0, RESET_PROGRESS_DURATION, now);
                gallery.toggle.set(false, now);
                gallery.text.clear();
                gallery.text_focused = false;
                tracing::info!("Gallery reset");
                Some(Task::none())
            }

            Message::TogglePointer(input) => {
                let now = self.input_now();
                let toggle = &mut self.ui.gallery.toggle;
                let was_on = toggle.is_on();

                match *input {
                    ToggleInput::Pressed(x) => toggle.pointer_pressed(x),
                    ToggleInput::Moved(x) => toggle.pointer_moved(x),
                    ToggleInput::Released(x) => toggle.pointer_released(x, now),
                    ToggleInput::Cancelled => toggle.pointer_cancelled(),
                }

                if toggle.is_on() != was_on {
                    tracing::debug!("Toggle committed: {}", toggle.is_on());
                }
                Some(Task::none())
            }

            Message::TextChanged(text) => {
                self.ui.gallery.text = text.clone();
                self.ui.gallery.text_focused = true;
                Some(Task::none())
            }

            Message::TextCleared => {
                self.ui.gallery.text.clear();
                Some(Task::none())
            }

            Message::TextSubmitted => {
                self.ui.gallery.text_focused = false;
                Some(Task::none())
            }

            _ => None,
        }
    }
}
