//! Frame tick handler

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Advance every time-sampled animation to the frame instant
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick(at) => {
                let now = (*at).max(self.ui.now);
                self.ui.now = now;

                self.ui.controls.tick(now);
                self.ui.gallery.progress.tick(now);
                self.ui.overlay.ripples.tick(now);
                self.ui.home.particles.tick(now, &mut rand::rng());

                Some(Task::none())
            }
            _ => None,
        }
    }
}
