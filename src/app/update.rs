//! Message update handlers - thin dispatcher delegating to submodules

mod animation;
mod gallery;
mod interaction;
mod navigation;
mod settings;

use iced::Task;
use iced::time::Instant;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_animation(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_gallery(&message) {
            return task;
        }
        if let Some(task) = self.handle_interaction(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }

    /// Current instant for input handlers; never moves the UI clock backwards
    fn input_now(&mut self) -> Instant {
        let now = Instant::now().max(self.ui.now);
        self.ui.now = now;
        now
    }
}
