//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SettingsFileReady(result) => {
                match result {
                    Ok(Some(path)) => tracing::info!("Settings file created at {:?}", path),
                    Ok(None) => tracing::debug!("Settings file already present"),
                    Err(e) => tracing::warn!("Could not write default settings: {}", e),
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
