// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::components::Tab;
use crate::ui::pages;

impl App {
    /// Float the home particles unless reduced motion is on
    pub(crate) fn mount_particles(&mut self) {
        if self.core.reduced_motion() {
            return;
        }
        let count = self.core.settings.demo.particle_count();
        let now = self.ui.now;
        self.ui.home.particles.mount(count, now, &mut rand::rng());
    }

    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::SelectTab(tab) => {
                if self.ui.active_tab == *tab {
                    return Some(Task::none());
                }
                tracing::info!("Switching tab: {:?} -> {:?}", self.ui.active_tab, tab);

                self.ui.active_tab = *tab;
                self.ui.reset_pointer_feedback();

                let scroll_id = match tab {
                    Tab::Home => {
                        self.mount_particles();
                        pages::HOME_SCROLL
                    }
                    Tab::Demo => {
                        // Particles only live while Home is on screen
                        self.ui.home.particles.unmount();
                        pages::GALLERY_SCROLL
                    }
                };

                Some(iced::widget::operation::snap_to(
                    iced::widget::Id::new(scroll_id),
                    iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
                ))
            }

            Message::OpenOverlay => {
                tracing::info!("Opening interactive overlay");
                self.ui.overlay.is_open = true;
                self.ui.overlay.ripples.clear();
                self.ui.reset_pointer_feedback();
                Some(Task::none())
            }

            Message::CloseOverlay => {
                tracing::info!(
                    "Closing interactive overlay ({} ripples dropped)",
                    self.ui.overlay.ripples.len()
                );
                self.ui.overlay.is_open = false;
                self.ui.overlay.ripples.clear();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
