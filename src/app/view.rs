// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::{self, Tab};
use crate::ui::pages::{self, gallery::GalleryView};

impl App {
    /// Build the main window view
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let clock = self.ui.clock(self.core.reduced_motion());
        let now = clock.now;

        // The overlay covers everything, tab bar included
        if self.ui.overlay.is_open {
            return pages::interactive::view(
                locale,
                clock,
                self.ui.overlay.ripples.snapshots(now),
            );
        }

        let page = match self.ui.active_tab {
            Tab::Home => pages::home::view(
                locale,
                clock,
                self.ui.home.particles.snapshots(now),
                &self.ui.controls,
            ),
            Tab::Demo => {
                let gallery = &self.ui.gallery;
                pages::gallery::view(
                    locale,
                    clock,
                    GalleryView {
                        progress: gallery.progress.snapshot(),
                        toggle: gallery.toggle.snapshot(now),
                        text: &gallery.text,
                        text_focused: gallery.text_focused,
                    },
                    &self.ui.controls,
                )
            }
        };

        column![
            container(page).width(Fill).height(Fill),
            components::tab_bar::view(self.ui.active_tab, locale),
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }
}
