//! Pages module
//! Full-page views for Liquid Water

pub mod gallery;
pub mod home;
pub mod interactive;

use std::time::{Duration, Instant};

use crate::app::{ControlId, Message};
use crate::ui::animation::prelude::{ControlAnimations, presets};
use crate::ui::widgets::{ButtonAnimation, PointerEvents};

/// Scrollable ids, reset when a tab is selected
pub const HOME_SCROLL: &str = "home_scroll";
pub const GALLERY_SCROLL: &str = "gallery_scroll";

/// Scale a pressed liquid button shrinks to
const PRESSED_SCALE: f32 = 0.95;
/// Scale a hovered liquid button grows to
const HOVERED_SCALE: f32 = 1.02;

/// Clock a page samples its animations with
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    /// Latest frame
    pub now: Instant,
    /// Time since ambient loops started; frozen at zero under reduced motion
    pub ambient: Duration,
}

/// Pointer messages for a control
pub fn pointer_events(id: ControlId) -> PointerEvents<Message> {
    PointerEvents {
        enter: Message::ControlEntered(id),
        exit: Message::ControlExited(id),
        press: Message::ControlPressed(id),
        release: Message::ControlReleased(id),
    }
}

/// Sample press, hover, flow and idle pulse for a liquid button
pub fn button_animation(
    controls: &ControlAnimations<ControlId>,
    id: ControlId,
    clock: Clock,
) -> ButtonAnimation {
    let pulse = presets::BUTTON_PULSE.lerp(clock.ambient, 1.0, 1.01);
    ButtonAnimation {
        hover: controls.hover.progress(&id),
        press: controls.press.progress(&id),
        flow: controls.flow(&id, clock.now),
        scale: controls.scale(&id, PRESSED_SCALE, HOVERED_SCALE) * pulse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_button_sits_at_rest() {
        let controls = ControlAnimations::default();
        let clock = Clock {
            now: Instant::now(),
            ambient: Duration::ZERO,
        };
        let animation = button_animation(&controls, ControlId::ViewDemo, clock);
        assert_eq!(animation.scale, 1.0);
        assert_eq!(animation.flow, 0.0);
    }
}
