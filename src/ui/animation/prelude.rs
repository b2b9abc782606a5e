//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::ui::animation::prelude::*;
//! ```

pub use super::{ControlAnimations, Cycle};

/// Ambient loop presets
pub mod presets {
    use std::time::Duration;

    use super::Cycle;

    /// Background gradient swap
    pub const BACKGROUND: Cycle = Cycle::ping_pong(Duration::from_secs(3));

    /// Logo bobbing up and down
    pub const LOGO_FLOAT: Cycle = Cycle::ping_pong(Duration::from_secs(2));

    /// Logo halo breathing
    pub const LOGO_PULSE: Cycle = Cycle::ping_pong(Duration::from_millis(1500));

    /// Idle pulse on liquid buttons
    pub const BUTTON_PULSE: Cycle = Cycle::ping_pong(Duration::from_secs(3));

    /// Shimmer sweep across progress fills
    pub const PROGRESS_SHIMMER: Cycle = Cycle::looping(Duration::from_secs(2));

    /// Shimmer sweep across focused fields and held buttons
    pub const FIELD_SHIMMER: Cycle = Cycle::looping(Duration::from_millis(1500));

    /// Loading ring rotation
    pub const SPINNER_ROTATION: Cycle = Cycle::looping(Duration::from_secs(2));

    /// Loading drops breathing outward, staggered per drop
    pub const fn spinner_drop(index: u32) -> Cycle {
        Cycle::ping_pong(Duration::from_millis(1500))
            .delay(Duration::from_millis(200 * index as u64))
    }

    /// Front wave band
    pub const WAVE_FRONT: Cycle = Cycle::looping(Duration::from_secs(3));

    /// Back wave band
    pub const WAVE_BACK: Cycle = Cycle::looping(Duration::from_secs(4));
}
