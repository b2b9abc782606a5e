//! Unified animation system
//!
//! Two kinds of animation live here:
//!
//! - Pure, time-sampled drivers (`Tween`, `Cycle`, `Spring`) that state
//!   machines own and the renderer samples with an explicit `Instant`.
//! - Pointer feedback (`ControlAnimations`) built on
//!   `iced_anim`, ticked from the frame subscription.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::ui::animation::prelude::*;
//!
//! let halo = presets::LOGO_PULSE.lerp(elapsed, 1.0, 1.1);
//! let scale = controls.scale(&id, 0.95, 1.02);
//! ```

mod cycle;
mod easing;
mod hover;
pub mod prelude;
mod spring;
mod tween;

pub use cycle::Cycle;
pub use easing::Curve;
pub use hover::ControlAnimations;
pub use spring::{Spring, SpringParams};
pub use tween::Tween;
