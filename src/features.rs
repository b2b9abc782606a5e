//! Feature modules - interaction logic separated from UI
//!
//! Each feature module owns one state machine. Features expose snapshots
//! for rendering and never build widgets themselves.

pub mod particles;
pub mod progress;
pub mod ripple;
pub mod settings;
pub mod toggle;

pub use particles::{ColorClass, ParticleField, ParticleSnapshot};
pub use progress::{ProgressSnapshot, ProgressState};
pub use ripple::{RippleField, RippleSnapshot};
pub use settings::Settings;
pub use toggle::{ToggleSnapshot, ToggleState};
