//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait or `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`LiquidToggle`] - Switch widget reporting raw pointer input
//! - [`LoadingSpinner`] - Rotating ring with breathing drops
//! - [`LiquidProgress`] - Glass progress track with shimmer
//! - [`WaveStrip`] - Two sliding translucent bands
//! - [`ParticleLayer`] / [`RippleLayer`] - Floating particles and touch ripples
//! - [`HeroGlow`] - Pulsing halo behind the logo

pub mod glow;
pub mod liquid_progress;
pub mod liquid_toggle;
pub mod loading_spinner;
pub mod particle_layer;
pub mod ripple_layer;
pub mod wave_strip;

pub use glow::view_hero_glow;
pub use liquid_progress::{LiquidProgress, view_liquid_progress};
pub use liquid_toggle::{ToggleInput, liquid_toggle};
pub use loading_spinner::{LoadingSpinner, view_loading_spinner};
pub use particle_layer::view_particle_layer;
pub use ripple_layer::view_ripple_layer;
pub use wave_strip::{WaveStrip, view_wave_strip};
