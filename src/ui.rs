//! UI module for Liquid Water
//! Dark glass aesthetic with cyan accents
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Primitives** (`primitives`): Low-level Widget and canvas implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-page views assembled from the above

pub mod animation;
pub mod components;
pub mod icons;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
