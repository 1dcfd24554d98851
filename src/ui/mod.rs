//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled output through composable
//! rendering components. It owns the palette, the semantic style mappings
//! and the screen layouts.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: The frame buffer and text fitting utilities
//! - [`styles`]: Semantic mappings from domain states to colors and glyphs
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod styles;
pub mod theme;
pub mod viewmodel;

pub use helpers::{strip_ansi, Canvas};
pub use renderer::{render, render_to_string};
pub use styles::ColorToken;
pub use theme::Theme;
pub use viewmodel::{EmptyState, FooterInfo, HeaderInfo, ScreenView, UIViewModel};
