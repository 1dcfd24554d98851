//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the domain and
//! UI layers.
//!
//! ```text
//! Key / Timer → Event → handle_event → AppState mutation → Actions → Zellij calls
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`collection`]: Collection view-state and its display strings
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: The tab enum
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod collection;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use collection::CollectionViewState;
pub use handler::{handle_event, Event};
pub use modes::Tab;
pub use state::AppState;
