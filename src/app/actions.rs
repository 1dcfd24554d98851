//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order, which keeps every Zellij API call out
//! of the library layer.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Asks the host for a `Timer` event after the given number of seconds.
    ///
    /// Used for the scan button cooldown and the failed overlay reset.
    SetTimeout(f64),
}
