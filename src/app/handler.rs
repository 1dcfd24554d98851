//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place `AppState` is mutated. It returns
//! whether the frame needs redrawing plus the side effects the plugin shim
//! must perform.
//!
//! # Event Types
//!
//! - **Navigation**: `NextTab`, `PrevTab`, `SelectTab`, `PrimaryAction`,
//!   `ToggleLoading`
//! - **Collection**: `NextFilter`, `PrevFilter`, `MoveUp`/`Down`/`Left`/`Right`
//! - **Scan**: `PressScan`, `PreviewOverlay`, `PreviewScanning`,
//!   `ToggleCamera`, `ToggleFlash`, `CycleError`
//! - **System**: `Tick`, `CloseFocus`
//!
//! Screen-specific events are ignored while another screen is active.
//!
//! # Example
//!
//! ```rust
//! use thriftflip::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::NextFilter)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), thriftflip::ThriftFlipError>(())
//! ```

use super::modes::Tab;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{ScanButtonState, ScanOverlayState};

/// Events triggered by user input or host timers.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Switches to the tab on the right, wrapping.
    NextTab,
    /// Switches to the tab on the left, wrapping.
    PrevTab,
    /// Jumps to a specific tab.
    SelectTab(Tab),
    /// Enter on the active screen: scans on Scan, follows the empty-state
    /// action on Sell.
    PrimaryAction,
    /// Hides the plugin pane.
    CloseFocus,
    /// Swaps data for loading placeholders, or back.
    ToggleLoading,

    /// Selects the next filter chip.
    NextFilter,
    /// Selects the previous filter chip.
    PrevFilter,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    /// Presses the scan button.
    PressScan,
    /// Forces the camera overlay into a state.
    PreviewOverlay(ScanOverlayState),
    /// Toggles the button between `Scanning` and `Ready`.
    PreviewScanning,
    /// Toggles camera availability.
    ToggleCamera,
    /// Toggles the flash indicator.
    ToggleFlash,
    /// Fails the overlay with the next error in the preview cycle.
    CycleError,

    /// A host timer fired after `elapsed` seconds.
    Tick {
        /// Duration the timer was set for.
        elapsed: f64,
    },
}

impl Event {
    const fn required_tab(&self) -> Option<Tab> {
        match self {
            Self::NextFilter
            | Self::PrevFilter
            | Self::MoveUp
            | Self::MoveDown
            | Self::MoveLeft
            | Self::MoveRight => Some(Tab::Collection),
            Self::PressScan
            | Self::PreviewOverlay(_)
            | Self::PreviewScanning
            | Self::ToggleCamera
            | Self::ToggleFlash
            | Self::CycleError => Some(Tab::Scan),
            Self::NextTab
            | Self::PrevTab
            | Self::SelectTab(_)
            | Self::PrimaryAction
            | Self::CloseFocus
            | Self::ToggleLoading
            | Self::Tick { .. } => None,
        }
    }
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// No event currently fails; the `Result` keeps the signature stable for
/// the plugin shim.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, tab = ?state.tab).entered();

    if let Some(tab) = event.required_tab() {
        if tab != state.tab {
            tracing::debug!(required = ?tab, "event ignored on this tab");
            return Ok((false, vec![]));
        }
    }

    match event {
        Event::NextTab => Ok(switch_tab(state, state.tab.next())),
        Event::PrevTab => Ok(switch_tab(state, state.tab.previous())),
        Event::SelectTab(tab) => Ok(switch_tab(state, *tab)),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ToggleLoading => {
            state.loading = !state.loading;
            tracing::debug!(loading = state.loading, "loading preview toggled");
            Ok((true, vec![]))
        }
        Event::PrimaryAction => match state.tab {
            Tab::Scan => Ok(press_scan(state)),
            Tab::Sell => {
                tracing::debug!("following empty listings action");
                Ok(switch_tab(state, Tab::Collection))
            }
            Tab::Collection => {
                if let Some(item) = state.selected_item() {
                    tracing::debug!(item_id = %item.id, level = item.level().as_str(), "item activated");
                }
                Ok((false, vec![]))
            }
        },
        Event::NextFilter => {
            let filter = state.collection.filter().next();
            state.set_filter(filter);
            tracing::debug!(filter = filter.label(), "filter changed");
            Ok((true, vec![]))
        }
        Event::PrevFilter => {
            let filter = state.collection.filter().previous();
            state.set_filter(filter);
            tracing::debug!(filter = filter.label(), "filter changed");
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::MoveDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::MoveLeft => {
            state.move_selection_left();
            Ok((true, vec![]))
        }
        Event::MoveRight => {
            state.move_selection_right();
            Ok((true, vec![]))
        }
        Event::PressScan => Ok(press_scan(state)),
        Event::PreviewOverlay(overlay) => {
            if state.overlay == *overlay && *overlay != ScanOverlayState::Failed {
                return Ok((false, vec![]));
            }
            tracing::debug!(from = ?state.overlay, to = ?overlay, "overlay preview");
            let actions = state.set_overlay(*overlay);
            Ok((true, actions))
        }
        Event::PreviewScanning => {
            let next = match state.button {
                ScanButtonState::Scanning => ScanButtonState::Ready,
                ScanButtonState::Ready => ScanButtonState::Scanning,
                ScanButtonState::Cooldown | ScanButtonState::Disabled => {
                    return Ok((false, vec![]));
                }
            };
            let actions = state.set_button(next);
            Ok((true, actions))
        }
        Event::ToggleCamera => {
            let next = if state.button == ScanButtonState::Disabled {
                ScanButtonState::Ready
            } else {
                ScanButtonState::Disabled
            };
            tracing::debug!(button = ?next, "camera availability toggled");
            let actions = state.set_button(next);
            Ok((true, actions))
        }
        Event::ToggleFlash => {
            state.flash_on = !state.flash_on;
            Ok((true, vec![]))
        }
        Event::CycleError => {
            let actions = state.cycle_failure();
            tracing::debug!(error = state.failure.id(), "error preview");
            Ok((true, actions))
        }
        Event::Tick { elapsed } => {
            let changed = state.expire_timer(*elapsed);
            tracing::trace!(elapsed, changed, "timer tick");
            Ok((changed, vec![]))
        }
    }
}

fn switch_tab(state: &mut AppState, tab: Tab) -> (bool, Vec<Action>) {
    if state.tab == tab {
        return (false, vec![]);
    }
    tracing::debug!(from = ?state.tab, to = ?tab, "tab switched");
    state.tab = tab;
    (true, vec![])
}

fn press_scan(state: &mut AppState) -> (bool, Vec<Action>) {
    let before = state.button;
    let actions = state.press_scan();
    (state.button != before, actions)
}
