//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the ThriftFlip library
//! and the Zellij plugin system. It translates Zellij key and timer events
//! into library events and library actions into Zellij calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `Timer` events
//! 3. **Update**: Map events, delegate to `handle_event`, execute actions
//! 4. **Render**: Refresh the clock and viewport, call the library renderer
//!
//! # Keybindings
//!
//! Global:
//! - `Tab` / `Shift+Tab`: Next / previous tab
//! - `1` `2` `3`: Scan, My Finds, Sell
//! - `Enter`: Primary action of the screen
//! - `r`: Toggle loading placeholders
//! - `q` / `Esc`: Close plugin
//!
//! My Finds:
//! - `h` `j` `k` `l` / arrows: Move the card selection
//! - `f` or `]` / `F` or `[`: Next / previous filter
//!
//! Scan:
//! - `Space`: Scan
//! - `s` `l` `x`: Preview searching, locked and failed overlays
//! - `e`: Preview the next scan error
//! - `w`: Toggle the scanning preview
//! - `d`: Toggle camera availability
//! - `f`: Toggle flash

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use chrono::Utc;
use thriftflip::domain::ScanOverlayState;
use thriftflip::{handle_event, Action, Config, Event, Tab};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: thriftflip::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: thriftflip::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state and subscribes to events.
    ///
    /// No permissions are requested: the plugin only reads keys and timers
    /// and hides its own pane.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        thriftflip::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(
            theme = ?config.theme_name,
            total_spent = config.total_spent,
            start_tab = ?config.start_tab,
            "parsed configuration"
        );
        self.app = thriftflip::initialize(&config);

        subscribe(&[EventType::Key, EventType::Timer]);
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(elapsed) => Event::Tick { elapsed },
            _ => return false,
        };

        let _guard =
            tracing::debug_span!("plugin_update_event", event = ?our_event).entered();

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.clock = Utc::now();
        self.app.set_viewport(cols);
        thriftflip::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events for the active tab.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, tab = ?self.app.tab, "key event");

        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::PrevTab);
        }

        let global = match key.bare_key {
            BareKey::Tab => Some(Event::NextTab),
            BareKey::Enter => Some(Event::PrimaryAction),
            BareKey::Esc | BareKey::Char('q') => Some(Event::CloseFocus),
            BareKey::Char('r') => Some(Event::ToggleLoading),
            BareKey::Char(c) => Tab::from_shortcut(c).map(Event::SelectTab),
            _ => None,
        };
        if global.is_some() {
            return global;
        }

        match self.app.tab {
            Tab::Collection => Self::map_collection_key(key.bare_key),
            Tab::Scan => Self::map_scan_key(key.bare_key),
            Tab::Sell => None,
        }
    }

    fn map_collection_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Left | BareKey::Char('h') => Event::MoveLeft,
            BareKey::Down | BareKey::Char('j') => Event::MoveDown,
            BareKey::Up | BareKey::Char('k') => Event::MoveUp,
            BareKey::Right | BareKey::Char('l') => Event::MoveRight,
            BareKey::Char('f' | ']') => Event::NextFilter,
            BareKey::Char('F' | '[') => Event::PrevFilter,
            _ => return None,
        })
    }

    fn map_scan_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Char(' ') => Event::PressScan,
            BareKey::Char('s') => Event::PreviewOverlay(ScanOverlayState::Searching),
            BareKey::Char('l') => Event::PreviewOverlay(ScanOverlayState::Locked),
            BareKey::Char('x') => Event::PreviewOverlay(ScanOverlayState::Failed),
            BareKey::Char('e') => Event::CycleError,
            BareKey::Char('w') => Event::PreviewScanning,
            BareKey::Char('d') => Event::ToggleCamera,
            BareKey::Char('f') => Event::ToggleFlash,
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::SetTimeout(secs) => {
                tracing::debug!(secs, "scheduling timer");
                set_timeout(*secs);
            }
        }
    }
}
