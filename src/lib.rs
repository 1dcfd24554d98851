//! ThriftFlip: a Zellij plugin for pricing and tracking thrift finds.
//!
//! ThriftFlip renders three screens inside a Zellij pane:
//! - **Scan**: a camera frame with overlay and scan button states
//! - **My Finds**: collection value, ROI, a portfolio sparkline, stat cards,
//!   filter chips and a grid of saved items
//! - **Sell**: listings, currently an empty state pointing back to the
//!   collection
//!
//! The collection is seeded from built-in mock data; there is no camera,
//! network or persistence behind the screens.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and timers                        │
//! │  - Collection view-state                            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - Theme and semantic styles                        │
//! │  - Components and screen layouts                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure Layers                     │
//! │  - Items, filters, aggregates, mock data (domain/)  │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/thriftflip.wasm" {
//!         theme "thriftflip-light"
//!         total_spent "420"
//!         start_tab "scan"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use thriftflip::{handle_event, initialize, Config, Event, Tab};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.tab, Tab::Collection);
//!
//! for event in [Event::NextFilter, Event::MoveRight, Event::SelectTab(Tab::Scan)] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.tab, Tab::Scan);
//! # Ok::<(), thriftflip::ThriftFlipError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, CollectionViewState, Event, Tab};
pub use domain::{MockData, Result, ThriftFlipError};
pub use ui::Theme;

use chrono::Utc;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/thriftflip.wasm" {
///     theme "thriftflip-dark"
///     theme_file "/path/to/theme.toml"
///     total_spent "345"
///     start_tab "collection"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Built-in theme name: `thriftflip-dark` or `thriftflip-light`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Acquisition cost the collection's ROI is measured against.
    pub total_spent: f64,

    /// Screen shown when the plugin opens.
    pub start_tab: Tab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            total_spent: MockData::TOTAL_SPENT,
            start_tab: Tab::default(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`, `theme_file`, `trace_level`: copied as-is
    /// - `total_spent`: non-negative number; anything else falls back to 345
    /// - `start_tab`: `scan`, `collection` or `sell`; anything else falls
    ///   back to the collection
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use thriftflip::{Config, Tab};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("total_spent".to_string(), "500".to_string());
    /// map.insert("start_tab".to_string(), "scan".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.total_spent, 500.0);
    /// assert_eq!(config.start_tab, Tab::Scan);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let total_spent = config.get("total_spent").map_or(MockData::TOTAL_SPENT, |raw| {
            parse_total_spent(raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid total_spent, using default");
                MockData::TOTAL_SPENT
            })
        });

        let start_tab = config.get("start_tab").map_or_else(Tab::default, |name| {
            Tab::from_name(name).unwrap_or_else(|| {
                tracing::debug!(start_tab = %name, "unknown start tab, using collection");
                Tab::default()
            })
        });

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            total_spent,
            start_tab,
        }
    }
}

fn parse_total_spent(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ThriftFlipError::Config(format!("total_spent is not a number: {raw:?}")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ThriftFlipError::Config(format!(
            "total_spent must be a non-negative amount: {raw:?}"
        )));
    }
    Ok(value)
}

/// Initializes the plugin with configuration.
///
/// Loads the theme (from file, name, or default), seeds the collection with
/// the mock items dated relative to now, and opens the configured tab.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing thriftflip plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let clock = Utc::now();
    let collection = CollectionViewState::new(MockData::saved_items_at(clock), config.total_spent);
    tracing::debug!(
        item_count = collection.items().len(),
        total_spent = config.total_spent,
        "collection seeded"
    );

    let mut state = AppState::new(collection, theme, clock);
    state.tab = config.start_tab;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_zellij(&map(&[
            ("theme", "thriftflip-light"),
            ("theme_file", "~/themes/mine.toml"),
            ("trace_level", "debug"),
            ("total_spent", " 120.5 "),
            ("start_tab", "Sell"),
        ]));
        assert_eq!(config.theme_name.as_deref(), Some("thriftflip-light"));
        assert_eq!(config.theme_file.as_deref(), Some("~/themes/mine.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!((config.total_spent - 120.5).abs() < f64::EPSILON);
        assert_eq!(config.start_tab, Tab::Sell);
    }

    #[test]
    fn invalid_values_fall_back() {
        for raw in ["abc", "-10", "NaN", "inf"] {
            let config = Config::from_zellij(&map(&[("total_spent", raw)]));
            assert!((config.total_spent - 345.0).abs() < f64::EPSILON, "{raw}");
        }
        let config = Config::from_zellij(&map(&[("start_tab", "cart")]));
        assert_eq!(config.start_tab, Tab::Collection);
    }

    #[test]
    fn zero_spent_is_allowed() {
        let config = Config::from_zellij(&map(&[("total_spent", "0")]));
        assert_eq!(config.total_spent, 0.0);
        let state = initialize(&config);
        assert_eq!(state.collection.roi_text(), "—");
    }

    #[test]
    fn initialize_applies_config() {
        let state = initialize(&Config {
            theme_name: Some("thriftflip-light".to_string()),
            start_tab: Tab::Scan,
            ..Config::default()
        });
        assert_eq!(state.theme.name, "thriftflip-light");
        assert_eq!(state.tab, Tab::Scan);
        assert_eq!(state.collection.items().len(), 8);
    }

    #[test]
    fn missing_theme_falls_back_to_default() {
        let state = initialize(&Config {
            theme_name: Some("nope".to_string()),
            theme_file: None,
            ..Config::default()
        });
        assert_eq!(state.theme.name, ui::theme::DEFAULT_THEME);
    }
}
