//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting both
//! built-in themes and custom themes loaded from TOML files. It provides
//! utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `thriftflip-dark`: Charcoal background with green accents (default)
//! - `thriftflip-light`: White background with the same accent palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "#1F2123"
//! card = "#2A2C2E"
//! card_selected = "#34373A"
//! border = "#3A3C3E"
//! text_primary = "#FFFFFF"
//! text_secondary = "#9CA3AF"
//! text_tertiary = "#48484A"
//! gain_green = "#5AC53A"
//! gain_green_soft = "#88D56F"
//! gold = "#F6C86A"
//! warning = "#EB5D2A"
//! overlay_idle = "#FFFFFF"
//! ```
//!
//! # Example
//!
//! ```rust
//! use thriftflip::ui::Theme;
//!
//! let theme = Theme::from_name("thriftflip-dark").unwrap();
//! print!("{}Total{}", Theme::fg(&theme.colors.gain_green), Theme::reset());
//! ```

use crate::domain::error::{Result, ThriftFlipError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "thriftflip-dark";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Screen background.
    pub background: String,
    /// Card and chip background.
    pub card: String,
    /// Background of the selected card.
    pub card_selected: String,
    /// Separator lines.
    pub border: String,

    pub text_primary: String,
    pub text_secondary: String,
    pub text_tertiary: String,

    /// Positive values, high confidence, the scan button.
    pub gain_green: String,
    /// Secondary green used for the chart line.
    pub gain_green_soft: String,
    /// Medium confidence and the corrected tag.
    pub gold: String,
    /// Low confidence, failed scans, downward trends.
    pub warning: String,

    /// Scan frame brackets while searching. The camera view is always dark,
    /// so light themes still want a bright bracket here.
    #[serde(default = "default_overlay_idle")]
    pub overlay_idle: String,
}

fn default_overlay_idle() -> String {
    "#FFFFFF".to_string()
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use thriftflip::ui::Theme;
    ///
    /// let theme = Theme::from_name("thriftflip-light").unwrap();
    /// assert_eq!(theme.name, "thriftflip-light");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "thriftflip-dark" => include_str!("../../themes/thriftflip-dark.toml"),
            "thriftflip-light" => include_str!("../../themes/thriftflip-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ThriftFlipError::Io`] if the file cannot be read and
    /// [`ThriftFlipError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| ThriftFlipError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI blink escape sequence, used for the pulsing frame.
    #[must_use]
    pub const fn blink() -> &'static str {
        "\u{001b}[5m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`thriftflip-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in thriftflip-dark theme should always parse")
    }
}
