//! Screen selection for the application.
//!
//! The plugin shows one of three screens at a time, picked from a tab bar.
//! The active [`Tab`] decides which keybindings are live and which view model
//! the renderer builds.

/// One of the three top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Camera frame and scan button.
    Scan,
    /// "My Finds": portfolio summary, filters and item grid.
    #[default]
    Collection,
    /// eBay listings (always empty).
    Sell,
}

impl Tab {
    /// Tab bar order, left to right.
    pub const ALL: [Self; 3] = [Self::Scan, Self::Collection, Self::Sell];

    /// Label shown in the tab bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scan => "Scan",
            Self::Collection => "My Finds",
            Self::Sell => "Sell",
        }
    }

    /// Number key that jumps to this tab.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Self::Scan => '1',
            Self::Collection => '2',
            Self::Sell => '3',
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Scan => Self::Collection,
            Self::Collection => Self::Sell,
            Self::Sell => Self::Scan,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Scan => Self::Sell,
            Self::Collection => Self::Scan,
            Self::Sell => Self::Collection,
        }
    }

    /// Parses a configuration value such as `"sell"` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "scan" => Some(Self::Scan),
            "collection" | "finds" | "my finds" => Some(Self::Collection),
            "sell" => Some(Self::Sell),
            _ => None,
        }
    }

    /// Tab bound to a number key.
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.shortcut() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_in_both_directions() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().previous(), tab);
        }
        assert_eq!(Tab::Sell.next(), Tab::Scan);
    }

    #[test]
    fn parses_names_and_shortcuts() {
        assert_eq!(Tab::from_name(" Sell "), Some(Tab::Sell));
        assert_eq!(Tab::from_name("collection"), Some(Tab::Collection));
        assert_eq!(Tab::from_name("profile"), None);
        assert_eq!(Tab::from_shortcut('1'), Some(Tab::Scan));
        assert_eq!(Tab::from_shortcut('9'), None);
        assert_eq!(Tab::default(), Tab::Collection);
    }
}
