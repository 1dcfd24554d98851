//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready strings and closed enums only; all formatting and windowing
//! happens before they are built.

use crate::domain::{CompStatus, ConfidenceLevel, ScanButtonState, ScanOverlayState, StatTrend};

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Tab bar entries, left to right.
    pub tabs: Vec<TabInfo>,

    /// Screen title block.
    pub header: HeaderInfo,

    /// Screen-specific content.
    pub screen: ScreenView,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// One entry in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub label: String,
    pub shortcut: char,
    pub is_active: bool,
}

/// Screen title and subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Content of the active screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Scan(ScanView),
    Collection(CollectionView),
    Sell(SellView),
}

/// The "My Finds" screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView {
    pub hero: HeroInfo,
    /// Portfolio values, oldest first.
    pub chart: Vec<f64>,
    pub stats: Vec<StatCardInfo>,
    pub chips: Vec<ChipInfo>,
    /// Cards in the visible window, row-major.
    pub cards: Vec<CardInfo>,
    /// Cards per grid row.
    pub columns: usize,
    /// Shown instead of the grid when the filter selects nothing.
    pub empty_state: Option<EmptyState>,
    /// Draw placeholders for the hero, stats and grid instead of data.
    pub loading: bool,
}

/// Total value block at the top of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroInfo {
    /// `"$2,840"`
    pub value: String,
    /// `"Total Collection Value"`
    pub label: String,
    /// `"+$2,495 from $345 spent"`
    pub profit_line: String,
    /// `"+723%"` or `"—"`
    pub roi: String,
}

/// Small summary card under the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCardInfo {
    pub title: String,
    pub value: String,
    pub trend: StatTrend,
    pub trend_text: String,
}

/// Filter chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipInfo {
    pub label: String,
    pub is_active: bool,
}

/// One collection card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    pub brand: String,
    pub name: String,
    /// Median with an `" est."` suffix for weak estimates.
    pub price: String,
    /// `"$95 – $245"`
    pub range: String,
    /// `"2d ago"`
    pub added: String,
    pub level: ConfidenceLevel,
    pub score: u8,
    pub corrected: bool,
    /// Thumbnail primary color, drawn as a swatch.
    pub accent: String,
    pub is_selected: bool,
}

/// Centered placeholder card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// Label of the button under the message, if any.
    pub action: Option<String>,
}

/// The camera screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanView {
    pub overlay: ScanOverlayState,
    pub button: ScanButtonState,
    pub flash_on: bool,
    pub guidance: String,
    pub error: Option<ErrorCardInfo>,
    /// Comparable listings, once a tag is locked.
    pub comps: Option<CompsInfo>,
}

/// Comparable listings strip under the camera frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompsInfo {
    /// `"Comparable listings"`
    pub title: String,
    /// `"3 sold · 1 active · median $65"`
    pub summary: String,
    pub cards: Vec<CompCardInfo>,
    /// Draw placeholder cards instead of `cards`.
    pub loading: bool,
}

/// One comparable listing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompCardInfo {
    pub title: String,
    /// `"$65"`
    pub price: String,
    pub status: CompStatus,
    /// `"eBay · 2d ago"`
    pub detail: String,
}

/// Inline error card on the scan screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCardInfo {
    pub icon: String,
    pub title: String,
    pub message: String,
    pub retryable: bool,
}

/// The listings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellView {
    pub empty_state: EmptyState,
}
