//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: which tab is
//! open, the collection and its filter, grid selection, and the scan screen's
//! overlay and button states. It is mutated only by the event handler and
//! turned into a [`UIViewModel`] on demand.
//!
//! # Timers
//!
//! The scan button cooldown and the failed-overlay reset are driven by host
//! timers. Zellij reports a fired timer with its duration only, so the state
//! counts outstanding timers per kind and reverts a transient state only when
//! the last timer scheduled for it fires. Re-entering a transient state while
//! a timer is pending therefore extends it instead of cutting it short.

use super::actions::Action;
use super::collection::CollectionViewState;
use super::modes::Tab;
use crate::domain::scan::{COOLDOWN_SECS, FAILED_OVERLAY_SECS};
use crate::domain::{
    count_status, format_currency, format_range, format_roi, sold_median, CollectionFilter,
    CompListing, CompStatus, MockData, SavedItem, ScanButtonState, ScanError, ScanOverlayState,
    StatTrend,
};
use crate::ui::components::grid::{CARD_HEIGHT, CARD_WIDTH};
use crate::ui::styles::{error_icon, price_suffix};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardInfo, ChipInfo, CollectionView, CompCardInfo, CompsInfo, EmptyState, ErrorCardInfo,
    FooterInfo, HeaderInfo, HeroInfo, ScanView, ScreenView, SellView, StatCardInfo, TabInfo,
    UIViewModel,
};
use chrono::{DateTime, Duration, Utc};

/// Upper bound on cards per grid row.
const MAX_GRID_COLUMNS: usize = 4;

/// Rows used by everything on the collection screen except the grid.
const COLLECTION_CHROME_ROWS: usize = 17;

/// Number of scan errors the error preview cycles through.
const PREVIEW_ERROR_COUNT: usize = 7;

/// Scan error shown at a given position of the error preview.
fn preview_error(index: usize) -> ScanError {
    match index % PREVIEW_ERROR_COUNT {
        0 => ScanError::OcrFailed,
        1 => ScanError::NetworkUnavailable,
        2 => ScanError::Timeout,
        3 => ScanError::NoComps,
        4 => ScanError::RateLimited,
        5 => ScanError::CameraDenied,
        _ => ScanError::ServerError(
            "The pricing service returned an unexpected response.".to_string(),
        ),
    }
}

/// Which transient state a host timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    ButtonCooldown,
    OverlayReset,
}

impl TimerKind {
    const fn duration(self) -> f64 {
        match self {
            Self::ButtonCooldown => COOLDOWN_SECS,
            Self::OverlayReset => FAILED_OVERLAY_SECS,
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Screen currently shown.
    pub tab: Tab,

    /// Items, active filter and acquisition cost.
    pub collection: CollectionViewState,

    /// Zero-based index into the filtered items.
    ///
    /// Clamped whenever the filter changes; wraps during navigation.
    pub selected_index: usize,

    /// Cards per grid row, derived from the pane width.
    pub grid_columns: usize,

    /// Camera frame state.
    pub overlay: ScanOverlayState,

    /// Primary scan button state.
    pub button: ScanButtonState,

    /// Error shown while the overlay is `Failed`.
    pub failure: ScanError,

    /// Whether the torch indicator is lit.
    pub flash_on: bool,

    /// Comparable listings shown once a tag is locked.
    pub comps: Vec<CompListing>,

    /// Show loading placeholders in place of data.
    pub loading: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Reference time for relative ages and the chart's last day.
    pub clock: DateTime<Utc>,

    pending_cooldown_timers: u32,
    pending_overlay_timers: u32,
    failure_cursor: usize,
}

impl AppState {
    /// Creates a new application state on the default tab.
    #[must_use]
    pub fn new(collection: CollectionViewState, theme: Theme, clock: DateTime<Utc>) -> Self {
        Self {
            tab: Tab::default(),
            collection,
            selected_index: 0,
            grid_columns: 2,
            overlay: ScanOverlayState::default(),
            button: ScanButtonState::default(),
            failure: preview_error(0),
            flash_on: false,
            comps: MockData::comp_listings_at(clock.date_naive()),
            loading: false,
            theme,
            clock,
            pending_cooldown_timers: 0,
            pending_overlay_timers: 0,
            failure_cursor: 0,
        }
    }

    /// Records the pane size so grid navigation matches what is drawn.
    pub fn set_viewport(&mut self, cols: usize) {
        self.grid_columns = (cols / CARD_WIDTH).clamp(1, MAX_GRID_COLUMNS);
    }

    /// Number of items the grid is currently showing.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.collection.filtered_items().len()
    }

    /// The selected card's item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&SavedItem> {
        self.collection
            .filtered_items()
            .get(self.selected_index)
            .copied()
    }

    /// Switches the active filter and keeps the selection in bounds.
    pub fn set_filter(&mut self, filter: CollectionFilter) {
        self.collection.set_filter(filter);
        let count = self.visible_count();
        if count == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(count - 1);
        }
    }

    /// Moves selection to the next card, wrapping to the first.
    pub fn move_selection_right(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves selection to the previous card, wrapping to the last.
    pub fn move_selection_left(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves selection one grid row down. From the last row it wraps to the
    /// top of the same column.
    pub fn move_selection_down(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            return;
        }
        let next = self.selected_index + self.grid_columns;
        self.selected_index = if next < count {
            next
        } else {
            self.selected_index % self.grid_columns
        };
    }

    /// Moves selection one grid row up. From the first row it wraps to the
    /// lowest card in the same column.
    pub fn move_selection_up(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            return;
        }
        if self.selected_index >= self.grid_columns {
            self.selected_index -= self.grid_columns;
            return;
        }
        let column = self.selected_index;
        let last_row = (count - 1) / self.grid_columns;
        let candidate = last_row * self.grid_columns + column;
        self.selected_index = if candidate < count {
            candidate
        } else {
            candidate.saturating_sub(self.grid_columns)
        };
    }

    /// Presses the scan button. Only a `Ready` button reacts.
    pub fn press_scan(&mut self) -> Vec<Action> {
        if !self.button.accepts_press() {
            tracing::debug!(button = ?self.button, "scan press ignored");
            return vec![];
        }
        self.set_button(self.button.press())
    }

    /// Puts the button into `state`, scheduling its reset if it expires.
    pub fn set_button(&mut self, state: ScanButtonState) -> Vec<Action> {
        self.button = state;
        if state.expires_after().is_some() {
            self.schedule(TimerKind::ButtonCooldown)
        } else {
            vec![]
        }
    }

    /// Puts the overlay into `state`, scheduling its reset if it expires.
    pub fn set_overlay(&mut self, state: ScanOverlayState) -> Vec<Action> {
        self.overlay = state;
        if state.expires_after().is_some() {
            self.schedule(TimerKind::OverlayReset)
        } else {
            vec![]
        }
    }

    /// Advances the error preview and shows it on a failed overlay.
    pub fn cycle_failure(&mut self) -> Vec<Action> {
        self.failure_cursor = (self.failure_cursor + 1) % PREVIEW_ERROR_COUNT;
        self.failure = preview_error(self.failure_cursor);
        self.set_overlay(ScanOverlayState::Failed)
    }

    /// Handles a fired host timer. Returns whether anything visible changed.
    pub fn expire_timer(&mut self, elapsed: f64) -> bool {
        let Some(kind) = self.resolve_timer(elapsed) else {
            tracing::debug!(elapsed, "timer fired with nothing pending");
            return false;
        };

        match kind {
            TimerKind::ButtonCooldown => {
                self.pending_cooldown_timers -= 1;
                if self.pending_cooldown_timers == 0 && self.button == ScanButtonState::Cooldown {
                    self.button = ScanButtonState::Ready;
                    return true;
                }
            }
            TimerKind::OverlayReset => {
                self.pending_overlay_timers -= 1;
                if self.pending_overlay_timers == 0 && self.overlay == ScanOverlayState::Failed {
                    self.overlay = ScanOverlayState::Searching;
                    return true;
                }
            }
        }
        false
    }

    fn schedule(&mut self, kind: TimerKind) -> Vec<Action> {
        match kind {
            TimerKind::ButtonCooldown => self.pending_cooldown_timers += 1,
            TimerKind::OverlayReset => self.pending_overlay_timers += 1,
        }
        vec![Action::SetTimeout(kind.duration())]
    }

    fn resolve_timer(&self, elapsed: f64) -> Option<TimerKind> {
        match (self.pending_cooldown_timers > 0, self.pending_overlay_timers > 0) {
            (false, false) => None,
            (true, false) => Some(TimerKind::ButtonCooldown),
            (false, true) => Some(TimerKind::OverlayReset),
            (true, true) => {
                let to_cooldown = (elapsed - COOLDOWN_SECS).abs();
                let to_overlay = (elapsed - FAILED_OVERLAY_SECS).abs();
                Some(if to_cooldown <= to_overlay {
                    TimerKind::ButtonCooldown
                } else {
                    TimerKind::OverlayReset
                })
            }
        }
    }

    /// Computes a renderable UI view model from current state and pane size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let screen = match self.tab {
            Tab::Scan => ScreenView::Scan(self.compute_scan_view()),
            Tab::Collection => ScreenView::Collection(self.compute_collection_view(rows, cols)),
            Tab::Sell => ScreenView::Sell(SellView {
                empty_state: EmptyState {
                    message: "No listings yet".to_string(),
                    subtitle: "Save a scan result, then list it directly to eBay from your collection."
                        .to_string(),
                    action: Some("Go to My Finds".to_string()),
                },
            }),
        };

        UIViewModel {
            tabs: Tab::ALL
                .into_iter()
                .map(|tab| TabInfo {
                    label: tab.label().to_string(),
                    shortcut: tab.shortcut(),
                    is_active: tab == self.tab,
                })
                .collect(),
            header: self.compute_header(),
            screen,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        match self.tab {
            Tab::Scan => HeaderInfo {
                title: "Scan".to_string(),
                subtitle: "Price a find from its tag".to_string(),
            },
            Tab::Collection => {
                let count = self.collection.items().len();
                let noun = if count == 1 { "item" } else { "items" };
                HeaderInfo {
                    title: "My Finds".to_string(),
                    subtitle: format!(
                        "{count} {noun} · {} value",
                        self.collection.total_value_text()
                    ),
                }
            }
            Tab::Sell => HeaderInfo {
                title: "Sell".to_string(),
                subtitle: "eBay Listings".to_string(),
            },
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.tab {
            Tab::Scan => {
                "Tab: switch  Space/Enter: scan  s/l/x: overlay  e: error  w: busy  d: camera  f: flash  r: loading  q: quit"
            }
            Tab::Collection => {
                "Tab: switch  h/j/k/l: move  f/F or ]/[: filter  r: loading  q: quit"
            }
            Tab::Sell => "Tab: switch  Enter: go to My Finds  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_scan_view(&self) -> ScanView {
        let camera_denied = ScanError::CameraDenied;
        let error = if self.button == ScanButtonState::Disabled {
            Some(&camera_denied)
        } else if self.overlay == ScanOverlayState::Failed {
            Some(&self.failure)
        } else {
            None
        };

        ScanView {
            overlay: self.overlay,
            button: self.button,
            flash_on: self.flash_on,
            guidance: "Center the tag in the frame".to_string(),
            error: error.map(|e| ErrorCardInfo {
                icon: error_icon(e).to_string(),
                title: e.title().to_string(),
                message: e.message().to_string(),
                retryable: e.is_retryable(),
            }),
            comps: self.tag_locked().then(|| self.compute_comps()),
        }
    }

    fn tag_locked(&self) -> bool {
        self.overlay == ScanOverlayState::Locked && self.button != ScanButtonState::Disabled
    }

    fn compute_comps(&self) -> CompsInfo {
        let today = self.clock.date_naive();
        let median = sold_median(&self.comps).map_or_else(|| "—".to_string(), format_currency);
        let cards = if self.loading {
            vec![]
        } else {
            self.comps
                .iter()
                .map(|comp| CompCardInfo {
                    title: comp.title.clone(),
                    price: format_currency(comp.price),
                    status: comp.status,
                    detail: comp.sold_ago(today).map_or_else(
                        || format!("{} · listed", comp.source),
                        |age| format!("{} · {age}", comp.source),
                    ),
                })
                .collect()
        };

        CompsInfo {
            title: "Comparable listings".to_string(),
            summary: format!(
                "{} sold · {} active · median {median}",
                count_status(&self.comps, CompStatus::Sold),
                count_status(&self.comps, CompStatus::Active)
            ),
            cards,
            loading: self.loading,
        }
    }

    fn compute_collection_view(&self, rows: usize, cols: usize) -> CollectionView {
        let aggregates = self.collection.aggregates();
        let chart = MockData::portfolio_chart_data(self.clock.date_naive(), aggregates.total_value)
            .into_iter()
            .map(|point| point.value)
            .collect::<Vec<_>>();

        let hero = HeroInfo {
            value: self.collection.total_value_text(),
            label: "Total Collection Value".to_string(),
            profit_line: format!(
                "{} from {} spent",
                self.collection.profit_text(),
                self.collection.spent_text()
            ),
            roi: self.collection.roi_text(),
        };

        let chips = CollectionFilter::ALL
            .into_iter()
            .map(|filter| ChipInfo {
                label: filter.label().to_string(),
                is_active: filter == self.collection.filter(),
            })
            .collect();

        let stats = self.compute_stat_cards(&chart);
        let columns = (cols / CARD_WIDTH).clamp(1, MAX_GRID_COLUMNS);
        let filtered = self.collection.filtered_items();

        if filtered.is_empty() {
            return CollectionView {
                hero,
                chart,
                stats,
                chips,
                cards: vec![],
                columns,
                empty_state: Some(EmptyState {
                    message: "No items here".to_string(),
                    subtitle: "Try a different filter or scan more items to build your collection."
                        .to_string(),
                    action: None,
                }),
                loading: self.loading,
            };
        }

        let visible_rows = (rows.saturating_sub(COLLECTION_CHROME_ROWS) / CARD_HEIGHT).max(1);
        let total_rows = (filtered.len() + columns - 1) / columns;
        let selected_row = self.selected_index / columns;

        let first_row = if total_rows <= visible_rows {
            0
        } else {
            selected_row
                .saturating_sub(visible_rows / 2)
                .min(total_rows - visible_rows)
        };
        let last_row = (first_row + visible_rows).min(total_rows);

        let start = first_row * columns;
        let end = (last_row * columns).min(filtered.len());

        let cards = filtered[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| self.compute_card(item, start + offset == self.selected_index))
            .collect();

        CollectionView {
            hero,
            chart,
            stats,
            chips,
            cards,
            columns,
            empty_state: None,
            loading: self.loading,
        }
    }

    fn compute_stat_cards(&self, chart: &[f64]) -> Vec<StatCardInfo> {
        let week_ago = self.clock - Duration::days(7);
        let added_this_week = self
            .collection
            .items()
            .iter()
            .filter(|item| item.timestamp > week_ago)
            .count();

        let items_card = StatCardInfo {
            title: "Items".to_string(),
            value: self.collection.item_count_text(),
            trend: if added_this_week > 0 {
                StatTrend::Up
            } else {
                StatTrend::Neutral
            },
            trend_text: format!("+{added_this_week} this week"),
        };

        let weekly_change = weekly_change_percent(chart);
        let average_card = StatCardInfo {
            title: "Avg Value".to_string(),
            value: self.collection.average_value_text(),
            trend: match weekly_change {
                Some(change) if change > 0.5 => StatTrend::Up,
                Some(change) if change < -0.5 => StatTrend::Down,
                _ => StatTrend::Neutral,
            },
            trend_text: weekly_change
                .map_or_else(|| "—".to_string(), |c| format!("{} 7d", format_roi(c))),
        };

        let best_card = self.collection.best_find().map_or_else(
            || StatCardInfo {
                title: "Best Find".to_string(),
                value: "—".to_string(),
                trend: StatTrend::Neutral,
                trend_text: "Nothing yet".to_string(),
            },
            |item| StatCardInfo {
                title: "Best Find".to_string(),
                value: format_currency(item.price_range.median),
                trend: StatTrend::Neutral,
                trend_text: item.identification.item_name.clone(),
            },
        );

        vec![items_card, average_card, best_card]
    }

    fn compute_card(&self, item: &SavedItem, is_selected: bool) -> CardInfo {
        let level = item.level();
        CardInfo {
            brand: item.identification.brand.clone(),
            name: item.identification.item_name.clone(),
            price: format!(
                "{}{}",
                format_currency(item.price_range.median),
                price_suffix(level)
            ),
            range: format_range(item.price_range.low, item.price_range.high),
            added: item.added_ago(self.clock),
            level,
            score: item.confidence.score,
            corrected: item.corrected,
            accent: item.thumbnail_color.primary.clone(),
            is_selected,
        }
    }
}

/// Percent change between the last chart point and the one seven days
/// earlier, `None` when the series is too short or starts at zero.
fn weekly_change_percent(chart: &[f64]) -> Option<f64> {
    let last = *chart.last()?;
    let earlier = *chart.get(chart.len().checked_sub(8)?)?;
    if earlier == 0.0 {
        return None;
    }
    Some((last - earlier) / earlier * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockData;

    fn state() -> AppState {
        let clock = Utc::now();
        AppState::new(
            CollectionViewState::new(MockData::saved_items_at(clock), MockData::TOTAL_SPENT),
            Theme::default(),
            clock,
        )
    }

    fn collection_view(vm: &UIViewModel) -> &CollectionView {
        match &vm.screen {
            ScreenView::Collection(view) => view,
            other => panic!("expected collection screen, got {other:?}"),
        }
    }

    #[test]
    fn grid_navigation_wraps() {
        let mut s = state();
        s.grid_columns = 3;

        s.move_selection_left();
        assert_eq!(s.selected_index, 7);
        s.move_selection_right();
        assert_eq!(s.selected_index, 0);

        s.move_selection_down();
        assert_eq!(s.selected_index, 3);
        s.move_selection_down();
        assert_eq!(s.selected_index, 6);
        s.move_selection_down();
        assert_eq!(s.selected_index, 0);

        // Column 2 has items 2 and 5 only; going up from row 0 lands on 5.
        s.selected_index = 2;
        s.move_selection_up();
        assert_eq!(s.selected_index, 5);
        s.selected_index = 1;
        s.move_selection_up();
        assert_eq!(s.selected_index, 7);
    }

    #[test]
    fn filter_change_clamps_selection() {
        let mut s = state();
        s.selected_index = 7;
        s.set_filter(CollectionFilter::NeedsReview);
        assert_eq!(s.selected_index, 1);
        assert_eq!(s.selected_item().map(|i| i.id.as_str()), Some("item_005"));

        s.set_filter(CollectionFilter::Listed);
        assert_eq!(s.selected_index, 0);
        assert!(s.selected_item().is_none());
        s.move_selection_down();
        assert_eq!(s.selected_index, 0);
    }

    #[test]
    fn viewport_sets_column_count() {
        let mut s = state();
        s.set_viewport(20);
        assert_eq!(s.grid_columns, 1);
        s.set_viewport(90);
        assert_eq!(s.grid_columns, 3);
        s.set_viewport(400);
        assert_eq!(s.grid_columns, 4);
    }

    #[test]
    fn cooldown_returns_to_ready_after_its_timer() {
        let mut s = state();
        assert_eq!(s.press_scan(), vec![Action::SetTimeout(1.0)]);
        assert_eq!(s.button, ScanButtonState::Cooldown);

        assert!(s.press_scan().is_empty());
        assert!(s.expire_timer(1.0));
        assert_eq!(s.button, ScanButtonState::Ready);
        assert!(!s.expire_timer(1.0));
    }

    #[test]
    fn failed_overlay_resets_only_on_its_own_timer() {
        let mut s = state();
        assert_eq!(
            s.set_overlay(ScanOverlayState::Failed),
            vec![Action::SetTimeout(2.0)]
        );
        s.press_scan();

        assert!(s.expire_timer(1.0));
        assert_eq!(s.button, ScanButtonState::Ready);
        assert_eq!(s.overlay, ScanOverlayState::Failed);

        assert!(s.expire_timer(2.0));
        assert_eq!(s.overlay, ScanOverlayState::Searching);
    }

    #[test]
    fn refailing_extends_the_failed_overlay() {
        let mut s = state();
        s.set_overlay(ScanOverlayState::Failed);
        s.set_overlay(ScanOverlayState::Failed);
        assert!(!s.expire_timer(2.0));
        assert_eq!(s.overlay, ScanOverlayState::Failed);
        assert!(s.expire_timer(2.0));
        assert_eq!(s.overlay, ScanOverlayState::Searching);
    }

    #[test]
    fn locking_cancels_the_reset() {
        let mut s = state();
        s.set_overlay(ScanOverlayState::Failed);
        s.set_overlay(ScanOverlayState::Locked);
        assert!(!s.expire_timer(2.0));
        assert_eq!(s.overlay, ScanOverlayState::Locked);
    }

    #[test]
    fn collection_viewmodel_summarizes_fixtures() {
        let s = state();
        let vm = s.compute_viewmodel(40, 90);
        assert_eq!(vm.header.title, "My Finds");
        assert_eq!(vm.header.subtitle, "8 items · $2,840 value");

        let view = collection_view(&vm);
        assert_eq!(view.hero.value, "$2,840");
        assert_eq!(view.hero.profit_line, "+$2,495 from $345 spent");
        assert_eq!(view.hero.roi, "+723%");
        assert_eq!(view.chart.len(), 25);
        assert_eq!(view.chart.last(), Some(&2840.0));
        assert_eq!(view.stats[0].trend_text, "+7 this week");
        assert_eq!(view.stats[1].value, "$355");
        assert_eq!(view.stats[2].value, "$745");
        assert_eq!(view.stats[2].trend_text, "Nuptse 700 Puffer");
        assert_eq!(view.columns, 3);
        assert!(view.chips[0].is_active);
    }

    #[test]
    fn cards_carry_formatted_prices() {
        let s = state();
        let vm = s.compute_viewmodel(60, 60);
        let view = collection_view(&vm);
        let first = &view.cards[0];
        assert_eq!(first.brand, "Patagonia");
        assert_eq!(first.price, "$175");
        assert_eq!(first.range, "$95 – $245");
        assert_eq!(first.added, "2d ago");
        assert!(first.is_selected);
        assert!(view.cards.iter().any(|c| c.corrected));
    }

    #[test]
    fn grid_window_follows_selection() {
        let mut s = state();
        s.selected_index = 7;
        // One card row visible, two columns.
        let vm = s.compute_viewmodel(COLLECTION_CHROME_ROWS + CARD_HEIGHT, 60);
        let view = collection_view(&vm);
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[1].brand, "Burberry");
        assert!(view.cards[1].is_selected);
    }

    #[test]
    fn short_collection_fits_without_scrolling() {
        let mut s = state();
        s.selected_index = 7;
        // Single column with room for ten card rows.
        let vm = s.compute_viewmodel(COLLECTION_CHROME_ROWS + 10 * CARD_HEIGHT, 40);
        let view = collection_view(&vm);
        assert_eq!(view.columns, 1);
        assert_eq!(view.cards.len(), 8);
        assert_eq!(view.cards[0].brand, "Patagonia");
        assert!(view.cards[7].is_selected);
    }

    #[test]
    fn window_stops_at_the_last_row() {
        let mut s = state();
        s.selected_index = 6;
        // Single column with room for three card rows.
        let vm = s.compute_viewmodel(COLLECTION_CHROME_ROWS + 3 * CARD_HEIGHT, 40);
        let view = collection_view(&vm);
        assert_eq!(view.cards.len(), 3);
        assert!(view.cards[1].is_selected);
        assert_eq!(view.cards[2].brand, "Burberry");
    }

    #[test]
    fn empty_filter_shows_empty_state() {
        let mut s = state();
        s.set_filter(CollectionFilter::Listed);
        let vm = s.compute_viewmodel(40, 90);
        let view = collection_view(&vm);
        assert!(view.cards.is_empty());
        assert_eq!(
            view.empty_state.as_ref().map(|e| e.message.as_str()),
            Some("No items here")
        );
        assert_eq!(view.hero.value, "$2,840");
    }

    #[test]
    fn scan_view_reports_errors() {
        let mut s = state();
        s.tab = Tab::Scan;
        s.set_overlay(ScanOverlayState::Failed);
        let vm = s.compute_viewmodel(30, 80);
        let ScreenView::Scan(view) = &vm.screen else {
            panic!("expected scan screen");
        };
        let error = view.error.as_ref().unwrap();
        assert_eq!(error.title, "Couldn't read the tag");
        assert!(error.retryable);

        s.set_button(ScanButtonState::Disabled);
        let vm = s.compute_viewmodel(30, 80);
        let ScreenView::Scan(view) = &vm.screen else {
            panic!("expected scan screen");
        };
        assert_eq!(
            view.error.as_ref().map(|e| e.title.as_str()),
            Some("Camera access needed")
        );
    }

    #[test]
    fn locked_tag_shows_comps() {
        let mut s = state();
        s.tab = Tab::Scan;
        let vm = s.compute_viewmodel(30, 80);
        let ScreenView::Scan(view) = &vm.screen else {
            panic!("expected scan screen");
        };
        assert!(view.comps.is_none());

        s.set_overlay(ScanOverlayState::Locked);
        let vm = s.compute_viewmodel(30, 80);
        let ScreenView::Scan(view) = &vm.screen else {
            panic!("expected scan screen");
        };
        let comps = view.comps.as_ref().unwrap();
        assert_eq!(comps.summary, "3 sold · 1 active · median $65");
        assert_eq!(comps.cards.len(), 4);
        assert_eq!(comps.cards[0].price, "$65");
        assert_eq!(comps.cards[0].detail, "eBay · 2d ago");
        assert_eq!(comps.cards[1].status, CompStatus::Active);
        assert_eq!(comps.cards[1].detail, "eBay · listed");

        s.set_button(ScanButtonState::Disabled);
        let vm = s.compute_viewmodel(30, 80);
        let ScreenView::Scan(view) = &vm.screen else {
            panic!("expected scan screen");
        };
        assert!(view.comps.is_none());
    }

    #[test]
    fn loading_hides_data_behind_placeholders() {
        let mut s = state();
        s.loading = true;
        let vm = s.compute_viewmodel(40, 90);
        assert!(collection_view(&vm).loading);

        s.tab = Tab::Scan;
        s.set_overlay(ScanOverlayState::Locked);
        let vm = s.compute_viewmodel(30, 80);
        let ScreenView::Scan(view) = &vm.screen else {
            panic!("expected scan screen");
        };
        let comps = view.comps.as_ref().unwrap();
        assert!(comps.loading);
        assert!(comps.cards.is_empty());
    }

    #[test]
    fn error_preview_cycles_every_variant() {
        let mut s = state();
        let mut seen = vec![s.failure.id()];
        for _ in 1..PREVIEW_ERROR_COUNT {
            s.cycle_failure();
            seen.push(s.failure.id());
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 7);
        assert_eq!(s.overlay, ScanOverlayState::Failed);
    }

    #[test]
    fn weekly_change() {
        let chart: Vec<f64> = (1..=8).map(f64::from).collect();
        assert_eq!(weekly_change_percent(&chart), Some(700.0));
        assert_eq!(weekly_change_percent(&[1.0, 2.0]), None);
    }
}
