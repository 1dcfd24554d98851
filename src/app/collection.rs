//! Collection view-state.
//!
//! [`CollectionViewState`] owns the item list and the active filter. The
//! aggregate figures always describe the whole collection; only the grid is
//! filtered.

use crate::domain::{
    best_find, compute_aggregates, filter_refs, format_currency, format_profit, format_roi,
    Aggregates, CollectionFilter, SavedItem,
};

/// Placeholder shown when ROI is undefined because nothing was spent.
pub const ROI_PLACEHOLDER: &str = "—";

/// Items, the active filter and the acquisition cost they are measured
/// against.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionViewState {
    items: Vec<SavedItem>,
    filter: CollectionFilter,
    total_spent: f64,
}

impl CollectionViewState {
    #[must_use]
    pub fn new(items: Vec<SavedItem>, total_spent: f64) -> Self {
        Self {
            items,
            filter: CollectionFilter::All,
            total_spent,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[SavedItem] {
        &self.items
    }

    #[must_use]
    pub const fn filter(&self) -> CollectionFilter {
        self.filter
    }

    #[must_use]
    pub const fn total_spent(&self) -> f64 {
        self.total_spent
    }

    pub fn set_filter(&mut self, filter: CollectionFilter) {
        self.filter = filter;
    }

    /// Items that pass the active filter, in collection order.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&SavedItem> {
        let _span = tracing::debug_span!(
            "filter_items",
            filter = ?self.filter,
            total_items = self.items.len()
        )
        .entered();

        let filtered = filter_refs(&self.items, self.filter);
        tracing::debug!(filtered_count = filtered.len(), "collection filter applied");
        filtered
    }

    /// Aggregates over every item, regardless of the active filter.
    #[must_use]
    pub fn aggregates(&self) -> Aggregates {
        compute_aggregates(&self.items, self.total_spent)
    }

    /// `"$2,840"`
    #[must_use]
    pub fn total_value_text(&self) -> String {
        format_currency(self.aggregates().total_value)
    }

    /// `"+723%"`, or `"—"` when nothing was spent.
    #[must_use]
    pub fn roi_text(&self) -> String {
        self.aggregates()
            .roi_percent
            .map_or_else(|| ROI_PLACEHOLDER.to_string(), format_roi)
    }

    /// `"+$2,495"`
    #[must_use]
    pub fn profit_text(&self) -> String {
        format_profit(self.aggregates().total_value, self.total_spent)
    }

    /// `"$345"`
    #[must_use]
    pub fn spent_text(&self) -> String {
        format_currency(self.total_spent)
    }

    /// `"8"`
    #[must_use]
    pub fn item_count_text(&self) -> String {
        self.items.len().to_string()
    }

    /// `"$355"`, or `"$0"` for an empty collection.
    #[must_use]
    pub fn average_value_text(&self) -> String {
        format_currency(self.aggregates().average_value.unwrap_or(0.0))
    }

    /// The most valuable item in the collection.
    #[must_use]
    pub fn best_find(&self) -> Option<&SavedItem> {
        best_find(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockData;

    fn mock() -> CollectionViewState {
        CollectionViewState::new(MockData::saved_items(), MockData::TOTAL_SPENT)
    }

    #[test]
    fn display_strings_for_fixture_collection() {
        let state = mock();
        assert_eq!(state.total_value_text(), "$2,840");
        assert_eq!(state.roi_text(), "+723%");
        assert_eq!(state.profit_text(), "+$2,495");
        assert_eq!(state.spent_text(), "$345");
        assert_eq!(state.item_count_text(), "8");
        assert_eq!(state.average_value_text(), "$355");
        assert_eq!(
            state.best_find().map(|i| i.identification.item_name.as_str()),
            Some("Nuptse 700 Puffer")
        );
    }

    #[test]
    fn filter_changes_grid_but_not_aggregates() {
        let mut state = mock();
        let before = state.aggregates();

        state.set_filter(CollectionFilter::NeedsReview);
        let ids: Vec<&str> = state.filtered_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["item_002", "item_005"]);
        assert_eq!(state.aggregates(), before);

        state.set_filter(CollectionFilter::Listed);
        assert!(state.filtered_items().is_empty());
    }

    #[test]
    fn empty_collection_uses_placeholders() {
        let state = CollectionViewState::new(vec![], 0.0);
        assert_eq!(state.total_value_text(), "$0");
        assert_eq!(state.average_value_text(), "$0");
        assert_eq!(state.roi_text(), ROI_PLACEHOLDER);
        assert_eq!(state.profit_text(), "+$0");
        assert!(state.best_find().is_none());
    }
}
