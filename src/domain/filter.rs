//! Collection filtering.
//!
//! Filters are order-preserving subsequence selections over the item list.
//! They never fail; an empty input produces an empty output for every
//! selector.

use super::item::{ConfidenceLevel, SavedItem};

/// Filter selector shown as chips above the collection grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionFilter {
    #[default]
    All,
    HighConfidence,
    NeedsReview,
    /// Items listed for sale. No listing state exists yet, so this always
    /// selects nothing.
    Listed,
}

impl CollectionFilter {
    /// Chip order, left to right.
    pub const ALL: [Self; 4] = [Self::All, Self::HighConfidence, Self::NeedsReview, Self::Listed];

    /// Chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::HighConfidence => "High Confidence",
            Self::NeedsReview => "Needs Review",
            Self::Listed => "Listed",
        }
    }

    /// Next chip to the right, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::HighConfidence,
            Self::HighConfidence => Self::NeedsReview,
            Self::NeedsReview => Self::Listed,
            Self::Listed => Self::All,
        }
    }

    /// Next chip to the left, wrapping to the last.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::All => Self::Listed,
            Self::HighConfidence => Self::All,
            Self::NeedsReview => Self::HighConfidence,
            Self::Listed => Self::NeedsReview,
        }
    }

    /// Whether a single item passes this filter.
    #[must_use]
    pub const fn matches(self, item: &SavedItem) -> bool {
        match self {
            Self::All => true,
            Self::HighConfidence => matches!(item.confidence.level, ConfidenceLevel::High),
            Self::NeedsReview => matches!(
                item.confidence.level,
                ConfidenceLevel::Low | ConfidenceLevel::Medium
            ),
            Self::Listed => false,
        }
    }
}

/// Returns the items selected by `filter`, in input order.
///
/// # Examples
///
/// ```
/// use thriftflip::domain::{filter_items, CollectionFilter, MockData};
///
/// let items = MockData::saved_items();
/// let everything = filter_items(&items, CollectionFilter::All);
/// assert_eq!(everything, items);
/// assert!(filter_items(&items, CollectionFilter::Listed).is_empty());
/// ```
#[must_use]
pub fn filter_items(items: &[SavedItem], filter: CollectionFilter) -> Vec<SavedItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Borrowing variant of [`filter_items`].
#[must_use]
pub fn filter_refs(items: &[SavedItem], filter: CollectionFilter) -> Vec<&SavedItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{Confidence, Identification, PriceRange, ThumbnailColor};
    use crate::domain::mock::MockData;
    use chrono::Utc;

    fn item(id: &str, score: u8) -> SavedItem {
        SavedItem::new(
            id,
            Utc::now(),
            Identification::new("Brand", id, "Tops", "tee", None),
            PriceRange::new(10.0, 20.0, 30.0, "USD").unwrap(),
            Confidence::from_score(score, vec![]).unwrap(),
            ThumbnailColor::new("#000000", "#111111"),
        )
    }

    fn mixed() -> Vec<SavedItem> {
        vec![
            item("a", 90),
            item("b", 10),
            item("c", 60),
            item("d", 30),
            item("e", 80),
        ]
    }

    fn ids(items: &[SavedItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn all_returns_input_unchanged() {
        let items = mixed();
        assert_eq!(filter_items(&items, CollectionFilter::All), items);
    }

    #[test]
    fn high_confidence_keeps_only_high_items_in_order() {
        let items = mixed();
        let high = filter_items(&items, CollectionFilter::HighConfidence);
        assert_eq!(ids(&high), vec!["a", "e"]);
        assert!(high.iter().all(|i| i.level() == ConfidenceLevel::High));
    }

    #[test]
    fn needs_review_selects_low_and_medium() {
        let items = mixed();
        assert_eq!(
            ids(&filter_items(&items, CollectionFilter::NeedsReview)),
            vec!["c", "d"]
        );
    }

    #[test]
    fn listed_is_always_empty() {
        assert!(filter_items(&mixed(), CollectionFilter::Listed).is_empty());
        assert!(filter_items(&MockData::saved_items(), CollectionFilter::Listed).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_output_for_every_selector() {
        for filter in CollectionFilter::ALL {
            assert!(filter_items(&[], filter).is_empty());
        }
    }

    #[test]
    fn review_high_and_insufficient_partition_by_level() {
        let items = mixed();
        let high = filter_items(&items, CollectionFilter::HighConfidence);
        let review = filter_items(&items, CollectionFilter::NeedsReview);
        let insufficient: Vec<SavedItem> = items
            .iter()
            .filter(|i| i.level() == ConfidenceLevel::Insufficient)
            .cloned()
            .collect();

        assert_eq!(high.len() + review.len() + insufficient.len(), items.len());
        for original in &items {
            let hits = [&high, &review, &insufficient]
                .iter()
                .filter(|group| group.iter().any(|i| i.id == original.id))
                .count();
            assert_eq!(hits, 1, "item {} must land in exactly one group", original.id);
        }
    }

    #[test]
    fn high_confidence_is_idempotent() {
        let items = mixed();
        let once = filter_items(&items, CollectionFilter::HighConfidence);
        let twice = filter_items(&once, CollectionFilter::HighConfidence);
        assert_eq!(once, twice);
    }

    #[test]
    fn refs_agree_with_owned_filter() {
        let items = MockData::saved_items();
        for filter in CollectionFilter::ALL {
            let owned = filter_items(&items, filter);
            let borrowed: Vec<SavedItem> =
                filter_refs(&items, filter).into_iter().cloned().collect();
            assert_eq!(owned, borrowed);
        }
    }

    #[test]
    fn chip_cycle_visits_every_filter() {
        let mut filter = CollectionFilter::All;
        for expected in CollectionFilter::ALL.iter().skip(1) {
            filter = filter.next();
            assert_eq!(filter, *expected);
        }
        assert_eq!(filter.next(), CollectionFilter::All);
        assert_eq!(CollectionFilter::All.previous(), CollectionFilter::Listed);
        for filter in CollectionFilter::ALL {
            assert_eq!(filter.next().previous(), filter);
        }
    }
}
