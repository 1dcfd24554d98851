//! Built-in fixture data.
//!
//! The collection is a fixed list of eight items with hardcoded prices and
//! confidence scores. Timestamps are relative to the moment the list is
//! built so "added" ages stay plausible. A handful of comparable listings
//! for the first item stand in for a scan result.

use super::comp::{CompListing, CompStatus};
use super::item::{
    Confidence, ConfidenceFactor, ConfidenceLevel, Identification, PriceRange, SavedItem,
    ThumbnailColor,
};
use super::stats;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Historical portfolio values, oldest first. The final chart point is the
/// live collection total and is appended at build time.
const PORTFOLIO_HISTORY: [f64; 24] = [
    185.0, 310.0, 480.0, 620.0, 780.0, 950.0, 1120.0, 1280.0, 1420.0, 1560.0, 1680.0, 1820.0,
    1940.0, 2050.0, 2140.0, 2220.0, 2310.0, 2390.0, 2460.0, 2520.0, 2580.0, 2640.0, 2710.0,
    2780.0,
];

/// One point on the portfolio value chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceDataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Fixture provider for the collection screens.
pub struct MockData;

impl MockData {
    /// Total acquisition cost of the fixture collection, in dollars.
    pub const TOTAL_SPENT: f64 = 345.0;

    /// The fixture collection with ages measured from now.
    #[must_use]
    pub fn saved_items() -> Vec<SavedItem> {
        Self::saved_items_at(Utc::now())
    }

    /// The fixture collection with ages measured from `now`.
    #[must_use]
    pub fn saved_items_at(now: DateTime<Utc>) -> Vec<SavedItem> {
        vec![
            Fixture {
                id: "item_001",
                age: Duration::days(2),
                brand: "Patagonia",
                name: "Better Sweater 1/4 Zip",
                category: "Outerwear",
                garment: "fleece",
                color: "navy",
                prices: (95.0, 175.0, 245.0),
                score: 87,
                level: ConfidenceLevel::High,
                factors: ("strong", "47 comps", "low"),
                thumbnail: ("#1B3A5C", "#2D5F8A"),
                corrected: false,
            },
            Fixture {
                id: "item_002",
                age: Duration::days(3),
                brand: "Nike",
                name: "Tech Fleece Joggers",
                category: "Bottoms",
                garment: "joggers",
                color: "black",
                prices: (65.0, 125.0, 185.0),
                score: 62,
                level: ConfidenceLevel::Medium,
                factors: ("partial", "12 comps", "moderate"),
                thumbnail: ("#1A1A1A", "#333333"),
                corrected: false,
            },
            Fixture {
                id: "item_003",
                age: Duration::days(1),
                brand: "Carhartt",
                name: "Detroit Jacket",
                category: "Outerwear",
                garment: "jacket",
                color: "tan",
                prices: (195.0, 385.0, 520.0),
                score: 91,
                level: ConfidenceLevel::High,
                factors: ("strong", "63 comps", "low"),
                thumbnail: ("#8B6914", "#C49B32"),
                corrected: false,
            },
            Fixture {
                id: "item_004",
                age: Duration::days(5),
                brand: "The North Face",
                name: "Nuptse 700 Puffer",
                category: "Outerwear",
                garment: "jacket",
                color: "black",
                prices: (420.0, 745.0, 950.0),
                score: 94,
                level: ConfidenceLevel::High,
                factors: ("strong", "89 comps", "low"),
                thumbnail: ("#0D0D0D", "#2A2A2A"),
                corrected: false,
            },
            Fixture {
                id: "item_005",
                age: Duration::days(4),
                brand: "Polo Ralph Lauren",
                name: "Cashmere Cable Knit",
                category: "Tops",
                garment: "sweater",
                color: "cream",
                prices: (55.0, 135.0, 195.0),
                score: 71,
                level: ConfidenceLevel::Medium,
                factors: ("partial", "24 comps", "moderate"),
                thumbnail: ("#E8DCC8", "#F5EDE0"),
                corrected: true,
            },
            Fixture {
                id: "item_006",
                age: Duration::days(6),
                brand: "Levi's",
                name: "Vintage 501 Selvedge",
                category: "Bottoms",
                garment: "jeans",
                color: "indigo",
                prices: (115.0, 225.0, 320.0),
                score: 78,
                level: ConfidenceLevel::High,
                factors: ("strong", "156 comps", "moderate"),
                thumbnail: ("#1B2A4A", "#2E4470"),
                corrected: false,
            },
            Fixture {
                id: "item_007",
                age: Duration::hours(5),
                brand: "Arc'teryx",
                name: "Atom LT Hoody",
                category: "Outerwear",
                garment: "jacket",
                color: "pilot",
                prices: (245.0, 465.0, 620.0),
                score: 89,
                level: ConfidenceLevel::High,
                factors: ("strong", "34 comps", "low"),
                thumbnail: ("#2B3D4F", "#4A6B8A"),
                corrected: false,
            },
            Fixture {
                id: "item_008",
                age: Duration::days(7),
                brand: "Burberry",
                name: "Wool Trench Coat",
                category: "Outerwear",
                garment: "coat",
                color: "camel",
                prices: (320.0, 585.0, 780.0),
                score: 83,
                level: ConfidenceLevel::High,
                factors: ("strong", "41 comps", "moderate"),
                thumbnail: ("#8B7355", "#C4A97D"),
                corrected: false,
            },
        ]
        .into_iter()
        .map(|fixture| fixture.build(now))
        .collect()
    }

    /// Comparable listings for a Patagonia Better Sweater, sale dates
    /// counted back from today.
    #[must_use]
    pub fn comp_listings() -> Vec<CompListing> {
        Self::comp_listings_at(Utc::now().date_naive())
    }

    /// Comparable listings with sale dates counted back from `today`.
    #[must_use]
    pub fn comp_listings_at(today: NaiveDate) -> Vec<CompListing> {
        [
            ("comp_001", "Patagonia Better Sweater Fleece Jacket", 65.0, Some(2), "eBay"),
            ("comp_002", "Patagonia Men's Better Sweater", 90.0, None, "eBay"),
            ("comp_003", "Patagonia Better Sweater Size M", 73.0, Some(5), "eBay"),
            ("comp_004", "Patagonia Better Sweater 1/4 Zip", 58.0, Some(9), "Poshmark"),
        ]
        .into_iter()
        .map(|(id, title, price, sold_days_ago, source)| {
            let status = if sold_days_ago.is_some() {
                CompStatus::Sold
            } else {
                CompStatus::Active
            };
            CompListing {
                id: id.to_string(),
                title: title.to_string(),
                price,
                status,
                sold_date: sold_days_ago.map(|days| today - Duration::days(days)),
                source: source.to_string(),
            }
        })
        .collect()
    }

    /// Sum of fixture medians.
    #[must_use]
    pub fn total_value() -> f64 {
        stats::total_value(&Self::saved_items())
    }

    /// Mean fixture median.
    #[must_use]
    pub fn average_value() -> f64 {
        stats::average_value(&Self::saved_items()).unwrap_or(0.0)
    }

    /// ROI of the fixture collection against [`Self::TOTAL_SPENT`].
    #[must_use]
    pub fn roi() -> f64 {
        stats::roi_percent(Self::total_value(), Self::TOTAL_SPENT).unwrap_or(0.0)
    }

    /// Daily portfolio values ending on `today`, whose last point is
    /// `current_total`.
    #[must_use]
    pub fn portfolio_chart_data(today: NaiveDate, current_total: f64) -> Vec<PriceDataPoint> {
        let values = PORTFOLIO_HISTORY
            .iter()
            .copied()
            .chain(std::iter::once(current_total));
        let days = PORTFOLIO_HISTORY.len() as i64;

        values
            .enumerate()
            .map(|(i, value)| PriceDataPoint {
                date: today - Duration::days(days - i as i64),
                value,
            })
            .collect()
    }
}

struct Fixture {
    id: &'static str,
    age: Duration,
    brand: &'static str,
    name: &'static str,
    category: &'static str,
    garment: &'static str,
    color: &'static str,
    prices: (f64, f64, f64),
    score: u8,
    level: ConfidenceLevel,
    factors: (&'static str, &'static str, &'static str),
    thumbnail: (&'static str, &'static str),
    corrected: bool,
}

impl Fixture {
    // Fixture values are known valid, so the records are assembled directly
    // instead of going through the validating constructors.
    fn build(self, now: DateTime<Utc>) -> SavedItem {
        let (low, median, high) = self.prices;
        let (tag, depth, variance) = self.factors;

        SavedItem::new(
            self.id,
            now - self.age,
            Identification::new(
                self.brand,
                self.name,
                self.category,
                self.garment,
                Some(self.color),
            ),
            PriceRange {
                low,
                median,
                high,
                currency: "USD".to_string(),
            },
            Confidence {
                score: self.score,
                level: self.level,
                factors: vec![
                    ConfidenceFactor::new("tagExtraction", tag),
                    ConfidenceFactor::new("compDepth", depth),
                    ConfidenceFactor::new("compVariance", variance),
                ],
            },
            ThumbnailColor::new(self.thumbnail.0, self.thumbnail.1),
        )
        .with_corrected(self.corrected)
    }
}
