//! Collected item records.
//!
//! A [`SavedItem`] describes one thrift find: what it was identified as, the
//! estimated resale price range, and how confident that estimate is. Records
//! are created once and never mutated.

use super::error::{Result, ThriftFlipError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Lowest score bucketed as [`ConfidenceLevel::High`].
pub const HIGH_CONFIDENCE_MIN: u8 = 75;

/// Lowest score bucketed as [`ConfidenceLevel::Medium`].
pub const MEDIUM_CONFIDENCE_MIN: u8 = 50;

/// Lowest score bucketed as [`ConfidenceLevel::Low`].
pub const LOW_CONFIDENCE_MIN: u8 = 25;

/// Highest valid confidence score.
pub const MAX_CONFIDENCE_SCORE: u8 = 100;

const MEDIUM_CONFIDENCE_MAX: u8 = HIGH_CONFIDENCE_MIN - 1;
const LOW_CONFIDENCE_MAX: u8 = MEDIUM_CONFIDENCE_MIN - 1;
const INSUFFICIENT_CONFIDENCE_MAX: u8 = LOW_CONFIDENCE_MIN - 1;

/// Free-text classification of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub brand: String,
    pub item_name: String,
    pub category: String,
    pub garment_type: String,
    pub color: Option<String>,
}

impl Identification {
    #[must_use]
    pub fn new(
        brand: impl Into<String>,
        item_name: impl Into<String>,
        category: impl Into<String>,
        garment_type: impl Into<String>,
        color: Option<&str>,
    ) -> Self {
        Self {
            brand: brand.into(),
            item_name: item_name.into(),
            category: category.into(),
            garment_type: garment_type.into(),
            color: color.map(String::from),
        }
    }
}

/// Estimated resale price range.
///
/// Always satisfies `0 <= low <= median <= high`; use [`PriceRange::new`] to
/// construct one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub median: f64,
    pub high: f64,
    pub currency: String,
}

impl PriceRange {
    /// Creates a validated price range.
    ///
    /// # Errors
    ///
    /// Returns [`ThriftFlipError::InvalidPriceRange`] if any bound is
    /// negative or not finite, or if the bounds are out of order.
    ///
    /// # Examples
    ///
    /// ```
    /// use thriftflip::domain::PriceRange;
    ///
    /// let range = PriceRange::new(95.0, 175.0, 245.0, "USD")?;
    /// assert_eq!(range.median, 175.0);
    /// # Ok::<(), thriftflip::ThriftFlipError>(())
    /// ```
    pub fn new(low: f64, median: f64, high: f64, currency: impl Into<String>) -> Result<Self> {
        let finite = low.is_finite() && median.is_finite() && high.is_finite();
        if !finite || low < 0.0 || low > median || median > high {
            return Err(ThriftFlipError::InvalidPriceRange { low, median, high });
        }

        Ok(Self {
            low,
            median,
            high,
            currency: currency.into(),
        })
    }
}

/// Coarse bucket summarizing how reliable a price estimate is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    Insufficient,
}

impl ConfidenceLevel {
    /// Every level, strongest first.
    pub const ALL: [Self; 4] = [Self::High, Self::Medium, Self::Low, Self::Insufficient];

    /// Buckets a score into a level.
    ///
    /// | score      | level          |
    /// |------------|----------------|
    /// | 75 ..= 100 | `High`         |
    /// | 50 ..= 74  | `Medium`       |
    /// | 25 ..= 49  | `Low`          |
    /// | 0  ..= 24  | `Insufficient` |
    ///
    /// # Errors
    ///
    /// Returns [`ThriftFlipError::ScoreOutOfRange`] for scores above 100.
    pub fn from_score(score: u8) -> Result<Self> {
        match score {
            HIGH_CONFIDENCE_MIN..=MAX_CONFIDENCE_SCORE => Ok(Self::High),
            MEDIUM_CONFIDENCE_MIN..=MEDIUM_CONFIDENCE_MAX => Ok(Self::Medium),
            LOW_CONFIDENCE_MIN..=LOW_CONFIDENCE_MAX => Ok(Self::Low),
            0..=INSUFFICIENT_CONFIDENCE_MAX => Ok(Self::Insufficient),
            _ => Err(ThriftFlipError::ScoreOutOfRange(score)),
        }
    }

    /// Lowercase identifier, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Insufficient => "insufficient",
        }
    }
}

/// One named input that contributed to a confidence score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceFactor {
    pub name: String,
    pub value: String,
}

impl ConfidenceFactor {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Confidence in an item's price estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidence {
    pub score: u8,
    pub level: ConfidenceLevel,
    pub factors: Vec<ConfidenceFactor>,
}

impl Confidence {
    /// Creates a confidence with an explicitly chosen level.
    ///
    /// # Errors
    ///
    /// Returns [`ThriftFlipError::ScoreOutOfRange`] for scores above 100.
    pub fn new(score: u8, level: ConfidenceLevel, factors: Vec<ConfidenceFactor>) -> Result<Self> {
        if score > MAX_CONFIDENCE_SCORE {
            return Err(ThriftFlipError::ScoreOutOfRange(score));
        }
        Ok(Self {
            score,
            level,
            factors,
        })
    }

    /// Creates a confidence whose level is derived from the score.
    ///
    /// # Errors
    ///
    /// Returns [`ThriftFlipError::ScoreOutOfRange`] for scores above 100.
    pub fn from_score(score: u8, factors: Vec<ConfidenceFactor>) -> Result<Self> {
        let level = ConfidenceLevel::from_score(score)?;
        Ok(Self {
            score,
            level,
            factors,
        })
    }
}

/// Two-stop gradient used for an item's thumbnail placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailColor {
    /// Hex color, e.g. `"#1B3A5C"`.
    pub primary: String,
    /// Hex color, e.g. `"#2D5F8A"`.
    pub secondary: String,
}

impl ThumbnailColor {
    #[must_use]
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// An item in the user's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub identification: Identification,
    pub price_range: PriceRange,
    pub confidence: Confidence,
    pub thumbnail_color: ThumbnailColor,
    #[serde(default)]
    pub corrected: bool,
}

impl SavedItem {
    /// Creates an uncorrected item.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        identification: Identification,
        price_range: PriceRange,
        confidence: Confidence,
        thumbnail_color: ThumbnailColor,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            identification,
            price_range,
            confidence,
            thumbnail_color,
            corrected: false,
        }
    }

    /// Marks the item as manually corrected by the user.
    #[must_use]
    pub fn with_corrected(mut self, corrected: bool) -> Self {
        self.corrected = corrected;
        self
    }

    /// Shorthand for the item's confidence level.
    #[must_use]
    pub const fn level(&self) -> ConfidenceLevel {
        self.confidence.level
    }

    /// Returns a short relative age such as `"5h ago"`.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    ///
    /// Timestamps in the future are reported as "just now".
    #[must_use]
    pub fn added_ago(&self, now: DateTime<Utc>) -> String {
        let diff = (now - self.timestamp).num_seconds();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn item_at(timestamp: DateTime<Utc>) -> SavedItem {
        SavedItem::new(
            "item_test",
            timestamp,
            Identification::new("Nike", "Tech Fleece Joggers", "Bottoms", "joggers", None),
            PriceRange::new(65.0, 125.0, 185.0, "USD").unwrap(),
            Confidence::from_score(62, vec![]).unwrap(),
            ThumbnailColor::new("#1A1A1A", "#333333"),
        )
    }

    #[test]
    fn score_buckets_cover_every_valid_score_once() {
        for score in 0..=100u8 {
            let level = ConfidenceLevel::from_score(score).unwrap();
            let expected = if score >= 75 {
                ConfidenceLevel::High
            } else if score >= 50 {
                ConfidenceLevel::Medium
            } else if score >= 25 {
                ConfidenceLevel::Low
            } else {
                ConfidenceLevel::Insufficient
            };
            assert_eq!(level, expected, "score {score}");
        }
    }

    #[test]
    fn bucket_edges() {
        let level = |s| ConfidenceLevel::from_score(s).unwrap();
        assert_eq!(level(0), ConfidenceLevel::Insufficient);
        assert_eq!(level(24), ConfidenceLevel::Insufficient);
        assert_eq!(level(25), ConfidenceLevel::Low);
        assert_eq!(level(49), ConfidenceLevel::Low);
        assert_eq!(level(50), ConfidenceLevel::Medium);
        assert_eq!(level(74), ConfidenceLevel::Medium);
        assert_eq!(level(75), ConfidenceLevel::High);
        assert_eq!(level(100), ConfidenceLevel::High);
    }

    #[test]
    fn bucket_bounds_follow_the_minimums() {
        let level = |s| ConfidenceLevel::from_score(s).unwrap();
        for (min, below, at) in [
            (HIGH_CONFIDENCE_MIN, ConfidenceLevel::Medium, ConfidenceLevel::High),
            (MEDIUM_CONFIDENCE_MIN, ConfidenceLevel::Low, ConfidenceLevel::Medium),
            (LOW_CONFIDENCE_MIN, ConfidenceLevel::Insufficient, ConfidenceLevel::Low),
        ] {
            assert_eq!(level(min - 1), below);
            assert_eq!(level(min), at);
        }
    }

    #[test]
    fn scores_above_one_hundred_are_rejected() {
        assert!(matches!(
            ConfidenceLevel::from_score(101),
            Err(ThriftFlipError::ScoreOutOfRange(101))
        ));
        assert!(Confidence::new(255, ConfidenceLevel::High, vec![]).is_err());
    }

    #[test]
    fn price_range_validates_order_and_sign() {
        assert!(PriceRange::new(0.0, 0.0, 0.0, "USD").is_ok());
        assert!(PriceRange::new(10.0, 10.0, 10.0, "USD").is_ok());
        assert!(PriceRange::new(-1.0, 5.0, 10.0, "USD").is_err());
        assert!(PriceRange::new(5.0, 4.0, 10.0, "USD").is_err());
        assert!(PriceRange::new(5.0, 11.0, 10.0, "USD").is_err());
        assert!(PriceRange::new(f64::NAN, 11.0, 12.0, "USD").is_err());
    }

    #[test]
    fn added_ago_formats_relative_age() {
        let now = Utc::now();
        assert_eq!(item_at(now).added_ago(now), "just now");
        assert_eq!(item_at(now - Duration::seconds(300)).added_ago(now), "5m ago");
        assert_eq!(item_at(now - Duration::hours(5)).added_ago(now), "5h ago");
        assert_eq!(item_at(now - Duration::days(2)).added_ago(now), "2d ago");
        assert_eq!(item_at(now + Duration::hours(1)).added_ago(now), "just now");
    }

    #[test]
    fn serializes_with_camel_case_and_lowercase_levels() {
        let item = item_at(Utc::now()).with_corrected(true);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["identification"]["itemName"], "Tech Fleece Joggers");
        assert_eq!(json["priceRange"]["median"], 125.0);
        assert_eq!(json["confidence"]["level"], "medium");
        assert_eq!(json["corrected"], true);
    }
}
