//! Domain layer for the ThriftFlip plugin.
//!
//! This module contains the item model, filtering, aggregate statistics and
//! the built-in fixture collection, independent of Zellij-specific APIs.
//! Everything here except record construction is infallible and pure.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item records, price ranges and confidence buckets
//! - [`comp`]: Comparable listings behind a price estimate
//! - [`filter`]: Collection filter selector and filtering
//! - [`stats`]: Aggregates and currency / percentage formatting
//! - [`mock`]: Built-in fixture collection and chart series
//! - [`scan`]: Scan screen states and scan errors
//!
//! # Examples
//!
//! ```
//! use thriftflip::domain::{compute_aggregates, filter_items, CollectionFilter, MockData};
//!
//! let items = MockData::saved_items();
//! let high = filter_items(&items, CollectionFilter::HighConfidence);
//! assert_eq!(high.len(), 6);
//!
//! let stats = compute_aggregates(&items, MockData::TOTAL_SPENT);
//! assert_eq!(stats.total_value, 2840.0);
//! ```

pub mod comp;
pub mod error;
pub mod filter;
pub mod item;
pub mod mock;
pub mod scan;
pub mod stats;

pub use comp::{count_status, sold_median, CompListing, CompStatus};
pub use error::{Result, ThriftFlipError};
pub use filter::{filter_items, filter_refs, CollectionFilter};
pub use item::{
    Confidence, ConfidenceFactor, ConfidenceLevel, Identification, PriceRange, SavedItem,
    ThumbnailColor,
};
pub use mock::{MockData, PriceDataPoint};
pub use scan::{ScanButtonState, ScanError, ScanOverlayState, StatTrend};
pub use stats::{
    best_find, compute_aggregates, format_currency, format_profit, format_range, format_roi,
    Aggregates,
};
