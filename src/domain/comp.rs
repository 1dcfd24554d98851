//! Comparable marketplace listings.
//!
//! Comps back up a price estimate: recent sales and live listings for the
//! same garment. They are fixtures here, shown on the scan screen once a tag
//! is read.

use super::error::{Result, ThriftFlipError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a comparable listing has sold or is still up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompStatus {
    Sold,
    Active,
}

/// One comparable listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompListing {
    pub id: String,
    pub title: String,
    /// Asking or sold price in dollars.
    pub price: f64,
    pub status: CompStatus,
    /// Day the listing sold; `None` for active listings.
    pub sold_date: Option<NaiveDate>,
    /// Marketplace name, e.g. `"eBay"`.
    pub source: String,
}

impl CompListing {
    /// Creates a listing.
    ///
    /// # Errors
    ///
    /// Returns [`ThriftFlipError::InvalidCompPrice`] if `price` is negative
    /// or not finite.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        status: CompStatus,
        source: impl Into<String>,
    ) -> Result<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(ThriftFlipError::InvalidCompPrice(price));
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            price,
            status,
            sold_date: None,
            source: source.into(),
        })
    }

    /// Records the sale date. Has no effect on an active listing.
    #[must_use]
    pub fn sold_on(mut self, date: NaiveDate) -> Self {
        if self.status == CompStatus::Sold {
            self.sold_date = Some(date);
        }
        self
    }

    /// Short age of the sale relative to `today`: `"today"`, `"1d ago"`,
    /// `"3d ago"`. `None` for active listings or an unknown date.
    #[must_use]
    pub fn sold_ago(&self, today: NaiveDate) -> Option<String> {
        let sold = self.sold_date?;
        let days = (today - sold).num_days().max(0);
        Some(if days == 0 {
            "today".to_string()
        } else {
            format!("{days}d ago")
        })
    }
}

/// Number of listings with the given status.
#[must_use]
pub fn count_status(comps: &[CompListing], status: CompStatus) -> usize {
    comps.iter().filter(|c| c.status == status).count()
}

/// Median price of sold listings, `None` when nothing has sold.
#[must_use]
pub fn sold_median(comps: &[CompListing]) -> Option<f64> {
    let mut prices: Vec<f64> = comps
        .iter()
        .filter(|c| c.status == CompStatus::Sold)
        .map(|c| c.price)
        .collect();
    if prices.is_empty() {
        return None;
    }
    prices.sort_by(f64::total_cmp);

    let mid = prices.len() / 2;
    Some(if prices.len() % 2 == 0 {
        (prices[mid - 1] + prices[mid]) / 2.0
    } else {
        prices[mid]
    })
}
