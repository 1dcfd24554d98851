//! Aggregate statistics and display formatting for a collection.
//!
//! All functions are pure and run over the full, unfiltered item list.
//! Divisions that can hit zero return `None`; callers substitute a
//! placeholder so nothing ever renders as `NaN`.

use super::item::SavedItem;

/// Summary figures for a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregates {
    /// Sum of item medians.
    pub total_value: f64,
    /// `total_value / count`, `None` for an empty collection.
    pub average_value: Option<f64>,
    /// Return on acquisition cost in percent, `None` when nothing was spent.
    pub roi_percent: Option<f64>,
}

/// Sum of `price_range.median` over all items.
#[must_use]
pub fn total_value(items: &[SavedItem]) -> f64 {
    items.iter().map(|item| item.price_range.median).sum()
}

/// Mean median value, or `None` when there are no items.
#[must_use]
pub fn average_value(items: &[SavedItem]) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = items.len() as f64;
    Some(total_value(items) / count)
}

/// `(total_value - total_spent) / total_spent * 100`, or `None` when
/// `total_spent` is zero.
#[must_use]
pub fn roi_percent(total_value: f64, total_spent: f64) -> Option<f64> {
    if total_spent == 0.0 {
        return None;
    }
    Some((total_value - total_spent) / total_spent * 100.0)
}

/// Computes every aggregate in one pass over the items.
///
/// # Examples
///
/// ```
/// use thriftflip::domain::{compute_aggregates, MockData};
///
/// let stats = compute_aggregates(&MockData::saved_items(), MockData::TOTAL_SPENT);
/// assert_eq!(stats.total_value, 2840.0);
/// assert_eq!(stats.average_value, Some(355.0));
/// ```
#[must_use]
pub fn compute_aggregates(items: &[SavedItem], total_spent: f64) -> Aggregates {
    let total = total_value(items);
    Aggregates {
        total_value: total,
        average_value: average_value(items),
        roi_percent: roi_percent(total, total_spent),
    }
}

/// The item with the highest median value. Ties keep the earlier item.
#[must_use]
pub fn best_find(items: &[SavedItem]) -> Option<&SavedItem> {
    items.iter().fold(None, |best: Option<&SavedItem>, item| match best {
        Some(current) if current.price_range.median >= item.price_range.median => Some(current),
        _ => Some(item),
    })
}

/// Formats a dollar amount rounded to whole dollars with thousands
/// separators: `2847.0 -> "$2,847"`, `67.5 -> "$68"`, `-45.0 -> "-$45"`.
///
/// Non-finite values render as `"$0"`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }

    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.unsigned_abs()))
}

/// Formats an ROI percentage as a signed whole number: `"+724%"`, `"-12%"`.
#[must_use]
pub fn format_roi(percent: f64) -> String {
    if !percent.is_finite() {
        return "+0%".to_string();
    }

    #[allow(clippy::cast_possible_truncation)]
    let rounded = percent.round() as i64;
    if rounded < 0 {
        format!("-{}%", group_thousands(rounded.unsigned_abs()))
    } else {
        format!("+{}%", group_thousands(rounded.unsigned_abs()))
    }
}

/// Formats the gain over acquisition cost: `"+$2,495"` or `"-$45"`.
#[must_use]
pub fn format_profit(total_value: f64, total_spent: f64) -> String {
    let profit = total_value - total_spent;
    if profit < 0.0 {
        format_currency(profit)
    } else {
        format!("+{}", format_currency(profit))
    }
}

/// Formats a low/high pair as `"$95 – $245"`.
#[must_use]
pub fn format_range(low: f64, high: f64) -> String {
    format!("{} – {}", format_currency(low), format_currency(high))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
