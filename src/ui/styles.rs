//! Visual mapping tables.
//!
//! Every table here is an exhaustive `match` over a closed enum, so adding a
//! variant anywhere in the domain fails to compile until its look is decided.
//! Colors are returned as [`ColorToken`]s and resolved against the active
//! [`Theme`] at render time.

use crate::domain::{
    CompStatus, ConfidenceLevel, ScanButtonState, ScanError, ScanOverlayState, StatTrend,
};
use crate::ui::theme::Theme;

/// Named palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Background,
    Card,
    CardSelected,
    Border,
    TextPrimary,
    TextSecondary,
    TextTertiary,
    GainGreen,
    GainGreenSoft,
    Gold,
    Warning,
    OverlayIdle,
}

impl Theme {
    /// Resolves a palette slot to its hex color.
    #[must_use]
    pub fn color(&self, token: ColorToken) -> &str {
        let c = &self.colors;
        match token {
            ColorToken::Background => &c.background,
            ColorToken::Card => &c.card,
            ColorToken::CardSelected => &c.card_selected,
            ColorToken::Border => &c.border,
            ColorToken::TextPrimary => &c.text_primary,
            ColorToken::TextSecondary => &c.text_secondary,
            ColorToken::TextTertiary => &c.text_tertiary,
            ColorToken::GainGreen => &c.gain_green,
            ColorToken::GainGreenSoft => &c.gain_green_soft,
            ColorToken::Gold => &c.gold,
            ColorToken::Warning => &c.warning,
            ColorToken::OverlayIdle => &c.overlay_idle,
        }
    }

    /// Foreground escape for a palette slot.
    #[must_use]
    pub fn fg_token(&self, token: ColorToken) -> String {
        Self::fg(self.color(token))
    }

    /// Background escape for a palette slot.
    #[must_use]
    pub fn bg_token(&self, token: ColorToken) -> String {
        Self::bg(self.color(token))
    }
}

/// How much of a confidence badge to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeStyle {
    /// `"● High · 87%"`
    #[default]
    Full,
    /// `"● 87%"`
    Compact,
    /// `"●"`
    Dot,
}

/// Badge color for a confidence level.
#[must_use]
pub const fn confidence_color(level: ConfidenceLevel) -> ColorToken {
    match level {
        ConfidenceLevel::High => ColorToken::GainGreen,
        ConfidenceLevel::Medium => ColorToken::Gold,
        ConfidenceLevel::Low => ColorToken::Warning,
        ConfidenceLevel::Insufficient => ColorToken::TextSecondary,
    }
}

/// Display label for a confidence level.
#[must_use]
pub const fn confidence_label(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => "High",
        ConfidenceLevel::Medium => "Medium",
        ConfidenceLevel::Low => "Low",
        ConfidenceLevel::Insufficient => "Insufficient",
    }
}

/// Badge text without color codes.
#[must_use]
pub fn badge_text(level: ConfidenceLevel, score: u8, style: BadgeStyle) -> String {
    match style {
        BadgeStyle::Full => format!("● {} · {score}%", confidence_label(level)),
        BadgeStyle::Compact => format!("● {score}%"),
        BadgeStyle::Dot => "●".to_string(),
    }
}

/// Suffix appended to a price whose estimate is weak.
#[must_use]
pub const fn price_suffix(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::Low => " est.",
        ConfidenceLevel::High | ConfidenceLevel::Medium | ConfidenceLevel::Insufficient => "",
    }
}

/// Glyph and color for a stat card trend.
#[must_use]
pub const fn trend_style(trend: StatTrend) -> (&'static str, ColorToken) {
    match trend {
        StatTrend::Up => ("↗", ColorToken::GainGreen),
        StatTrend::Down => ("↘", ColorToken::Warning),
        StatTrend::Neutral => ("−", ColorToken::TextTertiary),
    }
}

/// Badge label and color for a comparable listing.
#[must_use]
pub const fn comp_status_style(status: CompStatus) -> (&'static str, ColorToken) {
    match status {
        CompStatus::Sold => ("SOLD", ColorToken::GainGreen),
        CompStatus::Active => ("ACTIVE", ColorToken::TextSecondary),
    }
}

/// Look of the camera frame for an overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub bracket: ColorToken,
    pub pulsing: bool,
    /// Screen-reader style announcement shown under the frame.
    pub announcement: &'static str,
}

#[must_use]
pub const fn overlay_style(state: ScanOverlayState) -> OverlayStyle {
    match state {
        ScanOverlayState::Searching => OverlayStyle {
            bracket: ColorToken::OverlayIdle,
            pulsing: true,
            announcement: "Searching for tag",
        },
        ScanOverlayState::Locked => OverlayStyle {
            bracket: ColorToken::GainGreen,
            pulsing: false,
            announcement: "Tag detected",
        },
        ScanOverlayState::Failed => OverlayStyle {
            bracket: ColorToken::Warning,
            pulsing: false,
            announcement: "Could not read tag, please try again",
        },
    }
}

/// Look of the scan button for a button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub fill: ColorToken,
    /// Rendered faded, standing in for reduced opacity.
    pub faded: bool,
    pub glyph: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub enabled: bool,
}

#[must_use]
pub const fn button_style(state: ScanButtonState) -> ButtonStyle {
    match state {
        ScanButtonState::Ready => ButtonStyle {
            fill: ColorToken::GainGreen,
            faded: false,
            glyph: "◉",
            label: "Scan item",
            hint: "Takes a photo of the tag and item",
            enabled: true,
        },
        ScanButtonState::Scanning => ButtonStyle {
            fill: ColorToken::GainGreen,
            faded: false,
            glyph: "◌",
            label: "Scanning in progress",
            hint: "Processing scan",
            enabled: false,
        },
        ScanButtonState::Cooldown => ButtonStyle {
            fill: ColorToken::GainGreen,
            faded: true,
            glyph: "◉",
            label: "Please wait",
            hint: "Button temporarily unavailable",
            enabled: false,
        },
        ScanButtonState::Disabled => ButtonStyle {
            fill: ColorToken::TextTertiary,
            faded: true,
            glyph: "⊘",
            label: "Camera unavailable",
            hint: "Camera access required",
            enabled: false,
        },
    }
}

/// Icon shown on an error card.
#[must_use]
pub const fn error_icon(error: &ScanError) -> &'static str {
    match error {
        ScanError::NetworkUnavailable => "⌁",
        ScanError::Timeout => "⏱",
        ScanError::OcrFailed => "⌕",
        ScanError::NoComps => "∅",
        ScanError::RateLimited => "⏳",
        ScanError::CameraDenied => "⊘",
        ScanError::ServerError(_) => "⚠",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_palette() {
        assert_eq!(confidence_color(ConfidenceLevel::High), ColorToken::GainGreen);
        assert_eq!(confidence_color(ConfidenceLevel::Medium), ColorToken::Gold);
        assert_eq!(confidence_color(ConfidenceLevel::Low), ColorToken::Warning);
        assert_eq!(
            confidence_color(ConfidenceLevel::Insufficient),
            ColorToken::TextSecondary
        );
    }

    #[test]
    fn badge_variants() {
        assert_eq!(
            badge_text(ConfidenceLevel::High, 87, BadgeStyle::Full),
            "● High · 87%"
        );
        assert_eq!(badge_text(ConfidenceLevel::Low, 30, BadgeStyle::Compact), "● 30%");
        assert_eq!(badge_text(ConfidenceLevel::Medium, 62, BadgeStyle::Dot), "●");
    }

    #[test]
    fn only_low_confidence_prices_are_estimates() {
        for level in ConfidenceLevel::ALL {
            let expected = if level == ConfidenceLevel::Low { " est." } else { "" };
            assert_eq!(price_suffix(level), expected);
        }
    }

    #[test]
    fn comp_badges() {
        assert_eq!(
            comp_status_style(CompStatus::Sold),
            ("SOLD", ColorToken::GainGreen)
        );
        assert_eq!(
            comp_status_style(CompStatus::Active),
            ("ACTIVE", ColorToken::TextSecondary)
        );
    }

    #[test]
    fn only_ready_button_is_enabled() {
        assert!(button_style(ScanButtonState::Ready).enabled);
        assert!(!button_style(ScanButtonState::Scanning).enabled);
        assert!(!button_style(ScanButtonState::Cooldown).enabled);
        assert!(!button_style(ScanButtonState::Disabled).enabled);
        assert!(button_style(ScanButtonState::Cooldown).faded);
        assert_eq!(
            button_style(ScanButtonState::Disabled).fill,
            ColorToken::TextTertiary
        );
    }

    #[test]
    fn overlay_states() {
        assert!(overlay_style(ScanOverlayState::Searching).pulsing);
        assert_eq!(
            overlay_style(ScanOverlayState::Locked).bracket,
            ColorToken::GainGreen
        );
        assert_eq!(
            overlay_style(ScanOverlayState::Failed).announcement,
            "Could not read tag, please try again"
        );
    }

    #[test]
    fn tokens_resolve_against_theme() {
        let theme = Theme::default();
        assert_eq!(theme.color(ColorToken::Gold), "#F6C86A");
        assert_eq!(theme.color(ColorToken::Warning), "#EB5D2A");
        assert_eq!(trend_style(StatTrend::Down).1, ColorToken::Warning);
    }
}
