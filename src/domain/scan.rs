//! Scan screen states and errors.
//!
//! There is no capture pipeline behind these types. They describe what the
//! scan screen can show and how the button and overlay recover on their own
//! after a timeout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds the scan button stays in [`ScanButtonState::Cooldown`].
pub const COOLDOWN_SECS: f64 = 1.0;

/// Seconds the overlay stays in [`ScanOverlayState::Failed`].
pub const FAILED_OVERLAY_SECS: f64 = 2.0;

/// What the camera overlay believes about the tag in frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanOverlayState {
    #[default]
    Searching,
    Locked,
    Failed,
}

impl ScanOverlayState {
    /// How long this state lasts before falling back to `Searching`, if it
    /// expires at all.
    #[must_use]
    pub const fn expires_after(self) -> Option<f64> {
        match self {
            Self::Failed => Some(FAILED_OVERLAY_SECS),
            Self::Searching | Self::Locked => None,
        }
    }
}

/// Lifecycle of the primary scan button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanButtonState {
    #[default]
    Ready,
    Scanning,
    Cooldown,
    Disabled,
}

impl ScanButtonState {
    /// Whether a press is accepted in this state.
    #[must_use]
    pub const fn accepts_press(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// State after a press. Only `Ready` reacts; it enters `Cooldown`.
    #[must_use]
    pub const fn press(self) -> Self {
        match self {
            Self::Ready => Self::Cooldown,
            other => other,
        }
    }

    /// How long this state lasts before returning to `Ready`, if it
    /// expires at all.
    #[must_use]
    pub const fn expires_after(self) -> Option<f64> {
        match self {
            Self::Cooldown => Some(COOLDOWN_SECS),
            Self::Ready | Self::Scanning | Self::Disabled => None,
        }
    }
}

/// Direction of a stat card's trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatTrend {
    Up,
    Down,
    #[default]
    Neutral,
}

/// Failure reported by a scan attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("No connection")]
    NetworkUnavailable,
    #[error("Taking too long")]
    Timeout,
    #[error("Couldn't read the tag")]
    OcrFailed,
    #[error("No comparables found")]
    NoComps,
    #[error("Daily limit reached")]
    RateLimited,
    #[error("Camera access needed")]
    CameraDenied,
    #[error("Something went wrong: {0}")]
    ServerError(String),
}

impl ScanError {
    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NetworkUnavailable => "network",
            Self::Timeout => "timeout",
            Self::OcrFailed => "ocr",
            Self::NoComps => "noComps",
            Self::RateLimited => "rateLimited",
            Self::CameraDenied => "cameraDenied",
            Self::ServerError(_) => "server",
        }
    }

    /// Short headline.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::NetworkUnavailable => "No connection",
            Self::Timeout => "Taking too long",
            Self::OcrFailed => "Couldn't read the tag",
            Self::NoComps => "No comparables found",
            Self::RateLimited => "Daily limit reached",
            Self::CameraDenied => "Camera access needed",
            Self::ServerError(_) => "Something went wrong",
        }
    }

    /// Explanation with a suggested next step.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NetworkUnavailable => "Check your internet connection and try again.",
            Self::Timeout => "The search is taking longer than expected. Try again.",
            Self::OcrFailed => "Make sure the tag text is visible and well-lit, then try again.",
            Self::NoComps => "We couldn't find similar listings for this item.",
            Self::RateLimited => "You've used all 5 free scans today. Upgrade for unlimited scans.",
            Self::CameraDenied => "Go to Settings > ThriftFlip > Camera to enable scanning.",
            Self::ServerError(detail) => detail,
        }
    }

    /// Whether offering "Try again" makes sense.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkUnavailable | Self::Timeout | Self::OcrFailed | Self::ServerError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ready_accepts_a_press() {
        assert_eq!(ScanButtonState::Ready.press(), ScanButtonState::Cooldown);
        for state in [
            ScanButtonState::Scanning,
            ScanButtonState::Cooldown,
            ScanButtonState::Disabled,
        ] {
            assert!(!state.accepts_press());
            assert_eq!(state.press(), state);
        }
    }

    #[test]
    fn only_transient_states_expire() {
        assert_eq!(ScanButtonState::Cooldown.expires_after(), Some(1.0));
        assert_eq!(ScanButtonState::Ready.expires_after(), None);
        assert_eq!(ScanButtonState::Disabled.expires_after(), None);
        assert_eq!(ScanOverlayState::Failed.expires_after(), Some(2.0));
        assert_eq!(ScanOverlayState::Locked.expires_after(), None);
    }

    #[test]
    fn retryable_errors() {
        let retryable = [
            ScanError::NetworkUnavailable,
            ScanError::Timeout,
            ScanError::OcrFailed,
            ScanError::ServerError("boom".into()),
        ];
        let terminal = [ScanError::NoComps, ScanError::RateLimited, ScanError::CameraDenied];
        assert!(retryable.iter().all(ScanError::is_retryable));
        assert!(!terminal.iter().any(ScanError::is_retryable));
    }

    #[test]
    fn server_error_carries_its_detail() {
        let err = ScanError::ServerError("upstream 502".into());
        assert_eq!(err.id(), "server");
        assert_eq!(err.title(), "Something went wrong");
        assert_eq!(err.message(), "upstream 502");
        assert_eq!(err.to_string(), "Something went wrong: upstream 502");
    }

    #[test]
    fn rate_limit_copy() {
        assert_eq!(ScanError::RateLimited.id(), "rateLimited");
        assert_eq!(
            ScanError::RateLimited.message(),
            "You've used all 5 free scans today. Upgrade for unlimited scans."
        );
    }
}
