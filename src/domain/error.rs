//! Error types for ThriftFlip.
//!
//! The filtering and aggregation core is infallible; errors only arise when
//! records are constructed with out-of-range values, when a theme cannot be
//! loaded, or when plugin configuration is malformed.

use thiserror::Error;

/// The main error type for ThriftFlip operations.
///
/// # Examples
///
/// ```
/// use thriftflip::domain::{PriceRange, ThriftFlipError};
///
/// let err = PriceRange::new(200.0, 100.0, 300.0, "USD").unwrap_err();
/// assert!(matches!(err, ThriftFlipError::InvalidPriceRange { .. }));
/// ```
#[derive(Debug, Error)]
pub enum ThriftFlipError {
    /// A price range violated `0 <= low <= median <= high`.
    #[error("Invalid price range: low {low}, median {median}, high {high}")]
    InvalidPriceRange {
        /// Lower bound that was supplied.
        low: f64,
        /// Median that was supplied.
        median: f64,
        /// Upper bound that was supplied.
        high: f64,
    },

    /// A comparable listing price was negative or not a number.
    #[error("Invalid comparable listing price: {0}")]
    InvalidCompPrice(f64),

    /// A confidence score was above 100.
    #[error("Confidence score out of range: {0} (expected 0..=100)")]
    ScoreOutOfRange(u8),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for ThriftFlip operations.
pub type Result<T> = std::result::Result<T, ThriftFlipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = ThriftFlipError::InvalidPriceRange {
            low: 10.0,
            median: 5.0,
            high: 20.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid price range: low 10, median 5, high 20"
        );
        assert_eq!(
            ThriftFlipError::ScoreOutOfRange(140).to_string(),
            "Confidence score out of range: 140 (expected 0..=100)"
        );
    }

    #[test]
    fn io_errors_convert() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(ThriftFlipError::Io(_))));
    }
}
