//! Error types for percentile estimation

use thiserror::Error;

/// Errors that can occur during percentile estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Empty data provided
    #[error("Cannot compute percentile of empty data")]
    EmptyData,

    /// Invalid percentile
    #[error("Percentile {percentile} must be in [0, 100]")]
    InvalidPercentile { percentile: f64 },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] robust_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if percentile is valid
    pub fn check_percentile(percentile: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&percentile) {
            return Err(Error::InvalidPercentile { percentile });
        }
        Ok(())
    }

    /// Check if data is non-empty
    pub fn check_non_empty<T>(data: &[T]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_percentile() {
        assert!(Error::check_percentile(0.0).is_ok());
        assert!(Error::check_percentile(95.0).is_ok());
        assert!(Error::check_percentile(100.0).is_ok());
        assert!(matches!(
            Error::check_percentile(100.5),
            Err(Error::InvalidPercentile { .. })
        ));
        assert!(Error::check_percentile(-1.0).is_err());
        assert!(Error::check_percentile(f64::NAN).is_err());
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidPercentile { percentile: 120.0 };
        assert_eq!(err.to_string(), "Percentile 120 must be in [0, 100]");
        assert_eq!(
            Error::EmptyData.to_string(),
            "Cannot compute percentile of empty data"
        );
    }
}
