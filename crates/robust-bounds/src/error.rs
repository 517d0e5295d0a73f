//! Error types for error-bound estimation

use thiserror::Error;

/// Message carried by [`Error::AsymmetricDistribution`] unless overridden
pub const ASYMMETRIC_MESSAGE: &str = "the distribution is asymmetric!";

/// Errors that can occur while locating or evaluating error bounds
#[derive(Error, Debug)]
pub enum Error {
    /// The sample did not pass the symmetry decision
    #[error("{message}")]
    AsymmetricDistribution { message: String },

    /// A rounded report was requested from a value that is not a numeric mapping
    #[error("Malformed report: {0}")]
    MalformedReport(String),

    /// `k = 1` leaves no step between representable levels
    #[error("Degenerate quantization: k = {k} has no grid step (division by zero)")]
    DegenerateQuantization { k: usize },

    /// Invalid parameter provided at construction
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] robust_core::Error),

    /// Percentile estimation error
    #[error("Percentile error: {0}")]
    Quantile(#[from] robust_quantile::Error),

    /// Report (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Asymmetric distribution with the default message
    pub fn asymmetric() -> Self {
        Self::asymmetric_with(ASYMMETRIC_MESSAGE)
    }

    /// Asymmetric distribution with a custom message
    pub fn asymmetric_with(message: impl Into<String>) -> Self {
        Self::AsymmetricDistribution {
            message: message.into(),
        }
    }

    /// Whether this error reports an asymmetric sample
    pub fn is_asymmetric(&self) -> bool {
        matches!(self, Self::AsymmetricDistribution { .. })
    }
}
