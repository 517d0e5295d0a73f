//! Core types for robust error-bound analysis
//!
//! This crate holds what the other crates of the workspace share:
//!
//! - [`Error`] / [`Result`]: the base error type, wrapped by higher crates
//! - [`math`]: float floor division and decimal rounding with exact semantics
//! - [`utils`]: sample validation and magnitude sorting
//!
//! # Example
//!
//! ```rust
//! use robust_core::{math::round_to, utils::sorted_magnitudes};
//!
//! let magnitudes = sorted_magnitudes(&[-0.3, 0.1, -0.2]);
//! assert_eq!(magnitudes, vec![0.1, 0.2, 0.3]);
//! assert_eq!(round_to(1.0 / 3.0, 4), 0.3333);
//! ```

pub mod error;
pub mod math;
pub mod utils;

pub use error::{Error, Result};
pub use math::{floor_div, round_to};
pub use utils::{check_finite_sample, sorted, sorted_magnitudes};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::math::{floor_div, round_to};
    pub use crate::Result;
}
