//! Error types for the natorder crate.

use thiserror::Error;

/// Errors from strict key comparison.
#[derive(Debug, Error, PartialEq)]
pub enum NatOrderError {
    /// The pair admits no ordering (currently only NaN numbers).
    #[error("cannot order {left} against {right}")]
    Incomparable {
        left: &'static str,
        right: &'static str,
    },
}

/// Result type for natorder operations.
pub type Result<T> = std::result::Result<T, NatOrderError>;
