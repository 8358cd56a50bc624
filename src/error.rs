//! Error types for stress transformation.

use thiserror::Error;

/// Result type alias using the crate Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or transforming a stress state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A stress component or angle was NaN or infinite.
    #[error("invalid input: {component} must be finite, got {value}")]
    InvalidInput {
        component: &'static str,
        value: f64,
    },
}

/// Rejects a non-finite value, naming the component it came from.
pub(crate) fn ensure_finite(component: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidInput { component, value })
    }
}
