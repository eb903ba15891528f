//! Error type for rejected scale inputs

use thiserror::Error;

/// Errors raised when building a scale from invalid inputs
///
/// The numeric helpers themselves ([`quantize`](crate::quantize),
/// [`step_count`](crate::step_count), ...) never fail. Errors only come out of
/// the validating constructors and config loading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// Quantum is zero, negative or not finite
    #[error("quantum must be positive and finite, got {0}")]
    InvalidQuantum(f64),

    /// `min > max`, or `min` is not finite
    #[error("invalid bounds: min {min} must not exceed max {max}")]
    InvalidBounds { min: f64, max: f64 },

    /// Key step percentage outside `0..=100`
    #[error("key step percentage {0} is outside 0..=100")]
    InvalidKeyStep(f64),

    /// Unparseable key string in a keymap
    #[error("unknown key {0:?}")]
    InvalidKey(String),

    /// Config could not be parsed
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for QuantumError {
    fn from(err: serde_json::Error) -> Self {
        QuantumError::Config(err.to_string())
    }
}
