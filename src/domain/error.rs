//! Errors raised while loading or invoking the risk model.

use thiserror::Error;

/// Failure of the classifier or the explainer.
///
/// The screen shows every variant the same way, as `Error: {message}`.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to load model artifact: {0}")]
    Load(String),

    #[error("Expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Feature column {index} is {got:?}, expected {expected:?}")]
    FeatureOrder {
        index: usize,
        expected: String,
        got: String,
    },

    #[error("{feature}: value {value} outside [{min}, {max}]")]
    OutOfRange {
        feature: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Numeric error: {0}")]
    Numeric(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),

    #[error("Explanation failed: {0}")]
    Explanation(String),
}
