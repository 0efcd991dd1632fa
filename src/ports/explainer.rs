//! Explainer port: Trait for per-feature attribution of a prediction.

use crate::domain::{Attribution, ModelError, PatientRecord};

/// Trait for explaining a single prediction.
///
/// An explainer is bound to one classifier when it is built. Building may be
/// expensive, so callers construct it once next to the model and only call
/// `explain` per record.
pub trait Explainer: Send + Sync {
    /// Attribute the model output for `record` to its input features,
    /// relative to the model's expected output.
    ///
    /// # Errors
    /// Returns `ModelError::Explanation` (or a shape error) if the
    /// attribution cannot be computed.
    fn explain(&self, record: &PatientRecord) -> Result<Attribution, ModelError>;
}
