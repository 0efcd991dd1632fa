//! Classifier port: Trait for the pretrained binary risk model.
//!
//! This trait abstracts the exported model from the application logic.

use crate::domain::{ModelError, PatientRecord};

/// Trait for binary probability estimation.
///
/// Implementations are loaded once at startup and shared read-only for the
/// lifetime of the process.
pub trait Classifier: Send + Sync {
    /// Estimate class probabilities for a single record.
    ///
    /// Index 0 is the negative class, index 1 the positive
    /// ("reoperation") class.
    ///
    /// # Errors
    /// Returns `ModelError` if the record does not match the model's input
    /// shape or the computation produces a non-finite result.
    fn predict_proba(&self, record: &PatientRecord) -> Result<[f64; 2], ModelError>;

    /// Probability of the positive class.
    ///
    /// # Errors
    /// Propagates errors from `predict_proba`.
    fn positive_probability(&self, record: &PatientRecord) -> Result<f64, ModelError> {
        let proba = self.predict_proba(record)?;
        Ok(proba[1])
    }
}
