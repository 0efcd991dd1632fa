//! Prediction service: Orchestrates classification and attribution.
//!
//! This service coordinates:
//! - Probability estimation with the loaded classifier
//! - Risk labelling against the fixed threshold
//! - Attribution of the prediction with the load-time explainer
//!
//! Prediction and explanation fail independently. A failed explanation never
//! hides a successful prediction.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::logistic::{LinearExplainer, LogisticModel};
use crate::domain::{Attribution, PatientRecord, Prediction};
use crate::ports::{Classifier, Explainer};

/// Result of one submission.
#[derive(Debug, Clone)]
pub enum PredictionOutcome {
    /// The classifier failed; nothing else was computed.
    Failed { message: String },

    /// The classifier succeeded. The explanation carries its own error.
    Predicted {
        prediction: Prediction,
        explanation: Result<Attribution, String>,
    },
}

impl PredictionOutcome {
    #[must_use]
    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            Self::Predicted { prediction, .. } => Some(prediction),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn attribution(&self) -> Option<&Attribution> {
        match self {
            Self::Predicted {
                explanation: Ok(attribution),
                ..
            } => Some(attribution),
            _ => None,
        }
    }

    /// Every failure message of this outcome, in display order.
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        match self {
            Self::Failed { message } => vec![message.as_str()],
            Self::Predicted {
                explanation: Err(message),
                ..
            } => vec![message.as_str()],
            Self::Predicted { .. } => Vec::new(),
        }
    }
}

/// Service for running the risk model against one record at a time.
///
/// Holds shared, read-only handles to a classifier and an explainer that
/// were both built once at startup.
pub struct PredictionService<C, E>
where
    C: Classifier,
    E: Explainer,
{
    classifier: Arc<C>,
    explainer: Arc<E>,
}

impl<C, E> PredictionService<C, E>
where
    C: Classifier,
    E: Explainer,
{
    /// Create a new prediction service.
    pub fn new(classifier: Arc<C>, explainer: Arc<E>) -> Self {
        Self {
            classifier,
            explainer,
        }
    }

    /// Run classification and attribution for `record`.
    ///
    /// Failures are converted to display messages; this never returns an
    /// error so the screen stays interactive.
    pub fn run(&self, record: &PatientRecord) -> PredictionOutcome {
        tracing::debug!("Step 1: Estimating class probabilities...");
        let probability = match self.classifier.positive_probability(record) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Prediction failed: {}", e);
                return PredictionOutcome::Failed {
                    message: e.to_string(),
                };
            }
        };
        let prediction = Prediction::new(probability);

        tracing::debug!("Step 2: Computing attribution...");
        let explanation = self.explainer.explain(record).map_err(|e| {
            tracing::warn!("Explanation failed: {}", e);
            e.to_string()
        });

        tracing::info!(
            "Prediction complete: label={}, probability={:.4}, explained={}",
            prediction.label,
            prediction.probability,
            explanation.is_ok()
        );

        PredictionOutcome::Predicted {
            prediction,
            explanation,
        }
    }
}

impl PredictionService<LogisticModel, LinearExplainer> {
    /// Load the exported logistic model and build its explainer once.
    ///
    /// # Errors
    /// Returns `ReopRiskError::Io` if `path` does not exist and
    /// `ReopRiskError::Model` if the artifact cannot be loaded.
    pub fn from_model_path(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("model not found at {}", path.display()),
            )
            .into());
        }

        let model = Arc::new(LogisticModel::load(path)?);
        let explainer = Arc::new(LinearExplainer::new(model.clone()));
        Ok(Self::new(model, explainer))
    }
}

impl<C, E> Clone for PredictionService<C, E>
where
    C: Classifier,
    E: Explainer,
{
    fn clone(&self) -> Self {
        Self {
            classifier: Arc::clone(&self.classifier),
            explainer: Arc::clone(&self.explainer),
        }
    }
}
