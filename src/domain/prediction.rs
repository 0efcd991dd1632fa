//! Prediction result types.
//!
//! Represents the classifier output for one patient record.

use serde::{Deserialize, Serialize};

/// Decision threshold on the positive-class probability.
///
/// A probability equal to the threshold is still low risk.
pub const RISK_THRESHOLD: f64 = 0.5;

/// Risk classification for unplanned reoperation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    High,
}

impl RiskLabel {
    /// Label for a positive-class probability (strictly greater than the
    /// threshold is high risk).
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability > RISK_THRESHOLD {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low Risk"),
            Self::High => write!(f, "High Risk"),
        }
    }
}

/// Format a probability on the percentage scale with one decimal, e.g.
/// `0.732` as `73.2%`.
#[must_use]
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Outcome of one classifier invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Probability of the positive ("reoperation") class
    pub probability: f64,

    pub label: RiskLabel,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Prediction {
    #[must_use]
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            label: RiskLabel::from_probability(probability),
            created_at: chrono::Utc::now(),
        }
    }

    /// The success line shown on the screen.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Prediction: {} (Probability: {})",
            self.label,
            format_probability(self.probability)
        )
    }
}
