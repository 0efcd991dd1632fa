//! Per-feature attribution of a single prediction.

use serde::{Deserialize, Serialize};

use super::features::{FeatureSpec, FEATURES};

/// Contribution of one feature to the model output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    /// Index into `FEATURES`
    pub index: usize,

    /// Submitted value of the feature
    pub value: i64,

    /// Signed push away from the base value, in model output units
    pub contribution: f64,
}

impl FeatureContribution {
    #[must_use]
    pub fn spec(&self) -> &'static FeatureSpec {
        &FEATURES[self.index]
    }
}

/// Additive explanation: `base_value + Σ contribution == output_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    /// Expected model output over the training data (log-odds)
    pub base_value: f64,

    /// One entry per feature, in training column order
    pub contributions: Vec<FeatureContribution>,
}

impl Attribution {
    /// Model output for the explained record.
    #[must_use]
    pub fn output_value(&self) -> f64 {
        self.base_value + self.contributions.iter().map(|c| c.contribution).sum::<f64>()
    }

    /// Contributions ordered by decreasing magnitude.
    #[must_use]
    pub fn ranked(&self) -> Vec<FeatureContribution> {
        let mut ranked = self.contributions.clone();
        ranked.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
        ranked
    }

    /// Largest absolute contribution, 0.0 when there are none.
    #[must_use]
    pub fn max_magnitude(&self) -> f64 {
        self.contributions
            .iter()
            .map(|c| c.contribution.abs())
            .fold(0.0, f64::max)
    }
}
