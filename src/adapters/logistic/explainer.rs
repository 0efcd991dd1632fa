//! Exact additive attribution for the logistic model.
//!
//! For a linear predictor over standardized inputs the expected log-odds over
//! the training data is the intercept, and each feature contributes
//! `coef_i * (x_i - mean_i) / scale_i`. These values are the Shapley values
//! of the log-odds output under feature independence.

use std::sync::Arc;

use crate::domain::{Attribution, FeatureContribution, ModelError, PatientRecord};
use crate::ports::Explainer;

use super::LogisticModel;

/// Explainer bound to one loaded `LogisticModel`.
#[derive(Debug, Clone)]
pub struct LinearExplainer {
    model: Arc<LogisticModel>,
    base_value: f64,
}

impl LinearExplainer {
    #[must_use]
    pub fn new(model: Arc<LogisticModel>) -> Self {
        let base_value = model.params().intercept;
        tracing::info!("Built linear explainer (base value {:.4})", base_value);
        Self { model, base_value }
    }

    /// Expected log-odds the contributions are measured against.
    #[must_use]
    pub fn base_value(&self) -> f64 {
        self.base_value
    }
}

impl Explainer for LinearExplainer {
    fn explain(&self, record: &PatientRecord) -> Result<Attribution, ModelError> {
        let terms = self.model.terms(record);
        if let Some(i) = terms.iter().position(|t| !t.is_finite()) {
            return Err(ModelError::Explanation(format!(
                "non-finite contribution for feature {i}"
            )));
        }

        let contributions = record
            .values()
            .iter()
            .zip(terms)
            .enumerate()
            .map(|(index, (&value, contribution))| FeatureContribution {
                index,
                value,
                contribution,
            })
            .collect();

        Ok(Attribution {
            base_value: self.base_value,
            contributions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logistic::tests::unit_params;
    use crate::domain::FEATURE_COUNT;
    use crate::ports::Classifier;

    fn model(coef: [f64; FEATURE_COUNT], intercept: f64) -> Arc<LogisticModel> {
        Arc::new(LogisticModel::from_params(unit_params(coef, intercept)).expect("valid params"))
    }

    #[test]
    fn test_contributions_sum_to_log_odds() {
        let mut coef = [0.0; FEATURE_COUNT];
        coef[0] = 0.3;
        coef[1] = 0.5;
        coef[10] = -0.2;
        let model = model(coef, -1.2);
        let explainer = LinearExplainer::new(model.clone());

        let record =
            PatientRecord::from_values(&[1, 2, 3, 0, 1, 0, 1, 0, 1, 2, 4]).expect("record");
        let attribution = explainer.explain(&record).expect("explain");
        let p = model.positive_probability(&record).expect("predict");

        assert_eq!(attribution.contributions.len(), FEATURE_COUNT);
        assert!((attribution.base_value - (-1.2)).abs() < f64::EPSILON);
        assert!((attribution.output_value() - (p / (1.0 - p)).ln()).abs() < 1e-9);
    }

    #[test]
    fn test_contributions_carry_values_in_column_order() {
        let explainer = LinearExplainer::new(model([1.0; FEATURE_COUNT], 0.0));
        let record =
            PatientRecord::from_values(&[1, 5, 4, 1, 1, 1, 1, 1, 1, 5, 5]).expect("record");
        let attribution = explainer.explain(&record).expect("explain");

        for (i, c) in attribution.contributions.iter().enumerate() {
            assert_eq!(c.index, i);
            assert_eq!(c.value, record.values()[i]);
            assert!((c.contribution - c.value as f64).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_zero_coefficient_contributes_nothing() {
        let explainer = LinearExplainer::new(model([0.0; FEATURE_COUNT], 0.7));
        let attribution = explainer
            .explain(&PatientRecord::defaults())
            .expect("explain");
        assert!(attribution.contributions.iter().all(|c| c.contribution == 0.0));
        assert!((explainer.base_value() - 0.7).abs() < f64::EPSILON);
    }
}
