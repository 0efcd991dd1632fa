//! Logistic adapter: Implementation of `Classifier` for a standardized
//! logistic regression exported by the training pipeline.
//!
//! # Artifact format
//!
//! A single JSON file:
//!
//! ```json
//! {
//!   "feature_names": ["Sex", "ASA scores", ...],
//!   "coefficients": [...],
//!   "intercept": -1.7,
//!   "scaler_mean": [...],
//!   "scaler_scale": [...]
//! }
//! ```
//!
//! The model computes `z = intercept + Σ coef_i * (x_i - mean_i) / scale_i`
//! and `p = 1 / (1 + e^-z)`. `feature_names` must equal the feature table in
//! order, so column mismatches fail at load time instead of producing a
//! silently wrong probability.

mod explainer;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{feature_names, ModelError, PatientRecord, FEATURE_COUNT};
use crate::ports::Classifier;

pub use explainer::LinearExplainer;

/// File name looked up when the configured model path is a directory.
pub const MODEL_FILE_NAME: &str = "model.json";

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLogisticModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub scaler_mean: Vec<f64>,
    pub scaler_scale: Vec<f64>,
}

/// Loaded, validated logistic regression.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    params: ExportedLogisticModel,
}

impl LogisticModel {
    /// Load the model from a JSON file, or from `model.json` inside a
    /// directory.
    ///
    /// # Errors
    /// Returns `ModelError::Load` if the file is missing or malformed, and a
    /// shape or order error if the columns do not match the feature table.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model_path = Self::resolve_path(path);

        let content = std::fs::read_to_string(&model_path)
            .map_err(|e| ModelError::Load(format!("{}: {e}", model_path.display())))?;
        let params: ExportedLogisticModel = serde_json::from_str(&content)
            .map_err(|e| ModelError::Load(format!("{}: {e}", model_path.display())))?;

        let model = Self::from_params(params)?;

        tracing::info!(
            "Loaded model from {:?} (n_features={}, intercept={:.4})",
            model_path,
            model.params.feature_names.len(),
            model.params.intercept
        );

        Ok(model)
    }

    /// Validate exported parameters against the feature table.
    ///
    /// # Errors
    /// Returns an error if any parameter vector has the wrong length, a
    /// column name is out of order, or a parameter is not finite.
    pub fn from_params(params: ExportedLogisticModel) -> Result<Self, ModelError> {
        let n = params.feature_names.len();
        if n != FEATURE_COUNT {
            return Err(ModelError::ShapeMismatch {
                expected: FEATURE_COUNT,
                got: n,
            });
        }
        if params.coefficients.len() != n
            || params.scaler_mean.len() != n
            || params.scaler_scale.len() != n
        {
            return Err(ModelError::Load(
                "Model parameter lengths do not match feature_names length".into(),
            ));
        }

        for (index, (expected, got)) in feature_names()
            .iter()
            .zip(params.feature_names.iter())
            .enumerate()
        {
            if *expected != got.as_str() {
                return Err(ModelError::FeatureOrder {
                    index,
                    expected: (*expected).to_string(),
                    got: got.clone(),
                });
            }
        }

        let all_finite = std::iter::once(params.intercept)
            .chain(params.coefficients.iter().copied())
            .chain(params.scaler_mean.iter().copied())
            .chain(params.scaler_scale.iter().copied())
            .all(f64::is_finite);
        if !all_finite {
            return Err(ModelError::Load("Model parameters must be finite".into()));
        }
        if let Some(i) = params.scaler_scale.iter().position(|&s| s == 0.0) {
            return Err(ModelError::Load(format!(
                "scaler_scale for {:?} is zero",
                params.feature_names[i]
            )));
        }

        Ok(Self { params })
    }

    #[must_use]
    pub fn params(&self) -> &ExportedLogisticModel {
        &self.params
    }

    /// Per-feature terms `coef_i * (x_i - mean_i) / scale_i` in column order.
    pub(crate) fn terms(&self, record: &PatientRecord) -> [f64; FEATURE_COUNT] {
        let x = record.as_f64();
        let p = &self.params;
        std::array::from_fn(|i| p.coefficients[i] * (x[i] - p.scaler_mean[i]) / p.scaler_scale[i])
    }

    /// Linear predictor (log-odds of the positive class).
    #[must_use]
    pub fn decision_function(&self, record: &PatientRecord) -> f64 {
        self.params.intercept + self.terms(record).iter().sum::<f64>()
    }

    fn resolve_path(path: &Path) -> PathBuf {
        if path.is_dir() {
            path.join(MODEL_FILE_NAME)
        } else {
            path.to_path_buf()
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Classifier for LogisticModel {
    fn predict_proba(&self, record: &PatientRecord) -> Result<[f64; 2], ModelError> {
        let z = self.decision_function(record);
        let p = sigmoid(z);
        if !p.is_finite() {
            return Err(ModelError::Numeric(format!(
                "non-finite probability from log-odds {z}"
            )));
        }

        tracing::debug!("Computed positive-class probability {:.4}", p);
        Ok([1.0 - p, p])
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Parameters with unit scale and zero mean, so each term is coef * x.
    pub(crate) fn unit_params(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> ExportedLogisticModel {
        ExportedLogisticModel {
            feature_names: feature_names().iter().map(|s| s.to_string()).collect(),
            coefficients: coefficients.to_vec(),
            intercept,
            scaler_mean: vec![0.0; FEATURE_COUNT],
            scaler_scale: vec![1.0; FEATURE_COUNT],
        }
    }

    fn write_model(path: &Path, params: &ExportedLogisticModel) {
        let json = serde_json::to_string_pretty(params).expect("serialize");
        std::fs::write(path, json).expect("write model");
    }

    #[test]
    fn test_intercept_only_model() {
        let model = LogisticModel::from_params(unit_params([0.0; FEATURE_COUNT], 0.0))
            .expect("valid params");
        let proba = model
            .predict_proba(&PatientRecord::defaults())
            .expect("predict");
        assert!((proba[0] - 0.5).abs() < 1e-12);
        assert!((proba[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let mut coef = [0.0; FEATURE_COUNT];
        coef[1] = 0.8;
        coef[9] = 0.4;
        let model = LogisticModel::from_params(unit_params(coef, -2.0)).expect("valid params");
        let record =
            PatientRecord::from_values(&[1, 4, 2, 1, 0, 1, 1, 0, 1, 3, 2]).expect("record");

        let proba = model.predict_proba(&record).expect("predict");
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);

        // z = -2 + 0.8 * 4 + 0.4 * 3 = 2.4
        let expected = 1.0 / (1.0 + (-2.4f64).exp());
        assert!((proba[1] - expected).abs() < 1e-12);
        assert!((model.positive_probability(&record).expect("predict") - expected).abs() < 1e-12);
    }

    #[test]
    fn test_standardization_is_applied() {
        let mut params = unit_params([0.0; FEATURE_COUNT], 0.0);
        params.coefficients[9] = 1.0;
        params.scaler_mean[9] = 1.0;
        params.scaler_scale[9] = 2.0;
        let model = LogisticModel::from_params(params).expect("valid params");

        let record =
            PatientRecord::from_values(&[0, 0, 1, 0, 0, 0, 0, 0, 0, 5, 1]).expect("record");
        assert!((model.decision_function(&record) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_reordered_columns() {
        let mut params = unit_params([0.0; FEATURE_COUNT], 0.0);
        params.feature_names.swap(0, 1);
        let err = LogisticModel::from_params(params).expect_err("must fail");
        assert!(matches!(err, ModelError::FeatureOrder { index: 0, .. }));
    }

    #[test]
    fn test_rejects_missing_column() {
        let mut params = unit_params([0.0; FEATURE_COUNT], 0.0);
        params.feature_names.pop();
        let err = LogisticModel::from_params(params).expect_err("must fail");
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                expected: 11,
                got: 10
            }
        ));
    }

    #[test]
    fn test_rejects_zero_scale() {
        let mut params = unit_params([0.0; FEATURE_COUNT], 0.0);
        params.scaler_scale[3] = 0.0;
        let err = LogisticModel::from_params(params).expect_err("must fail");
        assert!(err.to_string().contains("Benign or malignant"));
    }

    #[test]
    fn test_load_from_directory_and_file() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join(MODEL_FILE_NAME);
        write_model(&path, &unit_params([0.1; FEATURE_COUNT], -1.5));

        let from_dir = LogisticModel::load(temp.path()).expect("load from dir");
        let from_file = LogisticModel::load(&path).expect("load from file");
        assert!((from_dir.params().intercept + 1.5).abs() < f64::EPSILON);
        assert!((from_file.params().intercept + 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = tempdir().expect("tempdir");
        let err = LogisticModel::load(temp.path()).expect_err("must fail");
        assert!(matches!(err, ModelError::Load(_)));
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join(MODEL_FILE_NAME);
        std::fs::write(&path, "{ not json").expect("write");
        let err = LogisticModel::load(&path).expect_err("must fail");
        assert!(err.to_string().starts_with("Failed to load model artifact"));
    }

    #[test]
    fn test_bundled_model_loads() {
        let model = LogisticModel::load(Path::new("models")).expect("bundled model should load");
        let p = model
            .positive_probability(&PatientRecord::defaults())
            .expect("predict");
        assert!((0.0..=1.0).contains(&p));
    }
}
