//! Patient record handed to the classifier.

use serde::Serialize;

use super::error::ModelError;
use super::features::{FeatureSpec, FEATURES, FEATURE_COUNT};

/// One row of covariates, one integer per feature in training column order.
///
/// Construction checks length and bounds, so a record that exists always
/// matches the shape the model was trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientRecord {
    values: [i64; FEATURE_COUNT],
}

impl PatientRecord {
    /// Every feature at its minimum, the form's initial state.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            values: FEATURES.map(|f| f.min),
        }
    }

    /// Build a record from values in training column order.
    ///
    /// # Errors
    /// Returns `ModelError::ShapeMismatch` if `values` does not hold exactly
    /// one entry per feature, or `ModelError::OutOfRange` for the first value
    /// outside its feature's bounds.
    pub fn from_values(values: &[i64]) -> Result<Self, ModelError> {
        if values.len() != FEATURE_COUNT {
            return Err(ModelError::ShapeMismatch {
                expected: FEATURE_COUNT,
                got: values.len(),
            });
        }

        let mut out = [0; FEATURE_COUNT];
        for (i, (spec, &value)) in FEATURES.iter().zip(values).enumerate() {
            if !spec.contains(value) {
                return Err(ModelError::OutOfRange {
                    feature: spec.name,
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
            out[i] = value;
        }

        Ok(Self { values: out })
    }

    #[must_use]
    pub fn values(&self) -> &[i64; FEATURE_COUNT] {
        &self.values
    }

    /// Values as model input.
    #[must_use]
    pub fn as_f64(&self) -> [f64; FEATURE_COUNT] {
        self.values.map(|v| v as f64)
    }

    /// Feature specs paired with their values.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FeatureSpec, i64)> + '_ {
        FEATURES.iter().zip(self.values.iter().copied())
    }
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_minimums() {
        let record = PatientRecord::defaults();
        assert_eq!(record.values(), &[0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_from_values() {
        let v = [1, 3, 2, 1, 0, 1, 0, 1, 0, 4, 5];
        let record = PatientRecord::from_values(&v).expect("Should build");
        assert_eq!(record.values(), &v);
        assert!((record.as_f64()[9] - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        let err = PatientRecord::from_values(&[0; 10]).expect_err("must fail");
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                expected: 11,
                got: 10
            }
        ));
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        let mut v = [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1];
        v[2] = 0; // tumor location starts at 1
        let err = PatientRecord::from_values(&v).expect_err("must fail");
        assert!(err.to_string().contains("tumor location"));
    }

    #[test]
    fn test_iter_follows_feature_order() {
        let record = PatientRecord::defaults();
        let names: Vec<_> = record.iter().map(|(spec, _)| spec.name).collect();
        assert_eq!(names, crate::domain::feature_names().to_vec());
    }
}
