//! Feature specification for the reoperation risk model.
//!
//! The table order is the column order the model was trained on and the
//! display order of the form.

use serde::Serialize;

/// One accepted model input: its column name, inclusive integer bounds and a
/// human-readable description of the coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
    pub description: &'static str,
}

impl FeatureSpec {
    /// Form label: name followed by the parenthesised description.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.description)
    }

    /// Whether `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

/// Number of model inputs.
pub const FEATURE_COUNT: usize = 11;

/// The eleven model inputs, in training column order.
pub static FEATURES: [FeatureSpec; FEATURE_COUNT] = [
    FeatureSpec {
        name: "Sex",
        min: 0,
        max: 1,
        description: "Patient gender (0=Female, 1=Male)",
    },
    FeatureSpec {
        name: "ASA scores",
        min: 0,
        max: 5,
        description: "ASA physical status classification",
    },
    FeatureSpec {
        name: "tumor location",
        min: 1,
        max: 4,
        description: "Tumor location code (1-4)",
    },
    FeatureSpec {
        name: "Benign or malignant",
        min: 0,
        max: 1,
        description: "Tumor nature (0=Benign, 1=Malignant)",
    },
    FeatureSpec {
        name: "Admitted to NICU",
        min: 0,
        max: 1,
        description: "NICU admission status",
    },
    FeatureSpec {
        name: "Duration of surgery",
        min: 0,
        max: 1,
        description: "Surgery duration category",
    },
    FeatureSpec {
        name: "diabetes",
        min: 0,
        max: 1,
        description: "Diabetes mellitus status",
    },
    FeatureSpec {
        name: "CHF",
        min: 0,
        max: 1,
        description: "Congestive heart failure",
    },
    FeatureSpec {
        name: "Functional dependencies",
        min: 0,
        max: 1,
        description: "Functional dependencies",
    },
    FeatureSpec {
        name: "mFI-5",
        min: 0,
        max: 5,
        description: "Modified Frailty Index",
    },
    FeatureSpec {
        name: "Type of tumor",
        min: 1,
        max: 5,
        description: "Tumor type code (1-5)",
    },
];

/// Column names in training order.
#[must_use]
pub fn feature_names() -> [&'static str; FEATURE_COUNT] {
    FEATURES.map(|f| f.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_well_formed() {
        assert_eq!(FEATURES.len(), 11);
        for f in FEATURES.iter() {
            assert!(f.min <= f.max, "{} has min > max", f.name);
        }

        let unique: HashSet<_> = FEATURES.iter().map(|f| f.name).collect();
        assert_eq!(unique.len(), FEATURES.len());
    }

    #[test]
    fn test_label_includes_description() {
        assert_eq!(
            FEATURES[0].label(),
            "Sex (Patient gender (0=Female, 1=Male))"
        );
        assert_eq!(FEATURES[9].label(), "mFI-5 (Modified Frailty Index)");
    }

    #[test]
    fn test_clamp_and_contains() {
        let location = FEATURES[2];
        assert_eq!(location.clamp(0), 1);
        assert_eq!(location.clamp(9), 4);
        assert_eq!(location.clamp(3), 3);
        assert!(location.contains(1));
        assert!(location.contains(4));
        assert!(!location.contains(5));
    }

    #[test]
    fn test_feature_names_order() {
        let names = feature_names();
        assert_eq!(names[0], "Sex");
        assert_eq!(names[10], "Type of tumor");
    }
}
