//! Domain layer: Core types for reoperation risk prediction.
//!
//! Pure Rust types with no I/O. The feature table is a compile-time constant
//! and records are validated on construction.

mod attribution;
mod error;
mod features;
mod prediction;
mod record;

pub use attribution::{Attribution, FeatureContribution};
pub use error::ModelError;
pub use features::{feature_names, FeatureSpec, FEATURES, FEATURE_COUNT};
pub use prediction::{format_probability, Prediction, RiskLabel, RISK_THRESHOLD};
pub use record::PatientRecord;
