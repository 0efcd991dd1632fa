//! # reoprisk
//!
//! Unplanned reoperation risk prediction screen.
//!
//! This crate provides:
//! - A fixed table of eleven clinical covariates with integer bounds
//! - A pretrained logistic model loaded once from its JSON export
//! - Exact per-feature attribution of each prediction
//! - A terminal UI to enter covariates and read the result
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (feature table, patient record, prediction, attribution)
//! - `ports`: Trait definitions for the classifier and the explainer
//! - `adapters`: Concrete implementations (logistic regression export)
//! - `application`: The predict-and-explain use case
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Attribution, PatientRecord, Prediction, RiskLabel};

/// Result type for reoprisk operations
pub type Result<T> = std::result::Result<T, ReopRiskError>;

/// Main error type for reoprisk
#[derive(Debug, thiserror::Error)]
pub enum ReopRiskError {
    #[error("Model error: {0}")]
    Model(#[from] domain::ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
