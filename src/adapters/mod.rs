//! Adapters layer: Concrete implementations of ports.
//!
//! - `logistic`: standardized logistic regression loaded from the training
//!   pipeline's JSON export, with its exact linear explainer

pub mod logistic;
