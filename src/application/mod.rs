//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the single
//! use case of the screen: predict and explain one patient record.

mod prediction;

pub use prediction::{PredictionOutcome, PredictionService};

#[cfg(test)]
pub(crate) use prediction::tests as fixtures;
