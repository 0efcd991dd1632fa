//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and the externally trained model.

mod classifier;
mod explainer;

pub use classifier::Classifier;
pub use explainer::Explainer;
