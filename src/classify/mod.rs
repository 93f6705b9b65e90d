//! Content classification — data model, pattern library, and the
//! deterministic rule-based path.

pub mod model;
pub mod patterns;
pub mod rules;

pub use model::{Category, ClassificationResult};
pub use rules::classify;
