//! Condition catalog for DIAGNOSIFY.
//!
//! This crate owns the static reference dataset the matcher scores against:
//! - domain types ([`Condition`], [`Severity`], [`Recommendations`], [`BodySystem`])
//! - the ordered, immutable [`Catalog`]
//! - the strict YAML wire format and the built-in dataset
//!
//! It performs no scoring. Ranking lives in `diagnosify-core`.

pub mod condition;
pub mod dataset;

pub use condition::{BodySystem, Condition, Recommendations, Severity};
pub use dataset::Catalog;

/// Errors returned by the `catalog` crate.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("condition '{0}' appears more than once")]
    DuplicateCondition(String),

    #[error("condition '{0}' has no reference symptoms")]
    EmptyReferenceSymptoms(String),

    #[error("condition '{condition}' lists reference symptom '{symptom}' more than once")]
    DuplicateReferenceSymptom { condition: String, symptom: String },

    #[error("condition '{condition}' has no {field} recommendations")]
    EmptyRecommendations {
        condition: String,
        field: &'static str,
    },
}

/// Type alias for Results that can fail with a [`CatalogError`].
pub type CatalogResult<T> = Result<T, CatalogError>;
