//! # DIAGNOSIFY Core
//!
//! Core decision logic for the DIAGNOSIFY symptom checker:
//! - Scoring and ranking catalog conditions against a symptom report
//! - Picking the recommendation bundle of the best match
//! - Searching the body-system symptom vocabulary
//! - Startup configuration (catalog loading)
//!
//! **No API concerns**: request validation, HTTP servers and response shapes belong in
//! `api-shared` and `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod recommendations;
pub mod symptoms;

pub use catalog::{BodySystem, Catalog, CatalogError, Condition, Recommendations, Severity};
pub use config::CoreConfig;
pub use constants::{DEFAULT_REST_ADDR, MIN_CONFIDENCE};
pub use error::{CoreError, CoreResult};
pub use matcher::{predict_conditions, score_condition, MatchScore, ScoredCondition};
pub use recommendations::{top_recommendation, TopRecommendation};
pub use symptoms::{search_symptoms, unrecognised_symptoms};

use std::sync::Arc;

/// Pure symptom-checking operations over a shared, read-only catalog.
///
/// Cloning is cheap; every clone shares the same [`CoreConfig`].
#[derive(Clone, Debug)]
pub struct SymptomChecker {
    cfg: Arc<CoreConfig>,
}

impl SymptomChecker {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Rank catalog conditions against `symptoms`. See [`predict_conditions`].
    pub fn predict<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<ScoredCondition> {
        let predictions = predict_conditions(symptoms, self.cfg.catalog());
        tracing::debug!(
            symptoms = symptoms.len(),
            predictions = predictions.len(),
            top = predictions.first().map(|p| p.name.as_str()),
            "scored symptom report"
        );
        predictions
    }

    /// Recommendation bundle for the best-ranked prediction, if any condition matched.
    pub fn recommend<S: AsRef<str>>(&self, symptoms: &[S]) -> Option<TopRecommendation> {
        top_recommendation(&self.predict(symptoms))
    }

    pub fn search_symptoms(&self, term: Option<&str>) -> Vec<BodySystem> {
        search_symptoms(self.cfg.catalog(), term)
    }

    /// Input labels the catalog does not know, in input order.
    pub fn unrecognised<'a, S: AsRef<str>>(&self, symptoms: &'a [S]) -> Vec<&'a str> {
        unrecognised_symptoms(self.cfg.catalog(), symptoms)
    }

    pub fn conditions(&self) -> &[Condition] {
        self.cfg.catalog().conditions()
    }

    pub fn catalog(&self) -> &Catalog {
        self.cfg.catalog()
    }
}
