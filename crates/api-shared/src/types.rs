//! Request and response schemas for the DIAGNOSIFY APIs.
//!
//! These are wire types only. Conversions from core types happen in the transport crates so that
//! this crate stays independent of `diagnosify-core`.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of prediction and recommendation requests.
///
/// `symptoms` is optional on the wire so that a missing field reaches validation and gets the
/// same client error as an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredictReq {
    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredictRes {
    pub predictions: Vec<ScoredConditionRes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoredConditionRes {
    pub name: String,
    /// Integer confidence in `[0, 100]`; always above 20 in responses.
    pub confidence: u8,
    pub description: String,
    pub severity: Severity,
    pub recommendations: RecommendationsRes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationsRes {
    pub medications: Vec<String>,
    pub diet: Vec<String>,
    pub precautions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationRes {
    /// `null` when no condition scored above the threshold.
    pub recommendation: Option<TopRecommendationRes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopRecommendationRes {
    /// Name of the top-ranked condition.
    #[serde(rename = "disease")]
    pub condition: String,
    pub confidence: u8,
    pub medications: Vec<String>,
    pub diet: Vec<String>,
    pub precautions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionsRes {
    pub conditions: Vec<ConditionRes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionRes {
    pub name: String,
    pub symptoms: Vec<String>,
    pub description: String,
    pub severity: Severity,
    pub recommendations: RecommendationsRes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SymptomsQuery {
    /// Case-insensitive substring to filter symptom labels by.
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomsRes {
    pub body_systems: Vec<BodySystemRes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BodySystemRes {
    pub name: String,
    pub symptoms: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
