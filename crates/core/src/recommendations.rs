//! Advice drawn from the best-ranked prediction.

use crate::matcher::ScoredCondition;
use serde::Serialize;

/// The recommendation bundle of the highest-confidence prediction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopRecommendation {
    #[serde(rename = "disease")]
    pub condition: String,
    pub confidence: u8,
    pub medications: Vec<String>,
    pub diet: Vec<String>,
    pub precautions: Vec<String>,
}

/// Pick the advice for the first entry of an already ranked prediction list.
///
/// Returns `None` when there are no predictions.
pub fn top_recommendation(predictions: &[ScoredCondition]) -> Option<TopRecommendation> {
    let top = predictions.first()?;
    Some(TopRecommendation {
        condition: top.name.clone(),
        confidence: top.confidence,
        medications: top.recommendations.medications.clone(),
        diet: top.recommendations.diet.clone(),
        precautions: top.recommendations.precautions.clone(),
    })
}
