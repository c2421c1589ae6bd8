//! Symptom-to-condition matching and ranking.
//!
//! For user symptoms `U` (deduplicated) and a condition's reference symptoms `R`:
//!
//! - `match_count` is the number of labels in `U` that also appear in `R`
//! - `user_coverage` is `match_count / |U| * 100`
//! - `reference_coverage` is `match_count / |R| * 100`
//! - `confidence` is `round(user_coverage * 0.7 + reference_coverage * 0.3)`, half-up
//!
//! Only conditions scoring above [`MIN_CONFIDENCE`] are returned, highest first. Equal scores
//! keep catalog order.

use crate::constants::{MIN_CONFIDENCE, REFERENCE_COVERAGE_WEIGHT, USER_COVERAGE_WEIGHT};
use catalog::{Catalog, Condition, Recommendations, Severity};
use serde::Serialize;
use std::collections::HashSet;

/// Breakdown of how one condition scored against a symptom report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchScore {
    pub match_count: usize,
    pub user_coverage: f64,
    pub reference_coverage: f64,
    pub confidence: u8,
}

/// A condition's descriptive fields together with its computed confidence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoredCondition {
    pub name: String,
    pub confidence: u8,
    pub description: String,
    pub severity: Severity,
    pub recommendations: Recommendations,
}

impl ScoredCondition {
    fn new(condition: &Condition, confidence: u8) -> Self {
        Self {
            name: condition.name().to_string(),
            confidence,
            description: condition.description().to_string(),
            severity: condition.severity(),
            recommendations: condition.recommendations().clone(),
        }
    }
}

/// Rank every catalog condition against `symptoms`.
///
/// Symptom labels are opaque and compared exactly. Repeated labels are counted once. An empty
/// report returns an empty list without scoring anything.
pub fn predict_conditions<S: AsRef<str>>(
    symptoms: &[S],
    catalog: &Catalog,
) -> Vec<ScoredCondition> {
    if symptoms.is_empty() {
        return Vec::new();
    }

    let distinct = distinct_symptoms(symptoms);

    let mut predictions: Vec<ScoredCondition> = catalog
        .conditions()
        .iter()
        .filter_map(|condition| {
            let score = score_distinct(&distinct, condition);
            (score.confidence > MIN_CONFIDENCE)
                .then(|| ScoredCondition::new(condition, score.confidence))
        })
        .collect();

    // `sort_by` is stable, so ties stay in catalog order.
    predictions.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    predictions
}

/// Score a single condition against `symptoms`.
///
/// An empty report scores zero across the board.
pub fn score_condition<S: AsRef<str>>(symptoms: &[S], condition: &Condition) -> MatchScore {
    score_distinct(&distinct_symptoms(symptoms), condition)
}

/// Drop repeated labels, keeping the first occurrence of each.
pub fn distinct_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(symptoms.len());
    symptoms
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| seen.insert(*s))
        .collect()
}

fn score_distinct(symptoms: &[&str], condition: &Condition) -> MatchScore {
    let user_len = symptoms.len();
    let reference_len = condition.reference_symptoms().len();

    if user_len == 0 || reference_len == 0 {
        return MatchScore {
            match_count: 0,
            user_coverage: 0.0,
            reference_coverage: 0.0,
            confidence: 0,
        };
    }

    let match_count = symptoms.iter().filter(|s| condition.has_symptom(s)).count();

    MatchScore {
        match_count,
        user_coverage: percentage(match_count, user_len),
        reference_coverage: percentage(match_count, reference_len),
        confidence: weighted_confidence(match_count, user_len, reference_len),
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64 * 100.0
}

/// `round(70 * m / u + 30 * m / r)` evaluated as a single fraction, so half-way values always
/// round up regardless of floating-point representation.
fn weighted_confidence(match_count: usize, user_len: usize, reference_len: usize) -> u8 {
    let m = match_count as u64;
    let u = user_len as u64;
    let r = reference_len as u64;

    let numerator = m * (USER_COVERAGE_WEIGHT * r + REFERENCE_COVERAGE_WEIGHT * u);
    let denominator = u * r;
    let rounded = (2 * numerator + denominator) / (2 * denominator);

    rounded.min(100) as u8
}
