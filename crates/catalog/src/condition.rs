//! Domain-level condition types.
//!
//! A [`Condition`] is validated on construction, so every value reachable through a
//! [`crate::Catalog`] has a non-empty name, a non-empty deduplicated reference symptom set and a
//! complete recommendation bundle. Scoring relies on that to avoid dividing by zero.

use crate::{CatalogError, CatalogResult};
use diagnosify_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Severity classification of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Lowercase label used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory text attached to a condition.
///
/// Each list is ordered as authored and must be non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub medications: Vec<String>,
    pub diet: Vec<String>,
    pub precautions: Vec<String>,
}

/// A catalog entry: one known condition and the symptoms that define it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    name: NonEmptyText,
    reference_symptoms: Vec<String>,
    description: String,
    severity: Severity,
    recommendations: Recommendations,
}

impl Condition {
    /// Build a validated condition.
    ///
    /// Symptom labels are kept exactly as given. They are not trimmed or case-folded, because
    /// matching is an exact string comparison.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if:
    /// - `name` is empty or whitespace,
    /// - `reference_symptoms` is empty, contains a blank label or repeats a label,
    /// - any recommendation list is empty.
    pub fn new(
        name: impl AsRef<str>,
        reference_symptoms: Vec<String>,
        description: impl Into<String>,
        severity: Severity,
        recommendations: Recommendations,
    ) -> CatalogResult<Self> {
        let name = NonEmptyText::new(name.as_ref()).map_err(|_| {
            CatalogError::InvalidInput("condition name cannot be empty".into())
        })?;

        if reference_symptoms.is_empty() {
            return Err(CatalogError::EmptyReferenceSymptoms(name.into_inner()));
        }

        let mut seen = HashSet::with_capacity(reference_symptoms.len());
        for symptom in &reference_symptoms {
            if symptom.trim().is_empty() {
                return Err(CatalogError::InvalidInput(format!(
                    "condition '{name}' has a blank reference symptom"
                )));
            }
            if !seen.insert(symptom.as_str()) {
                return Err(CatalogError::DuplicateReferenceSymptom {
                    condition: name.into_inner(),
                    symptom: symptom.clone(),
                });
            }
        }

        for (field, items) in [
            ("medications", &recommendations.medications),
            ("diet", &recommendations.diet),
            ("precautions", &recommendations.precautions),
        ] {
            if items.is_empty() {
                return Err(CatalogError::EmptyRecommendations {
                    condition: name.into_inner(),
                    field,
                });
            }
        }

        Ok(Self {
            name,
            reference_symptoms,
            description: description.into(),
            severity,
            recommendations,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn name_text(&self) -> &NonEmptyText {
        &self.name
    }

    /// The defining symptom labels, in authored order. Never empty.
    pub fn reference_symptoms(&self) -> &[String] {
        &self.reference_symptoms
    }

    /// Whether `symptom` is one of this condition's reference symptoms (exact match).
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.reference_symptoms.iter().any(|s| s == symptom)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn recommendations(&self) -> &Recommendations {
        &self.recommendations
    }
}

/// A named group of symptom labels offered to users when picking symptoms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySystem {
    pub name: NonEmptyText,
    pub symptoms: Vec<String>,
}

impl BodySystem {
    pub(crate) fn validate(&self) -> CatalogResult<()> {
        if self.symptoms.is_empty() {
            return Err(CatalogError::InvalidInput(format!(
                "body system '{}' has no symptoms",
                self.name
            )));
        }
        if self.symptoms.iter().any(|s| s.trim().is_empty()) {
            return Err(CatalogError::InvalidInput(format!(
                "body system '{}' has a blank symptom",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendations() -> Recommendations {
        Recommendations {
            medications: vec!["Rest".into()],
            diet: vec!["Fluids".into()],
            precautions: vec!["Wash hands".into()],
        }
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_symptom_labels_verbatim() {
        let condition = Condition::new(
            "  Test Condition ",
            labels(&["Cough", "cough", " Fever"]),
            "desc",
            Severity::Mild,
            recommendations(),
        )
        .expect("valid condition");

        assert_eq!(condition.name(), "Test Condition");
        assert!(condition.has_symptom("Cough"));
        assert!(condition.has_symptom("cough"));
        assert!(condition.has_symptom(" Fever"));
        assert!(!condition.has_symptom("Fever"));
    }

    #[test]
    fn rejects_empty_reference_symptoms() {
        let err = Condition::new("X", vec![], "", Severity::Mild, recommendations())
            .expect_err("empty set rejected");
        assert!(matches!(err, CatalogError::EmptyReferenceSymptoms(name) if name == "X"));
    }

    #[test]
    fn rejects_repeated_reference_symptom() {
        let err = Condition::new(
            "X",
            labels(&["Cough", "Fever", "Cough"]),
            "",
            Severity::Mild,
            recommendations(),
        )
        .expect_err("duplicate rejected");
        match err {
            CatalogError::DuplicateReferenceSymptom { condition, symptom } => {
                assert_eq!(condition, "X");
                assert_eq!(symptom, "Cough");
            }
            other => panic!("expected DuplicateReferenceSymptom, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_name_and_blank_symptom() {
        let err = Condition::new(" ", labels(&["Cough"]), "", Severity::Mild, recommendations())
            .expect_err("blank name rejected");
        assert!(matches!(err, CatalogError::InvalidInput(msg) if msg.contains("name")));

        let err = Condition::new("X", labels(&["  "]), "", Severity::Mild, recommendations())
            .expect_err("blank symptom rejected");
        assert!(matches!(err, CatalogError::InvalidInput(msg) if msg.contains("blank")));
    }

    #[test]
    fn rejects_empty_recommendation_list() {
        let mut recs = recommendations();
        recs.diet.clear();
        let err = Condition::new("X", labels(&["Cough"]), "", Severity::Severe, recs)
            .expect_err("empty diet rejected");
        assert!(matches!(
            err,
            CatalogError::EmptyRecommendations { field: "diet", .. }
        ));
    }

    #[test]
    fn severity_orders_and_displays() {
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Severe);
        assert_eq!(Severity::Severe.to_string(), "severe");
    }
}
