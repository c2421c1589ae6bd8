//! The condition catalog and its YAML wire format.
//!
//! Responsibilities:
//! - Hold the ordered, read-only set of conditions and the body-system vocabulary
//! - Define a strict wire model for serialisation/deserialisation
//! - Translate between wire structs and validated domain types
//! - Reject malformed catalogs at load time
//!
//! Notes:
//! - Condition order is preserved from the source file and is the tie-break for equal scores
//! - There are no mutation operations; a new catalog replaces the old one wholesale

use crate::condition::{BodySystem, Condition, Recommendations, Severity};
use crate::{CatalogError, CatalogResult};
use diagnosify_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// YAML source of the built-in catalog.
const BUILTIN_CATALOG_YAML: &str = include_str!("../data/catalog.yaml");

// ============================================================================
// Public Catalog type
// ============================================================================

/// An immutable, ordered set of known conditions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    conditions: Vec<Condition>,
    body_systems: Vec<BodySystem>,
}

impl Catalog {
    /// Wrap a list of already validated conditions.
    ///
    /// An empty list is accepted; scoring against it simply yields no predictions.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCondition`] if two conditions share a name.
    pub fn new(conditions: Vec<Condition>) -> CatalogResult<Self> {
        let mut names = HashSet::with_capacity(conditions.len());
        for condition in &conditions {
            if !names.insert(condition.name()) {
                return Err(CatalogError::DuplicateCondition(
                    condition.name().to_string(),
                ));
            }
        }

        Ok(Self {
            conditions,
            body_systems: Vec::new(),
        })
    }

    /// Attach the body-system symptom vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidInput`] if a body system has no symptoms or a blank symptom
    /// label.
    pub fn with_body_systems(mut self, body_systems: Vec<BodySystem>) -> CatalogResult<Self> {
        for system in &body_systems {
            system.validate()?;
        }
        self.body_systems = body_systems;
        Ok(self)
    }

    /// The catalog shipped with the application.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded YAML is itself malformed.
    pub fn builtin() -> CatalogResult<Self> {
        Self::parse(BUILTIN_CATALOG_YAML)
    }

    /// Parse a catalog from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path" (e.g.
    /// `conditions[2].severity`) to the failing field when the YAML does not match the wire
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if:
    /// - the YAML does not represent a catalog mapping,
    /// - any field has an unexpected type or any unknown key is present,
    /// - any condition or body system fails validation.
    pub fn parse(yaml_text: &str) -> CatalogResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        let wire = match serde_path_to_error::deserialize::<_, CatalogWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(CatalogError::Translation(format!(
                    "Catalog schema mismatch at {path}: {source}"
                )));
            }
        };

        wire_to_domain(wire)
    }

    /// Render the catalog as YAML text in the same shape [`Catalog::parse`] accepts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Translation`] if serialisation fails.
    pub fn render(&self) -> CatalogResult<String> {
        let wire = domain_to_wire(self);
        serde_yaml::to_string(&wire)
            .map_err(|e| CatalogError::Translation(format!("Failed to serialize catalog: {e}")))
    }

    /// Conditions in catalog order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn body_systems(&self) -> &[BodySystem] {
        &self.body_systems
    }

    /// Look up a condition by its exact name.
    pub fn get(&self, name: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.name() == name)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Every distinct symptom label the catalog mentions.
    ///
    /// Labels from condition reference sets come first, followed by any label that only appears
    /// in the body-system vocabulary. Order is first occurrence.
    pub fn known_symptoms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.conditions
            .iter()
            .flat_map(|c| c.reference_symptoms().iter())
            .chain(self.body_systems.iter().flat_map(|b| b.symptoms.iter()))
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of a catalog file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct CatalogWire {
    conditions: Vec<ConditionWire>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    body_systems: Vec<BodySystemWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConditionWire {
    name: NonEmptyText,
    symptoms: Vec<String>,
    description: String,
    severity: Severity,
    recommendations: RecommendationsWire,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct RecommendationsWire {
    medications: Vec<String>,
    diet: Vec<String>,
    precautions: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct BodySystemWire {
    name: NonEmptyText,
    symptoms: Vec<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(wire: CatalogWire) -> CatalogResult<Catalog> {
    let conditions = wire
        .conditions
        .into_iter()
        .map(|c| {
            Condition::new(
                c.name,
                c.symptoms,
                c.description,
                c.severity,
                Recommendations {
                    medications: c.recommendations.medications,
                    diet: c.recommendations.diet,
                    precautions: c.recommendations.precautions,
                },
            )
        })
        .collect::<CatalogResult<Vec<_>>>()?;

    let body_systems = wire
        .body_systems
        .into_iter()
        .map(|b| BodySystem {
            name: b.name,
            symptoms: b.symptoms,
        })
        .collect();

    Catalog::new(conditions)?.with_body_systems(body_systems)
}

fn domain_to_wire(catalog: &Catalog) -> CatalogWire {
    CatalogWire {
        conditions: catalog
            .conditions
            .iter()
            .map(|c| ConditionWire {
                name: c.name_text().clone(),
                symptoms: c.reference_symptoms().to_vec(),
                description: c.description().to_string(),
                severity: c.severity(),
                recommendations: RecommendationsWire {
                    medications: c.recommendations().medications.clone(),
                    diet: c.recommendations().diet.clone(),
                    precautions: c.recommendations().precautions.clone(),
                },
            })
            .collect(),
        body_systems: catalog
            .body_systems
            .iter()
            .map(|b| BodySystemWire {
                name: b.name.clone(),
                symptoms: b.symptoms.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CONDITIONS: &str = r#"conditions:
  - name: Alpha
    symptoms: [Cough, Fever]
    description: First
    severity: mild
    recommendations:
      medications: [A]
      diet: [B]
      precautions: [C]
  - name: Beta
    symptoms: [Fever, Rash, Itching]
    description: Second
    severity: severe
    recommendations:
      medications: [D]
      diet: [E]
      precautions: [F]
"#;

    #[test]
    fn builtin_catalog_loads_in_authored_order() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        let names: Vec<&str> = catalog.conditions().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Common Cold",
                "Seasonal Allergies",
                "Influenza",
                "Migraine",
                "Gastroenteritis"
            ]
        );
        assert_eq!(catalog.body_systems().len(), 6);

        let migraine = catalog.get("Migraine").expect("migraine present");
        assert_eq!(migraine.severity(), Severity::Moderate);
        assert_eq!(
            migraine.reference_symptoms(),
            &[
                "Headache",
                "Nausea",
                "Sensitivity to light",
                "Sensitivity to sound",
                "Visual disturbances"
            ]
        );
        assert_eq!(
            migraine.recommendations().precautions.first().map(String::as_str),
            Some("Rest in a quiet, dark room during attacks")
        );
    }

    #[test]
    fn parses_catalog_without_body_systems() {
        let catalog = Catalog::parse(TWO_CONDITIONS).expect("parse");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.body_systems().is_empty());
        assert_eq!(catalog.conditions()[1].severity(), Severity::Severe);
    }

    #[test]
    fn accepts_empty_condition_list() {
        let catalog = Catalog::parse("conditions: []\n").expect("empty catalog is valid");
        assert!(catalog.is_empty());
    }

    #[test]
    fn render_then_parse_preserves_catalog() {
        let catalog = Catalog::builtin().expect("builtin");
        let yaml = catalog.render().expect("render");
        let reparsed = Catalog::parse(&yaml).expect("reparse");
        assert_eq!(catalog, reparsed);
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = TWO_CONDITIONS.replace("    severity: mild", "    severity: mild\n    icd10: J00");
        let err = Catalog::parse(&input).expect_err("should reject unknown key");
        match err {
            CatalogError::Translation(msg) => {
                assert!(msg.contains("icd10"), "message was: {msg}");
                assert!(msg.contains("conditions[0]"), "message was: {msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn strict_validation_rejects_unknown_severity() {
        let input = TWO_CONDITIONS.replace("severity: severe", "severity: critical");
        let err = Catalog::parse(&input).expect_err("should reject unknown severity");
        match err {
            CatalogError::Translation(msg) => assert!(msg.contains("severity"), "message was: {msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_condition_names() {
        let input = TWO_CONDITIONS.replace("name: Beta", "name: Alpha");
        let err = Catalog::parse(&input).expect_err("should reject duplicate name");
        assert!(matches!(err, CatalogError::DuplicateCondition(name) if name == "Alpha"));
    }

    #[test]
    fn rejects_condition_without_reference_symptoms() {
        let input = TWO_CONDITIONS.replace("symptoms: [Cough, Fever]", "symptoms: []");
        let err = Catalog::parse(&input).expect_err("should reject empty symptom set");
        assert!(matches!(err, CatalogError::EmptyReferenceSymptoms(name) if name == "Alpha"));
    }

    #[test]
    fn rejects_body_system_without_symptoms() {
        let input = format!("{TWO_CONDITIONS}body_systems:\n  - name: Skin\n    symptoms: []\n");
        let err = Catalog::parse(&input).expect_err("should reject empty body system");
        assert!(matches!(err, CatalogError::InvalidInput(msg) if msg.contains("Skin")));
    }

    #[test]
    fn rejects_blank_body_system_name() {
        let input = format!("{TWO_CONDITIONS}body_systems:\n  - name: \"  \"\n    symptoms: [Rash]\n");
        let err = Catalog::parse(&input).expect_err("should reject blank name");
        match err {
            CatalogError::Translation(msg) => {
                assert!(msg.contains("body_systems[0].name"), "message was: {msg}");
                assert!(msg.contains("cannot be empty"), "message was: {msg}");
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_body_system_symptom() {
        let input =
            format!("{TWO_CONDITIONS}body_systems:\n  - name: Skin\n    symptoms: [Rash, \" \"]\n");
        let err = Catalog::parse(&input).expect_err("should reject blank symptom");
        assert!(
            matches!(&err, CatalogError::InvalidInput(msg) if msg.contains("Skin") && msg.contains("blank")),
            "got {err:?}"
        );
    }

    #[test]
    fn rejects_blank_condition_name_on_the_wire() {
        let input = TWO_CONDITIONS.replace("name: Alpha", "name: \"   \"");
        let err = Catalog::parse(&input).expect_err("should reject blank condition name");
        assert!(
            matches!(&err, CatalogError::Translation(msg) if msg.contains("conditions[0].name")),
            "got {err:?}"
        );
    }

    #[test]
    fn known_symptoms_are_distinct_in_first_seen_order() {
        let input = format!(
            "{TWO_CONDITIONS}body_systems:\n  - name: Skin\n    symptoms: [Rash, Hives]\n"
        );
        let catalog = Catalog::parse(&input).expect("parse");
        assert_eq!(
            catalog.known_symptoms(),
            vec!["Cough", "Fever", "Rash", "Itching", "Hives"]
        );
    }
}
