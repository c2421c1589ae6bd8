//! Symptom vocabulary lookup for symptom pickers.
//!
//! Searching is a convenience for choosing labels. It does not change how the matcher compares
//! them, which stays exact and case-sensitive.

use catalog::{BodySystem, Catalog};
use std::collections::HashSet;

/// Filter the catalog's body systems by a case-insensitive substring.
///
/// Systems left without any symptom are dropped. `None` or an empty term returns the whole
/// vocabulary.
pub fn search_symptoms(catalog: &Catalog, term: Option<&str>) -> Vec<BodySystem> {
    let needle = term.unwrap_or_default().to_lowercase();

    catalog
        .body_systems()
        .iter()
        .filter_map(|system| {
            let symptoms: Vec<String> = system
                .symptoms
                .iter()
                .filter(|s| s.to_lowercase().contains(&needle))
                .cloned()
                .collect();

            (!symptoms.is_empty()).then(|| BodySystem {
                name: system.name.clone(),
                symptoms,
            })
        })
        .collect()
}

/// Labels in `symptoms` that appear nowhere in the catalog vocabulary, in input order.
///
/// Such labels can never contribute to a match. The comparison is exact, so a case mismatch
/// such as `"headache"` is reported here.
pub fn unrecognised_symptoms<'a, S: AsRef<str>>(
    catalog: &Catalog,
    symptoms: &'a [S],
) -> Vec<&'a str> {
    let known: HashSet<&str> = catalog.known_symptoms().into_iter().collect();
    let mut reported = HashSet::new();
    symptoms
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !known.contains(s) && reported.insert(*s))
        .collect()
}
