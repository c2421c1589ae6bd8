//! Request validation shared by the API transports.
//!
//! The core scoring function assumes well-typed, non-empty input. Everything that could violate
//! that is rejected here, before the core is invoked.

use crate::types::PredictReq;

/// Client-facing message for any malformed symptom list.
pub const INVALID_SYMPTOMS_MESSAGE: &str = "Invalid or missing symptoms array";

/// Client-facing message for unexpected failures while handling a request.
pub const PREDICTION_FAILED_MESSAGE: &str = "An error occurred during prediction";

/// Reasons a request is rejected before reaching the core.
///
/// Every variant renders the same client-facing message; the variant itself is for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid or missing symptoms array")]
    MissingSymptoms,
    #[error("Invalid or missing symptoms array")]
    EmptySymptoms,
    #[error("Invalid or missing symptoms array")]
    MalformedBody(String),
}

impl PredictReq {
    /// Extract the symptom list, rejecting a missing or empty one.
    ///
    /// Labels are returned untouched. Unknown labels are valid and simply never match.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingSymptoms`] or [`ValidationError::EmptySymptoms`].
    pub fn into_symptoms(self) -> Result<Vec<String>, ValidationError> {
        match self.symptoms {
            None => Err(ValidationError::MissingSymptoms),
            Some(symptoms) if symptoms.is_empty() => Err(ValidationError::EmptySymptoms),
            Some(symptoms) => Ok(symptoms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_list_verbatim() {
        let req = PredictReq {
            symptoms: Some(vec!["Cough".into(), "cough".into(), "Cough".into()]),
        };
        assert_eq!(
            req.into_symptoms().expect("valid"),
            vec!["Cough", "cough", "Cough"]
        );
    }

    #[test]
    fn rejects_missing_symptoms() {
        let err = PredictReq { symptoms: None }
            .into_symptoms()
            .expect_err("missing rejected");
        assert_eq!(err, ValidationError::MissingSymptoms);
        assert_eq!(err.to_string(), INVALID_SYMPTOMS_MESSAGE);
    }

    #[test]
    fn rejects_empty_symptoms() {
        let err = PredictReq {
            symptoms: Some(vec![]),
        }
        .into_symptoms()
        .expect_err("empty rejected");
        assert_eq!(err, ValidationError::EmptySymptoms);
        assert_eq!(err.to_string(), INVALID_SYMPTOMS_MESSAGE);
    }
}
