//! # API Shared
//!
//! Shared utilities and definitions for DIAGNOSIFY APIs.
//!
//! Contains:
//! - Request/response schemas (`types` module), with OpenAPI derives
//! - Boundary validation of symptom requests
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` for common functionality.

pub mod health;
pub mod types;
pub mod validation;

pub use health::HealthService;
pub use types::*;
pub use validation::{ValidationError, INVALID_SYMPTOMS_MESSAGE, PREDICTION_FAILED_MESSAGE};
