//! Constants used throughout the DIAGNOSIFY core crate.

/// Predictions must score strictly above this confidence to be returned.
pub const MIN_CONFIDENCE: u8 = 20;

/// Weight (in percent) of user coverage: how much of the report a condition explains.
pub const USER_COVERAGE_WEIGHT: u64 = 70;

/// Weight (in percent) of reference coverage: how much of a condition the report exhibits.
pub const REFERENCE_COVERAGE_WEIGHT: u64 = 30;

/// Default listen address for the REST server when no explicit address is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
