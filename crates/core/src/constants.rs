//! Constants used throughout the hospital core crate.
//!
//! Upstream endpoint names and user-facing messages live here so the routes, the service and the
//! tests agree on them.

/// Upstream API used when no base URL is configured.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://web.socem.plymouth.ac.uk/COMP2005/api/";

/// Default bind address for the aggregator REST API.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8080";

/// Upstream collection of admissions.
pub const ADMISSIONS_ENDPOINT: &str = "Admissions";

/// Upstream collection of staff allocations.
pub const ALLOCATIONS_ENDPOINT: &str = "Allocations";

/// Upstream collection of employees; `Employees/{id}` addresses a single record.
pub const EMPLOYEES_ENDPOINT: &str = "Employees";

/// Body of the 404 returned when nobody is currently admitted.
pub const NO_CURRENT_ADMISSIONS_MESSAGE: &str = "No patients currently admitted";

/// Body of the 404 returned when a patient has no admissions.
pub fn no_admissions_for_patient_message(patient_id: &str) -> String {
    format!("No admissions for patient found with ID {patient_id}")
}
