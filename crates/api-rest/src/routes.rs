//! Route handlers for the aggregator.
//!
//! Each handler delegates to `HospitalService` and only decides the status code.

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::AppState;
use api_shared::{AdmissionSummary, CurrentAdmission, HealthRes, HealthService};
use hospital_core::constants::{no_admissions_for_patient_message, NO_CURRENT_ADMISSIONS_MESSAGE};
use hospital_types::Employee;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Answers without touching the upstream.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/Admission/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "Patient identifier, matched as text")
    ),
    responses(
        (status = 200, description = "Admissions of the patient", body = [AdmissionSummary]),
        (status = 404, description = "No admissions for the patient", body = String),
        (status = 500, description = "Upstream failure")
    )
)]
/// List all admissions for a specific patient
///
/// The identifier is compared with the upstream `patientID` as text, so malformed identifiers
/// find nothing rather than failing.
///
/// # Errors
/// - `404 Not Found` with `No admissions for patient found with ID {patient_id}` if nothing
///   matches.
/// - `500 Internal Server Error` if the admissions cannot be fetched.
#[axum::debug_handler]
pub async fn admissions_for_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Vec<AdmissionSummary>>, ApiError> {
    let admissions = state
        .hospital_service
        .admissions_for_patient(&patient_id)
        .await
        .map_err(ApiError::upstream("admissions for patient"))?;

    if admissions.is_empty() {
        return Err(ApiError::NotFound(no_admissions_for_patient_message(
            &patient_id,
        )));
    }
    Ok(Json(admissions))
}

#[utoipa::path(
    get,
    path = "/CurrentAdmissions",
    responses(
        (status = 200, description = "Patients not yet discharged", body = [CurrentAdmission]),
        (status = 404, description = "Nobody is currently admitted", body = String),
        (status = 500, description = "Upstream failure")
    )
)]
/// List patients who are currently admitted
///
/// # Errors
/// - `404 Not Found` with `No patients currently admitted` if no admission is open.
/// - `500 Internal Server Error` if the admissions cannot be fetched.
#[axum::debug_handler]
pub async fn current_admissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<CurrentAdmission>>, ApiError> {
    let current = state
        .hospital_service
        .current_admissions()
        .await
        .map_err(ApiError::upstream("current admissions"))?;

    if current.is_empty() {
        return Err(ApiError::NotFound(NO_CURRENT_ADMISSIONS_MESSAGE.into()));
    }
    Ok(Json(current))
}

#[utoipa::path(
    get,
    path = "/EmployeeWithMostAdmissions",
    responses(
        (status = 200, description = "Employee record of the member of staff with the most allocations"),
        (status = 404, description = "No allocations, or the employee could not be found"),
        (status = 500, description = "Upstream failure")
    )
)]
/// Identify the member of staff with the most admissions
///
/// Ties are resolved in favour of the lowest employee id.
#[axum::debug_handler]
pub async fn employee_with_most_admissions(
    State(state): State<AppState>,
) -> Result<Json<Employee>, ApiError> {
    state
        .hospital_service
        .employee_with_most_admissions()
        .await
        .map_err(ApiError::upstream("employee with most admissions"))?
        .map(Json)
        .ok_or(ApiError::NotFoundEmpty)
}

#[utoipa::path(
    get,
    path = "/EmployeesWithZeroAdmissions",
    responses(
        (status = 200, description = "Employee records of staff with no allocations"),
        (status = 500, description = "Upstream failure")
    )
)]
/// List members of staff who have no admissions
///
/// An empty list is still a `200 OK`.
#[axum::debug_handler]
pub async fn employees_with_zero_admissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state
        .hospital_service
        .employees_with_zero_admissions()
        .await
        .map_err(ApiError::upstream("employees with zero admissions"))?;
    Ok(Json(employees))
}
