//! # API REST
//!
//! REST API implementation for the hospital aggregator.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation
//! - REST-specific concerns (status codes, JSON serialization, CORS)
//!
//! Uses `hospital-core` for the aggregation itself and `api-shared` for the payload types.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod routes;

#[cfg(test)]
mod tests;

use axum::{response::Json, routing::get, Router};
use hospital_core::HospitalService;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub hospital_service: HospitalService,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health,
        routes::admissions_for_patient,
        routes::current_admissions,
        routes::employee_with_most_admissions,
        routes::employees_with_zero_admissions,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::AdmissionSummary,
        api_shared::CurrentAdmission,
    ))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the aggregator router around `hospital_service`.
pub fn router(hospital_service: HospitalService) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/Admission/:patient_id", get(routes::admissions_for_patient))
        .route("/CurrentAdmissions", get(routes::current_admissions))
        .route(
            "/EmployeeWithMostAdmissions",
            get(routes::employee_with_most_admissions),
        )
        .route(
            "/EmployeesWithZeroAdmissions",
            get(routes::employees_with_zero_admissions),
        )
        .route("/api-docs/openapi.json", get(openapi))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState { hospital_service })
}

/// Binds `addr` and serves the aggregator until the server stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the HTTP server fails while running.
pub async fn serve(addr: &str, hospital_service: HospitalService) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Starting hospital REST API on {}", listener.local_addr()?);
    axum::serve(listener, router(hospital_service)).await?;
    Ok(())
}
