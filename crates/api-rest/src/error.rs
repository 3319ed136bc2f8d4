use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hospital_core::CoreError;

/// Failure outcomes of the aggregator routes.
#[derive(Debug)]
pub enum ApiError {
    /// Nothing matched; the message is returned as a plain-text body.
    NotFound(String),
    /// Nothing matched and the route has no message to give.
    NotFoundEmpty,
    /// The upstream failed. The cause is logged, never returned.
    Upstream,
}

impl ApiError {
    /// Logs `err` against `route` and collapses it into an [`ApiError::Upstream`].
    pub fn upstream(route: &'static str) -> impl FnOnce(CoreError) -> ApiError {
        move |err| {
            tracing::error!("{} failed: {}", route, err);
            ApiError::Upstream
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::NotFoundEmpty => StatusCode::NOT_FOUND.into_response(),
            ApiError::Upstream => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
