#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid upstream base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("upstream request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),
    #[error("upstream returned {status} for {endpoint}")]
    UpstreamStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },
    #[error("upstream returned an empty body for {endpoint}")]
    EmptyBody { endpoint: String },
    #[error("failed to deserialize {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    /// True when the upstream answered but had nothing to give for this endpoint.
    ///
    /// Single-record lookups treat this as "not found" rather than as a failure.
    pub fn is_missing_record(&self) -> bool {
        match self {
            CoreError::EmptyBody { .. } => true,
            CoreError::UpstreamStatus { status, .. } => *status == reqwest::StatusCode::NOT_FOUND,
            _ => false,
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
