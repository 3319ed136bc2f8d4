//! Fetch primitive for the upstream hospital-records API.
//!
//! Every call is a single GET against `{base}/{endpoint}`. There is no retry, no backoff and no
//! timeout beyond the HTTP client defaults: a transport failure, a non-success status, an empty
//! body or a body that is not the expected JSON all come back as a [`CoreError`].

use crate::constants::{ADMISSIONS_ENDPOINT, ALLOCATIONS_ENDPOINT, EMPLOYEES_ENDPOINT};
use crate::{CoreConfig, CoreError, CoreResult};
use hospital_types::{Admission, Allocation, Employee};
use reqwest::Url;
use serde::de::DeserializeOwned;

/// Thin client over the upstream API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Creates a client with a default `reqwest::Client`.
    pub fn new(cfg: &CoreConfig) -> Self {
        Self::with_http_client(cfg, reqwest::Client::new())
    }

    /// Creates a client around a caller-supplied `reqwest::Client`.
    pub fn with_http_client(cfg: &CoreConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: cfg.upstream_base_url().clone(),
        }
    }

    /// Resolves an endpoint name such as `Employees/4` against the base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> CoreResult<Url> {
        self.base_url
            .join(endpoint)
            .map_err(|e| CoreError::InvalidBaseUrl(format!("{}{endpoint}: {e}", self.base_url)))
    }

    /// GETs an endpoint and returns its body.
    ///
    /// # Errors
    /// - [`CoreError::UpstreamRequest`] if the request cannot be sent or the body cannot be read
    /// - [`CoreError::UpstreamStatus`] for any non-2xx status
    /// - [`CoreError::EmptyBody`] if the body is empty
    pub async fn fetch_text(&self, endpoint: &str) -> CoreResult<String> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::UpstreamStatus {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(CoreError::EmptyBody {
                endpoint: endpoint.to_string(),
            });
        }

        Ok(body)
    }

    /// GETs an endpoint and deserialises its body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str) -> CoreResult<T> {
        let body = self.fetch_text(endpoint).await?;
        serde_json::from_str(&body).map_err(|source| CoreError::Deserialization {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    pub async fn admissions(&self) -> CoreResult<Vec<Admission>> {
        self.fetch_json(ADMISSIONS_ENDPOINT).await
    }

    pub async fn allocations(&self) -> CoreResult<Vec<Allocation>> {
        self.fetch_json(ALLOCATIONS_ENDPOINT).await
    }

    pub async fn employees(&self) -> CoreResult<Vec<Employee>> {
        self.fetch_json(EMPLOYEES_ENDPOINT).await
    }

    /// Looks up a single employee.
    ///
    /// # Returns
    /// * `Ok(Some(employee))` - the upstream returned the record
    /// * `Ok(None)` - the upstream answered 404 or with an empty body
    ///
    /// # Errors
    /// Any other fetch or deserialisation failure.
    pub async fn employee(&self, id: i64) -> CoreResult<Option<Employee>> {
        let endpoint = format!("{EMPLOYEES_ENDPOINT}/{id}");
        match self.fetch_json(&endpoint).await {
            Ok(employee) => Ok(Some(employee)),
            Err(e) if e.is_missing_record() => {
                tracing::warn!("no record for employee {}: {}", id, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
