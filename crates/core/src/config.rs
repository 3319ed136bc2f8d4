//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read environment variables themselves.

use crate::constants::DEFAULT_UPSTREAM_BASE_URL;
use crate::{CoreError, CoreResult};
use reqwest::Url;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    upstream_base_url: Url,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The base URL must be absolute `http` or `https`. A trailing `/` is added when missing so
    /// endpoint names join underneath it rather than replacing its last segment.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidBaseUrl`] if the URL does not parse, uses another scheme, or
    /// cannot carry a path.
    pub fn new(upstream_base_url: &str) -> CoreResult<Self> {
        let trimmed = upstream_base_url.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidBaseUrl(
                "upstream base URL cannot be empty".into(),
            ));
        }

        let with_slash = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };

        let url = Url::parse(&with_slash)
            .map_err(|e| CoreError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::InvalidBaseUrl(format!(
                "{trimmed}: scheme must be http or https"
            )));
        }
        if url.cannot_be_a_base() {
            return Err(CoreError::InvalidBaseUrl(format!(
                "{trimmed}: cannot be used as a base URL"
            )));
        }

        Ok(Self {
            upstream_base_url: url,
        })
    }

    pub fn upstream_base_url(&self) -> &Url {
        &self.upstream_base_url
    }
}

/// Build a `CoreConfig` from an optional string value.
///
/// If `value` is `None` or empty/whitespace, the built-in upstream URL is used.
pub fn core_config_from_env_value(value: Option<String>) -> CoreResult<CoreConfig> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        Some(url) => CoreConfig::new(&url),
        None => CoreConfig::new(DEFAULT_UPSTREAM_BASE_URL),
    }
}
