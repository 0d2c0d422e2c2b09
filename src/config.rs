// ABOUTME: Client configuration for reaching the prediction service
// ABOUTME: Resolves the base URL from the environment and carries HTTP timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::constants::{defaults, env_config, service_names};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Settings for the HTTP client.
///
/// Only the base URL is environment-driven; the timeouts are ambient client
/// settings with fixed defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prediction service base URL, always ending in `/`
    pub base_url: Url,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for `base_url` with default timeouts
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL does not parse or is not http(s)
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
            user_agent: format!(
                "{}/{}",
                service_names::CALORIE_INSIGHT,
                env!("CARGO_PKG_VERSION")
            ),
        })
    }

    /// Load configuration from `CALORIE_API_URL`, falling back to the default URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the variable holds an unusable URL
    pub fn from_env() -> AppResult<Self> {
        let raw = env::var(env_config::API_URL).unwrap_or_else(|_| {
            debug!(
                "{} not set, using {}",
                env_config::API_URL,
                defaults::API_URL
            );
            defaults::API_URL.to_owned()
        });
        let config = Self::new(&raw)?;
        info!(base_url = %config.base_url, "Client configuration loaded");
        Ok(config)
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an endpoint path against the base URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the joined URL is not valid
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("cannot build URL for {path}"),
                )
                .with_source(e)
            })
    }
}

/// Parse and normalise a base URL so that relative joins keep its path
fn parse_base_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::new(
            ErrorCode::ConfigMissing,
            "prediction service base URL is empty",
        ));
    }

    let mut url = Url::parse(trimmed).map_err(|e| {
        AppError::config_invalid(format!("invalid base URL '{trimmed}'")).with_source(e)
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
