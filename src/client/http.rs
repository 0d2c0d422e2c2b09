// ABOUTME: reqwest client construction with connection pooling and configured timeouts
// ABOUTME: One pooled client per CalorieApiClient, built from ClientConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};

use crate::config::ClientConfig;
use crate::errors::{AppError, AppResult};

/// Build the pooled HTTP client for `config`
///
/// # Errors
///
/// Returns `InternalError` if the TLS backend cannot be initialised
pub fn build_client(config: &ClientConfig) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| AppError::internal("failed to build HTTP client").with_source(e))
}

/// Fallback message for a non-2xx answer without a usable body
#[must_use]
pub fn status_message(status: u16) -> String {
    format!("Request failed with status code {status}")
}
